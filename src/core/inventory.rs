use crate::domain::model::Event;
use crate::utils::error::{PortalError, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashSet;

/// The ordered collection of all known events, seeded once at startup.
///
/// Insertion order is preserved and used for display ordering. The only
/// mutation is [`EventInventory::register`], which decrements exactly one
/// seat count; seat counts can never go negative.
#[derive(Debug, Clone)]
pub struct EventInventory {
    events: Vec<Event>,
}

impl EventInventory {
    /// Build the inventory from seed records, rejecting duplicate names.
    ///
    /// Names are the only identity events have, so a duplicate would make
    /// the second record unreachable for registration.
    pub fn seed(events: Vec<Event>) -> Result<Self> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.name.as_str()) {
                return Err(PortalError::DuplicateEvent {
                    name: event.name.clone(),
                });
            }
        }
        Ok(Self { events })
    }

    /// The built-in demo inventory, used when no events file is present.
    pub fn sample() -> Self {
        let date = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        Self {
            events: vec![
                Event::new("Art Festival", date(2025, 6, 10), 10, "Art"),
                Event::new("Cleanup Day", date(2023, 1, 1), 5, "Cleanup"),
                Event::new("Book Exchange", date(2025, 7, 20), 0, "Book"),
                Event::new("Food Drive", date(2025, 7, 10), 50, "Food"),
                Event::new("Community Walk", date(2025, 7, 10), 50, "Walk"),
            ],
        }
    }

    /// Events open for registration at `now`: date strictly in the future
    /// and at least one seat left. Lazy, side-effect free, and recomputed
    /// on every call; inventory order is preserved.
    pub fn list_eligible(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.is_eligible(now))
    }

    /// Claim one seat for the named event.
    ///
    /// Eligibility is re-validated at call time: an event that was eligible
    /// when listed may have passed its date or sold out since. Date is
    /// checked before seats, mirroring the eligibility predicate. On any
    /// failure no record changes.
    pub fn register(&mut self, name: &str, now: DateTime<Utc>) -> Result<Event> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| PortalError::EventNotFound {
                name: name.to_string(),
            })?;

        if !event.is_upcoming(now) {
            return Err(PortalError::EventAlreadyHeld {
                name: event.name.clone(),
                date: event.date,
            });
        }

        if !event.has_seats() {
            return Err(PortalError::NoSeatsAvailable {
                name: event.name.clone(),
            });
        }

        event.seats -= 1;
        Ok(event.clone())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::parse_event_date;

    fn now() -> DateTime<Utc> {
        parse_event_date("2024-01-01").unwrap()
    }

    fn seeded() -> EventInventory {
        EventInventory::sample()
    }

    #[test]
    fn test_sold_out_events_are_never_listed() {
        let inventory = seeded();
        assert!(inventory
            .list_eligible(now())
            .all(|e| e.name != "Book Exchange"));
    }

    #[test]
    fn test_past_events_are_never_listed() {
        let inventory = seeded();
        assert!(inventory
            .list_eligible(now())
            .all(|e| e.name != "Cleanup Day"));

        // With `now` beyond every date, nothing is eligible.
        let far_future = parse_event_date("2030-01-01").unwrap();
        assert_eq!(inventory.list_eligible(far_future).count(), 0);
    }

    #[test]
    fn test_listing_preserves_inventory_order() {
        let inventory = seeded();
        let names: Vec<&str> = inventory
            .list_eligible(now())
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Art Festival", "Food Drive", "Community Walk"]);
    }

    #[test]
    fn test_listing_is_idempotent_without_mutation() {
        let inventory = seeded();
        let first: Vec<Event> = inventory.list_eligible(now()).cloned().collect();
        let second: Vec<Event> = inventory.list_eligible(now()).cloned().collect();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.seats, b.seats);
        }
    }

    #[test]
    fn test_register_decrements_exactly_one_seat() {
        let mut inventory = seeded();

        let updated = inventory.register("Food Drive", now()).unwrap();
        assert_eq!(updated.seats, 49);

        let updated = inventory.register("Food Drive", now()).unwrap();
        assert_eq!(updated.seats, 48);

        // No other record is affected.
        let walk = inventory
            .events()
            .iter()
            .find(|e| e.name == "Community Walk")
            .unwrap();
        assert_eq!(walk.seats, 50);
    }

    #[test]
    fn test_register_sold_out_event_fails() {
        let mut inventory = seeded();
        let err = inventory.register("Book Exchange", now()).unwrap_err();
        assert!(matches!(err, PortalError::NoSeatsAvailable { .. }));
    }

    #[test]
    fn test_register_unknown_event_fails_and_changes_nothing() {
        let mut inventory = seeded();
        let before: Vec<u32> = inventory.events().iter().map(|e| e.seats).collect();

        let err = inventory.register("Nonexistent Event", now()).unwrap_err();
        assert!(matches!(err, PortalError::EventNotFound { .. }));

        let after: Vec<u32> = inventory.events().iter().map(|e| e.seats).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_register_past_event_fails_and_changes_nothing() {
        let mut inventory = seeded();
        let err = inventory.register("Cleanup Day", now()).unwrap_err();
        assert!(matches!(err, PortalError::EventAlreadyHeld { .. }));

        let cleanup = inventory
            .events()
            .iter()
            .find(|e| e.name == "Cleanup Day")
            .unwrap();
        assert_eq!(cleanup.seats, 5);
    }

    #[test]
    fn test_seats_drain_to_zero_then_no_seats() {
        let date = parse_event_date("2025-06-30").unwrap();
        let mut inventory =
            EventInventory::seed(vec![Event::new("Baking Workshop", date, 3, "Baking")]).unwrap();

        for remaining in (0..3).rev() {
            let updated = inventory.register("Baking Workshop", now()).unwrap();
            assert_eq!(updated.seats, remaining);
        }

        // Once drained, every further attempt fails and seats stay at zero.
        for _ in 0..2 {
            let err = inventory.register("Baking Workshop", now()).unwrap_err();
            assert!(matches!(err, PortalError::NoSeatsAvailable { .. }));
        }
        assert_eq!(inventory.events()[0].seats, 0);
    }

    #[test]
    fn test_drained_event_disappears_from_listing() {
        let date = parse_event_date("2025-07-10").unwrap();
        let mut inventory =
            EventInventory::seed(vec![Event::new("Rock Concert", date, 1, "Music")]).unwrap();

        assert_eq!(inventory.list_eligible(now()).count(), 1);
        inventory.register("Rock Concert", now()).unwrap();
        assert_eq!(inventory.list_eligible(now()).count(), 0);
    }

    #[test]
    fn test_seed_rejects_duplicate_names() {
        let date = parse_event_date("2025-06-10").unwrap();
        let err = EventInventory::seed(vec![
            Event::new("Art Festival", date, 10, "Art"),
            Event::new("Art Festival", date, 4, "Art"),
        ])
        .unwrap_err();
        assert!(matches!(err, PortalError::DuplicateEvent { .. }));
    }
}
