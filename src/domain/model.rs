use crate::utils::error::{PortalError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A community event offered for registration.
///
/// Identity is the `name`; the inventory enforces uniqueness at seeding time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: DateTime<Utc>,
    pub seats: u32,
    pub category: String,
}

impl Event {
    pub fn new(
        name: impl Into<String>,
        date: DateTime<Utc>,
        seats: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            seats,
            category: category.into(),
        }
    }

    /// 活動尚未舉行
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }

    pub fn has_seats(&self) -> bool {
        self.seats > 0
    }

    /// 可報名 = 尚未舉行且還有座位
    pub fn is_eligible(&self, now: DateTime<Utc>) -> bool {
        self.is_upcoming(now) && self.has_seats()
    }
}

/// Parse an event date from the seed file.
///
/// Accepts a bare calendar date (`2025-07-10`, taken as midnight UTC) or a
/// full RFC 3339 timestamp.
pub fn parse_event_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| PortalError::DateParseError {
                value: value.to_string(),
                message: "date has no representable midnight".to_string(),
            })?;
        return Ok(midnight.and_utc());
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PortalError::DateParseError {
            value: value.to_string(),
            message: e.to_string(),
        })
}

/// The form a visitor submits to the registration service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub event: String,
}

impl Signup {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        event: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            event: event.into(),
        }
    }
}

/// Whatever the registration service echoes back for a submitted signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}
