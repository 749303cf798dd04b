use crate::core::inventory::EventInventory;
use crate::domain::model::{Event, Signup, SubmissionReceipt};
use crate::domain::ports::RegistrationGateway;
use crate::utils::error::{PortalError, Result};
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation;
use chrono::{DateTime, Utc};

/// Front door of the portal: owns the inventory and the registration
/// gateway, and runs the three user flows (list, register, signup).
///
/// The inventory is mutated only through [`PortalEngine::register`].
pub struct PortalEngine<G: RegistrationGateway> {
    inventory: EventInventory,
    gateway: G,
    monitor: SystemMonitor,
}

impl<G: RegistrationGateway> PortalEngine<G> {
    pub fn new(inventory: EventInventory, gateway: G) -> Self {
        Self::new_with_monitoring(inventory, gateway, false)
    }

    pub fn new_with_monitoring(inventory: EventInventory, gateway: G, monitoring: bool) -> Self {
        Self {
            inventory,
            gateway,
            monitor: SystemMonitor::new(monitoring),
        }
    }

    /// Events open for registration at `now`, in inventory order.
    pub fn list(&self, now: DateTime<Utc>) -> Vec<Event> {
        let rows: Vec<Event> = self.inventory.list_eligible(now).cloned().collect();
        tracing::info!(
            "{} of {} events open for registration",
            rows.len(),
            self.inventory.len()
        );
        self.monitor.log_stats("list");
        rows
    }

    /// Claim a seat. Eligibility is re-validated against `now` even if the
    /// event was listed earlier.
    pub fn register(&mut self, name: &str, now: DateTime<Utc>) -> Result<Event> {
        tracing::info!("Registering for '{}'", name);
        let updated = self.inventory.register(name, now)?;
        tracing::info!("'{}' now has {} seats left", updated.name, updated.seats);
        self.monitor.log_stats("register");
        Ok(updated)
    }

    /// Validate and submit a signup form to the registration service.
    ///
    /// Deliberately independent of the inventory: submission does not claim
    /// a seat, and the chosen event is not looked up here.
    pub async fn signup(&self, signup: &Signup) -> Result<SubmissionReceipt> {
        Self::validate_signup(signup)?;

        tracing::info!("Submitting signup for '{}'", signup.event);
        let receipt = self.gateway.submit(signup).await?;

        self.monitor.log_stats("signup");
        self.monitor.log_final_stats();
        Ok(receipt)
    }

    fn validate_signup(signup: &Signup) -> Result<()> {
        if signup.name.trim().is_empty()
            || signup.email.trim().is_empty()
            || signup.event.trim().is_empty()
        {
            return Err(PortalError::ValidationError {
                message: "All fields are required.".to_string(),
            });
        }
        validation::validate_email(&signup.email)?;
        Ok(())
    }

    pub fn inventory(&self) -> &EventInventory {
        &self.inventory
    }
}
