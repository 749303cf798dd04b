use crate::domain::model::{Signup, SubmissionReceipt};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Settings the registration gateway needs, regardless of where they come
/// from (CLI flags or the TOML events file).
pub trait ConfigProvider: Send + Sync {
    fn registration_endpoint(&self) -> &str;
    fn submit_delay_ms(&self) -> u64;
    fn request_timeout_secs(&self) -> u64;
}

/// Out-of-band submission of a signup form to the registration service.
///
/// Submission is independent of inventory state; it never touches seat
/// counts.
#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    async fn submit(&self, signup: &Signup) -> Result<SubmissionReceipt>;
}
