pub mod inventory;
pub mod portal;

pub use crate::domain::model::{Event, Signup, SubmissionReceipt};
pub use crate::domain::ports::{ConfigProvider, RegistrationGateway};
pub use crate::utils::error::Result;
