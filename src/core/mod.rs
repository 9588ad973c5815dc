pub mod client;
pub mod handler;
pub mod normalizer;
pub mod report;
pub mod severity;
pub mod validator;

pub use crate::domain::model::{LookupOutcome, LookupRequest, LookupResult, NormalizedBreach, Severity};
pub use crate::domain::ports::{BreachSource, ConfigProvider};
pub use crate::utils::error::Result;
