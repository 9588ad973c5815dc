pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::CliConfig;

pub use self::config::{lambda::LambdaConfig, toml_config::TomlConfig};
pub use self::core::{client::XposedClient, handler::BreachCheckHandler};
pub use self::domain::model::{LookupResult, NormalizedBreach, Severity};
pub use self::utils::error::{BreachError, ErrorKind, Result};
