pub mod lambda;
pub mod toml_config;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.xposedornot.com/v1/check-email";
pub const DEFAULT_USER_AGENT: &str = "PhishLeakGuard-App";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "breach-check")]
#[command(about = "Check whether an email address appears in known data breaches")]
pub struct CliConfig {
    /// Email address to check
    pub email: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Output format: json or csv
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the file named by `--config` (or defaults) and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.api_endpoint {
            config.provider.endpoint = Some(endpoint.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            config.provider.user_agent = Some(user_agent.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            config.provider.timeout_seconds = Some(timeout);
        }
        if let Some(format) = &self.format {
            config.output.format = Some(format.parse::<OutputFormat>()?);
        }
        if self.verbose {
            config.logging.verbose = Some(true);
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[provider]
endpoint = "http://localhost:9000/check"
user_agent = "from-file"

[output]
format = "csv"
"#,
            )
            .unwrap();

        let args = CliConfig::parse_from([
            "breach-check",
            "user@example.com",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--user-agent",
            "from-cli",
            "--timeout-seconds",
            "4",
        ]);

        let config = args.resolve().unwrap();
        assert_eq!(config.api_endpoint(), "http://localhost:9000/check");
        assert_eq!(config.user_agent(), "from-cli");
        assert_eq!(config.timeout_seconds(), 4);
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_cli_without_file_uses_defaults() {
        let args = CliConfig::parse_from(["breach-check", "user@example.com", "--format", "json"]);

        let config = args.resolve().unwrap();
        assert_eq!(config.api_endpoint(), DEFAULT_API_ENDPOINT);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(args.email, "user@example.com");
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let args = CliConfig::parse_from(["breach-check", "user@example.com", "--format", "yaml"]);
        assert!(args.resolve().is_err());
    }
}
