use crate::domain::model::LookupResult;
use crate::utils::error::{BreachError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = BreachError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BreachError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv".to_string(),
            }),
        }
    }
}

pub fn render(result: &LookupResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => render_csv(result),
    }
}

/// One row per breach; data types are joined with `; `.
pub fn render_csv(result: &LookupResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "name",
        "domain",
        "breach_date",
        "affected_accounts",
        "severity",
        "data_types",
        "description",
    ])?;

    for breach in &result.breaches {
        let affected_accounts = breach.affected_accounts.to_string();
        let severity = breach.severity.to_string();
        let data_types = breach.data_types.join("; ");
        writer.write_record([
            breach.name.as_str(),
            breach.domain.as_str(),
            breach.breach_date.as_str(),
            affected_accounts.as_str(),
            severity.as_str(),
            data_types.as_str(),
            breach.description.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| BreachError::IoError(e.into_error()))?;
    csv_text(bytes)
}

fn csv_text(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| BreachError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
