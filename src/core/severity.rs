//! Severity classifier.
//! Derives a coarse risk tier from the labels of the data a breach exposed.

use crate::domain::model::Severity;

const CRITICAL_TYPES: [&str; 4] = [
    "passwords",
    "credit cards",
    "bank account numbers",
    "passport numbers",
];

const HIGH_TYPES: [&str; 3] = ["email addresses", "phone numbers", "social security numbers"];

/// Case-insensitive substring match; Critical is checked across every label before High.
pub fn classify(data_types: &[String]) -> Severity {
    let lowered: Vec<String> = data_types.iter().map(|t| t.to_lowercase()).collect();
    let mentions = |needles: &[&str]| {
        lowered
            .iter()
            .any(|label| needles.iter().any(|needle| label.contains(needle)))
    };

    if mentions(&CRITICAL_TYPES[..]) {
        Severity::Critical
    } else if mentions(&HIGH_TYPES[..]) {
        Severity::High
    } else {
        Severity::Medium
    }
}
