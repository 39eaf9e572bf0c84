use super::models::CanonicalFormat;
use crate::{ImporterError, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;
use storage::dto::category::WEIGHT_SCALE;
use tracing::warn;

pub const FORMAT_VERSION: &str = "1.0.0";

pub struct CanonicalValidator;

impl CanonicalValidator {
    pub fn validate(canonical: &CanonicalFormat) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if canonical.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                canonical.format_version, FORMAT_VERSION
            ));
        }

        if canonical.event.name.trim().is_empty() {
            report.errors.push("Event name is required".to_string());
        }

        if canonical.categories.is_empty() {
            report
                .warnings
                .push("Event has no scoring categories".to_string());
        }

        let mut category_names = HashSet::new();
        for category in &canonical.categories {
            if category.name.trim().is_empty() {
                report
                    .errors
                    .push("Category name cannot be empty".to_string());
            }
            if category.max_score < 1 {
                report.errors.push(format!(
                    "Category '{}' has invalid max_score: {}. Must be >= 1",
                    category.name, category.max_score
                ));
            }
            if category.weight <= Decimal::ZERO || category.weight > Decimal::ONE {
                report.errors.push(format!(
                    "Category '{}' has invalid weight: {}. Must be greater than 0 and at most 1",
                    category.name, category.weight
                ));
            }
            if category.weight.normalize().scale() > WEIGHT_SCALE {
                report.errors.push(format!(
                    "Category '{}' weight {} has more than {} decimal places",
                    category.name, category.weight, WEIGHT_SCALE
                ));
            }
            if !category_names.insert(category.name.to_lowercase()) {
                report
                    .errors
                    .push(format!("Duplicate category name: '{}'", category.name));
            }
        }

        let weight_sum: Decimal = canonical.categories.iter().map(|c| c.weight).sum();
        if !canonical.categories.is_empty() && weight_sum != Decimal::ONE {
            report.warnings.push(format!(
                "Category weights sum to {}, not 1.0; totals will not be on the category scale",
                weight_sum
            ));
        }

        if canonical.contestants.is_empty() {
            report
                .warnings
                .push("Event has no contestants".to_string());
        }

        for (idx, contestant) in canonical.contestants.iter().enumerate() {
            let label = format!("{}. {}", idx + 1, contestant.name);

            if contestant.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("Contestant #{} has empty name", idx + 1));
            }
            if contestant.age < 1 {
                report.errors.push(format!(
                    "Contestant '{}' has invalid age: {}",
                    label, contestant.age
                ));
            }
            if contestant.photo.is_none() {
                warn_missing(&mut report, &label, "photo");
            }
        }

        let mut access_keys = HashSet::new();
        for judge in &canonical.judges {
            if judge.name.trim().is_empty() {
                report.errors.push("Judge name cannot be empty".to_string());
            }
            if let Some(key) = &judge.access_key {
                if key.len() < 8 {
                    report.errors.push(format!(
                        "Judge '{}' has an access key shorter than 8 characters",
                        judge.name
                    ));
                }
                if !access_keys.insert(key.as_str()) {
                    report.errors.push(format!(
                        "Duplicate access key for judge '{}'",
                        judge.name
                    ));
                }
            }
        }

        if canonical.judges.iter().all(|j| j.access_key.is_none()) {
            report.warnings.push(
                "No judge has an access key; nobody will be able to submit scores".to_string(),
            );
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

fn warn_missing(report: &mut ValidationReport, label: &str, field: &str) {
    report
        .warnings
        .push(format!("Contestant '{}' is missing {}", label, field));
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = include_str!("../../fixtures/sample_event.json");

    fn sample() -> CanonicalFormat {
        serde_json::from_str(SAMPLE).unwrap()
    }

    fn errors_of(canonical: &CanonicalFormat) -> String {
        match CanonicalValidator::validate(canonical) {
            Err(ImporterError::ValidationError(message)) => message,
            other => panic!("expected validation error, got {:?}", other.map(|r| r.warnings)),
        }
    }

    #[test]
    fn test_sample_event_is_valid() {
        let canonical = sample();
        let report = CanonicalValidator::validate(&canonical).unwrap();

        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert_eq!(canonical.categories.len(), 5);
        assert_eq!(canonical.contestants.len(), 5);
        assert!(canonical.event.activate);
    }

    #[test]
    fn test_rejects_invalid_weight_and_max_score() {
        let mut canonical = sample();
        canonical.categories[0].weight = Decimal::ZERO;
        canonical.categories[1].max_score = 0;

        let message = errors_of(&canonical);
        assert!(message.contains("invalid weight"));
        assert!(message.contains("invalid max_score"));
    }

    #[test]
    fn test_rejects_weight_finer_than_stored_precision() {
        let mut canonical = sample();
        canonical.categories[0].weight = "0.333333".parse().unwrap();

        assert!(errors_of(&canonical).contains("more than 4 decimal places"));
    }

    #[test]
    fn test_rejects_duplicate_category_names() {
        let mut canonical = sample();
        canonical.categories[1].name = canonical.categories[0].name.to_uppercase();

        assert!(errors_of(&canonical).contains("Duplicate category name"));
    }

    #[test]
    fn test_rejects_duplicate_access_keys() {
        let mut canonical = sample();
        canonical.judges[1].access_key = canonical.judges[0].access_key.clone();

        assert!(errors_of(&canonical).contains("Duplicate access key"));
    }

    #[test]
    fn test_rejects_unknown_version_and_empty_names() {
        let mut canonical = sample();
        canonical.format_version = "2.0.0".to_string();
        canonical.event.name = "  ".to_string();
        canonical.contestants[0].age = 0;

        let message = errors_of(&canonical);
        assert!(message.contains("Unsupported format version"));
        assert!(message.contains("Event name is required"));
        assert!(message.contains("invalid age"));
    }

    #[test]
    fn test_warns_on_weight_sum_and_missing_credentials() {
        let mut canonical = sample();
        canonical.categories.pop();
        for judge in &mut canonical.judges {
            judge.access_key = None;
        }

        let report = CanonicalValidator::validate(&canonical).unwrap();
        assert!(report.warnings.iter().any(|w| w.contains("weights sum to 0.85")));
        assert!(report.warnings.iter().any(|w| w.contains("No judge has an access key")));
    }

    #[test]
    fn test_warns_on_empty_roster() {
        let mut canonical = sample();
        canonical.contestants.clear();

        let report = CanonicalValidator::validate(&canonical).unwrap();
        assert!(report.warnings.iter().any(|w| w == "Event has no contestants"));
    }
}
