//! Error types for chaos configuration handling.

use crate::duration::DurationError;
use crate::validation::ValidationIssue;
use thiserror::Error;

/// Errors produced while loading, validating or resolving a [`crate::ChaosConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid YAML or has an unexpected shape.
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A duration field could not be parsed.
    #[error("{field}: invalid duration {value:?}: {source}")]
    Duration {
        field: &'static str,
        value: String,
        #[source]
        source: DurationError,
    },

    /// A duration is too large to place on a calendar timeline.
    #[error("{field}: duration {value} is out of range")]
    OutOfRange { field: &'static str, value: String },

    /// One or more validation checks failed.
    #[error("invalid chaos config: {}", format_issues(.0))]
    Invalid(Vec<ValidationIssue>),
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lists_every_issue() {
        let err = ConfigError::Invalid(vec![
            ValidationIssue::new("namespace", "k8s namespace can't be empty"),
            ValidationIssue::new("dashboard_uids", "dashboard UIDs can't be empty"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid chaos config: namespace: k8s namespace can't be empty; \
             dashboard_uids: dashboard UIDs can't be empty"
        );
    }

    #[test]
    fn test_duration_error_names_field() {
        let err = ConfigError::Duration {
            field: "experiment_full_interval",
            value: "soon".to_string(),
            source: DurationError::Empty,
        };
        assert!(err.to_string().starts_with("experiment_full_interval: invalid duration \"soon\""));
    }
}
