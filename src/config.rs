//! Chaos experiment configuration.

use crate::duration::{parse_duration, parse_duration_or_zero, DurationError};
use crate::environment::{Environment, NamedEnvironment};
use crate::error::ConfigError;
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const DURATION_HINT: &str = "use duration format 1h2m3s";

/// Chaos experiment parameters for a CCIP test environment.
///
/// Duration fields are kept as the raw strings from the config source and
/// parsed on access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChaosConfig {
    /// Kubernetes namespace under test.
    #[serde(alias = "Namespace")]
    pub namespace: String,
    /// Monitoring dashboards watched during the experiment.
    #[serde(alias = "DashboardUIDs")]
    pub dashboard_uids: Vec<String>,
    /// Delay before the experiment starts. Empty means no wait.
    #[serde(alias = "WaitBeforeStart")]
    pub wait_before_start: String,
    /// Length of the whole experiment window.
    #[serde(alias = "ExperimentFullInterval")]
    pub experiment_full_interval: String,
    /// Interval between fault injections.
    #[serde(alias = "ExperimentInjectionInterval")]
    pub experiment_injection_interval: String,
}

impl ChaosConfig {
    /// Parse a configuration from a YAML string without validating it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file and validate it.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        config.validate(&NamedEnvironment::default()).into_result()?;
        info!(
            path = %path.display(),
            namespace = %config.namespace,
            dashboards = config.dashboard_uids.len(),
            "Loaded chaos config"
        );
        Ok(config)
    }

    /// Serialize the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every required field and every non-empty duration.
    ///
    /// All checks run; the report lists each failure in check order.
    pub fn validate<E>(&self, env: &E) -> ValidationReport
    where
        E: Environment + ?Sized,
    {
        let mut report = ValidationReport::new();

        if self.namespace.is_empty() {
            report.push("namespace", "k8s namespace can't be empty");
        }
        if self.dashboard_uids.is_empty() {
            report.push("dashboard_uids", "dashboard UIDs can't be empty");
        }
        if self.experiment_full_interval.is_empty() {
            report.push(
                "experiment_full_interval",
                format!("experiment full interval can't be empty, {}", DURATION_HINT),
            );
        }
        if self.experiment_injection_interval.is_empty() {
            report.push(
                "experiment_injection_interval",
                format!("experiment injection interval can't be empty, {}", DURATION_HINT),
            );
        }

        for (field, value) in self.duration_fields() {
            if value.is_empty() {
                continue;
            }
            if let Err(e) = parse_duration(value) {
                report.push(
                    field,
                    format!("invalid duration {:?} ({}), {}", value, e, DURATION_HINT),
                );
            }
        }

        for issue in report.issues() {
            debug!(
                environment = env.name(),
                field = issue.field,
                message = %issue.message,
                "Chaos config check failed"
            );
        }

        report
    }

    /// Delay before the experiment starts; zero when empty or malformed.
    pub fn wait_before_start(&self) -> Duration {
        parse_duration_or_zero(&self.wait_before_start)
    }

    /// Full experiment window; zero when malformed.
    pub fn experiment_interval(&self) -> Duration {
        parse_duration_or_zero(&self.experiment_full_interval)
    }

    /// Interval between fault injections; zero when malformed.
    pub fn experiment_injection_interval(&self) -> Duration {
        parse_duration_or_zero(&self.experiment_injection_interval)
    }

    /// Delay before the experiment starts. An empty value is zero; a
    /// malformed one is an error.
    pub fn try_wait_before_start(&self) -> Result<Duration, ConfigError> {
        match parse_duration(&self.wait_before_start) {
            Err(DurationError::Empty) => Ok(Duration::ZERO),
            other => other.map_err(|source| ConfigError::Duration {
                field: "wait_before_start",
                value: self.wait_before_start.clone(),
                source,
            }),
        }
    }

    /// Full experiment window, or an error naming the field.
    pub fn try_experiment_interval(&self) -> Result<Duration, ConfigError> {
        parse_field("experiment_full_interval", &self.experiment_full_interval)
    }

    /// Interval between fault injections, or an error naming the field.
    pub fn try_experiment_injection_interval(&self) -> Result<Duration, ConfigError> {
        parse_field(
            "experiment_injection_interval",
            &self.experiment_injection_interval,
        )
    }

    fn duration_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("wait_before_start", self.wait_before_start.as_str()),
            ("experiment_full_interval", self.experiment_full_interval.as_str()),
            (
                "experiment_injection_interval",
                self.experiment_injection_interval.as_str(),
            ),
        ]
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    parse_duration(value).map_err(|source| ConfigError::Duration {
        field,
        value: value.to_string(),
        source,
    })
}
