//! Resolved experiment timeline.

use crate::config::ChaosConfig;
use crate::duration::format_duration;
use crate::error::ConfigError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// A validated config with its durations parsed and anchored to a start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperimentPlan {
    pub namespace: String,
    pub dashboard_uids: Vec<String>,
    #[serde(serialize_with = "serialize_duration")]
    pub wait_before_start: Duration,
    #[serde(serialize_with = "serialize_duration")]
    pub experiment_interval: Duration,
    #[serde(serialize_with = "serialize_duration")]
    pub injection_interval: Duration,
    /// Number of whole injection intervals that fit in the experiment window.
    /// Zero when the injection interval is zero.
    pub injections: u64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl ExperimentPlan {
    /// Resolve `config` relative to `now`.
    ///
    /// Unlike the plain accessors on [`ChaosConfig`], malformed durations are
    /// errors here. Timestamps past chrono's calendar range and injection
    /// counts that do not fit in a `u64` are [`ConfigError::OutOfRange`].
    pub fn resolve(config: &ChaosConfig, now: DateTime<Utc>) -> Result<Self, ConfigError> {
        let wait_before_start = config.try_wait_before_start()?;
        let experiment_interval = config.try_experiment_interval()?;
        let injection_interval = config.try_experiment_injection_interval()?;

        let injections = if injection_interval.is_zero() {
            0
        } else {
            let count = experiment_interval.as_nanos() / injection_interval.as_nanos();
            u64::try_from(count).map_err(|_| ConfigError::OutOfRange {
                field: "experiment_injection_interval",
                value: format_duration(injection_interval),
            })?
        };

        let starts_at = add_duration(now, "wait_before_start", wait_before_start)?;
        let ends_at = add_duration(starts_at, "experiment_full_interval", experiment_interval)?;

        Ok(Self {
            namespace: config.namespace.clone(),
            dashboard_uids: config.dashboard_uids.clone(),
            wait_before_start,
            experiment_interval,
            injection_interval,
            injections,
            starts_at,
            ends_at,
        })
    }
}

impl fmt::Display for ExperimentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "namespace:          {}", self.namespace)?;
        writeln!(f, "dashboards:         {}", self.dashboard_uids.join(", "))?;
        writeln!(f, "wait before start:  {}", format_duration(self.wait_before_start))?;
        writeln!(f, "experiment window:  {}", format_duration(self.experiment_interval))?;
        writeln!(f, "injection interval: {}", format_duration(self.injection_interval))?;
        writeln!(f, "injections:         {}", self.injections)?;
        writeln!(f, "starts at:          {}", self.starts_at.to_rfc3339())?;
        write!(f, "ends at:            {}", self.ends_at.to_rfc3339())
    }
}

fn add_duration(
    at: DateTime<Utc>,
    field: &'static str,
    duration: Duration,
) -> Result<DateTime<Utc>, ConfigError> {
    chrono::Duration::from_std(duration)
        .ok()
        .and_then(|delta| at.checked_add_signed(delta))
        .ok_or_else(|| ConfigError::OutOfRange {
            field,
            value: format_duration(duration),
        })
}

fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_duration(*duration))
}
