//! Chaos experiment configuration for CCIP integration tests.
//!
//! Describes the parameters of a chaos run against a test cluster:
//! - Kubernetes namespace under test
//! - Monitoring dashboards to watch
//! - Wait before start, full experiment window and injection interval
//!
//! Validation returns a [`ValidationReport`] listing every failed check so
//! the calling harness decides how to report it. Duration fields are stored
//! as strings like `1h2m3s` and parsed on access.

pub mod config;
pub mod duration;
pub mod environment;
pub mod error;
pub mod plan;
pub mod validation;

pub use config::ChaosConfig;
pub use duration::{parse_duration, DurationError};
pub use environment::{Environment, NamedEnvironment};
pub use error::ConfigError;
pub use plan::ExperimentPlan;
pub use validation::{ValidationIssue, ValidationReport};
