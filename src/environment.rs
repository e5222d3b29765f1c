//! Handle to the deployment environment a chaos config is validated against.

use std::fmt;

/// The environment a chaos experiment runs in.
///
/// Validation receives the environment so callers can later check a config
/// against live deployment state. No current check inspects it.
pub trait Environment {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;
}

/// An environment identified only by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEnvironment {
    name: String,
}

impl NamedEnvironment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for NamedEnvironment {
    fn default() -> Self {
        Self::new("local")
    }
}

impl Environment for NamedEnvironment {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
