//! Validation results decoupled from any particular test framework.

use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;

/// A single failed validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Config field the check applies to.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every issue found by one validation pass, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, message));
    }

    /// True when no check failed.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Names of the fields that failed, in check order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(|issue| issue.field).collect()
    }

    /// Whether any issue was reported for `field`.
    pub fn has_issue(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// Convert into `Ok(())` or [`ConfigError::Invalid`].
    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self.issues))
        }
    }

    /// Fail the calling test with every issue listed.
    #[track_caller]
    pub fn assert_valid(&self) {
        if !self.is_ok() {
            panic!("chaos config validation failed:\n{}", self);
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}
