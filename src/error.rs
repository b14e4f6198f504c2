//! Error taxonomy shared by criteria, criteria sets and the GA driver.

use thiserror::Error;

/// Errors raised while configuring or evaluating stopping criteria.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoppingError {
    /// A configuration value is out of its valid domain.
    ///
    /// Raised at construction time, before any generation runs.
    #[error("invalid configuration for '{parameter}': {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    /// The algorithm state handed to a criterion is malformed.
    ///
    /// Raised during evaluation and surfaced to the driver as-is.
    #[error("precondition violated in '{criterion}': {reason}")]
    PreconditionViolated { criterion: String, reason: String },
}

impl StoppingError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(criterion: &str, reason: impl Into<String>) -> Self {
        Self::PreconditionViolated {
            criterion: criterion.to_string(),
            reason: reason.into(),
        }
    }
}
