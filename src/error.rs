//! Error handling for the onboarding service
//!
//! A single thiserror enum covers the whole core; the web layer maps every
//! variant onto a 400-class response, since nothing in the core performs I/O.

use thiserror::Error;

/// Errors produced by the onboarding core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OnboardingError {
    /// The employment type is not in the rule table.
    #[error("invalid employment type '{value}' (expected one of: full_time, contract)")]
    InvalidEmploymentType { value: String },

    /// A free-text request field was empty after trimming.
    #[error("field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}
