//! Onboarding judgment and provisioning-command generation
//!
//! Two pure components invoked in sequence per request:
//!
//! 1. [`judgment::judge`] — rule-table classification of an employment type
//!    into a user tier and license plan.
//! 2. [`command::render`] — deterministic rendering of the judged request
//!    into a PowerShell provisioning command block.
//!
//! Both are stateless; the HTTP layer (feature `server`) is thin plumbing
//! around the pair.

pub mod command;
pub mod error;
pub mod judgment;
pub mod models;
pub mod settings;

pub use command::render;
pub use error::OnboardingError;
pub use judgment::judge;
pub use models::{
    EmploymentType, JudgmentResult, OnboardingRequest, OnboardingResponse, UserTier,
};
