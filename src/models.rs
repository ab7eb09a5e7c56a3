//! Request, judgment and response models for the onboarding pipeline
//!
//! The request arrives from the web layer already trimmed; [`OnboardingRequest::validate`]
//! re-checks the non-empty invariant so the core never renders from blank fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OnboardingError;

/// Employment classification driving every downstream decision.
///
/// Wire format is `"full_time"` / `"contract"`; the Japanese literals used by
/// the upstream HR intake form (`正社員` / `派遣`) are accepted on input for
/// compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EmploymentType {
    FullTime,
    Contract,
}

impl FromStr for EmploymentType {
    type Err = OnboardingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "full_time" | "正社員" => Ok(Self::FullTime),
            "contract" | "派遣" => Ok(Self::Contract),
            other => Err(OnboardingError::InvalidEmploymentType {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EmploymentType {
    type Error = OnboardingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullTime => write!(f, "full-time"),
            Self::Contract => write!(f, "contract"),
        }
    }
}

/// Directory account tier assigned by the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserTier {
    Standard,
    Restricted,
}

impl fmt::Display for UserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard user"),
            Self::Restricted => write!(f, "restricted user"),
        }
    }
}

/// A validated employee-onboarding request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub company_name: String,
    pub employee_display_name: String,
    pub department: String,
    pub employment_type: EmploymentType,
}

impl OnboardingRequest {
    /// Check that every free-text field is non-empty after trimming.
    pub fn validate(&self) -> Result<(), OnboardingError> {
        let fields = [
            ("company_name", &self.company_name),
            ("employee_display_name", &self.employee_display_name),
            ("department", &self.department),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(OnboardingError::EmptyField { field });
            }
        }
        Ok(())
    }
}

/// Classification produced by the judgment engine for one request.
///
/// `expiration_date` is present iff `has_expiration`; when present it is the
/// reference time plus 365 days, formatted `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentResult {
    pub employment_type: EmploymentType,
    pub user_tier: UserTier,
    pub license_plan_name: String,
    pub license_sku: String,
    pub license_enabled: bool,
    pub has_expiration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    pub explanation: String,
}

/// What the service hands back per request: the judgment plus the rendered
/// provisioning command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub judgment: JudgmentResult,
    pub command: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employment_type_parses_wire_and_legacy_literals() {
        assert_eq!("full_time".parse::<EmploymentType>().unwrap(), EmploymentType::FullTime);
        assert_eq!("contract".parse::<EmploymentType>().unwrap(), EmploymentType::Contract);
        assert_eq!("正社員".parse::<EmploymentType>().unwrap(), EmploymentType::FullTime);
        assert_eq!("派遣".parse::<EmploymentType>().unwrap(), EmploymentType::Contract);
    }

    #[test]
    fn employment_type_rejects_unknown_values() {
        let err = "executive".parse::<EmploymentType>().unwrap_err();
        assert_eq!(
            err,
            OnboardingError::InvalidEmploymentType {
                value: "executive".to_string()
            }
        );
    }

    #[test]
    fn employment_type_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&EmploymentType::FullTime).unwrap(), "\"full_time\"");
        assert_eq!(serde_json::to_string(&EmploymentType::Contract).unwrap(), "\"contract\"");
    }

    #[test]
    fn request_deserialization_surfaces_invalid_employment_type() {
        let raw = r#"{
            "company_name": "株式会社サンプル",
            "employee_display_name": "山田 太郎",
            "department": "営業部",
            "employment_type": "intern"
        }"#;
        let err = serde_json::from_str::<OnboardingRequest>(raw).unwrap_err();
        assert!(err.to_string().contains("invalid employment type 'intern'"));
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let request = OnboardingRequest {
            company_name: "株式会社サンプル".to_string(),
            employee_display_name: "   ".to_string(),
            department: "営業部".to_string(),
            employment_type: EmploymentType::FullTime,
        };
        assert_eq!(
            request.validate().unwrap_err(),
            OnboardingError::EmptyField {
                field: "employee_display_name"
            }
        );
    }
}
