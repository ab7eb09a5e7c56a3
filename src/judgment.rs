//! Judgment engine: employment type -> user/license classification
//!
//! Despite the "judgment" name inherited from the product, this is a static
//! rule-table lookup. No inference happens here and none is pretended to;
//! the table is a compile-time association from [`EmploymentType`] to a plain
//! rule record.

use chrono::{DateTime, Duration, Utc};

use crate::models::{EmploymentType, JudgmentResult, UserTier};

/// One row of the classification rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub user_tier: UserTier,
    pub license_plan_name: &'static str,
    pub license_sku: &'static str,
    pub has_expiration: bool,
}

/// Contract-staff accounts expire one year after issuance.
const EXPIRATION_DAYS: i64 = 365;

/// Fixed classification rules, keyed by employment type.
pub const fn rule_for(employment_type: EmploymentType) -> Rule {
    match employment_type {
        EmploymentType::FullTime => Rule {
            user_tier: UserTier::Standard,
            license_plan_name: "Microsoft 365 E3",
            license_sku: "ENTERPRISEPACK",
            has_expiration: false,
        },
        EmploymentType::Contract => Rule {
            user_tier: UserTier::Restricted,
            license_plan_name: "Microsoft 365 Basic",
            license_sku: "O365_BUSINESS_ESSENTIALS",
            has_expiration: true,
        },
    }
}

/// Classify an onboarding request by employment type.
///
/// `reference_time` is an explicit parameter rather than an implicit "now"
/// read, so the expiration date (and with it the whole result) is
/// deterministic. Out-of-set employment types cannot reach this function;
/// they fail earlier at the string boundary with
/// [`OnboardingError::InvalidEmploymentType`](crate::error::OnboardingError::InvalidEmploymentType).
pub fn judge(employment_type: EmploymentType, reference_time: DateTime<Utc>) -> JudgmentResult {
    let rule = rule_for(employment_type);

    let expiration_date = rule.has_expiration.then(|| {
        (reference_time + Duration::days(EXPIRATION_DAYS))
            .format("%Y-%m-%d")
            .to_string()
    });

    let explanation = explanation_text(employment_type, &rule, expiration_date.as_deref());

    JudgmentResult {
        employment_type,
        user_tier: rule.user_tier,
        license_plan_name: rule.license_plan_name.to_string(),
        license_sku: rule.license_sku.to_string(),
        license_enabled: true,
        has_expiration: rule.has_expiration,
        expiration_date,
        explanation,
    }
}

/// Render one of the two fixed explanation sentences.
fn explanation_text(
    employment_type: EmploymentType,
    rule: &Rule,
    expiration_date: Option<&str>,
) -> String {
    match employment_type {
        EmploymentType::FullTime => format!(
            "This user is a {} employee and will be created as a {} with the {} plan.",
            employment_type, rule.user_tier, rule.license_plan_name
        ),
        EmploymentType::Contract => format!(
            "This user is a {} employee and will be created as a {} with the {} plan. \
             The account expires on {}.",
            employment_type,
            rule.user_tier,
            rule.license_plan_name,
            expiration_date.unwrap_or("(unset)")
        ),
    }
}
