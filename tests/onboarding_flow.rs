//! End-to-end pipeline tests: judge then render, the same sequence the web
//! layer runs per request.

use chrono::{DateTime, TimeZone, Utc};
use onboarding_poc::{command, judgment, EmploymentType, OnboardingRequest, UserTier};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()
}

fn sample_request(employment_type: EmploymentType) -> OnboardingRequest {
    OnboardingRequest {
        company_name: "株式会社サンプル".to_string(),
        employee_display_name: "山田 太郎".to_string(),
        department: "営業部".to_string(),
        employment_type,
    }
}

#[test]
fn full_time_flow_produces_standard_user_without_expiration() {
    let request = sample_request(EmploymentType::FullTime);
    request.validate().unwrap();

    let judgment = judgment::judge(request.employment_type, now());
    assert_eq!(judgment.user_tier, UserTier::Standard);
    assert_eq!(judgment.license_sku, "ENTERPRISEPACK");
    assert!(!judgment.has_expiration);
    assert_eq!(judgment.expiration_date, None);

    let command = command::render(&request, &judgment, now());
    // Neither the katakana company name nor the kanji employee name keeps any
    // ASCII characters, so both derivations land on their fallbacks.
    assert!(command.contains("$UserPrincipalName = \"user@company.onmicrosoft.com\""));
    assert!(!command.contains("$AccountExpirationDate"));
}

#[test]
fn contract_flow_carries_the_expiration_through_to_the_command() {
    let request = sample_request(EmploymentType::Contract);
    let judgment = judgment::judge(request.employment_type, now());

    assert_eq!(judgment.user_tier, UserTier::Restricted);
    assert_eq!(judgment.expiration_date.as_deref(), Some("2024-12-31"));

    let command = command::render(&request, &judgment, now());
    assert!(command.contains("$AccountExpirationDate = \"2024-12-31\""));
    assert!(command.contains("$LicenseSkuPart    = \"O365_BUSINESS_ESSENTIALS\"  # Microsoft 365 Basic"));
}

#[test]
fn ascii_inputs_flow_into_real_looking_identifiers() {
    let request = OnboardingRequest {
        company_name: "Globex株式会社".to_string(),
        employee_display_name: "Taro Yamada".to_string(),
        department: "Sales".to_string(),
        employment_type: EmploymentType::FullTime,
    };
    let judgment = judgment::judge(request.employment_type, now());
    let command = command::render(&request, &judgment, now());

    assert!(command.contains("$MailNickname      = \"taroyamada\""));
    assert!(command.contains("$UserPrincipalName = \"taroyamada@globex.onmicrosoft.com\""));
}

#[test]
fn identical_inputs_render_byte_identical_output() {
    let request = sample_request(EmploymentType::Contract);
    let judgment = judgment::judge(request.employment_type, now());

    let first = command::render(&request, &judgment, now());
    let second = command::render(&request, &judgment, now());
    assert_eq!(first, second);
}
