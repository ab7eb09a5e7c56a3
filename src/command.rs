//! Command renderer: request + judgment -> PowerShell invocation text
//!
//! Every literal fragment is inline; there is no template file to load. The
//! output layout is byte-for-byte stable because a human operator pastes it
//! into a shell after review, so rendering twice with the same inputs and the
//! same timestamp must produce identical text.

use chrono::{DateTime, Utc};

use crate::models::{JudgmentResult, OnboardingRequest};

/// Directory short-name limit (legacy SamAccountName constraint).
const ACCOUNT_HANDLE_MAX: usize = 20;

/// Substituted when a display name keeps no ASCII alphanumerics.
const ACCOUNT_HANDLE_FALLBACK: &str = "user";

/// Substituted when a company name keeps no ASCII alphanumerics.
const COMPANY_DOMAIN_FALLBACK: &str = "company";

/// Legal-entity markers stripped from one end of a company name.
const LEGAL_ENTITY_MARKERS: [&str; 5] = ["株式会社", "有限会社", "合同会社", "合資会社", "合名会社"];

const USAGE_LOCATION: &str = "JP";
const INITIAL_PASSWORD: &str = "ChangeMe!OnFirstLogin";
const SCRIPT_PATH: &str = ".\\scripts\\New-OnboardingUser.ps1";

/// Derive the lowercase alphanumeric account handle from a display name.
///
/// Non-Latin names keep no characters and collapse to the `"user"` fallback.
/// That is a documented limitation: transliteration is out of scope and the
/// rendered command is reviewed by a human before use.
pub fn account_handle(display_name: &str) -> String {
    let mut handle: String = display_name
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '\u{3000}')
        .filter(char::is_ascii_alphanumeric)
        .collect();
    handle.make_ascii_lowercase();

    if handle.is_empty() {
        return ACCOUNT_HANDLE_FALLBACK.to_string();
    }
    handle.truncate(ACCOUNT_HANDLE_MAX);
    handle
}

/// Derive a mail-domain guess from a company name.
///
/// Strips one leading or trailing legal-entity marker, keeps ASCII
/// alphanumerics, and appends `.co.jp`. Purely heuristic; a real deployment
/// would consult a company-to-domain mapping instead.
pub fn company_domain(company_name: &str) -> String {
    let mut base = company_name.trim();
    for marker in LEGAL_ENTITY_MARKERS {
        if let Some(stripped) = base.strip_prefix(marker) {
            base = stripped;
            break;
        }
    }
    for marker in LEGAL_ENTITY_MARKERS {
        if let Some(stripped) = base.strip_suffix(marker) {
            base = stripped;
            break;
        }
    }

    let mut slug: String = base.chars().filter(char::is_ascii_alphanumeric).collect();
    slug.make_ascii_lowercase();

    if slug.is_empty() {
        slug = COMPANY_DOMAIN_FALLBACK.to_string();
    }
    format!("{slug}.co.jp")
}

/// Derive the tenant default domain from a company domain.
///
/// Takes the label before the first `.` and appends `.onmicrosoft.com`. This
/// is a placeholder guess with no real-world correctness guarantee; it
/// deliberately matches the intake tool's existing behavior.
pub fn tenant_domain(company_domain: &str) -> String {
    let label = company_domain
        .split('.')
        .next()
        .unwrap_or(company_domain);
    format!("{label}.onmicrosoft.com")
}

/// Render the provisioning command block for one judged request.
///
/// Never fails: degenerate inputs degrade to the `"user"` / `"company"`
/// fallbacks instead of erroring.
pub fn render(
    request: &OnboardingRequest,
    judgment: &JudgmentResult,
    now_time: DateTime<Utc>,
) -> String {
    let handle = account_handle(&request.employee_display_name);
    let domain = company_domain(&request.company_name);
    let tenant = tenant_domain(&domain);
    let principal = format!("{handle}@{tenant}");
    let assign_license = if judgment.license_enabled { "$true" } else { "$false" };

    let mut lines = vec![
        "# ============================================================".to_string(),
        "# Entra ID onboarding command".to_string(),
        format!("# Generated: {}", now_time.format("%Y-%m-%d %H:%M:%S")),
        "# ============================================================".to_string(),
        String::new(),
        format!("$DisplayName       = \"{}\"", request.employee_display_name),
        format!("$MailNickname      = \"{handle}\""),
        format!("$UserPrincipalName = \"{principal}\""),
        format!("$Department        = \"{}\"", request.department),
        format!("$UsageLocation     = \"{USAGE_LOCATION}\""),
        format!("$InitialPassword   = \"{INITIAL_PASSWORD}\"  # placeholder, rotate on first sign-in"),
        format!(
            "$LicenseSkuPart    = \"{}\"  # {}",
            judgment.license_sku, judgment.license_plan_name
        ),
    ];

    if let Some(expiration) = &judgment.expiration_date {
        lines.push(format!("$AccountExpirationDate = \"{expiration}\""));
    }

    let arguments = "-DisplayName $DisplayName -MailNickname $MailNickname \
                     -UserPrincipalName $UserPrincipalName -Department $Department \
                     -UsageLocation $UsageLocation -InitialPassword $InitialPassword \
                     -LicenseSkuPart $LicenseSkuPart";

    lines.push(String::new());
    lines.push(format!("$Script = \"{SCRIPT_PATH}\""));
    lines.push(String::new());
    lines.push("# Dry run (no directory changes are made):".to_string());
    lines.push(format!("& $Script {arguments} -AssignLicense {assign_license} -WhatIf"));
    lines.push(String::new());
    lines.push("# Real run (remove -WhatIf only after the dry run has been reviewed):".to_string());
    lines.push(format!("# & $Script {arguments} -AssignLicense {assign_license}"));
    lines.push(String::new());
    lines.push("# CAUTION: review every value above before running anything in the tenant.".to_string());
    lines.push(format!(
        "# CAUTION: license assignment targets {} ({}); confirm the tenant owns that SKU.",
        judgment.license_plan_name, judgment.license_sku
    ));
    lines.push(
        "# CAUTION: the account handle and tenant domain are derived heuristically and may need manual correction."
            .to_string(),
    );

    lines.join("\n")
}
