use serde::{Deserialize, Serialize};

/// Employment arrangement declared by the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkStatus {
    RemoteEmployee,
    Freelancer,
    Entrepreneur,
}

/// Highest qualification recognised by the visa programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "BACHELOR")]
    Bachelor,
    #[serde(rename = "EXP_5Y")]
    FiveYearsExperience,
    #[serde(rename = "ICT_3Y")]
    IctExperience,
    #[serde(rename = "NONE")]
    None,
}

/// How far back the applicant can document stable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeDocumentation {
    #[serde(rename = "12M")]
    TwelveMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "LESS")]
    LessThanSixMonths,
}

/// Kind of accommodation evidence attached to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccommodationProof {
    #[serde(rename = "LEASE_12M")]
    YearLease,
    #[serde(rename = "TRANSITORY")]
    Transitory,
    #[serde(rename = "AIRBNB")]
    ShortTermRental,
}

/// Validated nomad-visa application profile consumed by the scorer.
///
/// Enumerations and numeric ranges are checked at intake; the scorer trusts
/// every field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationProfile {
    pub citizenship_non_eu: bool,
    pub work_status: WorkStatus,
    pub work_proof_available: bool,
    pub employer_outside_italy: bool,
    pub criminal_record_clean: bool,
    pub highest_qualification: Qualification,
    pub remote_experience_months: u32,
    pub contract_full_year: bool,
    pub annual_gross_income_eur: u32,
    pub dependants_joining: u32,
    pub income_documentation: IncomeDocumentation,
    pub accommodation_proof: AccommodationProof,
    pub health_insurance_min_30k: bool,
    pub passport_validity_months: u32,
}

/// Outcome tier derived from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityStatus {
    Approved,
    Warning,
    Critical,
}

impl EligibilityStatus {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            EligibilityStatus::Approved
        } else if score < 60 {
            EligibilityStatus::Critical
        } else {
            EligibilityStatus::Warning
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EligibilityStatus::Approved => "approved",
            EligibilityStatus::Warning => "warning",
            EligibilityStatus::Critical => "critical",
        }
    }
}

/// Partner vertical a referral belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AffiliateCategory {
    Insurance,
    Banking,
    Housing,
    Legal,
    Education,
    Career,
}

/// Single follow-up referral surfaced next to a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateAction {
    pub category: AffiliateCategory,
    pub title: String,
    pub description: String,
    pub link: String,
    pub button_text: String,
}

/// Complete scoring outcome for one application profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub score: u8,
    pub status: EligibilityStatus,
    pub feedback: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_action: Option<AffiliateAction>,
}
