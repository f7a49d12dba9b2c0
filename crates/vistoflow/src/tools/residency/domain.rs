use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why the applicant is relocating. Collected by the form, carried on the
/// profile, never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelocationGoal {
    TaxSavings,
    Lifestyle,
    Family,
    Other,
}

/// Country whose residency rules the applicant is trying to leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HomeCountry {
    Us,
    Uk,
    Ca,
    Other,
}

impl HomeCountry {
    pub const fn label(self) -> &'static str {
        match self {
            HomeCountry::Us => "US",
            HomeCountry::Uk => "UK",
            HomeCountry::Ca => "CA",
            HomeCountry::Other => "your home country",
        }
    }
}

/// Validated relocation timeline consumed by the risk scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidencyProfile {
    pub primary_goal: RelocationGoal,
    pub target_year: i32,
    pub arrival_date: NaiveDate,
    pub home_country: HomeCountry,
    pub max_days_home: u32,
}

/// Risk tier derived from the numeric risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResidencyStatus {
    Safe,
    ModerateRisk,
    HighRisk,
}

impl ResidencyStatus {
    pub fn from_risk(risk_score: u8) -> Self {
        if risk_score > 70 {
            ResidencyStatus::HighRisk
        } else if risk_score > 40 {
            ResidencyStatus::ModerateRisk
        } else {
            ResidencyStatus::Safe
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ResidencyStatus::Safe => "safe",
            ResidencyStatus::ModerateRisk => "moderate risk",
            ResidencyStatus::HighRisk => "high risk",
        }
    }
}

/// Referral attached to every residency assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationReferral {
    pub title: String,
    pub description: String,
    pub link: String,
    pub button_text: String,
}

/// Complete risk assessment for one relocation timeline. Higher risk scores
/// mean a riskier tax position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidencyResult {
    pub risk_score: u8,
    pub status: ResidencyStatus,
    pub days_in_italy: u32,
    pub feedback: Vec<String>,
    pub affiliate_action: ConsultationReferral,
}
