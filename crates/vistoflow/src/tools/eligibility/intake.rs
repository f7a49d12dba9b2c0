use serde::Deserialize;

use super::domain::{
    AccommodationProof, ApplicationProfile, IncomeDocumentation, Qualification, WorkStatus,
};
use crate::tools::intake::{parse_count, parse_flag, IntakeError};

/// Raw eligibility form exactly as the web front end submits it: booleans as
/// `"true"`/`"false"` strings, enumerations as their upper-snake option
/// values, numbers as digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EligibilityForm {
    pub citizenship_non_eu: String,
    pub work_status: String,
    pub work_proof_available: String,
    pub employer_location_outside_italy: String,
    pub criminal_record_clean: String,
    pub highest_qualification: String,
    pub remote_exp_months: String,
    pub contract_duration_12m: String,
    pub annual_gross_income_eur: String,
    pub dependants_joining: String,
    pub income_documentation_12m: String,
    pub accommodation_proof: String,
    pub health_insurance_min_30k: String,
    pub passport_validity_months: String,
}

impl EligibilityForm {
    /// Validate every field and produce the typed profile the scorer trusts.
    pub fn into_profile(self) -> Result<ApplicationProfile, IntakeError> {
        Ok(ApplicationProfile {
            citizenship_non_eu: parse_flag("citizenship_non_eu", self.citizenship_non_eu)?,
            work_status: parse_work_status(self.work_status)?,
            work_proof_available: parse_flag("work_proof_available", self.work_proof_available)?,
            employer_outside_italy: parse_flag(
                "employer_location_outside_italy",
                self.employer_location_outside_italy,
            )?,
            criminal_record_clean: parse_flag("criminal_record_clean", self.criminal_record_clean)?,
            highest_qualification: parse_qualification(self.highest_qualification)?,
            remote_experience_months: parse_count("remote_exp_months", self.remote_exp_months)?,
            contract_full_year: parse_flag("contract_duration_12m", self.contract_duration_12m)?,
            annual_gross_income_eur: parse_count(
                "annual_gross_income_eur",
                self.annual_gross_income_eur,
            )?,
            dependants_joining: parse_count("dependants_joining", self.dependants_joining)?,
            income_documentation: parse_income_documentation(self.income_documentation_12m)?,
            accommodation_proof: parse_accommodation(self.accommodation_proof)?,
            health_insurance_min_30k: parse_flag(
                "health_insurance_min_30k",
                self.health_insurance_min_30k,
            )?,
            passport_validity_months: parse_count(
                "passport_validity_months",
                self.passport_validity_months,
            )?,
        })
    }
}

fn parse_work_status(value: String) -> Result<WorkStatus, IntakeError> {
    match value.trim() {
        "REMOTE_EMPLOYEE" => Ok(WorkStatus::RemoteEmployee),
        "FREELANCER" => Ok(WorkStatus::Freelancer),
        "ENTREPRENEUR" => Ok(WorkStatus::Entrepreneur),
        _ => Err(IntakeError::UnknownOption {
            field: "work_status",
            value,
        }),
    }
}

fn parse_qualification(value: String) -> Result<Qualification, IntakeError> {
    match value.trim() {
        "BACHELOR" => Ok(Qualification::Bachelor),
        "EXP_5Y" => Ok(Qualification::FiveYearsExperience),
        "ICT_3Y" => Ok(Qualification::IctExperience),
        "NONE" => Ok(Qualification::None),
        _ => Err(IntakeError::UnknownOption {
            field: "highest_qualification",
            value,
        }),
    }
}

fn parse_income_documentation(value: String) -> Result<IncomeDocumentation, IntakeError> {
    match value.trim() {
        "12M" => Ok(IncomeDocumentation::TwelveMonths),
        "6M" => Ok(IncomeDocumentation::SixMonths),
        "LESS" => Ok(IncomeDocumentation::LessThanSixMonths),
        _ => Err(IntakeError::UnknownOption {
            field: "income_documentation_12m",
            value,
        }),
    }
}

fn parse_accommodation(value: String) -> Result<AccommodationProof, IntakeError> {
    match value.trim() {
        "LEASE_12M" => Ok(AccommodationProof::YearLease),
        "TRANSITORY" => Ok(AccommodationProof::Transitory),
        "AIRBNB" => Ok(AccommodationProof::ShortTermRental),
        _ => Err(IntakeError::UnknownOption {
            field: "accommodation_proof",
            value,
        }),
    }
}
