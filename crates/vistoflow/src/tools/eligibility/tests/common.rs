use crate::i18n::EnglishCatalog;
use crate::tools::eligibility::domain::{
    AccommodationProof, ApplicationProfile, IncomeDocumentation, Qualification, WorkStatus,
};
use crate::tools::eligibility::{EligibilityEngine, EligibilityForm};

pub(super) fn engine() -> EligibilityEngine<EnglishCatalog> {
    EligibilityEngine::new(EnglishCatalog)
}

/// Profile that passes every gate and triggers no deduction.
pub(super) fn clean_profile() -> ApplicationProfile {
    ApplicationProfile {
        citizenship_non_eu: true,
        work_status: WorkStatus::RemoteEmployee,
        work_proof_available: true,
        employer_outside_italy: true,
        criminal_record_clean: true,
        highest_qualification: Qualification::Bachelor,
        remote_experience_months: 24,
        contract_full_year: true,
        annual_gross_income_eur: 40_000,
        dependants_joining: 0,
        income_documentation: IncomeDocumentation::TwelveMonths,
        accommodation_proof: AccommodationProof::YearLease,
        health_insurance_min_30k: true,
        passport_validity_months: 24,
    }
}

pub(super) fn clean_form() -> EligibilityForm {
    EligibilityForm {
        citizenship_non_eu: "true".to_string(),
        work_status: "REMOTE_EMPLOYEE".to_string(),
        work_proof_available: "true".to_string(),
        employer_location_outside_italy: "true".to_string(),
        criminal_record_clean: "true".to_string(),
        highest_qualification: "BACHELOR".to_string(),
        remote_exp_months: "24".to_string(),
        contract_duration_12m: "true".to_string(),
        annual_gross_income_eur: "40000".to_string(),
        dependants_joining: "0".to_string(),
        income_documentation_12m: "12M".to_string(),
        accommodation_proof: "LEASE_12M".to_string(),
        health_insurance_min_30k: "true".to_string(),
        passport_validity_months: "24".to_string(),
    }
}
