use super::common::*;
use crate::tools::eligibility::domain::{
    AccommodationProof, AffiliateCategory, EligibilityStatus, IncomeDocumentation, Qualification,
};
use crate::tools::eligibility::required_income;

#[test]
fn clean_profile_scores_full_marks() {
    let result = engine().score(&clean_profile());

    assert_eq!(result.score, 100);
    assert_eq!(result.status, EligibilityStatus::Approved);
    assert!(result.feedback.is_empty());
    assert!(result.affiliate_action.is_none());
}

#[test]
fn eu_citizenship_gate_short_circuits() {
    let mut profile = clean_profile();
    profile.citizenship_non_eu = false;

    let result = engine().score(&profile);

    assert_eq!(result.score, 0);
    assert_eq!(result.status, EligibilityStatus::Critical);
    assert_eq!(result.feedback.len(), 1);
    assert!(result.affiliate_action.is_none());
}

#[test]
fn employer_gate_short_circuits() {
    let mut profile = clean_profile();
    profile.employer_outside_italy = false;

    let result = engine().score(&profile);

    assert_eq!(result.score, 0);
    assert_eq!(result.status, EligibilityStatus::Critical);
    assert_eq!(result.feedback.len(), 1);
    assert!(result.affiliate_action.is_none());
}

#[test]
fn criminal_record_gate_carries_a_legal_referral() {
    let mut profile = clean_profile();
    profile.criminal_record_clean = false;

    let result = engine().score(&profile);

    assert_eq!(result.score, 0);
    assert_eq!(result.status, EligibilityStatus::Critical);
    assert_eq!(result.feedback.len(), 1);
    let action = result.affiliate_action.expect("legal referral attached");
    assert_eq!(action.category, AffiliateCategory::Legal);
    assert_eq!(action.link, "https://example.com/legal");
}

#[test]
fn gates_fire_in_citizenship_first_order() {
    let mut profile = clean_profile();
    profile.citizenship_non_eu = false;
    profile.criminal_record_clean = false;

    let result = engine().score(&profile);

    // The citizenship gate wins, so no legal referral appears.
    assert_eq!(result.feedback.len(), 1);
    assert!(result.affiliate_action.is_none());
}

#[test]
fn missing_qualification_costs_twenty_points() {
    let mut profile = clean_profile();
    profile.highest_qualification = Qualification::None;

    let result = engine().score(&profile);

    assert_eq!(result.score, 80);
    assert_eq!(result.status, EligibilityStatus::Warning);
    assert_eq!(result.feedback.len(), 1);
    let action = result.affiliate_action.expect("education referral attached");
    assert_eq!(action.category, AffiliateCategory::Education);
}

#[test]
fn income_equal_to_threshold_is_not_a_shortfall() {
    let mut profile = clean_profile();
    profile.annual_gross_income_eur = required_income(0);

    let result = engine().score(&profile);

    assert_eq!(result.score, 100);
    assert!(result.feedback.is_empty());
}

#[test]
fn income_one_euro_short_triggers_the_shortfall() {
    let mut profile = clean_profile();
    profile.annual_gross_income_eur = required_income(0) - 1;

    let result = engine().score(&profile);

    assert_eq!(result.score, 70);
    assert_eq!(result.feedback.len(), 1);
    let action = result.affiliate_action.expect("banking referral attached");
    assert_eq!(action.category, AffiliateCategory::Banking);
}

#[test]
fn required_income_follows_the_household_formula() {
    assert_eq!(required_income(0), 28_000);
    assert_eq!(required_income(1), 37_360);
    assert_eq!(required_income(3), 40_480);
}

#[test]
fn dependants_add_a_second_feedback_line_and_extra_penalty() {
    let mut profile = clean_profile();
    profile.dependants_joining = 3;
    profile.annual_gross_income_eur = 30_000;

    let result = engine().score(&profile);

    // 30 for the shortfall plus 5 per dependant.
    assert_eq!(result.score, 100 - 30 - 15);
    assert_eq!(result.feedback.len(), 2);
}

#[test]
fn higher_priority_referral_replaces_a_lower_one() {
    let mut profile = clean_profile();
    profile.highest_qualification = Qualification::None;
    profile.health_insurance_min_30k = false;

    let insurance_beats_education = engine().score(&profile);
    assert_eq!(
        insurance_beats_education
            .affiliate_action
            .expect("referral attached")
            .category,
        AffiliateCategory::Insurance
    );

    profile.accommodation_proof = AccommodationProof::ShortTermRental;
    let housing_beats_insurance = engine().score(&profile);
    assert_eq!(
        housing_beats_insurance
            .affiliate_action
            .expect("referral attached")
            .category,
        AffiliateCategory::Housing
    );

    profile.work_proof_available = false;
    let legal_beats_housing = engine().score(&profile);
    assert_eq!(
        legal_beats_housing
            .affiliate_action
            .expect("referral attached")
            .category,
        AffiliateCategory::Legal
    );
}

#[test]
fn equal_priority_keeps_the_earlier_referral() {
    let mut profile = clean_profile();
    // Banking (income shortfall) and housing are both priority 3; the income
    // rule runs first and must keep the referral.
    profile.annual_gross_income_eur = 20_000;
    profile.accommodation_proof = AccommodationProof::ShortTermRental;

    let result = engine().score(&profile);

    assert_eq!(
        result.affiliate_action.expect("referral attached").category,
        AffiliateCategory::Banking
    );
}

#[test]
fn documentation_branches_are_exclusive() {
    let mut profile = clean_profile();
    profile.income_documentation = IncomeDocumentation::SixMonths;
    let six = engine().score(&profile);
    assert_eq!(six.score, 90);
    assert!(six.affiliate_action.is_none());

    profile.income_documentation = IncomeDocumentation::LessThanSixMonths;
    let less = engine().score(&profile);
    assert_eq!(less.score, 80);
    assert_eq!(
        less.affiliate_action.expect("referral attached").category,
        AffiliateCategory::Banking
    );
}

#[test]
fn heavily_flawed_profile_clamps_at_zero() {
    let mut profile = clean_profile();
    profile.work_proof_available = false;
    profile.highest_qualification = Qualification::None;
    profile.remote_experience_months = 0;
    profile.contract_full_year = false;
    profile.annual_gross_income_eur = 0;
    profile.dependants_joining = 4;
    profile.income_documentation = IncomeDocumentation::LessThanSixMonths;
    profile.accommodation_proof = AccommodationProof::ShortTermRental;
    profile.health_insurance_min_30k = false;
    profile.passport_validity_months = 3;

    let result = engine().score(&profile);

    assert_eq!(result.score, 0);
    assert_eq!(result.status, EligibilityStatus::Critical);
    // Work proof sets the only priority-4 referral.
    assert_eq!(
        result.affiliate_action.expect("referral attached").category,
        AffiliateCategory::Legal
    );
}

#[test]
fn scoring_is_idempotent() {
    let mut profile = clean_profile();
    profile.highest_qualification = Qualification::None;
    profile.passport_validity_months = 10;

    let engine = engine();
    assert_eq!(engine.score(&profile), engine.score(&profile));
}
