use chrono::NaiveDate;

use super::domain::{HomeCountry, RelocationGoal, ResidencyProfile, ResidencyStatus};
use super::{ResidencyEngine, TaxResidencyForm};
use crate::i18n::EnglishCatalog;
use crate::tools::intake::IntakeError;

fn engine() -> ResidencyEngine<EnglishCatalog> {
    ResidencyEngine::new(EnglishCatalog)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn profile(arrival: NaiveDate, target_year: i32) -> ResidencyProfile {
    ResidencyProfile {
        primary_goal: RelocationGoal::Lifestyle,
        target_year,
        arrival_date: arrival,
        home_country: HomeCountry::Other,
        max_days_home: 365,
    }
}

#[test]
fn january_first_arrival_counts_the_full_year() {
    let result = engine().score(&profile(date(2025, 1, 1), 2025));

    assert_eq!(result.days_in_italy, 365);
    assert_eq!(result.risk_score, 50);
    assert_eq!(result.status, ResidencyStatus::ModerateRisk);
    assert_eq!(result.feedback.len(), 1);
}

#[test]
fn arrival_before_the_target_year_uses_the_fixed_budget() {
    // An August arrival the year before: full presence, but the month check
    // still fires on the arrival date itself.
    let result = engine().score(&profile(date(2024, 8, 10), 2025));

    assert_eq!(result.days_in_italy, 365);
    assert_eq!(result.risk_score, 70);
    assert_eq!(result.status, ResidencyStatus::ModerateRisk);
    assert_eq!(result.feedback.len(), 2);
}

#[test]
fn arrival_after_the_target_year_counts_zero_days() {
    let mut profile = profile(date(2026, 1, 5), 2025);
    profile.max_days_home = 180;

    let result = engine().score(&profile);

    assert_eq!(result.days_in_italy, 0);
    // 50 base, 30 below the threshold, 40 over the home budget, clamped.
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.status, ResidencyStatus::HighRisk);
}

#[test]
fn mid_july_us_arrival_matches_the_worked_example() {
    let profile = ResidencyProfile {
        primary_goal: RelocationGoal::TaxSavings,
        target_year: 2025,
        arrival_date: date(2025, 7, 15),
        home_country: HomeCountry::Us,
        max_days_home: 10,
    };

    let result = engine().score(&profile);

    assert_eq!(result.days_in_italy, 170);
    assert_eq!(result.risk_score, 100);
    assert_eq!(result.status, ResidencyStatus::HighRisk);
    assert_eq!(result.feedback.len(), 3);
    assert_eq!(result.affiliate_action.link, "https://example.com/tax-consult");
}

#[test]
fn june_arrival_adds_the_registration_delay_loading() {
    // June 1: 183 + 31 = 214 days, resident but late.
    let result = engine().score(&profile(date(2025, 6, 1), 2025));

    assert_eq!(result.days_in_italy, 214);
    assert_eq!(result.risk_score, 70);
    assert_eq!(result.feedback.len(), 2);

    // One day earlier the loading disappears.
    let may = engine().score(&profile(date(2025, 5, 31), 2025));
    assert_eq!(may.days_in_italy, 215);
    assert_eq!(may.risk_score, 50);
    assert_eq!(may.feedback.len(), 1);
}

#[test]
fn uk_and_ca_loadings_are_ten_points() {
    let mut uk = profile(date(2025, 1, 10), 2025);
    uk.home_country = HomeCountry::Uk;
    let uk_result = engine().score(&uk);
    assert_eq!(uk_result.risk_score, 60);
    assert_eq!(uk_result.feedback.len(), 2);

    let mut ca = profile(date(2025, 1, 10), 2025);
    ca.home_country = HomeCountry::Ca;
    let ca_result = engine().score(&ca);
    assert_eq!(ca_result.risk_score, 60);
}

#[test]
fn leap_year_arrival_on_january_first_counts_inclusively() {
    // 2028 has 366 days, and the inclusive count reflects that; the fixed
    // 365-day outside budget then leaves no home-country overage.
    let mut profile = profile(date(2028, 1, 1), 2028);
    profile.max_days_home = 0;

    let result = engine().score(&profile);

    assert_eq!(result.days_in_italy, 366);
    assert_eq!(result.risk_score, 50);
    assert_eq!(result.status, ResidencyStatus::ModerateRisk);
}

#[test]
fn short_stay_with_generous_home_budget_is_flagged_not_resident() {
    // Arrive in November: 61 days, well under the line.
    let result = engine().score(&profile(date(2025, 11, 1), 2025));

    assert_eq!(result.days_in_italy, 61);
    assert_eq!(result.risk_score, 80);
    assert_eq!(result.status, ResidencyStatus::HighRisk);
    assert_eq!(result.feedback.len(), 1);
}

#[test]
fn scoring_is_idempotent() {
    let engine = engine();
    let profile = profile(date(2025, 7, 15), 2025);
    assert_eq!(engine.score(&profile), engine.score(&profile));
}

#[test]
fn form_round_trips_into_a_profile() {
    let form = TaxResidencyForm {
        primary_goal: "TAX_SAVINGS".to_string(),
        target_year: "2025".to_string(),
        arrival_date: "2025-07-15".to_string(),
        home_country: "US".to_string(),
        max_days_home: "10".to_string(),
    };

    let profile = form.into_profile().expect("form is valid");
    assert_eq!(profile.primary_goal, RelocationGoal::TaxSavings);
    assert_eq!(profile.target_year, 2025);
    assert_eq!(profile.arrival_date, date(2025, 7, 15));
    assert_eq!(profile.home_country, HomeCountry::Us);
    assert_eq!(profile.max_days_home, 10);
}

#[test]
fn intake_rejects_out_of_range_years_and_bad_values() {
    let mut form = TaxResidencyForm {
        primary_goal: "LIFESTYLE".to_string(),
        target_year: "2024".to_string(),
        arrival_date: "2025-07-15".to_string(),
        home_country: "OTHER".to_string(),
        max_days_home: "90".to_string(),
    };
    assert_eq!(
        form.clone().into_profile(),
        Err(IntakeError::TargetYearOutOfRange(2024))
    );

    form.target_year = "2025".to_string();
    form.arrival_date = "15/07/2025".to_string();
    assert!(matches!(
        form.clone().into_profile(),
        Err(IntakeError::InvalidDate {
            field: "arrival_date",
            ..
        })
    ));

    form.arrival_date = "2025-07-15".to_string();
    form.home_country = "DE".to_string();
    assert!(matches!(
        form.into_profile(),
        Err(IntakeError::UnknownOption {
            field: "home_country",
            ..
        })
    ));
}
