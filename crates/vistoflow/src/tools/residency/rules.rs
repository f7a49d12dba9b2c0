use chrono::{Datelike, NaiveDate};

use super::domain::{HomeCountry, ResidencyProfile};
use crate::i18n::FeedbackKey;

// Italian tax residency hinges on 183 days of presence. The 365-day budget is
// used as-is for every year; the inclusive day count below is the only place
// leap days show up.
pub(crate) const RESIDENCY_DAY_THRESHOLD: u32 = 183;
pub(crate) const FULL_YEAR_DAYS: u32 = 365;
pub(crate) const BASE_RISK: u32 = 50;

// Arrivals from June onwards leave little slack for registration delays.
const LATE_ARRIVAL_MONTH: u32 = 6;

pub(crate) const TAX_CONSULT_URL: &str = "https://example.com/tax-consult";

/// One additive risk contribution with its feedback line. A zero weight keeps
/// the feedback without moving the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RiskSignal {
    pub weight: u32,
    pub message: FeedbackKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RiskAssessment {
    pub days_in_italy: u32,
    pub signals: Vec<RiskSignal>,
}

/// Days physically present in the target year, counted from the arrival day
/// through December 31 inclusive. Arrivals before the year start count as the
/// fixed 365-day budget regardless of leap years.
pub(crate) fn days_in_target_year(arrival: NaiveDate, target_year: i32) -> u32 {
    let Some(start_of_year) = NaiveDate::from_ymd_opt(target_year, 1, 1) else {
        return 0;
    };
    let Some(end_of_year) = NaiveDate::from_ymd_opt(target_year, 12, 31) else {
        return 0;
    };

    if arrival > end_of_year {
        0
    } else if arrival < start_of_year {
        FULL_YEAR_DAYS
    } else {
        (end_of_year - arrival).num_days() as u32 + 1
    }
}

pub(crate) fn assess(profile: &ResidencyProfile) -> RiskAssessment {
    let days_in_italy = days_in_target_year(profile.arrival_date, profile.target_year);
    let mut signals = Vec::new();

    if days_in_italy < RESIDENCY_DAY_THRESHOLD {
        signals.push(RiskSignal {
            weight: 30,
            message: FeedbackKey::NotTaxResident {
                days: days_in_italy,
            },
        });
    } else {
        signals.push(RiskSignal {
            weight: 0,
            message: FeedbackKey::TaxResident {
                days: days_in_italy,
            },
        });

        if profile.arrival_date.month() >= LATE_ARRIVAL_MONTH {
            signals.push(RiskSignal {
                weight: 20,
                message: FeedbackKey::RegistrationDelay,
            });
        }
    }

    // Days left for the home country; negative when a leap-year arrival on
    // January 1 yields 366 counted days.
    let days_outside = i64::from(FULL_YEAR_DAYS) - i64::from(days_in_italy);
    if days_outside > i64::from(profile.max_days_home) {
        signals.push(RiskSignal {
            weight: 40,
            message: FeedbackKey::HomeCountryOverstay {
                country: profile.home_country,
                limit: profile.max_days_home,
                potential: days_outside as u32,
            },
        });
    }

    match profile.home_country {
        HomeCountry::Us => signals.push(RiskSignal {
            weight: 15,
            message: FeedbackKey::UsCitizenshipTax,
        }),
        HomeCountry::Uk => signals.push(RiskSignal {
            weight: 10,
            message: FeedbackKey::UkStatutoryResidence,
        }),
        HomeCountry::Ca => signals.push(RiskSignal {
            weight: 10,
            message: FeedbackKey::CaFactualResidence,
        }),
        HomeCountry::Other => {}
    }

    RiskAssessment {
        days_in_italy,
        signals,
    }
}
