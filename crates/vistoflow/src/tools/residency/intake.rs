use serde::Deserialize;

use super::domain::{HomeCountry, RelocationGoal, ResidencyProfile};
use crate::tools::intake::{parse_count, parse_iso_date, parse_year, IntakeError};

const MIN_TARGET_YEAR: i32 = 2025;
const MAX_TARGET_YEAR: i32 = 9999;

/// Raw tax-residency form as submitted by the web front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxResidencyForm {
    pub primary_goal: String,
    pub target_year: String,
    pub arrival_date: String,
    pub home_country: String,
    pub max_days_home: String,
}

impl TaxResidencyForm {
    pub fn into_profile(self) -> Result<ResidencyProfile, IntakeError> {
        let target_year = parse_year("target_year", self.target_year)?;
        if !(MIN_TARGET_YEAR..=MAX_TARGET_YEAR).contains(&target_year) {
            return Err(IntakeError::TargetYearOutOfRange(target_year));
        }

        Ok(ResidencyProfile {
            primary_goal: parse_goal(self.primary_goal)?,
            target_year,
            arrival_date: parse_iso_date("arrival_date", self.arrival_date)?,
            home_country: parse_home_country(self.home_country)?,
            max_days_home: parse_count("max_days_home", self.max_days_home)?,
        })
    }
}

fn parse_goal(value: String) -> Result<RelocationGoal, IntakeError> {
    match value.trim() {
        "TAX_SAVINGS" => Ok(RelocationGoal::TaxSavings),
        "LIFESTYLE" => Ok(RelocationGoal::Lifestyle),
        "FAMILY" => Ok(RelocationGoal::Family),
        "OTHER" => Ok(RelocationGoal::Other),
        _ => Err(IntakeError::UnknownOption {
            field: "primary_goal",
            value,
        }),
    }
}

fn parse_home_country(value: String) -> Result<HomeCountry, IntakeError> {
    match value.trim() {
        "US" => Ok(HomeCountry::Us),
        "UK" => Ok(HomeCountry::Uk),
        "CA" => Ok(HomeCountry::Ca),
        "OTHER" => Ok(HomeCountry::Other),
        _ => Err(IntakeError::UnknownOption {
            field: "home_country",
            value,
        }),
    }
}
