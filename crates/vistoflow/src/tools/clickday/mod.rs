//! The "click day" simulator: Italian quota applications open at a fixed
//! instant and close in seconds, so the site lets visitors race a 30-second
//! form. This module holds the session state machine; the UI only renders it.

use chrono::{DateTime, Duration, Utc};

/// Seconds the player gets to complete the form.
pub const SUBMISSION_WINDOW_SECONDS: i64 = 30;

/// Fields the simulated application form collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickDayForm {
    pub full_name: String,
    pub passport: String,
    pub email: String,
    pub country: String,
}

impl ClickDayForm {
    pub fn validate(&self) -> Result<(), ClickDayFormError> {
        if self.full_name.trim().chars().count() < 2 {
            return Err(ClickDayFormError::NameTooShort);
        }
        if self.passport.trim().chars().count() < 6 {
            return Err(ClickDayFormError::PassportTooShort);
        }
        if !plausible_email(self.email.trim()) {
            return Err(ClickDayFormError::InvalidEmail);
        }
        if self.country.trim().chars().count() < 2 {
            return Err(ClickDayFormError::CountryTooShort);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClickDayFormError {
    #[error("full name must be at least 2 characters")]
    NameTooShort,
    #[error("passport number must be at least 6 characters")]
    PassportTooShort,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("country must be at least 2 characters")]
    CountryTooShort,
}

/// One timed attempt. Pure with respect to the injected instants, so tests
/// and the HTTP shell can replay any timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickDaySession {
    deadline: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDayOutcome {
    Won { seconds_left: u32 },
    Lost,
}

impl ClickDaySession {
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            deadline: now + Duration::seconds(SUBMISSION_WINDOW_SECONDS),
        }
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Whole seconds remaining, clamped at zero once the window closes.
    pub fn seconds_left(&self, now: DateTime<Utc>) -> u32 {
        (self.deadline - now).num_seconds().max(0) as u32
    }

    /// Resolve a submission. The deadline wins over validation: a late
    /// submission is lost even when the form would not validate.
    pub fn submit(
        &self,
        now: DateTime<Utc>,
        form: &ClickDayForm,
    ) -> Result<ClickDayOutcome, ClickDayFormError> {
        if now >= self.deadline {
            return Ok(ClickDayOutcome::Lost);
        }
        form.validate()?;
        Ok(ClickDayOutcome::Won {
            seconds_left: self.seconds_left(now),
        })
    }
}

fn plausible_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn opening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 3, 9, 0, 0).single().expect("valid instant")
    }

    fn valid_form() -> ClickDayForm {
        ClickDayForm {
            full_name: "Ada Lovelace".to_string(),
            passport: "X1234567".to_string(),
            email: "ada@example.com".to_string(),
            country: "UK".to_string(),
        }
    }

    #[test]
    fn immediate_submission_wins_with_full_window() {
        let session = ClickDaySession::start(opening());
        let outcome = session.submit(opening(), &valid_form()).expect("form valid");
        assert_eq!(
            outcome,
            ClickDayOutcome::Won {
                seconds_left: SUBMISSION_WINDOW_SECONDS as u32
            }
        );
    }

    #[test]
    fn submission_at_deadline_is_lost() {
        let session = ClickDaySession::start(opening());
        let outcome = session
            .submit(session.deadline(), &valid_form())
            .expect("deadline beats validation");
        assert_eq!(outcome, ClickDayOutcome::Lost);
    }

    #[test]
    fn late_invalid_submission_is_lost_not_rejected() {
        let session = ClickDaySession::start(opening());
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        let late = session.deadline() + Duration::seconds(5);
        assert_eq!(session.submit(late, &form), Ok(ClickDayOutcome::Lost));
    }

    #[test]
    fn invalid_fields_are_rejected_inside_the_window() {
        let session = ClickDaySession::start(opening());
        let halfway = opening() + Duration::seconds(15);

        let mut form = valid_form();
        form.full_name = "A".to_string();
        assert_eq!(
            session.submit(halfway, &form),
            Err(ClickDayFormError::NameTooShort)
        );

        let mut form = valid_form();
        form.passport = "123".to_string();
        assert_eq!(
            session.submit(halfway, &form),
            Err(ClickDayFormError::PassportTooShort)
        );

        let mut form = valid_form();
        form.email = "ada@invalid".to_string();
        assert_eq!(
            session.submit(halfway, &form),
            Err(ClickDayFormError::InvalidEmail)
        );

        let mut form = valid_form();
        form.country = "U".to_string();
        assert_eq!(
            session.submit(halfway, &form),
            Err(ClickDayFormError::CountryTooShort)
        );
    }

    #[test]
    fn seconds_left_counts_down_and_clamps() {
        let session = ClickDaySession::start(opening());
        assert_eq!(session.seconds_left(opening()), 30);
        assert_eq!(session.seconds_left(opening() + Duration::seconds(12)), 18);
        assert_eq!(session.seconds_left(opening() + Duration::seconds(90)), 0);
    }
}
