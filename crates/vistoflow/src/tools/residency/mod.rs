//! Tax-residency risk scoring for a planned relocation year.
//!
//! The day arithmetic deliberately mirrors the calculator this tool replaces:
//! a fixed 365-day budget, an inclusive arrival-to-December-31 count, and the
//! 183-day heuristic with no treaty or split-year awareness.

pub mod domain;
mod intake;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    ConsultationReferral, HomeCountry, RelocationGoal, ResidencyProfile, ResidencyResult,
    ResidencyStatus,
};
pub use intake::TaxResidencyForm;

use crate::i18n::{AffiliateCopyKey, MessageCatalog};
use rules::{BASE_RISK, TAX_CONSULT_URL};

/// Stateless scorer mapping a relocation timeline to a risk assessment.
pub struct ResidencyEngine<C> {
    catalog: C,
}

impl<C: MessageCatalog> ResidencyEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn score(&self, profile: &ResidencyProfile) -> ResidencyResult {
        let assessment = rules::assess(profile);

        let raw_risk: u32 = BASE_RISK
            + assessment
                .signals
                .iter()
                .map(|signal| signal.weight)
                .sum::<u32>();
        let risk_score = raw_risk.min(100) as u8;

        let feedback = assessment
            .signals
            .iter()
            .map(|signal| self.catalog.feedback(signal.message))
            .collect();

        let copy = self.catalog.affiliate(AffiliateCopyKey::TaxConsultation);

        ResidencyResult {
            risk_score,
            status: ResidencyStatus::from_risk(risk_score),
            days_in_italy: assessment.days_in_italy,
            feedback,
            affiliate_action: ConsultationReferral {
                title: copy.title,
                description: copy.description,
                link: TAX_CONSULT_URL.to_string(),
                button_text: copy.button,
            },
        }
    }
}
