//! Nomad-visa eligibility scoring: hard gates, additive deductions, and a
//! single prioritised follow-up referral.

pub mod domain;
mod intake;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    AccommodationProof, AffiliateAction, AffiliateCategory, ApplicationProfile, EligibilityResult,
    EligibilityStatus, IncomeDocumentation, Qualification, WorkStatus,
};
pub use intake::EligibilityForm;
pub use rules::required_income;

use crate::i18n::MessageCatalog;
use rules::{ActionCandidate, Assessment};

/// Stateless scorer mapping a validated profile to a complete result.
///
/// Deterministic and infallible: every well-typed profile produces a score in
/// [0, 100], a tier, ordered feedback, and at most one referral.
pub struct EligibilityEngine<C> {
    catalog: C,
}

impl<C: MessageCatalog> EligibilityEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn score(&self, profile: &ApplicationProfile) -> EligibilityResult {
        match rules::assess(profile) {
            Assessment::GateFailed(gate) => EligibilityResult {
                score: 0,
                status: EligibilityStatus::Critical,
                feedback: vec![self.catalog.feedback(gate.message)],
                affiliate_action: gate.candidate.map(|candidate| self.referral(candidate)),
            },
            Assessment::Scored(hits) => {
                let penalty: u32 = hits.iter().map(|hit| hit.penalty).sum();
                let score = 100u32.saturating_sub(penalty) as u8;

                let feedback = hits
                    .iter()
                    .map(|hit| self.catalog.feedback(hit.message))
                    .collect();

                // Single winner by strictly higher priority; an equal
                // priority keeps the earlier candidate.
                let winner = hits
                    .iter()
                    .filter_map(|hit| hit.candidate)
                    .fold(None::<ActionCandidate>, |current, candidate| match current {
                        Some(held) if candidate.priority <= held.priority => Some(held),
                        _ => Some(candidate),
                    });

                EligibilityResult {
                    score,
                    status: EligibilityStatus::from_score(score),
                    feedback,
                    affiliate_action: winner.map(|candidate| self.referral(candidate)),
                }
            }
        }
    }

    fn referral(&self, candidate: ActionCandidate) -> AffiliateAction {
        let copy = self.catalog.affiliate(candidate.copy);
        AffiliateAction {
            category: candidate.category,
            title: copy.title,
            description: copy.description,
            link: candidate.link.to_string(),
            button_text: copy.button,
        }
    }
}
