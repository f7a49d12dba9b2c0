use super::checklist::{ApplicationKind, ChecklistDocument, PermitCategory};
use super::eligibility::{EligibilityEngine, EligibilityForm, EligibilityResult};
use super::intake::IntakeError;
use super::residency::{ResidencyEngine, ResidencyResult, TaxResidencyForm};
use crate::i18n::MessageCatalog;

/// Facade composing intake, the two scoring engines, and the checklist
/// registry for the HTTP and CLI shells.
pub struct ToolService<C: MessageCatalog> {
    eligibility: EligibilityEngine<C>,
    residency: ResidencyEngine<C>,
    catalog: C,
}

impl<C: MessageCatalog + Clone> ToolService<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            eligibility: EligibilityEngine::new(catalog.clone()),
            residency: ResidencyEngine::new(catalog.clone()),
            catalog,
        }
    }
}

impl<C: MessageCatalog> ToolService<C> {
    /// Validate a raw eligibility form and score it.
    pub fn score_eligibility(
        &self,
        form: EligibilityForm,
    ) -> Result<EligibilityResult, IntakeError> {
        Ok(self.eligibility.score(&form.into_profile()?))
    }

    /// Validate a raw tax-residency form and score it.
    pub fn score_residency(&self, form: TaxResidencyForm) -> Result<ResidencyResult, IntakeError> {
        Ok(self.residency.score(&form.into_profile()?))
    }

    /// Compile the published checklist for a permit combination, if any.
    pub fn checklist(
        &self,
        category: PermitCategory,
        kind: ApplicationKind,
    ) -> Option<ChecklistDocument> {
        ChecklistDocument::compile(category, kind, &self.catalog)
    }
}
