use super::domain::{ApplicationKind, ChecklistItemKey, PermitCategory};

const NOMAD_FIRST_ISSUE: &[ChecklistItemKey] = &[
    ChecklistItemKey::VisaApplicationForm,
    ChecklistItemKey::PassportWithValidity,
    ChecklistItemKey::PassportPhotos,
    ChecklistItemKey::RemoteWorkContract,
    ChecklistItemKey::IncomeEvidence,
    ChecklistItemKey::BankStatements,
    ChecklistItemKey::HealthInsuranceCertificate,
    ChecklistItemKey::AccommodationProofDocument,
    ChecklistItemKey::CriminalRecordCertificate,
    ChecklistItemKey::QualificationEvidence,
    ChecklistItemKey::VisaFeeReceipt,
];

const NOMAD_RENEWAL: &[ChecklistItemKey] = &[
    ChecklistItemKey::ResidencePermitCard,
    ChecklistItemKey::PassportWithValidity,
    ChecklistItemKey::TaxReturnCopy,
    ChecklistItemKey::OngoingRemoteWork,
    ChecklistItemKey::HealthInsuranceCertificate,
    ChecklistItemKey::AccommodationRegistration,
    ChecklistItemKey::PermitFeeReceipt,
];

const STUDY_FIRST_ISSUE: &[ChecklistItemKey] = &[
    ChecklistItemKey::VisaApplicationForm,
    ChecklistItemKey::PassportWithValidity,
    ChecklistItemKey::PassportPhotos,
    ChecklistItemKey::EnrollmentLetter,
    ChecklistItemKey::FinancialMeansEvidence,
    ChecklistItemKey::HealthInsuranceCertificate,
    ChecklistItemKey::AccommodationProofDocument,
    ChecklistItemKey::VisaFeeReceipt,
];

/// Published item lists. Combinations without a curated list return `None`
/// and surface as "not available" in the shell.
pub(crate) fn items(
    category: PermitCategory,
    kind: ApplicationKind,
) -> Option<&'static [ChecklistItemKey]> {
    match (category, kind) {
        (PermitCategory::Nomad, ApplicationKind::FirstIssue) => Some(NOMAD_FIRST_ISSUE),
        (PermitCategory::Nomad, ApplicationKind::Renewal) => Some(NOMAD_RENEWAL),
        (PermitCategory::Study, ApplicationKind::FirstIssue) => Some(STUDY_FIRST_ISSUE),
        // TODO: curate the study renewal list once the Questura source pages
        // are verified.
        (PermitCategory::Study, ApplicationKind::Renewal) => None,
    }
}
