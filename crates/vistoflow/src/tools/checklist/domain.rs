use serde::{Deserialize, Serialize};

/// Residence-permit category a checklist can be compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermitCategory {
    Study,
    Nomad,
}

impl PermitCategory {
    pub const fn label(self) -> &'static str {
        match self {
            PermitCategory::Study => "Study",
            PermitCategory::Nomad => "Digital Nomad",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            PermitCategory::Study => "study",
            PermitCategory::Nomad => "nomad",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STUDY" => Some(PermitCategory::Study),
            "NOMAD" => Some(PermitCategory::Nomad),
            _ => None,
        }
    }
}

/// Whether the applicant is applying for the first time or renewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationKind {
    FirstIssue,
    Renewal,
}

impl ApplicationKind {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationKind::FirstIssue => "First Issue",
            ApplicationKind::Renewal => "Renewal",
        }
    }

    pub const fn slug(self) -> &'static str {
        match self {
            ApplicationKind::FirstIssue => "first_issue",
            ApplicationKind::Renewal => "renewal",
        }
    }

    pub fn from_slug(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "FIRST_ISSUE" => Some(ApplicationKind::FirstIssue),
            "RENEWAL" => Some(ApplicationKind::Renewal),
            _ => None,
        }
    }
}

/// Message key for one checklist entry; the catalog renders the final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistItemKey {
    VisaApplicationForm,
    PassportWithValidity,
    PassportPhotos,
    RemoteWorkContract,
    IncomeEvidence,
    BankStatements,
    HealthInsuranceCertificate,
    AccommodationProofDocument,
    CriminalRecordCertificate,
    QualificationEvidence,
    VisaFeeReceipt,
    ResidencePermitCard,
    TaxReturnCopy,
    OngoingRemoteWork,
    AccommodationRegistration,
    PermitFeeReceipt,
    EnrollmentLetter,
    FinancialMeansEvidence,
}
