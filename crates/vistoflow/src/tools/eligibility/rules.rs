use super::domain::{
    AccommodationProof, AffiliateCategory, ApplicationProfile, IncomeDocumentation, Qualification,
};
use crate::i18n::{AffiliateCopyKey, FeedbackKey};

// Annual income floor plus the household uplifts published for the visa.
pub(crate) const BASE_INCOME_EUR: u32 = 28_000;
pub(crate) const SPOUSE_COST_EUR: u32 = 9_360;
pub(crate) const CHILD_COST_EUR: u32 = 1_560;

pub(crate) const MIN_REMOTE_EXPERIENCE_MONTHS: u32 = 6;
pub(crate) const MIN_PASSPORT_VALIDITY_MONTHS: u32 = 15;

pub(crate) const PRIORITY_LOW: u8 = 1;
pub(crate) const PRIORITY_MEDIUM: u8 = 2;
pub(crate) const PRIORITY_HIGH: u8 = 3;
pub(crate) const PRIORITY_CRITICAL: u8 = 4;

const LEGAL_CONSULT_URL: &str = "https://example.com/legal";
const LEGAL_CONTRACT_URL: &str = "https://example.com/legal-contract";
const QUALIFICATION_CHECK_URL: &str = "https://example.com/cimea";
const CAREER_COACHING_URL: &str = "https://example.com/career";
const ACCOUNTANT_URL: &str = "https://example.com/accountant";
const DOCUMENT_PREP_URL: &str = "https://example.com/docs";
const HOUSING_URL: &str = "https://flatio.com/";
const INSURANCE_URL: &str = "https://safetywing.com/";

/// Referral proposed by a rule; the engine keeps a single winner by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ActionCandidate {
    pub priority: u8,
    pub category: AffiliateCategory,
    pub copy: AffiliateCopyKey,
    pub link: &'static str,
}

/// One triggered deduction with its feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RuleHit {
    pub penalty: u32,
    pub message: FeedbackKey,
    pub candidate: Option<ActionCandidate>,
}

/// Terminal result of a failed hard gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GateFailure {
    pub message: FeedbackKey,
    pub candidate: Option<ActionCandidate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Assessment {
    GateFailed(GateFailure),
    Scored(Vec<RuleHit>),
}

/// Annual gross income the programme requires for the given household size.
///
/// The first joining dependant counts as a spouse, every further one as a
/// child.
pub fn required_income(dependants: u32) -> u32 {
    let mut required = BASE_INCOME_EUR;
    if dependants > 0 {
        required += SPOUSE_COST_EUR;
        if dependants > 1 {
            required += (dependants - 1) * CHILD_COST_EUR;
        }
    }
    required
}

pub(crate) fn assess(profile: &ApplicationProfile) -> Assessment {
    // Hard gates, in fixed order. Each failure is terminal.
    if !profile.citizenship_non_eu {
        return Assessment::GateFailed(GateFailure {
            message: FeedbackKey::EuCitizenship,
            candidate: None,
        });
    }

    if !profile.employer_outside_italy {
        return Assessment::GateFailed(GateFailure {
            message: FeedbackKey::EmployerInsideItaly,
            candidate: None,
        });
    }

    if !profile.criminal_record_clean {
        return Assessment::GateFailed(GateFailure {
            message: FeedbackKey::CriminalRecord,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_CRITICAL,
                category: AffiliateCategory::Legal,
                copy: AffiliateCopyKey::LegalConsultation,
                link: LEGAL_CONSULT_URL,
            }),
        });
    }

    let mut hits = Vec::new();

    if !profile.work_proof_available {
        hits.push(RuleHit {
            penalty: 10,
            message: FeedbackKey::WorkProofMissing,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_CRITICAL,
                category: AffiliateCategory::Legal,
                copy: AffiliateCopyKey::ContractReview,
                link: LEGAL_CONTRACT_URL,
            }),
        });
    }

    if profile.highest_qualification == Qualification::None {
        hits.push(RuleHit {
            penalty: 20,
            message: FeedbackKey::QualificationMissing,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_LOW,
                category: AffiliateCategory::Education,
                copy: AffiliateCopyKey::QualificationCheck,
                link: QUALIFICATION_CHECK_URL,
            }),
        });
    }

    if profile.remote_experience_months < MIN_REMOTE_EXPERIENCE_MONTHS {
        hits.push(RuleHit {
            penalty: 15,
            message: FeedbackKey::RemoteExperienceShort,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_LOW,
                category: AffiliateCategory::Career,
                copy: AffiliateCopyKey::CvCoaching,
                link: CAREER_COACHING_URL,
            }),
        });
    }

    if !profile.contract_full_year {
        hits.push(RuleHit {
            penalty: 10,
            message: FeedbackKey::ContractTooShort,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_CRITICAL,
                category: AffiliateCategory::Legal,
                copy: AffiliateCopyKey::ContractDrafting,
                link: LEGAL_CONTRACT_URL,
            }),
        });
    }

    let threshold = required_income(profile.dependants_joining);
    if profile.annual_gross_income_eur < threshold {
        hits.push(RuleHit {
            penalty: 30,
            message: FeedbackKey::IncomeBelowThreshold {
                income: profile.annual_gross_income_eur,
                threshold,
            },
            candidate: Some(ActionCandidate {
                priority: PRIORITY_HIGH,
                category: AffiliateCategory::Banking,
                copy: AffiliateCopyKey::FinancialPlanning,
                link: ACCOUNTANT_URL,
            }),
        });

        if profile.dependants_joining > 0 {
            hits.push(RuleHit {
                penalty: 5 * profile.dependants_joining,
                message: FeedbackKey::DependantsPenalty {
                    count: profile.dependants_joining,
                },
                candidate: None,
            });
        }
    }

    match profile.income_documentation {
        IncomeDocumentation::TwelveMonths => {}
        IncomeDocumentation::SixMonths => hits.push(RuleHit {
            penalty: 10,
            message: FeedbackKey::BankStatementsSixMonths,
            candidate: None,
        }),
        IncomeDocumentation::LessThanSixMonths => hits.push(RuleHit {
            penalty: 20,
            message: FeedbackKey::BankStatementsUnderSixMonths,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_HIGH,
                category: AffiliateCategory::Banking,
                copy: AffiliateCopyKey::DocumentPreparation,
                link: DOCUMENT_PREP_URL,
            }),
        }),
    }

    match profile.accommodation_proof {
        AccommodationProof::YearLease => {}
        AccommodationProof::Transitory => hits.push(RuleHit {
            penalty: 15,
            message: FeedbackKey::TransitoryAccommodation,
            candidate: None,
        }),
        AccommodationProof::ShortTermRental => hits.push(RuleHit {
            penalty: 25,
            message: FeedbackKey::ShortTermRental,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_HIGH,
                category: AffiliateCategory::Housing,
                copy: AffiliateCopyKey::MidTermHousing,
                link: HOUSING_URL,
            }),
        }),
    }

    if !profile.health_insurance_min_30k {
        hits.push(RuleHit {
            penalty: 10,
            message: FeedbackKey::InsuranceMissing,
            candidate: Some(ActionCandidate {
                priority: PRIORITY_MEDIUM,
                category: AffiliateCategory::Insurance,
                copy: AffiliateCopyKey::NomadInsurance,
                link: INSURANCE_URL,
            }),
        });
    }

    if profile.passport_validity_months < MIN_PASSPORT_VALIDITY_MONTHS {
        hits.push(RuleHit {
            penalty: 5,
            message: FeedbackKey::PassportExpiring,
            candidate: None,
        });
    }

    Assessment::Scored(hits)
}
