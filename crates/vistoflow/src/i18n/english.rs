use super::{AffiliateCopy, AffiliateCopyKey, FeedbackKey, MessageCatalog};
use crate::tools::checklist::ChecklistItemKey;

/// Built-in English rendering of every message key.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn feedback(&self, key: FeedbackKey) -> String {
        match key {
            FeedbackKey::EuCitizenship => {
                "EU citizens do not need this visa: the digital nomad route is reserved for non-EU nationals.".to_string()
            }
            FeedbackKey::EmployerInsideItaly => {
                "Your employer or main client is based in Italy, which disqualifies a remote-work application.".to_string()
            }
            FeedbackKey::CriminalRecord => {
                "A criminal record entry blocks the application until it is reviewed by a lawyer.".to_string()
            }
            FeedbackKey::WorkProofMissing => {
                "You cannot yet prove your remote work arrangement; consulates reject undocumented status.".to_string()
            }
            FeedbackKey::QualificationMissing => {
                "No recognised qualification: a degree, five years of experience, or three years in ICT is expected.".to_string()
            }
            FeedbackKey::RemoteExperienceShort => {
                "Less than six months of remote work history weakens your file.".to_string()
            }
            FeedbackKey::ContractTooShort => {
                "Your contract does not cover the next twelve months.".to_string()
            }
            FeedbackKey::IncomeBelowThreshold { income, threshold } => format!(
                "Declared income of EUR {income} is below the EUR {threshold} required for your household."
            ),
            FeedbackKey::DependantsPenalty { count } => format!(
                "Bringing {count} dependant(s) raises the income bar further and adds scrutiny."
            ),
            FeedbackKey::BankStatementsSixMonths => {
                "Only six months of bank statements: twelve are expected for a smooth review.".to_string()
            }
            FeedbackKey::BankStatementsUnderSixMonths => {
                "Fewer than six months of bank statements is a common rejection reason.".to_string()
            }
            FeedbackKey::TransitoryAccommodation => {
                "A transitory address is accepted for filing but weakens the permit conversion.".to_string()
            }
            FeedbackKey::ShortTermRental => {
                "Short-term rental bookings are not accepted as proof of accommodation.".to_string()
            }
            FeedbackKey::InsuranceMissing => {
                "Health insurance with at least EUR 30,000 of coverage is mandatory.".to_string()
            }
            FeedbackKey::PassportExpiring => {
                "Your passport should stay valid for at least fifteen more months.".to_string()
            }
            FeedbackKey::NotTaxResident { days } => format!(
                "With {days} days in Italy you stay below the 183-day line and are not an Italian tax resident this year."
            ),
            FeedbackKey::TaxResident { days } => format!(
                "With {days} days in Italy you cross the 183-day line and become an Italian tax resident."
            ),
            FeedbackKey::RegistrationDelay => {
                "Arriving in June or later leaves little slack: an Anagrafe registration delay could push you under 183 days.".to_string()
            }
            FeedbackKey::HomeCountryOverstay { country, limit, potential } => format!(
                "You could spend up to {potential} days outside Italy, but {} allows only {limit} before pulling you back into its tax net.",
                country.label()
            ),
            FeedbackKey::UsCitizenshipTax => {
                "US citizens file federal taxes regardless of residence; expect dual filing.".to_string()
            }
            FeedbackKey::UkStatutoryResidence => {
                "The UK Statutory Residence Test has day-count and tie rules that need checking.".to_string()
            }
            FeedbackKey::CaFactualResidence => {
                "Canada's factual residence rules look at remaining ties, not just days.".to_string()
            }
        }
    }

    fn affiliate(&self, key: AffiliateCopyKey) -> AffiliateCopy {
        match key {
            AffiliateCopyKey::LegalConsultation => copy(
                "Talk to an immigration lawyer",
                "A criminal record entry needs a legal opinion before you apply.",
                "Book a consultation",
            ),
            AffiliateCopyKey::ContractReview => copy(
                "Get your work proof reviewed",
                "A lawyer can turn your current arrangement into consulate-ready evidence.",
                "Review my documents",
            ),
            AffiliateCopyKey::QualificationCheck => copy(
                "Verify your qualification",
                "Have your degree or experience record recognised through CIMEA.",
                "Start the check",
            ),
            AffiliateCopyKey::CvCoaching => copy(
                "Strengthen your remote track record",
                "A career coach can help you document and extend your remote history.",
                "Find a coach",
            ),
            AffiliateCopyKey::ContractDrafting => copy(
                "Fix your contract duration",
                "A lawyer can draft an addendum covering the full twelve months.",
                "Draft my addendum",
            ),
            AffiliateCopyKey::FinancialPlanning => copy(
                "Plan your income evidence",
                "An accountant can consolidate your income streams above the threshold.",
                "Talk to an accountant",
            ),
            AffiliateCopyKey::DocumentPreparation => copy(
                "Prepare your bank file",
                "Get help assembling the statement history consulates expect.",
                "Prepare my file",
            ),
            AffiliateCopyKey::MidTermHousing => copy(
                "Switch to a registrable rental",
                "Mid-term furnished rentals come with contracts the Questura accepts.",
                "Browse rentals",
            ),
            AffiliateCopyKey::NomadInsurance => copy(
                "Add compliant health cover",
                "Nomad-focused insurers meet the EUR 30,000 minimum from day one.",
                "Get covered",
            ),
            AffiliateCopyKey::TaxConsultation => copy(
                "Review your plan with a tax advisor",
                "A cross-border advisor can confirm your residency position before you move.",
                "Book a tax consult",
            ),
        }
    }

    fn checklist_item(&self, key: ChecklistItemKey) -> String {
        match key {
            ChecklistItemKey::VisaApplicationForm => "Completed national (type D) visa application form",
            ChecklistItemKey::PassportWithValidity => "Passport valid for at least fifteen more months with two blank pages",
            ChecklistItemKey::PassportPhotos => "Two recent passport-format photos",
            ChecklistItemKey::RemoteWorkContract => "Employment contract or client agreements proving remote work",
            ChecklistItemKey::IncomeEvidence => "Evidence of annual gross income above the programme threshold",
            ChecklistItemKey::BankStatements => "Bank statements covering the last twelve months",
            ChecklistItemKey::HealthInsuranceCertificate => "Health insurance certificate with at least EUR 30,000 of coverage",
            ChecklistItemKey::AccommodationProofDocument => "Registered lease or property deed for accommodation in Italy",
            ChecklistItemKey::CriminalRecordCertificate => "Criminal record certificate from your country of residence",
            ChecklistItemKey::QualificationEvidence => "Degree certificate or documented professional experience",
            ChecklistItemKey::VisaFeeReceipt => "Visa fee payment receipt",
            ChecklistItemKey::ResidencePermitCard => "Current residence permit card",
            ChecklistItemKey::TaxReturnCopy => "Copy of the Italian tax return filed for the previous year",
            ChecklistItemKey::OngoingRemoteWork => "Updated contract or client agreements proving ongoing remote work",
            ChecklistItemKey::AccommodationRegistration => "Anagrafe registration certificate for your current address",
            ChecklistItemKey::PermitFeeReceipt => "Permit renewal fee (F24) payment receipt",
            ChecklistItemKey::EnrollmentLetter => "Enrollment or admission letter from the host institution",
            ChecklistItemKey::FinancialMeansEvidence => "Proof of financial means for the study period",
        }
        .to_string()
    }

    fn checklist_disclaimer(&self) -> String {
        "Requirements vary by consulate and change without notice; always confirm against the official source before filing.".to_string()
    }
}

fn copy(title: &str, description: &str, button: &str) -> AffiliateCopy {
    AffiliateCopy {
        title: title.to_string(),
        description: description.to_string(),
        button: button.to_string(),
    }
}
