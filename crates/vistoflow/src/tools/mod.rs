//! The interactive tools behind the site: eligibility scoring, tax-residency
//! risk scoring, permit checklists, and the click-day simulator.

pub mod checklist;
pub mod clickday;
pub mod eligibility;
pub mod intake;
pub mod residency;
pub mod router;
pub mod service;

pub use intake::IntakeError;
pub use router::tools_router;
pub use service::ToolService;
