//! Core library for VistoFlow, the Italy digital-nomad relocation toolkit.
//!
//! The heart of the crate is two pure, deterministic scorers: nomad-visa
//! eligibility and tax-residency risk. Around them sit the checklist
//! registry, the click-day simulator, the injected message catalog, and the
//! configuration/telemetry plumbing the HTTP and CLI shells share.

pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;
pub mod tools;
