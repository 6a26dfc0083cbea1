//! AI narrative adapter.
//!
//! The hosted model is an external collaborator: text (and optionally an
//! image) goes in, free-form text comes out. Output is display-only and never
//! feeds back into risk classification or map state.

pub mod config;
pub mod narrator;
pub mod panel;
pub mod prompts;
pub mod provider;
pub mod report;
pub mod request;

pub use config::IntelConfig;
pub use narrator::{Narrative, Narrator, Query, Subject};
pub use panel::{IntelPanel, RequestToken};
pub use provider::{GeminiProvider, NarrativeProvider};
pub use report::{parse_report, ReportLine};
