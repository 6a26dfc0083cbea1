//! Core types for the Basin Sentinels dashboard.
//!
//! - `risk`: the four-bucket score classifier shared by every view
//! - `node` / `zone`: water-quality sites and crowd zones, parsed from the
//!   CSV fixtures embedded at compile time
//! - `seed`: the static entity store
//! - `view`: the selection / display-mode state machine
//! - `layers`: basemap tile sources and simulated overlays

pub mod geo;
pub mod layers;
pub mod node;
pub mod risk;
pub mod seed;
pub mod summary;
pub mod view;
pub mod zone;

pub use geo::Coordinates;
pub use node::MonitoringNode;
pub use risk::{classify_risk, RiskLevel};
pub use seed::Seed;
pub use view::{Action, Audience, Module, ViewMode, ViewState};
pub use zone::CrowdZone;
