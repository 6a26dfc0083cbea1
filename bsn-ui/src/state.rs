//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bsn_core::{Action, Seed, ViewState};
use bsn_intel::{GeminiProvider, IntelConfig, IntelPanel, Narrator, Query};
use dioxus::prelude::*;
use log::{info, warn};

use crate::alert::Alert;
use crate::upload::ImageUpload;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Nodes and zones (None until loaded)
    pub seed: Signal<Option<Seed>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Module, selections, view mode, layers
    pub view: Signal<ViewState>,
    pub intel_config: Signal<IntelConfig>,
    /// Forecast or crowd insight for the selected entity
    pub entity_intel: Signal<IntelPanel>,
    /// Geographic profile of the selected node
    pub location_intel: Signal<IntelPanel>,
    pub image_intel: Signal<IntelPanel>,
    pub basin_intel: Signal<IntelPanel>,
    /// Photo shown in the visual diagnostic panel
    pub upload: Signal<Option<ImageUpload>>,
    /// Broadcast alerts, oldest first
    pub alerts: Signal<Vec<Alert>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            seed: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            view: Signal::new(ViewState::default()),
            intel_config: Signal::new(IntelConfig::default()),
            entity_intel: Signal::new(IntelPanel::new()),
            location_intel: Signal::new(IntelPanel::new()),
            image_intel: Signal::new(IntelPanel::new()),
            basin_intel: Signal::new(IntelPanel::new()),
            upload: Signal::new(None),
            alerts: Signal::new(Vec::new()),
        }
    }

    /// Apply one view transition.
    pub fn dispatch(&mut self, action: Action) {
        info!("{}", serde_json::to_string(&action).unwrap_or_default());
        self.view.write().apply(action);
    }

    pub fn narrator(&self) -> Narrator<GeminiProvider> {
        let config = self.intel_config.read().clone();
        Narrator::new(GeminiProvider::new(config.clone()), config)
    }

    /// Start an AI call whose outcome lands in `panel`. A newer call on the
    /// same panel supersedes this one.
    pub fn ask(&self, mut panel: Signal<IntelPanel>, query: Query) {
        let token = panel.write().begin();
        let narrator = self.narrator();
        spawn(async move {
            let narrative = narrator.answer(query).await;
            panel.write().complete(token, narrative);
        });
    }

    /// Record an alert for the current selection.
    pub fn broadcast_alert(&mut self) -> Option<Alert> {
        let now = chrono::Local::now().naive_local();
        let alert = {
            let seed = self.seed.read();
            let view = self.view.read();
            Alert::for_selection(seed.as_ref()?, &view, now)?
        };
        warn!("Broadcast alert: {}", alert.message);
        self.alerts.write().push(alert.clone());
        Some(alert)
    }
}
