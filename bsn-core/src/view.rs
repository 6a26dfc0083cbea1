//! Selection and display-mode state for one dashboard session.
//!
//! `ViewState` is a plain serializable value; every user interaction is an
//! [`Action`] applied with [`ViewState::apply`]. No transition is rejected and
//! there is no terminal state.

use serde::{Deserialize, Serialize};

use crate::layers::{BaseLayer, Overlay, OverlayFlags};
use crate::seed::{DEFAULT_NODE_ID, DEFAULT_ZONE_ID};

/// Which entity collection and map are live.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Water,
    Crowd,
}

/// Which score drives the water map's risk colours.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Live,
    Historical,
}

impl ViewMode {
    /// Tooltip caption for the displayed score.
    pub fn score_caption(&self) -> &'static str {
        match self {
            ViewMode::Live => "LIVE QS",
            ViewMode::Historical => "5Y AVG",
        }
    }
}

/// Who is reading the dashboard; changes the forecast wording.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Authority,
    Public,
}

/// The selected entity of the active module.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Selected<'a> {
    Node(&'a str),
    Zone(&'a str),
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    SwitchModule(Module),
    SelectNode(String),
    SelectZone(String),
    SetViewMode(ViewMode),
    SetBaseLayer(BaseLayer),
    ToggleOverlay(Overlay),
    SetAudience(Audience),
    ToggleLayerMenu,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ViewState {
    pub active_module: Module,
    /// Retained while the crowd module is active.
    pub selected_node: Option<String>,
    /// Retained while the water module is active.
    pub selected_zone: Option<String>,
    pub view_mode: ViewMode,
    pub base_layer: BaseLayer,
    pub overlays: OverlayFlags,
    pub audience: Audience,
    pub layer_menu_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_module: Module::Water,
            selected_node: Some(DEFAULT_NODE_ID.to_string()),
            selected_zone: Some(DEFAULT_ZONE_ID.to_string()),
            view_mode: ViewMode::Live,
            base_layer: BaseLayer::Dark,
            overlays: OverlayFlags::default(),
            audience: Audience::Authority,
            layer_menu_open: false,
        }
    }
}

impl ViewState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SwitchModule(module) => self.active_module = module,
            Action::SelectNode(id) => self.selected_node = Some(id),
            Action::SelectZone(id) => self.selected_zone = Some(id),
            Action::SetViewMode(mode) => self.view_mode = mode,
            Action::SetBaseLayer(layer) => self.base_layer = layer,
            Action::ToggleOverlay(overlay) => self.overlays.toggle(overlay),
            Action::SetAudience(audience) => self.audience = audience,
            Action::ToggleLayerMenu => self.layer_menu_open = !self.layer_menu_open,
        }
    }

    /// Value-returning form of [`ViewState::apply`].
    pub fn with(mut self, action: Action) -> Self {
        self.apply(action);
        self
    }

    /// The selection that is meaningful for the active module.
    pub fn selected_entity(&self) -> Option<Selected<'_>> {
        match self.active_module {
            Module::Water => self.selected_node.as_deref().map(Selected::Node),
            Module::Crowd => self.selected_zone.as_deref().map(Selected::Zone),
        }
    }

    /// Id of the selected entity of the active module, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_entity().map(|s| match s {
            Selected::Node(id) | Selected::Zone(id) => id,
        })
    }
}
