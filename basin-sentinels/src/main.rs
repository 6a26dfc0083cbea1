//! Basin Sentinels
//!
//! Environmental command dashboard for the Godavari basin around Nashik:
//! water-quality sensors and crowd-density zones on Leaflet maps, with
//! detail panels and an AI narrative assistant.
//!
//! Data flow:
//! 1. The node and zone CSV seeds are embedded in `bsn-core` at compile time.
//! 2. On mount: parse the seed, configure the AI client, load the map and
//!    chart scripts.
//! 3. Every view action re-runs the map synchronizer for the active module;
//!    marker clicks feed back in as selection actions.

use bsn_core::view::Module;
use bsn_core::Seed;
use bsn_intel::IntelConfig;
use bsn_ui::components::{
    ErrorDisplay, IntelligencePanel, LoadingSpinner, ModuleTabs, NodeDashboard, SentinelMap,
    SummaryCards, ZoneDashboard,
};
use bsn_ui::js_bridge;
use bsn_ui::scene::MapKind;
use bsn_ui::state::AppState;
use dioxus::prelude::*;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const D3_JS: &str = "https://d3js.org/d3.v7.min.js";

const MARKER_CSS: &str = "
@keyframes bsn-pulse { 0%, 100% { transform: scale(1); opacity: 1; } 50% { transform: scale(1.15); opacity: 0.75; } }
.bsn-marker-icon { background: transparent; border: none; }
.bsn-tooltip { background: transparent; border: none; box-shadow: none; padding: 0; }
.bsn-tooltip::before { display: none; }
";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("basin-sentinels-root"))
        .launch(App);
}

/// AI settings baked in at build time; the browser has no process environment.
fn build_intel_config() -> IntelConfig {
    IntelConfig::from_lookup(|var| {
        match var {
            "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
            "API_KEY" => option_env!("API_KEY"),
            "GEMINI_BASE_URL" => option_env!("GEMINI_BASE_URL"),
            _ => None,
        }
        .map(str::to_string)
    })
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let selected = use_memo(move || state.view.read().selected_id().map(str::to_string));

    // Marker clicks arrive from Leaflet as (map key, entity id).
    use_hook(move || {
        js_bridge::on_marker_click(move |map_key, id| match MapKind::from_key(&map_key) {
            Some(kind) => state.dispatch(kind.select_action(id)),
            None => log::warn!("Click from unknown map {map_key:?}"),
        });
    });

    // ─── Effect 1: parse the seed once on mount ───
    use_effect(move || {
        match Seed::load() {
            Ok(seed) => state.seed.set(Some(seed)),
            Err(e) => state.error_msg.set(Some(format!("Could not load sensor seed: {e:#}"))),
        }
        let config = build_intel_config();
        if config.api_key.is_none() {
            log::warn!("No Gemini API key compiled in; AI panels will show fallback text");
        }
        state.intel_config.set(config);
        state.loading.set(false);

        js_bridge::init_scripts();
    });

    // ─── Effect 2: a new selection invalidates the entity narratives ───
    use_effect(move || {
        let _ = selected();
        state.entity_intel.write().reset();
        state.location_intel.write().reset();
    });

    let module = state.view.read().active_module;
    let kind = MapKind::for_module(module);
    let map_key = kind.key();

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: D3_JS }
        style { {MARKER_CSS} }

        div {
            style: "min-height: 100vh; background: #020617; color: #E2E8F0; font-family: system-ui, -apple-system, sans-serif;",
            div {
                style: "max-width: 1400px; margin: 0 auto; padding: 16px;",

                header {
                    style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 12px; padding-bottom: 12px; border-bottom: 1px solid #1E293B;",
                    div {
                        h1 { style: "margin: 0; font-size: 22px; letter-spacing: 0.05em; color: #F8FAFC;", "BASIN SENTINELS" }
                        p { style: "margin: 2px 0 0; font-size: 11px; color: #64748B; font-family: monospace;", "GODAVARI BASIN / NASHIK COMMAND" }
                    }
                    ModuleTabs {}
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay {
                        message: err.clone(),
                        on_dismiss: move |_| state.error_msg.set(None),
                    }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if state.seed.read().is_some() {
                    SummaryCards {}

                    div {
                        style: "display: grid; grid-template-columns: minmax(0, 2fr) minmax(320px, 1fr); gap: 16px; align-items: start;",
                        SentinelMap { key: "{map_key}", kind }
                        if module == Module::Water {
                            NodeDashboard {}
                        } else {
                            ZoneDashboard {}
                        }
                    }

                    IntelligencePanel {}
                }
            }
        }
    }
}
