//! Live/historical toggle and the layer menu floating over the map.

use bsn_core::layers::{BaseLayer, Overlay};
use bsn_core::view::Module;
use bsn_core::{Action, ViewMode};
use dioxus::prelude::*;

use crate::state::AppState;

fn toggle_style(on: bool) -> &'static str {
    if on {
        "padding: 4px 10px; font-size: 11px; font-family: monospace; border: none; border-radius: 6px; background: #22D3EE; color: #020617; font-weight: bold; cursor: pointer;"
    } else {
        "padding: 4px 10px; font-size: 11px; font-family: monospace; border: none; border-radius: 6px; background: transparent; color: #94A3B8; cursor: pointer;"
    }
}

/// Top-right map overlay: layer menu button (both modules) and the
/// live/historical switch (water only).
#[component]
pub fn MapControls() -> Element {
    let mut state = use_context::<AppState>();
    let view = (state.view)();

    rsx! {
        div {
            style: "position: absolute; top: 12px; right: 12px; z-index: 1000; display: flex; flex-direction: column; align-items: flex-end; gap: 8px;",
            if view.active_module == Module::Water {
                div {
                    style: "display: flex; gap: 2px; padding: 3px; background: rgba(2, 6, 23, 0.85); border: 1px solid #1E293B; border-radius: 8px;",
                    button {
                        style: toggle_style(view.view_mode == ViewMode::Live),
                        onclick: move |_| state.dispatch(Action::SetViewMode(ViewMode::Live)),
                        "LIVE"
                    }
                    button {
                        style: toggle_style(view.view_mode == ViewMode::Historical),
                        onclick: move |_| state.dispatch(Action::SetViewMode(ViewMode::Historical)),
                        "5Y HISTORY"
                    }
                }
            }
            button {
                style: toggle_style(view.layer_menu_open),
                onclick: move |_| state.dispatch(Action::ToggleLayerMenu),
                "LAYERS"
            }
            if view.layer_menu_open {
                LayerMenu {}
            }
        }
    }
}

#[component]
fn LayerMenu() -> Element {
    let mut state = use_context::<AppState>();
    let view = (state.view)();
    let layers: Vec<(BaseLayer, &'static str, &'static str, bool)> = BaseLayer::ALL
        .into_iter()
        .map(|layer| (layer, layer.key(), layer.title(), view.base_layer == layer))
        .collect();
    let overlays: Vec<(Overlay, &'static str, &'static str, bool)> = Overlay::ALL
        .into_iter()
        .map(|overlay| (overlay, overlay.key(), overlay.title(), view.overlays.is_on(overlay)))
        .collect();

    rsx! {
        div {
            style: "width: 200px; padding: 12px; background: rgba(2, 6, 23, 0.95); border: 1px solid #1E293B; border-radius: 10px; font-family: monospace; font-size: 11px; color: #CBD5E1;",
            div { style: "color: #64748B; margin-bottom: 6px; text-transform: uppercase;", "Base Map" }
            for (layer, key, title, active) in layers {
                label {
                    key: "{key}",
                    style: "display: flex; gap: 6px; align-items: center; padding: 2px 0; cursor: pointer;",
                    input {
                        r#type: "radio",
                        name: "bsn-base-layer",
                        checked: active,
                        onchange: move |_| state.dispatch(Action::SetBaseLayer(layer)),
                    }
                    "{title}"
                }
            }
            div { style: "color: #64748B; margin: 10px 0 6px; text-transform: uppercase;", "Overlays" }
            for (overlay, key, title, on) in overlays {
                label {
                    key: "{key}",
                    style: "display: flex; gap: 6px; align-items: center; padding: 2px 0; cursor: pointer;",
                    input {
                        r#type: "checkbox",
                        checked: on,
                        onchange: move |_| state.dispatch(Action::ToggleOverlay(overlay)),
                    }
                    "{title}"
                }
            }
        }
    }
}
