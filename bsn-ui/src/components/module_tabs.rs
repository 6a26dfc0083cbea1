//! Water / crowd module switcher.

use bsn_core::view::Module;
use bsn_core::Action;
use dioxus::prelude::*;

use crate::state::AppState;

fn tab_style(active: bool, accent: &str) -> String {
    if active {
        format!("padding: 8px 16px; border-radius: 8px; border: 1px solid {accent}; background: {accent}22; color: #F8FAFC; font-weight: bold; cursor: pointer;")
    } else {
        "padding: 8px 16px; border-radius: 8px; border: 1px solid transparent; background: transparent; color: #94A3B8; cursor: pointer;".to_string()
    }
}

#[component]
pub fn ModuleTabs() -> Element {
    let mut state = use_context::<AppState>();
    let active = state.view.read().active_module;

    rsx! {
        nav {
            style: "display: flex; gap: 8px;",
            button {
                style: tab_style(active == Module::Water, "#22D3EE"),
                onclick: move |_| state.dispatch(Action::SwitchModule(Module::Water)),
                "Water Quality"
            }
            button {
                style: tab_style(active == Module::Crowd, "#F59E0B"),
                onclick: move |_| state.dispatch(Action::SwitchModule(Module::Crowd)),
                "Crowd Control"
            }
        }
    }
}
