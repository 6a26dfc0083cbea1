//! Threshold legend for the active module.

use bsn_core::risk::{crowd_legend, water_legend};
use bsn_core::view::Module;
use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn RiskLegend() -> Element {
    let state = use_context::<AppState>();
    let module = state.view.read().active_module;
    let (title, rows) = match module {
        Module::Water => ("Risk Index", water_legend()),
        Module::Crowd => ("Density Index", crowd_legend()),
    };
    let rows: Vec<(&'static str, &'static str, String)> = rows
        .into_iter()
        .map(|row| {
            let dot = format!(
                "width: 8px; height: 8px; border-radius: 50%; background: {};",
                row.level.color()
            );
            (row.label, row.threshold, dot)
        })
        .collect();

    rsx! {
        div {
            style: "position: absolute; bottom: 12px; left: 12px; z-index: 1000; padding: 10px 12px; background: rgba(2, 6, 23, 0.9); border: 1px solid #1E293B; border-radius: 10px; font-family: monospace; font-size: 10px; color: #CBD5E1;",
            div { style: "color: #64748B; text-transform: uppercase; margin-bottom: 6px;", "{title}" }
            for (label, threshold, dot) in rows {
                div {
                    key: "{label}",
                    style: "display: flex; align-items: center; gap: 8px; padding: 2px 0;",
                    span { style: "{dot}" }
                    span { style: "flex: 1;", "{label}" }
                    span { style: "color: #64748B;", "{threshold}" }
                }
            }
        }
    }
}
