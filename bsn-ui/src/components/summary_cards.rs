//! Headline figures above the map.

use bsn_core::summary::{BasinSummary, CrowdSummary};
use bsn_core::view::Module;
use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Props, Clone, PartialEq)]
struct CardProps {
    label: String,
    value: String,
    #[props(default = String::new())]
    detail: String,
    accent: String,
}

#[component]
fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 180px; padding: 14px 16px; background: #0F172A; border: 1px solid #1E293B; border-left: 3px solid {props.accent}; border-radius: 10px;",
            div { style: "font-size: 10px; color: #64748B; text-transform: uppercase; letter-spacing: 0.1em;", "{props.label}" }
            div { style: "font-size: 24px; font-weight: bold; color: #F8FAFC; margin-top: 4px;", "{props.value}" }
            if !props.detail.is_empty() {
                div { style: "font-size: 11px; color: #94A3B8; margin-top: 4px; font-family: monospace;", "{props.detail}" }
            }
        }
    }
}

#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let module = state.view.read().active_module;
    let seed = state.seed.read();
    let Some(seed) = seed.as_ref() else {
        return rsx! {};
    };

    match module {
        Module::Water => {
            let summary = BasinSummary::from_nodes(&seed.nodes);
            let critical_count = summary.critical_nodes.len().to_string();
            let critical = if summary.critical_nodes.is_empty() {
                "None".to_string()
            } else {
                summary.critical_nodes.join(", ")
            };
            rsx! {
                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    Card {
                        label: "Basin Health Index".to_string(),
                        value: format!("{}/100", summary.health_index),
                        detail: format!("Mean quality score across {} nodes", seed.nodes.len()),
                        accent: "#22D3EE".to_string(),
                    }
                    Card {
                        label: "Critical Nodes".to_string(),
                        value: critical_count,
                        detail: critical,
                        accent: "#E11D48".to_string(),
                    }
                }
            }
        }
        Module::Crowd => {
            let summary = CrowdSummary::from_zones(&seed.zones);
            let (peak_value, peak_accent) = match &summary.peak {
                Some((level, name)) => (format!("{level} / {name}"), level.color()),
                None => ("None".to_string(), "#64748B"),
            };
            rsx! {
                div {
                    style: "display: flex; gap: 12px; flex-wrap: wrap; margin: 12px 0;",
                    Card {
                        label: "Total Headcount".to_string(),
                        value: format!("{}k", summary.headcount_k()),
                        detail: format!("Across {} surveilled zones", seed.zones.len()),
                        accent: "#F59E0B".to_string(),
                    }
                    Card {
                        label: "Peak Risk Zone".to_string(),
                        value: peak_value,
                        accent: peak_accent.to_string(),
                    }
                }
            }
        }
    }
}
