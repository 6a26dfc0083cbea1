//! Detail panel for the selected monitoring node.

use bsn_core::summary::quality_history;
use bsn_core::{Action, Audience};
use bsn_intel::Query;
use bsn_map::MapEntity;
use dioxus::prelude::*;

use crate::components::{BroadcastAlert, EmptyState, IntelOutput, TrendChart};
use crate::state::AppState;

const QUALITY_CHART_ID: &str = "node-quality-trend";

fn format_metric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn audience_style(active: bool) -> &'static str {
    if active {
        "padding: 3px 8px; font-size: 10px; border-radius: 4px; border: none; background: #22D3EE; color: #020617; font-weight: bold; cursor: pointer;"
    } else {
        "padding: 3px 8px; font-size: 10px; border-radius: 4px; border: none; background: #1E293B; color: #94A3B8; cursor: pointer;"
    }
}

#[component]
pub fn NodeDashboard() -> Element {
    let mut state = use_context::<AppState>();
    let view = (state.view)();
    let node = view
        .selected_node
        .as_deref()
        .and_then(|id| state.seed.read().as_ref()?.node(id).cloned());

    let Some(node) = node else {
        return rsx! {
            EmptyState {
                title: "Select Monitoring Node".to_string(),
                hint: "Click a sensor on the basin map to inspect its readings.".to_string(),
            }
        };
    };

    let reading = node.display(view.view_mode);
    let badge = format!(
        "padding: 4px 10px; border-radius: 999px; font-size: 11px; font-weight: bold; color: {0}; border: 1px solid {0}; background: {0}1A;",
        reading.risk.color()
    );
    let score = format_metric(reading.score);
    let caption = view.view_mode.score_caption();
    let coordinates = node.coordinates.display();
    let metrics = [
        ("pH", format_metric(node.ph), ""),
        ("Dissolved O2", format_metric(node.dissolved_oxygen), "mg/L"),
        ("BOD", format_metric(node.bod), "mg/L"),
        ("Turbidity", format_metric(node.turbidity), "NTU"),
    ];
    let predicted = format_metric(node.prediction.score);
    let trend = node.prediction.trend.label().to_uppercase();
    let next_risk = node.prediction.next_6_hrs;
    let next_style = format!("color: {}; font-weight: bold;", next_risk.color());
    let forecast = node.forecast_text(view.audience);
    let audience = view.audience;
    let forecast_node = node.clone();
    let location = node.name.clone();

    rsx! {
        div {
            style: "background: #0F172A; border: 1px solid #1E293B; border-radius: 16px; overflow: hidden;",

            // Header
            div {
                style: "padding: 16px; border-bottom: 1px solid #1E293B; display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    h3 { style: "margin: 0; color: #F8FAFC; font-size: 18px;", "{node.name}" }
                    p { style: "margin: 4px 0 0; color: #64748B; font-family: monospace; font-size: 11px;", "{coordinates}" }
                }
                div {
                    style: "text-align: right;",
                    span { style: "{badge}", "{reading.risk}" }
                    div { style: "margin-top: 8px; font-size: 28px; font-weight: bold; color: #F8FAFC;", "{score}" }
                    div { style: "font-size: 10px; color: #64748B; font-family: monospace;", "{caption}" }
                }
            }

            // Metrics grid
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 1px; background: #1E293B;",
                for (label, value, unit) in metrics {
                    div {
                        key: "{label}",
                        style: "background: #0F172A; padding: 12px 16px;",
                        div { style: "font-size: 10px; color: #64748B; text-transform: uppercase;", "{label}" }
                        div {
                            style: "font-size: 18px; color: #E2E8F0; font-family: monospace;",
                            "{value} "
                            span { style: "font-size: 10px; color: #64748B;", "{unit}" }
                        }
                    }
                }
            }

            TrendChart {
                id: QUALITY_CHART_ID.to_string(),
                title: "Quality Trend".to_string(),
                unit_description: "QS 0-100".to_string(),
                series: quality_history(),
                color: "#22D3EE".to_string(),
                y_range: Some((0.0, 100.0)),
            }

            // Forecast footer
            div {
                style: "padding: 12px 16px; border-top: 1px solid #1E293B; background: #020617;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                    span { style: "font-size: 10px; color: #64748B; text-transform: uppercase; letter-spacing: 0.1em;", "Forecast (6h)" }
                    div {
                        style: "display: flex; gap: 4px;",
                        button {
                            style: audience_style(audience == Audience::Authority),
                            onclick: move |_| state.dispatch(Action::SetAudience(Audience::Authority)),
                            "AUTHORITY"
                        }
                        button {
                            style: audience_style(audience == Audience::Public),
                            onclick: move |_| state.dispatch(Action::SetAudience(Audience::Public)),
                            "PUBLIC"
                        }
                    }
                }
                div {
                    style: "display: flex; gap: 16px; font-family: monospace; font-size: 12px; color: #CBD5E1;",
                    span { "Predicted QS {predicted}" }
                    span { "{trend}" }
                    span { style: "{next_style}", "{next_risk}" }
                }
                p { style: "margin: 8px 0 0; font-size: 12px; line-height: 1.5; color: #94A3B8;", "{forecast}" }
            }

            // AI narrative
            div {
                style: "border-top: 1px solid #1E293B;",
                div {
                    style: "display: flex; gap: 8px; padding: 12px 16px 0;",
                    button {
                        style: "flex: 1; padding: 8px; border-radius: 8px; border: 1px solid #22D3EE55; background: transparent; color: #22D3EE; font-size: 11px; cursor: pointer;",
                        onclick: move |_| state.ask(state.entity_intel, Query::Node(forecast_node.clone())),
                        "AI FORECAST"
                    }
                    button {
                        style: "flex: 1; padding: 8px; border-radius: 8px; border: 1px solid #8B5CF655; background: transparent; color: #A78BFA; font-size: 11px; cursor: pointer;",
                        onclick: move |_| state.ask(state.location_intel, Query::Location(location.clone())),
                        "LOCATION PROFILE"
                    }
                }
                IntelOutput {
                    panel: state.entity_intel,
                    placeholder: "Request an AI forecast for this node.".to_string(),
                }
                IntelOutput {
                    panel: state.location_intel,
                    placeholder: String::new(),
                    accent: "#A78BFA".to_string(),
                }
            }

            BroadcastAlert {}
        }
    }
}
