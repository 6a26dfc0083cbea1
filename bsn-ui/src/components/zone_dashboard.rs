//! Detail panel for the selected crowd zone.

use bsn_core::summary::influx_history;
use bsn_intel::Query;
use dioxus::prelude::*;

use crate::components::{BroadcastAlert, EmptyState, IntelOutput, TrendChart};
use crate::state::AppState;

const INFLUX_CHART_ID: &str = "zone-influx-trend";

#[component]
pub fn ZoneDashboard() -> Element {
    let state = use_context::<AppState>();
    let view = (state.view)();
    let zone = view
        .selected_zone
        .as_deref()
        .and_then(|id| state.seed.read().as_ref()?.zone(id).cloned());

    let Some(zone) = zone else {
        return rsx! {
            EmptyState {
                title: "Select Crowd Zone".to_string(),
                hint: "Click a zone on the crowd map to see live density.".to_string(),
            }
        };
    };

    let risk = zone.risk_level;
    let badge = format!(
        "padding: 4px 10px; border-radius: 999px; font-size: 11px; font-weight: bold; color: {0}; border: 1px solid {0}; background: {0}1A;",
        risk.color()
    );
    let overloaded = zone.is_overloaded();
    let bar_color = if overloaded { "#E11D48" } else { "#F59E0B" };
    let bar = format!(
        "height: 100%; width: {:.0}%; background: {bar_color}; border-radius: 4px;",
        zone.occupancy.clamp(0.0, 100.0)
    );
    let occupancy = format!("{:.0}%", zone.occupancy);
    let headcount = zone.headcount;
    let flow = format!("{:.0}", zone.flow_rate);
    let trend = zone.trend.label().to_uppercase();
    let insight_zone = zone.clone();

    rsx! {
        div {
            style: "background: #0F172A; border: 1px solid #1E293B; border-radius: 16px; overflow: hidden;",

            div {
                style: "padding: 16px; border-bottom: 1px solid #1E293B; display: flex; justify-content: space-between; align-items: flex-start;",
                div {
                    h3 { style: "margin: 0; color: #F8FAFC; font-size: 18px;", "{zone.name}" }
                    p { style: "margin: 4px 0 0; color: #64748B; font-family: monospace; font-size: 11px;", "DRONE {zone.drone_id} ON STATION" }
                }
                span { style: "{badge}", "{risk}" }
            }

            div {
                style: "padding: 16px; display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                div {
                    div { style: "font-size: 10px; color: #64748B; text-transform: uppercase;", "Headcount" }
                    div { style: "font-size: 24px; color: #F8FAFC; font-weight: bold;", "{headcount}" }
                }
                div {
                    div { style: "font-size: 10px; color: #64748B; text-transform: uppercase;", "Flow Rate" }
                    div {
                        style: "font-size: 24px; color: #F8FAFC; font-weight: bold;",
                        "{flow} "
                        span { style: "font-size: 10px; color: #64748B;", "ppl/min {trend}" }
                    }
                }
            }

            div {
                style: "padding: 0 16px 16px;",
                div {
                    style: "display: flex; justify-content: space-between; font-size: 10px; color: #64748B; text-transform: uppercase; margin-bottom: 4px;",
                    span { "Capacity Load" }
                    if overloaded {
                        span { style: "color: #E11D48; font-weight: bold;", "{occupancy} OVERLOAD" }
                    } else {
                        span { "{occupancy}" }
                    }
                }
                div {
                    style: "height: 8px; background: #1E293B; border-radius: 4px; overflow: hidden;",
                    div { style: "{bar}" }
                }
            }

            TrendChart {
                id: INFLUX_CHART_ID.to_string(),
                title: "Influx Rate".to_string(),
                unit_description: "ppl/min".to_string(),
                series: influx_history(),
                color: "#F59E0B".to_string(),
            }

            div {
                style: "padding: 12px 16px; border-top: 1px solid #1E293B; font-size: 12px; color: #CBD5E1;",
                span { style: "color: #64748B; text-transform: uppercase; font-size: 10px; margin-right: 8px;", "Next Event" }
                "{zone.next_event}"
            }

            div {
                style: "border-top: 1px solid #1E293B;",
                div {
                    style: "padding: 12px 16px 0;",
                    button {
                        style: "width: 100%; padding: 8px; border-radius: 8px; border: 1px solid #F59E0B55; background: transparent; color: #F59E0B; font-size: 11px; cursor: pointer;",
                        onclick: move |_| state.ask(state.entity_intel, Query::Zone(insight_zone.clone())),
                        "AI CROWD ANALYTICS"
                    }
                }
                IntelOutput {
                    panel: state.entity_intel,
                    placeholder: "Request a choke-point analysis for this zone.".to_string(),
                    accent: "#F59E0B".to_string(),
                }
            }

            BroadcastAlert {}
        }
    }
}
