//! Broadcast button and the recent-alert log.

use dioxus::prelude::*;

use crate::state::AppState;

/// Alerts listed under the button.
const RECENT_ALERTS: usize = 3;

#[component]
pub fn BroadcastAlert() -> Element {
    let mut state = use_context::<AppState>();
    let recent: Vec<(String, String, String)> = state
        .alerts
        .read()
        .iter()
        .rev()
        .take(RECENT_ALERTS)
        .map(|alert| {
            (
                alert.time_label(),
                alert.message.clone(),
                format!("border-left: 2px solid {}; padding-left: 8px; margin-top: 6px;", alert.risk.color()),
            )
        })
        .collect();

    rsx! {
        div {
            style: "padding: 12px 16px; border-top: 1px solid #1E293B;",
            button {
                style: "width: 100%; padding: 10px; border-radius: 8px; border: 1px solid #E11D48; background: rgba(225, 29, 72, 0.12); color: #FDA4AF; font-weight: bold; letter-spacing: 0.1em; cursor: pointer;",
                onclick: move |_| {
                    state.broadcast_alert();
                },
                "BROADCAST ALERT"
            }
            for (time, message, style) in recent {
                div {
                    key: "{time}-{message}",
                    style: "{style}",
                    span { style: "font-family: monospace; font-size: 10px; color: #64748B; margin-right: 6px;", "{time}" }
                    span { style: "font-size: 11px; color: #CBD5E1;", "{message}" }
                }
            }
        }
    }
}
