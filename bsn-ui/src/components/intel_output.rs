//! Renders an [`IntelPanel`]: spinner while loading, placeholder when empty,
//! otherwise the report split into headers and body lines.

use bsn_intel::{IntelPanel, ReportLine};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct IntelOutputProps {
    pub panel: Signal<IntelPanel>,
    pub placeholder: String,
    #[props(default = "#22D3EE".to_string())]
    pub accent: String,
}

#[component]
pub fn IntelOutput(props: IntelOutputProps) -> Element {
    let panel = props.panel.read().clone();

    if panel.loading() {
        return rsx! {
            div {
                style: "padding: 16px; color: {props.accent}; font-family: monospace; font-size: 12px;",
                "Processing request..."
            }
        };
    }
    if panel.text().is_none() {
        return rsx! {
            div {
                style: "padding: 16px; color: #64748B; font-family: monospace; font-size: 12px;",
                "{props.placeholder}"
            }
        };
    }

    let body_color = if panel.is_fallback() { "#FDA4AF" } else { "#CBD5E1" };
    let header_style = format!(
        "margin: 12px 0 4px; font-size: 12px; color: {}; text-transform: uppercase; letter-spacing: 0.08em;",
        props.accent
    );
    let body_style = format!("margin: 0 0 6px; font-size: 13px; line-height: 1.6; color: {body_color};");

    rsx! {
        div {
            style: "padding: 8px 16px;",
            {panel.lines().into_iter().map(|line| match line {
                ReportLine::Header(text) => rsx! { h5 { style: "{header_style}", "{text}" } },
                ReportLine::Body(text) => rsx! { p { style: "{body_style}", "{text}" } },
            })}
        }
    }
}
