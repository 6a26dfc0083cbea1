//! Section header with title and optional unit line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Unit or scale note, e.g. "Quality score (0-100)"
    #[props(default = String::new())]
    pub unit_description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; display: flex; justify-content: space-between; align-items: baseline;",
            h4 {
                style: "margin: 0; font-size: 11px; color: #94A3B8; text-transform: uppercase; letter-spacing: 0.1em;",
                "{props.title}"
            }
            if !props.unit_description.is_empty() {
                span {
                    style: "font-size: 10px; color: #64748B; font-family: monospace;",
                    "{props.unit_description}"
                }
            }
        }
    }
}
