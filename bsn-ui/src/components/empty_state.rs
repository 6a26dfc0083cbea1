//! Shown in place of a dashboard when nothing is selected.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub title: String,
    pub hint: String,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "height: 100%; min-height: 320px; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; border: 1px dashed #1E293B; border-radius: 16px; color: #64748B; text-align: center; padding: 24px;",
            h3 { style: "margin: 0; color: #94A3B8; font-size: 16px;", "{props.title}" }
            p { style: "margin: 0; font-size: 12px; font-family: monospace;", "{props.hint}" }
        }
    }
}
