//! Fault banner shown above the dashboard.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "SYSTEM FAULT".to_string())]
    pub title: String,
    /// Renders a dismiss control when set
    #[props(default)]
    pub on_dismiss: Option<EventHandler<()>>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            role: "alert",
            style: "display: flex; align-items: center; gap: 12px; padding: 10px 16px; margin: 12px 0; background: rgba(225, 29, 72, 0.1); border: 1px solid rgba(225, 29, 72, 0.4); border-radius: 8px; font-family: monospace; font-size: 12px;",
            span { style: "width: 8px; height: 8px; border-radius: 50%; background: #E11D48; flex-shrink: 0;" }
            span {
                style: "flex: 1; color: #FDA4AF;",
                strong { style: "color: #FB7185; letter-spacing: 0.08em;", "{props.title}: " }
                "{props.message}"
            }
            if let Some(handler) = on_dismiss {
                button {
                    style: "background: transparent; border: none; color: #FB7185; cursor: pointer; font-size: 14px;",
                    onclick: move |_| handler.call(()),
                    "×"
                }
            }
        }
    }
}
