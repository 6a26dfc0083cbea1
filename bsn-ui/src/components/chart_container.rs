//! Container div that D3 charts and Leaflet maps render into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id the JS side renders into
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 160)]
    pub min_height: u32,
    /// Shown over the container while `loading`
    #[props(default = "Rendering...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; height: {}px; position: relative; width: 100%;",
        props.min_height, props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #64748B; font-family: monospace; font-size: 11px; z-index: 500;",
                    "{props.placeholder}"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
