//! AI command panel: photo diagnostics and the basin news scan.

use bsn_intel::narrator::IMAGE_FALLBACK;
use bsn_intel::{Narrative, Query};
use dioxus::prelude::*;
use log::warn;

use crate::components::IntelOutput;
use crate::js_bridge;
use crate::state::AppState;
use crate::upload::ImageUpload;

const IMAGE_INPUT_ID: &str = "bsn-image-input";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntelMode {
    Vision,
    Search,
}

fn mode_style(active: bool, accent: &str) -> String {
    if active {
        format!("text-align: left; padding: 14px; border-radius: 12px; border: 1px solid {accent}55; background: {accent}0D; color: #F8FAFC; cursor: pointer;")
    } else {
        "text-align: left; padding: 14px; border-radius: 12px; border: 1px solid transparent; background: transparent; color: #94A3B8; cursor: pointer;".to_string()
    }
}

#[component]
pub fn IntelligencePanel() -> Element {
    let mut state = use_context::<AppState>();
    let mut mode = use_signal(|| IntelMode::Vision);
    let current = mode();
    let preview = state.upload.read().as_ref().map(|u| u.preview.clone());

    let on_upload = move |_evt: Event<FormData>| {
        spawn(async move {
            let data_url = match js_bridge::read_file_input(IMAGE_INPUT_ID).await {
                Ok(Some(url)) => url,
                Ok(None) => return,
                Err(e) => {
                    warn!("Image read failed: {e:#}");
                    return;
                }
            };
            match ImageUpload::from_data_url(&data_url) {
                Ok(upload) => {
                    let query = upload.query();
                    state.upload.set(Some(upload));
                    state.ask(state.image_intel, query);
                }
                Err(e) => {
                    warn!("Rejected upload: {e:#}");
                    let mut panel = state.image_intel;
                    let token = panel.write().begin();
                    panel.write().complete(token, Narrative::Fallback(IMAGE_FALLBACK));
                }
            }
        });
    };

    let refresh_intel = move |_: Event<MouseData>| {
        mode.set(IntelMode::Search);
        state.ask(state.basin_intel, Query::Basin);
    };

    rsx! {
        section {
            style: "margin-top: 24px; display: flex; flex-wrap: wrap; min-height: 420px; background: #0F172A; border: 1px solid #1E293B; border-radius: 16px; overflow: hidden;",

            // Sidebar
            div {
                style: "width: 260px; padding: 16px; border-right: 1px solid #1E293B; display: flex; flex-direction: column; gap: 8px;",
                div { style: "color: #22D3EE; font-weight: bold; letter-spacing: 0.1em; margin-bottom: 8px;", "AI COMMAND" }
                button {
                    style: mode_style(current == IntelMode::Vision, "#22D3EE"),
                    onclick: move |_| mode.set(IntelMode::Vision),
                    div { style: "font-weight: bold; font-size: 13px;", "Visual Diagnostic" }
                    div { style: "font-size: 10px; color: #64748B; font-family: monospace;", "Computer Vision" }
                }
                button {
                    style: mode_style(current == IntelMode::Search, "#8B5CF6"),
                    onclick: refresh_intel,
                    div { style: "font-weight: bold; font-size: 13px;", "Basin Intel" }
                    div { style: "font-size: 10px; color: #64748B; font-family: monospace;", "Live Event Scan" }
                }
            }

            // Output
            div {
                style: "flex: 1; min-width: 280px; padding: 16px; background: #020617;",
                if current == IntelMode::Vision {
                    if let Some(src) = preview {
                        div {
                            style: "display: flex; gap: 16px; flex-wrap: wrap;",
                            div {
                                style: "width: 220px;",
                                img { src: "{src}", style: "width: 100%; border-radius: 12px; border: 1px solid #1E293B;" }
                                button {
                                    style: "margin-top: 12px; width: 100%; padding: 8px; font-size: 11px; font-family: monospace; color: #94A3B8; background: transparent; border: 1px solid #1E293B; border-radius: 8px; cursor: pointer;",
                                    onclick: move |_| {
                                        state.upload.set(None);
                                        state.image_intel.write().reset();
                                    },
                                    "RESET MODULE"
                                }
                            }
                            div {
                                style: "flex: 1; min-width: 240px;",
                                IntelOutput {
                                    panel: state.image_intel,
                                    placeholder: "Awaiting analysis.".to_string(),
                                }
                            }
                        }
                    } else {
                        label {
                            r#for: IMAGE_INPUT_ID,
                            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 8px; height: 320px; border: 2px dashed #1E293B; border-radius: 16px; color: #64748B; cursor: pointer;",
                            div { style: "font-size: 14px; color: #CBD5E1;", "Upload Site Imagery" }
                            div { style: "font-size: 11px; font-family: monospace;", "Drone or field photos of the river surface" }
                            input {
                                id: IMAGE_INPUT_ID,
                                r#type: "file",
                                accept: "image/*",
                                style: "display: none;",
                                onchange: on_upload,
                            }
                        }
                        IntelOutput {
                            panel: state.image_intel,
                            placeholder: String::new(),
                        }
                    }
                } else {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                        span { style: "font-size: 11px; color: #A78BFA; font-family: monospace; text-transform: uppercase;", "Godavari Basin Event Scan" }
                        button {
                            style: "font-size: 11px; font-family: monospace; color: #A78BFA; background: transparent; border: 1px solid #8B5CF655; border-radius: 8px; padding: 6px 12px; cursor: pointer;",
                            onclick: move |_| state.ask(state.basin_intel, Query::Basin),
                            "REFRESH"
                        }
                    }
                    IntelOutput {
                        panel: state.basin_intel,
                        placeholder: "No scan yet.".to_string(),
                        accent: "#A78BFA".to_string(),
                    }
                }
            }
        }
    }
}
