//! Shared Dioxus components and Leaflet/D3.js bridge for the Basin Sentinels
//! dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the map and chart JS via `js_sys::eval()`
//! - `scene`: the Leaflet-backed `SceneGraph` the map synchronizer drives
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: RSX components (maps, dashboards, AI panels, ...)

pub mod alert;
pub mod components;
pub mod js_bridge;
pub mod scene;
pub mod state;
pub mod upload;
