//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and D3.js chart functions live in `assets/js/*.js` and are
//! evaluated as globals once both libraries are loaded. Map calls go through
//! `window.bsnCall`, which queues them until the scripts are ready so marker
//! operations keep their order.

use bsn_core::geo::Bounds;
use bsn_core::layers::{BaseLayer, OverlayCircle};
use bsn_map::{ClickAction, MarkerPatch, MarkerProps};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

static MAP_JS: &str = include_str!("../assets/js/map.js");
static AREA_CHART_JS: &str = include_str!("../assets/js/area-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('BSN JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// JS source that invokes (or queues) a map function with JSON-encoded args.
pub fn deferred_call(function: &str, args_json: &str) -> String {
    format!("window.bsnCall({}, {});", Value::from(function), args_json)
}

fn invoke(function: &str, args: impl Serialize) {
    match serde_json::to_string(&args) {
        Ok(args_json) => call_js(&deferred_call(function, &args_json)),
        Err(e) => log::warn!("Skipping {function}: {e}"),
    }
}

/// Install the call queue and load the map and chart scripts once Leaflet
/// and D3 are both present. Call once at app startup.
pub fn init_scripts() {
    let all_js = [MAP_JS, AREA_CHART_JS].join("\n");

    let store_js = format!(
        "window.__bsnScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            window.__bsnQueue = window.__bsnQueue || [];
            window.bsnCall = function(name, args) {
                if (window.__bsnReady && typeof window[name] === 'function') {
                    window[name].apply(null, args);
                } else {
                    window.__bsnQueue.push([name, args]);
                }
            };
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof d3 !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Indirect eval runs at global scope, so declarations land on window.
                    (0, eval)(window.__bsnScripts);
                    delete window.__bsnScripts;
                    var exported = ['bsnInitMap', 'bsnDestroyMap', 'bsnSetBaseLayer', 'bsnSetOverlays',
                                    'bsnCreateMarker', 'bsnUpdateMarker', 'bsnRemoveMarker',
                                    'renderAreaChart'];
                    exported.forEach(function(name) {
                        if (typeof window[name] !== 'function') console.warn('[BSN] missing ' + name);
                    });
                    window.__bsnReady = true;
                    var pending = window.__bsnQueue;
                    window.__bsnQueue = [];
                    pending.forEach(function(call) {
                        try { window[call[0]].apply(null, call[1]); }
                        catch(e) { console.error('[BSN] queued ' + call[0] + ' failed:', e); }
                    });
                    console.log('BSN map and charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// (Re)create the Leaflet map for `map_key` inside `container_id`.
pub fn init_map(map_key: &str, container_id: &str, bounds: Option<&Bounds>) {
    invoke("bsnInitMap", (map_key, container_id, bounds));
}

pub fn destroy_map(map_key: &str) {
    invoke("bsnDestroyMap", (map_key,));
}

#[derive(Serialize)]
struct TileSource {
    url: &'static str,
    subdomains: &'static str,
    attribution: &'static str,
    max_zoom: u8,
    light: bool,
}

pub fn set_base_layer(map_key: &str, layer: BaseLayer) {
    let source = TileSource {
        url: layer.tile_url(),
        subdomains: layer.subdomains(),
        attribution: layer.attribution(),
        max_zoom: layer.max_zoom(),
        light: layer.is_light(),
    };
    invoke("bsnSetBaseLayer", (map_key, source));
}

/// Replace every overlay circle on the map.
pub fn set_overlays(map_key: &str, circles: &[OverlayCircle]) {
    invoke("bsnSetOverlays", (map_key, circles));
}

pub fn create_marker(map_key: &str, id: &str, props: &MarkerProps, click: &ClickAction) {
    invoke("bsnCreateMarker", (map_key, id, props, click));
}

pub fn update_marker(map_key: &str, id: &str, patch: &MarkerPatch) {
    invoke("bsnUpdateMarker", (map_key, id, patch));
}

pub fn remove_marker(map_key: &str, id: &str) {
    invoke("bsnRemoveMarker", (map_key, id));
}

/// Route marker clicks (`map_key`, entity id) from Leaflet back into Rust.
/// Replaces any previously registered handler.
pub fn on_marker_click(handler: impl FnMut(String, String) + 'static) {
    let closure = Closure::<dyn FnMut(String, String)>::new(handler);
    match web_sys::window() {
        Some(window) => {
            let installed = js_sys::Reflect::set(
                &window,
                &JsValue::from_str("__bsnOnMarkerClick"),
                closure.as_ref(),
            );
            if installed.is_err() {
                log::warn!("Could not install marker click handler");
            }
        }
        None => log::warn!("No window; marker clicks disabled"),
    }
    closure.forget();
}

/// Render a filled area chart of `[{label, value}]` points.
///
/// Uses a polling loop to wait for the chart scripts and the container DOM
/// element before rendering.
pub fn render_area_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__bsnReady &&
                    typeof window.renderAreaChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderAreaChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[BSN] renderAreaChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear a chart container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}

/// Read the first file selected in `<input type="file" id=input_id>` as a
/// `data:` URL. `Ok(None)` when nothing is selected.
pub async fn read_file_input(input_id: &str) -> anyhow::Result<Option<String>> {
    let script = format!(
        r#"
        (function() {{
            var el = document.getElementById({id});
            var file = el && el.files && el.files[0];
            if (!file) return Promise.resolve(null);
            return new Promise(function(resolve, reject) {{
                var reader = new FileReader();
                reader.onloadend = function() {{ resolve(reader.result); }};
                reader.onerror = function() {{ reject(reader.error); }};
                reader.readAsDataURL(file);
            }});
        }})()
        "#,
        id = Value::from(input_id),
    );
    let promise: js_sys::Promise = js_sys::eval(&script)
        .map_err(|e| anyhow::anyhow!("file read script failed: {e:?}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("file read script did not return a promise"))?;
    let result = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("reading {input_id} failed: {e:?}"))?;
    Ok(result.as_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_call_quotes_function_name() {
        let args = serde_json::to_string(&("water", "6")).unwrap();
        assert_eq!(
            deferred_call("bsnRemoveMarker", &args),
            r#"window.bsnCall("bsnRemoveMarker", ["water","6"]);"#
        );
    }

    #[test]
    fn patch_args_omit_unchanged_parts() {
        let patch = MarkerPatch {
            position: Some(bsn_core::Coordinates::new(20.0, 73.8)),
            ..MarkerPatch::default()
        };
        let args = serde_json::to_string(&("crowd", "cz1", &patch)).unwrap();
        assert_eq!(args, r#"["crowd","cz1",{"position":{"lat":20.0,"lng":73.8}}]"#);
    }
}
