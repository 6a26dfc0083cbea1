//! A module map: Leaflet in a container, kept in step with the seed and the
//! view state through [`MapSynchronizer`](bsn_map::MapSynchronizer).

use std::cell::RefCell;
use std::rc::Rc;

use bsn_core::layers::{Overlay, OverlayCircle};
use bsn_map::MapView;
use dioxus::prelude::*;
use log::debug;

use crate::components::{ChartContainer, MapControls, RiskLegend};
use crate::js_bridge;
use crate::scene::{MapBinding, MapKind};
use crate::state::AppState;

#[derive(Props, Clone, PartialEq)]
pub struct SentinelMapProps {
    pub kind: MapKind,
    #[props(default = 560)]
    pub min_height: u32,
}

#[component]
pub fn SentinelMap(props: SentinelMapProps) -> Element {
    let state = use_context::<AppState>();
    let kind = props.kind;
    // Fresh per mount: the JS map is rebuilt on mount, so nothing is registered yet.
    let binding = use_hook(|| Rc::new(RefCell::new(MapBinding::new(kind))));
    let base_layer = use_memo(move || state.view.read().base_layer);
    let overlays = use_memo(move || state.view.read().overlays);

    // ─── Effect 1: build the Leaflet map once the container exists ───
    use_effect(move || {
        let bounds = state.seed.peek().as_ref().and_then(|seed| kind.bounds(seed));
        js_bridge::init_map(kind.key(), kind.container_id(), bounds.as_ref());
    });

    // ─── Effect 2: basemap and overlays ───
    use_effect(move || {
        js_bridge::set_base_layer(kind.key(), base_layer());
    });
    use_effect(move || {
        let flags = overlays();
        let circles: Vec<OverlayCircle> = Overlay::ALL
            .into_iter()
            .filter(|overlay| flags.is_on(*overlay))
            .flat_map(|overlay| overlay.circles())
            .collect();
        js_bridge::set_overlays(kind.key(), &circles);
    });

    // ─── Effect 3: reconcile markers on every seed or view change ───
    use_effect(move || {
        let view = (state.view)();
        let seed = state.seed.read();
        let Some(seed) = seed.as_ref() else {
            return;
        };
        let mut guard = binding.borrow_mut();
        let MapBinding { sync, scene } = &mut *guard;
        let map_view = MapView::from_state(&view);
        let report = match kind {
            MapKind::Water => sync.refresh(scene, &seed.nodes, map_view),
            MapKind::Crowd => sync.refresh(scene, &seed.zones, map_view),
        };
        debug!("{} map sync: {:?}", kind.key(), report);
    });

    use_drop(move || js_bridge::destroy_map(kind.key()));

    rsx! {
        div {
            style: "position: relative; border-radius: 16px; overflow: hidden; border: 1px solid #1E293B; background: #020617;",
            ChartContainer {
                id: kind.container_id().to_string(),
                min_height: props.min_height,
            }
            MapControls {}
            RiskLegend {}
        }
    }
}
