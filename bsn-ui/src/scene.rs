//! Leaflet-backed scene graph.

use std::collections::BTreeSet;

use bsn_core::geo::Bounds;
use bsn_core::view::Module;
use bsn_core::{Action, Seed};
use bsn_map::{ClickAction, MapSynchronizer, MarkerPatch, MarkerProps, SceneGraph};

use crate::js_bridge;

/// One of the two module maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    Water,
    Crowd,
}

impl MapKind {
    pub fn for_module(module: Module) -> Self {
        match module {
            Module::Water => MapKind::Water,
            Module::Crowd => MapKind::Crowd,
        }
    }

    /// Key the JS side files the map under.
    pub fn key(&self) -> &'static str {
        match self {
            MapKind::Water => "water",
            MapKind::Crowd => "crowd",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "water" => Some(MapKind::Water),
            "crowd" => Some(MapKind::Crowd),
            _ => None,
        }
    }

    pub fn container_id(&self) -> &'static str {
        match self {
            MapKind::Water => "basin-map",
            MapKind::Crowd => "crowd-map",
        }
    }

    /// The transition a marker click on this map triggers.
    pub fn select_action(&self, id: String) -> Action {
        match self {
            MapKind::Water => Action::SelectNode(id),
            MapKind::Crowd => Action::SelectZone(id),
        }
    }

    /// Initial viewport: everything this map draws.
    pub fn bounds(&self, seed: &Seed) -> Option<Bounds> {
        match self {
            MapKind::Water => Bounds::enclosing(seed.nodes.iter().map(|n| &n.coordinates)),
            MapKind::Crowd => Bounds::enclosing(seed.zones.iter().map(|z| &z.coordinates)),
        }
    }
}

/// Forwards scene operations to the JS map registered under `kind`.
#[derive(Debug)]
pub struct LeafletScene {
    kind: MapKind,
    ids: BTreeSet<String>,
}

impl LeafletScene {
    pub fn new(kind: MapKind) -> Self {
        Self {
            kind,
            ids: BTreeSet::new(),
        }
    }
}

impl SceneGraph for LeafletScene {
    fn create(&mut self, id: &str, props: &MarkerProps, click: &ClickAction) {
        js_bridge::create_marker(self.kind.key(), id, props, click);
        self.ids.insert(id.to_string());
    }

    fn update(&mut self, id: &str, patch: &MarkerPatch) {
        js_bridge::update_marker(self.kind.key(), id, patch);
    }

    fn remove(&mut self, id: &str) {
        js_bridge::remove_marker(self.kind.key(), id);
        self.ids.remove(id);
    }

    fn list_ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

/// Synchronizer and scene for one mounted map. Dropped with the map.
#[derive(Debug)]
pub struct MapBinding {
    pub sync: MapSynchronizer,
    pub scene: LeafletScene,
}

impl MapBinding {
    pub fn new(kind: MapKind) -> Self {
        Self {
            sync: MapSynchronizer::new(),
            scene: LeafletScene::new(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for kind in [MapKind::Water, MapKind::Crowd] {
            assert_eq!(MapKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(MapKind::from_key("terrain"), None);
    }

    #[test]
    fn clicks_select_in_their_own_module() {
        assert_eq!(MapKind::Water.select_action("3".into()), Action::SelectNode("3".into()));
        assert_eq!(MapKind::Crowd.select_action("cz2".into()), Action::SelectZone("cz2".into()));
    }

    #[test]
    fn bounds_cover_the_seed() {
        let seed = Seed::load().unwrap();
        let water = MapKind::Water.bounds(&seed).unwrap();
        assert!(water.south_west.lng < 73.6 && water.north_east.lng > 73.84);
        let crowd = MapKind::Crowd.bounds(&seed).unwrap();
        assert!(crowd.south_west.lat <= 19.9997 && crowd.north_east.lat >= 20.01);
    }
}
