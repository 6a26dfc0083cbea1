//! The map widget as seen by the synchronizer.
//!
//! A [`SceneGraph`] owns marker objects keyed by entity id. The web app backs
//! it with Leaflet; [`MemoryScene`] backs it with a map for headless use and
//! tests.

use std::collections::BTreeMap;

use bsn_core::Coordinates;
use serde::Serialize;

use crate::marker::{ClickAction, MarkerProps, MarkerStyle, Tooltip};

/// Changes to apply to an existing marker. `None` fields are left alone.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct MarkerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<MarkerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

impl MarkerPatch {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.style.is_none() && self.tooltip.is_none()
    }
}

pub trait SceneGraph {
    /// Add a new marker and bind its click behaviour.
    fn create(&mut self, id: &str, props: &MarkerProps, click: &ClickAction);
    /// Mutate an existing marker in place.
    fn update(&mut self, id: &str, patch: &MarkerPatch);
    fn remove(&mut self, id: &str);
    fn list_ids(&self) -> Vec<String>;
}

/// A marker held by [`MemoryScene`].
#[derive(Debug, PartialEq, Clone)]
pub struct SceneMarker {
    pub props: MarkerProps,
    pub click: ClickAction,
    /// Bumped by every `update`; stays 0 for a marker that was never patched.
    pub revision: u32,
}

/// In-memory scene that counts operations.
#[derive(Debug, Default)]
pub struct MemoryScene {
    markers: BTreeMap<String, SceneMarker>,
    pub creates: usize,
    pub updates: usize,
    pub removes: usize,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&SceneMarker> {
        self.markers.get(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Simulate a click: returns what the bound handler would do.
    pub fn click(&self, id: &str) -> Option<&ClickAction> {
        self.markers.get(id).map(|m| &m.click)
    }

    /// Zero the operation counters.
    pub fn reset_counts(&mut self) {
        self.creates = 0;
        self.updates = 0;
        self.removes = 0;
    }
}

impl SceneGraph for MemoryScene {
    fn create(&mut self, id: &str, props: &MarkerProps, click: &ClickAction) {
        self.creates += 1;
        self.markers.insert(
            id.to_string(),
            SceneMarker {
                props: props.clone(),
                click: click.clone(),
                revision: 0,
            },
        );
    }

    fn update(&mut self, id: &str, patch: &MarkerPatch) {
        self.updates += 1;
        if let Some(marker) = self.markers.get_mut(id) {
            if let Some(position) = patch.position {
                marker.props.position = position;
                marker.click.fly_to = position;
            }
            if let Some(style) = &patch.style {
                marker.props.style = style.clone();
            }
            if let Some(tooltip) = &patch.tooltip {
                marker.props.tooltip = tooltip.clone();
            }
            marker.revision += 1;
        }
    }

    fn remove(&mut self, id: &str) {
        self.removes += 1;
        self.markers.remove(id);
    }

    fn list_ids(&self) -> Vec<String> {
        self.markers.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MapEntity;
    use bsn_core::layers::BaseLayer;
    use bsn_core::{Seed, ViewMode};

    fn props_for(seed: &Seed, id: &str) -> (MarkerProps, ClickAction) {
        let node = seed.node(id).unwrap();
        let props = MarkerProps::build(
            node,
            node.display(ViewMode::Live),
            false,
            ViewMode::Live,
            BaseLayer::Dark,
        );
        (props, ClickAction::for_entity(node))
    }

    #[test]
    fn patch_touches_only_given_parts() {
        let seed = Seed::load().unwrap();
        let (props, click) = props_for(&seed, "3");
        let mut scene = MemoryScene::new();
        scene.create("3", &props, &click);

        let moved = Coordinates::new(20.0, 73.8);
        scene.update(
            "3",
            &MarkerPatch {
                position: Some(moved),
                ..MarkerPatch::default()
            },
        );
        let marker = scene.get("3").unwrap();
        assert_eq!(marker.props.position, moved);
        assert_eq!(marker.props.style, props.style);
        assert_eq!(marker.props.tooltip, props.tooltip);
        assert_eq!(marker.revision, 1);
        assert_eq!(scene.click("3").map(|c| c.select.as_str()), Some("3"));
    }

    #[test]
    fn update_of_unknown_marker_is_counted_but_ignored() {
        let mut scene = MemoryScene::new();
        scene.update("9", &MarkerPatch::default());
        assert_eq!(scene.updates, 1);
        assert!(scene.is_empty());
        assert!(MarkerPatch::default().is_empty());
    }

    #[test]
    fn remove_and_reset_counts() {
        let seed = Seed::load().unwrap();
        let mut scene = MemoryScene::new();
        for id in ["1", "2"] {
            let (props, click) = props_for(&seed, id);
            scene.create(id, &props, &click);
        }
        scene.remove("1");
        assert_eq!(scene.list_ids(), vec!["2".to_string()]);
        assert_eq!((scene.creates, scene.removes), (2, 1));
        scene.reset_counts();
        assert_eq!((scene.creates, scene.updates, scene.removes), (0, 0, 0));
    }
}
