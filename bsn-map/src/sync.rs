//! Marker reconciliation.
//!
//! Each refresh converges the scene onto the current entity collection:
//! existing markers are patched in place, missing ones are created, and
//! markers whose entity disappeared are removed. The registry holds the
//! last props pushed to the scene so unchanged markers are left alone.

use std::collections::{HashMap, HashSet};

use bsn_core::layers::BaseLayer;
use bsn_core::{ViewMode, ViewState};
use log::debug;
use serde::Serialize;

use crate::display::MapEntity;
use crate::marker::{ClickAction, MarkerProps};
use crate::scene::{MarkerPatch, SceneGraph};

/// The slice of UI state a refresh depends on.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct MapView<'a> {
    pub selected: Option<&'a str>,
    pub mode: ViewMode,
    pub base_layer: BaseLayer,
}

impl<'a> MapView<'a> {
    pub fn from_state(state: &'a ViewState) -> Self {
        MapView {
            selected: state.selected_id(),
            mode: state.view_mode,
            base_layer: state.base_layer,
        }
    }
}

/// What one refresh did.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize)]
pub struct SyncReport {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub removed: usize,
    /// Entities with unusable coordinates.
    pub skipped: usize,
}

impl SyncReport {
    /// True when the refresh neither created nor removed anything.
    pub fn is_stable(&self) -> bool {
        self.created == 0 && self.removed == 0
    }
}

#[derive(Debug, Default)]
pub struct MapSynchronizer {
    registry: HashMap<String, MarkerProps>,
}

impl MapSynchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids with a live marker.
    pub fn registered_ids(&self) -> HashSet<&str> {
        self.registry.keys().map(String::as_str).collect()
    }

    pub fn props(&self, id: &str) -> Option<&MarkerProps> {
        self.registry.get(id)
    }

    /// Forget every registration, e.g. after the map widget was torn down.
    pub fn reset(&mut self) {
        self.registry.clear();
    }

    pub fn refresh<S, E>(&mut self, scene: &mut S, entities: &[E], view: MapView<'_>) -> SyncReport
    where
        S: SceneGraph + ?Sized,
        E: MapEntity,
    {
        let mut report = SyncReport::default();
        let mut present: HashSet<&str> = HashSet::with_capacity(entities.len());

        for entity in entities {
            let id = entity.id();
            present.insert(id);

            if !entity.coordinates().is_valid() {
                debug!("Skipping marker {id}: invalid coordinates {:?}", entity.coordinates());
                report.skipped += 1;
                continue;
            }

            let reading = entity.display(view.mode);
            let selected = view.selected == Some(id);
            let props = MarkerProps::build(entity, reading, selected, view.mode, view.base_layer);

            match self.registry.get_mut(id) {
                Some(current) => {
                    let patch = MarkerPatch {
                        position: (current.position != props.position).then_some(props.position),
                        style: (current.style != props.style).then(|| props.style.clone()),
                        tooltip: (current.tooltip != props.tooltip).then(|| props.tooltip.clone()),
                    };
                    if patch.is_empty() {
                        report.unchanged += 1;
                    } else {
                        scene.update(id, &patch);
                        *current = props;
                        report.updated += 1;
                    }
                }
                None => {
                    scene.create(id, &props, &ClickAction::for_entity(entity));
                    self.registry.insert(id.to_string(), props);
                    report.created += 1;
                }
            }
        }

        let stale: Vec<String> = self
            .registry
            .keys()
            .filter(|id| !present.contains(id.as_str()))
            .cloned()
            .collect();
        for id in stale {
            scene.remove(&id);
            self.registry.remove(&id);
            report.removed += 1;
        }

        debug!("Marker refresh: {report:?}");
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;
    use bsn_core::{Coordinates, MonitoringNode, Seed};

    fn nodes() -> Vec<MonitoringNode> {
        Seed::load().unwrap().nodes
    }

    fn live(selected: Option<&str>) -> MapView<'_> {
        MapView {
            selected,
            mode: ViewMode::Live,
            base_layer: BaseLayer::Dark,
        }
    }

    fn ids(scene: &MemoryScene) -> HashSet<String> {
        scene.list_ids().into_iter().collect()
    }

    #[test]
    fn first_refresh_creates_every_marker() {
        let nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        let report = sync.refresh(&mut scene, &nodes, live(Some("6")));
        assert_eq!(report.created, 9);
        assert_eq!(scene.len(), 9);
        assert!(scene.get("6").unwrap().props.style.selected);
        assert!(!scene.get("1").unwrap().props.style.selected);
    }

    #[test]
    fn unchanged_inputs_converge_without_churn() {
        let nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &nodes, live(Some("6")));
        scene.reset_counts();

        let report = sync.refresh(&mut scene, &nodes, live(Some("6")));
        assert!(report.is_stable());
        assert_eq!(report.unchanged, 9);
        assert_eq!((scene.creates, scene.updates, scene.removes), (0, 0, 0));
    }

    #[test]
    fn selection_change_patches_only_affected_markers() {
        let nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &nodes, live(Some("6")));
        scene.reset_counts();

        let report = sync.refresh(&mut scene, &nodes, live(Some("2")));
        assert_eq!(report.updated, 2);
        assert_eq!(report.created, 0);
        assert_eq!(scene.updates, 2);
        assert!(scene.get("2").unwrap().props.style.selected);
        assert!(!scene.get("6").unwrap().props.style.selected);
        assert_eq!(scene.get("6").unwrap().revision, 1);
    }

    #[test]
    fn historical_mode_recolours_in_place() {
        let nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &nodes, live(Some("6")));
        scene.reset_counts();

        let historical = MapView { mode: ViewMode::Historical, ..live(Some("6")) };
        let report = sync.refresh(&mut scene, &nodes, historical);
        assert!(report.is_stable());
        // Ramkund: live 58 (High) -> 5Y avg 62 (Moderate)
        let ramkund = scene.get("6").unwrap();
        assert_eq!(ramkund.props.tooltip.value, "62");
        assert_eq!(ramkund.props.style.color, bsn_core::RiskLevel::Moderate.color());
        assert_eq!(nodes[5].risk_level, bsn_core::RiskLevel::High);
    }

    #[test]
    fn moving_an_entity_patches_position_only() {
        let mut nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &nodes, live(None));

        nodes[0].coordinates = Coordinates::new(19.94, 73.54);
        let mut recording = RecordingScene::default();
        let report = sync.refresh(&mut recording, &nodes, live(None));
        assert_eq!(report.updated, 1);
        assert_eq!(recording.patches.len(), 1);
        let (id, patch) = &recording.patches[0];
        assert_eq!(id, "1");
        assert_eq!(patch.position, Some(Coordinates::new(19.94, 73.54)));
        assert!(patch.style.is_none());
        assert!(patch.tooltip.is_none());
    }

    #[test]
    fn marker_ids_track_arbitrary_insert_remove_sequences() {
        let all = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        let steps: [&[usize]; 6] = [
            &[0, 1, 2],
            &[2, 3, 4, 5],
            &[],
            &[8, 7, 6, 5, 4, 3, 2, 1, 0],
            &[4],
            &[1, 4, 8],
        ];
        for step in steps {
            let subset: Vec<MonitoringNode> = step.iter().map(|&i| all[i].clone()).collect();
            sync.refresh(&mut scene, &subset, live(Some("5")));
            let expected: HashSet<String> = subset.iter().map(|n| n.id.clone()).collect();
            assert_eq!(ids(&scene), expected);
            let registered: HashSet<String> =
                sync.registered_ids().into_iter().map(String::from).collect();
            assert_eq!(registered, expected);
        }
    }

    #[test]
    fn surviving_markers_are_never_recreated() {
        let all = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &all[..4], live(None));
        scene.reset_counts();

        let report = sync.refresh(&mut scene, &all[2..6], live(None));
        assert_eq!(report.created, 2);
        assert_eq!(report.removed, 2);
        assert_eq!(report.unchanged, 2);
        assert_eq!(scene.creates, 2);
    }

    #[test]
    fn invalid_coordinates_are_skipped_without_collateral_removal() {
        let mut nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &nodes, live(None));

        nodes[3].coordinates = Coordinates::new(f64::NAN, 73.7);
        nodes[4].coordinates = Coordinates::new(120.0, 73.7);
        scene.reset_counts();
        let report = sync.refresh(&mut scene, &nodes, live(None));
        assert_eq!(report.skipped, 2);
        assert_eq!(report.removed, 0);
        assert_eq!(scene.len(), 9);
        // the last good position is kept
        assert_eq!(scene.get("4").unwrap().props.position.lat, 20.029362732172437);
    }

    #[test]
    fn invalid_new_entity_gets_no_marker() {
        let mut nodes = nodes();
        nodes[0].coordinates = Coordinates::new(f64::INFINITY, 0.0);
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        let report = sync.refresh(&mut scene, &nodes, live(None));
        assert_eq!(report.created, 8);
        assert_eq!(report.skipped, 1);
        assert!(scene.get("1").is_none());
    }

    #[test]
    fn created_marker_click_selects_and_flies() {
        let seed = Seed::load().unwrap();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &seed.zones, live(None));
        let click = scene.click("cz2").unwrap();
        assert_eq!(click.select, "cz2");
        assert_eq!(click.zoom, 16);
        assert_eq!(scene.get("cz2").unwrap().props.style.area_radius_m, Some(120.0));
    }

    #[test]
    fn click_target_follows_moved_marker() {
        let mut nodes = nodes();
        let mut scene = MemoryScene::new();
        let mut sync = MapSynchronizer::new();
        sync.refresh(&mut scene, &nodes, live(None));

        let moved = Coordinates::new(19.94, 73.54);
        nodes[0].coordinates = moved;
        let report = sync.refresh(&mut scene, &nodes, live(None));
        assert_eq!(report.updated, 1);

        let marker = scene.get("1").unwrap();
        assert_eq!(marker.props.position, moved);
        assert_eq!(marker.click.fly_to, moved);
        assert_eq!(marker.click.select, "1");
    }

    #[test]
    fn map_view_follows_active_module() {
        let state = ViewState::default().with(bsn_core::Action::SwitchModule(bsn_core::Module::Crowd));
        let view = MapView::from_state(&state);
        assert_eq!(view.selected, Some("cz1"));
    }

    #[derive(Default)]
    struct RecordingScene {
        patches: Vec<(String, MarkerPatch)>,
    }

    impl SceneGraph for RecordingScene {
        fn create(&mut self, _id: &str, _props: &MarkerProps, _click: &ClickAction) {}
        fn update(&mut self, id: &str, patch: &MarkerPatch) {
            self.patches.push((id.to_string(), patch.clone()));
        }
        fn remove(&mut self, _id: &str) {}
        fn list_ids(&self) -> Vec<String> {
            Vec::new()
        }
    }
}
