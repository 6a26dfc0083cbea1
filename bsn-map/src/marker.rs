//! Visual properties of a map marker.
//!
//! Props are plain data; the scene implementation turns them into whatever
//! the map widget needs (a Leaflet div icon in the web app).

use bsn_core::layers::BaseLayer;
use bsn_core::{Coordinates, RiskLevel, ViewMode};
use serde::Serialize;

use crate::display::{DisplayReading, MapEntity};

pub const MARKER_SIZE_PX: u32 = 14;
pub const SELECTED_MARKER_SIZE_PX: u32 = 24;
/// Paint-order offset that lifts the selected marker above the rest.
pub const SELECTED_Z_OFFSET: i32 = 1000;
pub const FAST_PULSE_MS: u32 = 1500;
pub const SLOW_PULSE_MS: u32 = 3000;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub size_px: u32,
    /// Selected markers get an accent ring and a filled centre.
    pub selected: bool,
    /// Critical-risk highlight, independent of selection.
    pub alarm: bool,
    pub pulse_ms: u32,
    pub z_offset: i32,
    /// Dark pin on a light basemap.
    pub light_theme: bool,
    pub area_radius_m: Option<f64>,
    /// Caption drawn under the pin, e.g. the drone on station.
    pub label: Option<String>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub caption: &'static str,
    pub value: String,
    pub color: &'static str,
    pub light_theme: bool,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MarkerProps {
    pub position: Coordinates,
    pub style: MarkerStyle,
    pub tooltip: Tooltip,
}

/// Attached to a marker when it is created: select it and fly the map there.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ClickAction {
    pub select: String,
    /// Where the map centres on click. Follows the marker when it moves.
    pub fly_to: Coordinates,
    pub zoom: u8,
}

/// Trims a trailing ".0" so whole scores read like the seed data.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

impl MarkerProps {
    pub fn build<E: MapEntity + ?Sized>(
        entity: &E,
        reading: DisplayReading,
        selected: bool,
        mode: ViewMode,
        base_layer: BaseLayer,
    ) -> Self {
        let color = reading.risk.color();
        let light_theme = base_layer.is_light();
        MarkerProps {
            position: entity.coordinates(),
            style: MarkerStyle {
                color,
                size_px: if selected { SELECTED_MARKER_SIZE_PX } else { MARKER_SIZE_PX },
                selected,
                alarm: reading.risk == RiskLevel::Critical,
                pulse_ms: if reading.risk.is_alarm() { FAST_PULSE_MS } else { SLOW_PULSE_MS },
                z_offset: if selected { SELECTED_Z_OFFSET } else { 0 },
                light_theme,
                area_radius_m: entity.area_radius_m(),
                label: entity.marker_label(),
            },
            tooltip: Tooltip {
                title: entity.name().to_string(),
                caption: match entity.area_radius_m() {
                    Some(_) => "OCCUPANCY %",
                    None => mode.score_caption(),
                },
                value: format_score(reading.score),
                color,
                light_theme,
            },
        }
    }
}

impl ClickAction {
    pub fn for_entity<E: MapEntity + ?Sized>(entity: &E) -> Self {
        ClickAction {
            select: entity.id().to_string(),
            fly_to: entity.coordinates(),
            zoom: entity.focus_zoom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsn_core::Seed;

    #[test]
    fn selected_markers_are_larger_and_raised() {
        let seed = Seed::load().unwrap();
        let node = seed.node("1").unwrap();
        let reading = node.display(ViewMode::Live);
        let plain = MarkerProps::build(node, reading, false, ViewMode::Live, BaseLayer::Dark);
        let picked = MarkerProps::build(node, reading, true, ViewMode::Live, BaseLayer::Dark);
        assert_eq!(plain.style.size_px, MARKER_SIZE_PX);
        assert_eq!(picked.style.size_px, SELECTED_MARKER_SIZE_PX);
        assert!(picked.style.z_offset > plain.style.z_offset);
        assert_eq!(plain.style.pulse_ms, SLOW_PULSE_MS);
        assert!(!plain.style.alarm);
    }

    #[test]
    fn critical_markers_alarm_regardless_of_selection() {
        let seed = Seed::load().unwrap();
        let node = seed.node("9").unwrap();
        let reading = node.display(ViewMode::Live);
        for selected in [false, true] {
            let props = MarkerProps::build(node, reading, selected, ViewMode::Live, BaseLayer::Dark);
            assert!(props.style.alarm);
            assert_eq!(props.style.pulse_ms, FAST_PULSE_MS);
            assert_eq!(props.style.color, RiskLevel::Critical.color());
        }
    }

    #[test]
    fn tooltip_follows_mode_and_basemap() {
        let seed = Seed::load().unwrap();
        let node = seed.node("6").unwrap();
        let props = MarkerProps::build(
            node,
            node.display(ViewMode::Historical),
            false,
            ViewMode::Historical,
            BaseLayer::Street,
        );
        assert_eq!(props.tooltip.caption, "5Y AVG");
        assert_eq!(props.tooltip.value, "62");
        assert!(props.tooltip.light_theme);
        assert!(props.style.light_theme);
    }

    #[test]
    fn click_action_targets_the_entity() {
        let seed = Seed::load().unwrap();
        let zone = seed.zone("cz3").unwrap();
        let click = ClickAction::for_entity(zone);
        assert_eq!(click.select, "cz3");
        assert_eq!(click.fly_to, zone.coordinates);
        assert_eq!(click.zoom, 16);
    }

    #[test]
    fn crowd_markers_name_their_drone() {
        let seed = Seed::load().unwrap();
        let zone = seed.zone("cz3").unwrap();
        let props = MarkerProps::build(zone, zone.display(ViewMode::Live), false, ViewMode::Live, BaseLayer::Dark);
        assert_eq!(props.style.label.as_deref(), Some("Drone-B1"));

        let node = seed.node("3").unwrap();
        let props = MarkerProps::build(node, node.display(ViewMode::Live), false, ViewMode::Live, BaseLayer::Dark);
        assert_eq!(props.style.label, None);
    }

    #[test]
    fn scores_format_without_trailing_zero() {
        assert_eq!(format_score(58.0), "58");
        assert_eq!(format_score(61.3), "61.3");
    }
}
