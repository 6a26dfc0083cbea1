//! What each entity shows on the map for the current view mode.

use bsn_core::{classify_risk, Coordinates, CrowdZone, MonitoringNode, RiskLevel, ViewMode};
use serde::Serialize;

/// Score and risk a marker displays. Computed per refresh, never stored back.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct DisplayReading {
    pub score: f64,
    pub risk: RiskLevel,
}

/// Anything the synchronizer can draw.
pub trait MapEntity {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn coordinates(&self) -> Coordinates;
    fn display(&self, mode: ViewMode) -> DisplayReading;
    /// Zoom level the map flies to when the marker is clicked.
    fn focus_zoom(&self) -> u8;
    /// Ground radius of a shaded area drawn under the marker.
    fn area_radius_m(&self) -> Option<f64> {
        None
    }
    /// Short caption drawn under the pin.
    fn marker_label(&self) -> Option<String> {
        None
    }
}

impl MapEntity for MonitoringNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Live mode shows the stored fields as-is; historical mode reclassifies
    /// the five-year average with the same thresholds.
    fn display(&self, mode: ViewMode) -> DisplayReading {
        match mode {
            ViewMode::Live => DisplayReading {
                score: self.quality_score,
                risk: self.risk_level,
            },
            ViewMode::Historical => DisplayReading {
                score: self.historical_average,
                risk: classify_risk(self.historical_average),
            },
        }
    }

    fn focus_zoom(&self) -> u8 {
        15
    }
}

impl MapEntity for CrowdZone {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    // Crowd zones have no historical series.
    fn display(&self, _mode: ViewMode) -> DisplayReading {
        DisplayReading {
            score: self.occupancy,
            risk: self.risk_level,
        }
    }

    fn focus_zoom(&self) -> u8 {
        16
    }

    fn area_radius_m(&self) -> Option<f64> {
        Some(self.radius)
    }

    fn marker_label(&self) -> Option<String> {
        Some(format!("Drone-{}", self.drone_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsn_core::Seed;

    #[test]
    fn ramkund_live_vs_historical() {
        let seed = Seed::load().unwrap();
        let mut node = seed.node("6").unwrap().clone();
        node.historical_average = 72.0;

        let live = node.display(ViewMode::Live);
        assert_eq!(live.score, 58.0);
        assert_eq!(live.risk, RiskLevel::High);

        let historical = node.display(ViewMode::Historical);
        assert_eq!(historical.score, 72.0);
        assert_eq!(historical.risk, RiskLevel::Moderate);

        // the stored field is untouched
        assert_eq!(node.risk_level, RiskLevel::High);
    }

    #[test]
    fn live_mode_trusts_stored_risk_even_when_inconsistent() {
        let seed = Seed::load().unwrap();
        // Ganga Ghat: score 45 would classify High, stored Critical
        let node = seed.node("3").unwrap();
        assert_eq!(node.display(ViewMode::Live).risk, RiskLevel::Critical);
        assert_eq!(node.display(ViewMode::Historical).risk, RiskLevel::Moderate);
    }

    #[test]
    fn zones_ignore_view_mode() {
        let seed = Seed::load().unwrap();
        let zone = seed.zone("cz2").unwrap();
        assert_eq!(zone.display(ViewMode::Live), zone.display(ViewMode::Historical));
        assert_eq!(zone.area_radius_m(), Some(120.0));
    }
}
