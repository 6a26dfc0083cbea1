//! Headline figures for the summary cards and the panel trend charts.

use chrono::NaiveTime;
use serde::Serialize;

use crate::node::MonitoringNode;
use crate::risk::RiskLevel;
use crate::zone::CrowdZone;

/// Water-module headline figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasinSummary {
    /// Mean live quality score across nodes, rounded.
    pub health_index: u32,
    /// Names of nodes whose stored risk is critical.
    pub critical_nodes: Vec<String>,
}

impl BasinSummary {
    pub fn from_nodes(nodes: &[MonitoringNode]) -> Self {
        let health_index = if nodes.is_empty() {
            0
        } else {
            let total: f64 = nodes.iter().map(|n| n.quality_score).sum();
            (total / nodes.len() as f64).round().max(0.0) as u32
        };
        let critical_nodes = nodes
            .iter()
            .filter(|n| n.risk_level == RiskLevel::Critical)
            .map(|n| n.name.clone())
            .collect();
        Self { health_index, critical_nodes }
    }
}

/// Crowd-module headline figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrowdSummary {
    pub total_headcount: u64,
    /// Highest stored risk among zones, with the first zone at that level.
    pub peak: Option<(RiskLevel, String)>,
}

impl CrowdSummary {
    pub fn from_zones(zones: &[CrowdZone]) -> Self {
        let total_headcount = zones.iter().map(|z| u64::from(z.headcount)).sum();
        let mut peak: Option<(RiskLevel, String)> = None;
        for zone in zones {
            if peak.as_ref().map_or(true, |(level, _)| zone.risk_level > *level) {
                peak = Some((zone.risk_level, zone.name.clone()));
            }
        }
        Self { total_headcount, peak }
    }

    /// Headcount in thousands with one decimal, e.g. "27.0".
    pub fn headcount_k(&self) -> String {
        format!("{:.1}", self.total_headcount as f64 / 1000.0)
    }
}

/// One point on a panel trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimePoint {
    pub time: NaiveTime,
    pub value: f64,
}

impl TimePoint {
    /// "HH:MM" label for the chart axis.
    pub fn label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

fn series(raw: &[(&str, f64)]) -> Vec<TimePoint> {
    raw.iter()
        .filter_map(|(t, v)| {
            NaiveTime::parse_from_str(t, "%H:%M")
                .ok()
                .map(|time| TimePoint { time, value: *v })
        })
        .collect()
}

/// Quality-score readings over the day shown under the node panel.
pub fn quality_history() -> Vec<TimePoint> {
    series(&[
        ("06:00", 65.0),
        ("08:00", 68.0),
        ("10:00", 72.0),
        ("12:00", 55.0),
        ("14:00", 48.0),
        ("16:00", 42.0),
        ("18:00", 45.0),
    ])
}

/// People-per-minute influx over the last hour shown under the zone panel.
pub fn influx_history() -> Vec<TimePoint> {
    series(&[
        ("10:00", 120.0),
        ("10:15", 145.0),
        ("10:30", 180.0),
        ("10:45", 210.0),
        ("11:00", 195.0),
        ("11:15", 230.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    #[test]
    fn basin_summary_over_seed() {
        let seed = Seed::load().unwrap();
        let summary = BasinSummary::from_nodes(&seed.nodes);
        // (95+88+45+74+68+58+45+42+35) / 9 = 61.1
        assert_eq!(summary.health_index, 61);
        assert_eq!(
            summary.critical_nodes,
            vec!["Ganga Ghat", "Kapila Sangam", "Tapovan", "Dasak Bridge"]
        );
        assert_eq!(BasinSummary::from_nodes(&[]).health_index, 0);
    }

    #[test]
    fn crowd_summary_over_seed() {
        let seed = Seed::load().unwrap();
        let summary = CrowdSummary::from_zones(&seed.zones);
        assert_eq!(summary.total_headcount, 27_000);
        assert_eq!(summary.headcount_k(), "27.0");
        assert_eq!(
            summary.peak,
            Some((RiskLevel::Critical, "Ramkund Main Ghat".to_string()))
        );
    }

    #[test]
    fn history_series_parse() {
        let quality = quality_history();
        assert_eq!(quality.len(), 7);
        assert_eq!(quality[0].label(), "06:00");
        assert_eq!(influx_history().last().map(|p| p.value), Some(230.0));
    }
}
