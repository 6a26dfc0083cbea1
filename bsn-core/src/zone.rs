use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::geo::Coordinates;
use crate::node::{field, parse_field};
use crate::risk::RiskLevel;

/// Embedded CSV seed of the drone-surveilled gathering areas.
pub static ZONES_CSV: &str = include_str!("../../fixtures/zones.csv");

/// Direction the crowd is moving in.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrowdTrend {
    Increasing,
    Decreasing,
    Stable,
}

impl FromStr for CrowdTrend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "increasing" => Ok(CrowdTrend::Increasing),
            "decreasing" => Ok(CrowdTrend::Decreasing),
            "stable" => Ok(CrowdTrend::Stable),
            other => anyhow::bail!("unknown crowd trend: {other}"),
        }
    }
}

impl CrowdTrend {
    pub fn label(&self) -> &'static str {
        match self {
            CrowdTrend::Increasing => "increasing",
            CrowdTrend::Decreasing => "decreasing",
            CrowdTrend::Stable => "stable",
        }
    }
}

/// Occupancy above this percentage is flagged on the capacity bar.
pub const OVERLOAD_OCCUPANCY: f64 = 80.0;

/// A surveilled gathering area.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CrowdZone {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    /// Meters
    pub radius: f64,
    /// Percent of estimated capacity, 0-100.
    pub occupancy: f64,
    pub headcount: u32,
    /// People per minute.
    pub flow_rate: f64,
    pub risk_level: RiskLevel,
    pub trend: CrowdTrend,
    pub drone_id: String,
    pub next_event: String,
}

impl CrowdZone {
    pub fn is_overloaded(&self) -> bool {
        self.occupancy > OVERLOAD_OCCUPANCY
    }

    /// Parse a CSV string of zone rows (with header) into zones.
    pub fn parse_zone_csv(csv_object: &str) -> anyhow::Result<Vec<CrowdZone>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let mut zones = Vec::new();
        for row in rdr.records() {
            let rho = row?;
            zones.push(CrowdZone {
                id: field(&rho, 0, "id")?.to_string(),
                name: field(&rho, 1, "name")?.to_string(),
                coordinates: Coordinates::new(
                    parse_field(&rho, 2, "lat")?,
                    parse_field(&rho, 3, "lng")?,
                ),
                radius: parse_field(&rho, 4, "radius")?,
                occupancy: parse_field(&rho, 5, "occupancy")?,
                headcount: parse_field(&rho, 6, "headcount")?,
                flow_rate: parse_field(&rho, 7, "flow rate")?,
                risk_level: parse_field(&rho, 8, "risk")?,
                trend: parse_field(&rho, 9, "trend")?,
                drone_id: field(&rho, 10, "drone")?.to_string(),
                next_event: field(&rho, 11, "next event")?.to_string(),
            });
        }
        Ok(zones)
    }
}
