use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::geo::Coordinates;
use crate::risk::RiskLevel;
use crate::view::Audience;

/// Embedded CSV seed of the basin's water-quality sensor sites.
pub static NODES_CSV: &str = include_str!("../../fixtures/nodes.csv");

/// Direction the quality forecast is heading.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTrend {
    Improving,
    Degrading,
    Stable,
}

impl FromStr for QualityTrend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "improving" => Ok(QualityTrend::Improving),
            "degrading" => Ok(QualityTrend::Degrading),
            "stable" => Ok(QualityTrend::Stable),
            other => anyhow::bail!("unknown quality trend: {other}"),
        }
    }
}

impl QualityTrend {
    pub fn label(&self) -> &'static str {
        match self {
            QualityTrend::Improving => "improving",
            QualityTrend::Degrading => "degrading",
            QualityTrend::Stable => "stable",
        }
    }
}

/// Short-horizon forecast attached to a node.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub score: f64,
    pub trend: QualityTrend,
    pub next_6_hrs: RiskLevel,
}

/// A water-quality sensor site.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MonitoringNode {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,
    pub ph: f64,
    /// mg/L
    pub dissolved_oxygen: f64,
    /// Biochemical oxygen demand, mg/L
    pub bod: f64,
    /// NTU
    pub turbidity: f64,
    /// Composite 0-100 score, higher is cleaner.
    pub quality_score: f64,
    /// Five-year average on the same scale as `quality_score`.
    pub historical_average: f64,
    /// Stored risk. Not guaranteed to match `classify_risk(quality_score)`.
    pub risk_level: RiskLevel,
    pub prediction: Prediction,
}

pub(crate) fn field<'r>(record: &'r StringRecord, idx: usize, name: &str) -> anyhow::Result<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| anyhow::anyhow!("missing column {name} at index {idx}"))
}

pub(crate) fn parse_field<T>(record: &StringRecord, idx: usize, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = field(record, idx, name)?;
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("bad value {raw:?} for {name}: {e}"))
}

impl MonitoringNode {
    /// Canned forecast paragraph shown under the prediction figures.
    pub fn forecast_text(&self, audience: Audience) -> &'static str {
        match (audience, self.prediction.trend) {
            (Audience::Authority, _) => {
                "Algorithmic model confidence 94%. Downstream effluent impact expected within \
                 4 hours. Recommend initiating localized protocol."
            }
            (Audience::Public, QualityTrend::Degrading) => {
                "Water quality is predicted to drop significantly. Please avoid direct contact \
                 or consumption in this area until further notice."
            }
            (Audience::Public, _) => {
                "Water quality is predicted to remain stable. Safe for standard public activities."
            }
        }
    }

    /// Parse a CSV string of node rows (with header) into nodes.
    ///
    /// Expected columns: id, name, lat, lng, ph, do, bod, turbidity,
    /// quality score, historical average, risk, predicted score, trend,
    /// next 6 hrs risk.
    pub fn parse_node_csv(csv_object: &str) -> anyhow::Result<Vec<MonitoringNode>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let mut nodes = Vec::new();
        for row in rdr.records() {
            let rho = row?;
            nodes.push(MonitoringNode {
                id: field(&rho, 0, "id")?.to_string(),
                name: field(&rho, 1, "name")?.to_string(),
                coordinates: Coordinates::new(
                    parse_field(&rho, 2, "lat")?,
                    parse_field(&rho, 3, "lng")?,
                ),
                ph: parse_field(&rho, 4, "ph")?,
                dissolved_oxygen: parse_field(&rho, 5, "do")?,
                bod: parse_field(&rho, 6, "bod")?,
                turbidity: parse_field(&rho, 7, "turbidity")?,
                quality_score: parse_field(&rho, 8, "quality score")?,
                historical_average: parse_field(&rho, 9, "historical average")?,
                risk_level: parse_field(&rho, 10, "risk")?,
                prediction: Prediction {
                    score: parse_field(&rho, 11, "predicted score")?,
                    trend: parse_field(&rho, 12, "trend")?,
                    next_6_hrs: parse_field(&rho, 13, "next 6 hrs")?,
                },
            });
        }
        Ok(nodes)
    }
}
