//! Four-bucket risk classification.
//!
//! A higher score is safer. The same rule drives the live display (stored
//! `quality_score`) and the historical display (`historical_average`), so the
//! two views stay comparable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower bound (inclusive) of the `Low` bucket.
pub const LOW_MIN: f64 = 80.0;
/// Lower bound (inclusive) of the `Moderate` bucket.
pub const MODERATE_MIN: f64 = 60.0;
/// Lower bound (inclusive) of the `High` bucket. Anything below is `Critical`.
pub const HIGH_MIN: f64 = 40.0;

/// Risk bucket, ordered by severity (`Low < Moderate < High < Critical`).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// Classify a score into a risk bucket.
///
/// Total over `f64`: out-of-range scores are not clamped, negative scores land
/// in `Critical` and scores above 100 in `Low`. `NaN` fails every comparison
/// and therefore classifies `Critical`.
pub fn classify_risk(score: f64) -> RiskLevel {
    if score >= LOW_MIN {
        RiskLevel::Low
    } else if score >= MODERATE_MIN {
        RiskLevel::Moderate
    } else if score >= HIGH_MIN {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Marker and badge colour.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#10B981",
            RiskLevel::Moderate => "#F59E0B",
            RiskLevel::High => "#F43F5E",
            RiskLevel::Critical => "#E11D48",
        }
    }

    /// High and critical entities pulse fast on the map.
    pub fn is_alarm(&self) -> bool {
        matches!(self, RiskLevel::High | RiskLevel::Critical)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "moderate" => Ok(RiskLevel::Moderate),
            "high" => Ok(RiskLevel::High),
            "critical" => Ok(RiskLevel::Critical),
            other => anyhow::bail!("unknown risk level: {other}"),
        }
    }
}

/// One row of the on-screen risk legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub level: RiskLevel,
    pub label: &'static str,
    pub threshold: &'static str,
}

/// Legend for the water module (quality score thresholds).
pub fn water_legend() -> Vec<LegendRow> {
    vec![
        LegendRow { level: RiskLevel::Low, label: "Safe / Optimal", threshold: "QS >= 80" },
        LegendRow { level: RiskLevel::Moderate, label: "Moderate Risk", threshold: "QS 60-80" },
        LegendRow { level: RiskLevel::High, label: "High Risk", threshold: "QS 40-60" },
        LegendRow { level: RiskLevel::Critical, label: "Critical Failure", threshold: "QS < 40" },
    ]
}

/// Legend for the crowd module (occupancy bands).
pub fn crowd_legend() -> Vec<LegendRow> {
    vec![
        LegendRow { level: RiskLevel::Low, label: "Normal Flow", threshold: "< 50% Cap" },
        LegendRow { level: RiskLevel::Moderate, label: "High Volume", threshold: "50-80% Cap" },
        LegendRow { level: RiskLevel::Critical, label: "Stampede Risk", threshold: "> 90% Cap" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(classify_risk(80.0), RiskLevel::Low);
        assert_eq!(classify_risk(79.9), RiskLevel::Moderate);
        assert_eq!(classify_risk(60.0), RiskLevel::Moderate);
        assert_eq!(classify_risk(59.9), RiskLevel::High);
        assert_eq!(classify_risk(40.0), RiskLevel::High);
        assert_eq!(classify_risk(39.9), RiskLevel::Critical);
    }

    #[test]
    fn out_of_range_scores_still_classify() {
        assert_eq!(classify_risk(-12.0), RiskLevel::Critical);
        assert_eq!(classify_risk(250.0), RiskLevel::Low);
        assert_eq!(classify_risk(f64::NEG_INFINITY), RiskLevel::Critical);
        assert_eq!(classify_risk(f64::INFINITY), RiskLevel::Low);
        assert_eq!(classify_risk(f64::NAN), RiskLevel::Critical);
    }

    #[test]
    fn severity_never_increases_with_score() {
        let mut previous = classify_risk(-50.0);
        let mut score = -50.0;
        while score <= 150.0 {
            let level = classify_risk(score);
            assert!(level <= previous, "severity rose at score {score}");
            previous = level;
            score += 0.25;
        }
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("critical".parse::<RiskLevel>().unwrap(), RiskLevel::Critical);
        assert_eq!(" Moderate ".parse::<RiskLevel>().unwrap(), RiskLevel::Moderate);
        assert!("severe".parse::<RiskLevel>().is_err());
    }
}
