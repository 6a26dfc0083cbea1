//! Prompt text sent with each call.

use bsn_core::{CrowdZone, MonitoringNode};

pub const ENGINEER_SYSTEM: &str =
    "You are an expert environmental engineer specializing in hydrology and water quality analysis.";

pub const SENTRY_SYSTEM: &str =
    "You are a basin intelligence sentry. Summarize key environmental risks and events.";

pub const FORECAST_SYSTEM: &str = "You are a forecasting analyst for a river basin monitoring network. \
     Answer in at most three sentences, plain text, no markdown.";

pub const IMAGE_PROMPT: &str = "Analyze this image of a water body (likely the Godavari river).
Assess visible water quality indicators such as turbidity, color, floating debris, and surface foam.
Provide a technical assessment suitable for an environmental engineer.
Format the output as a concise report with:
1. Visual Observations
2. Estimated Turbidity Level (Low/Medium/High)
3. Potential Contaminants
4. Recommended Action.";

pub const BASIN_INTEL_PROMPT: &str = "What are the latest significant events, news, or environmental \
     concerns affecting the Godavari River Basin in Nashik, India recently? Focus on water quality, \
     Kumbh Mela preparations, or industrial discharge.";

pub fn node_forecast(node: &MonitoringNode) -> String {
    format!(
        "Monitoring node \"{}\" at {} reports pH {}, dissolved oxygen {} mg/L, BOD {} mg/L, \
         turbidity {} NTU. Composite quality score {}/100 (5-year average {}), risk {}. \
         The model forecast is {} with a 6-hour risk of {}. \
         Give a short forecast and one recommended action for basin authorities.",
        node.name,
        node.coordinates.display(),
        node.ph,
        node.dissolved_oxygen,
        node.bod,
        node.turbidity,
        node.quality_score,
        node.historical_average,
        node.risk_level,
        node.prediction.trend.label(),
        node.prediction.next_6_hrs,
    )
}

pub fn zone_insight(zone: &CrowdZone) -> String {
    format!(
        "Crowd zone \"{}\" (radius {} m) is at {}% occupancy with about {} people and a flow of \
         {} people/min, trend {}, risk {}. Drone {} is on station; next event: {}. \
         Identify the likely choke point and one crowd-management action.",
        zone.name,
        zone.radius,
        zone.occupancy,
        zone.headcount,
        zone.flow_rate,
        zone.trend.label(),
        zone.risk_level,
        zone.drone_id,
        zone.next_event,
    )
}

pub fn location_details(location: &str) -> String {
    format!(
        "Provide a brief geographical and hydrological profile of {location} in Nashik. \
         Is it a critical monitoring point for pollution?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsn_core::Seed;

    #[test]
    fn entity_prompts_carry_metrics() {
        let seed = Seed::load().unwrap();
        let node = node_forecast(seed.node("9").unwrap());
        assert!(node.contains("Dasak Bridge"));
        assert!(node.contains("BOD 12 mg/L"));
        assert!(node.contains("risk Critical"));

        let zone = zone_insight(seed.zone("cz1").unwrap());
        assert!(zone.contains("92% occupancy"));
        assert!(zone.contains("Evening Aarti"));
    }
}
