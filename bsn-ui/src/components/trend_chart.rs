//! Area chart of a panel trend series.

use bsn_core::summary::TimePoint;
use dioxus::prelude::*;

use crate::components::{ChartContainer, ChartHeader};
use crate::js_bridge;

#[derive(Props, Clone, PartialEq)]
pub struct TrendChartProps {
    pub id: String,
    pub title: String,
    pub unit_description: String,
    pub series: Vec<TimePoint>,
    pub color: String,
    #[props(default)]
    pub y_range: Option<(f64, f64)>,
}

fn chart_json(series: &[TimePoint]) -> String {
    let points: Vec<serde_json::Value> = series
        .iter()
        .map(|p| serde_json::json!({ "label": p.label(), "value": p.value }))
        .collect();
    serde_json::to_string(&points).unwrap_or_default()
}

#[component]
pub fn TrendChart(props: TrendChartProps) -> Element {
    let id = props.id.clone();
    let series = props.series.clone();
    let color = props.color.clone();
    let y_range = props.y_range;

    use_effect(move || {
        let mut config = serde_json::json!({ "color": color, "height": 160 });
        if let Some((lo, hi)) = y_range {
            config["yMin"] = lo.into();
            config["yMax"] = hi.into();
        }
        js_bridge::render_area_chart(&id, &chart_json(&series), &config.to_string());
    });

    rsx! {
        div {
            style: "padding: 12px 16px;",
            ChartHeader {
                title: props.title.clone(),
                unit_description: props.unit_description.clone(),
            }
            ChartContainer { id: props.id.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bsn_core::summary::quality_history;

    #[test]
    fn points_carry_clock_labels() {
        let json: serde_json::Value = serde_json::from_str(&chart_json(&quality_history())).unwrap();
        assert_eq!(json[0]["label"], "06:00");
        assert!(json[0]["value"].is_number());
    }
}
