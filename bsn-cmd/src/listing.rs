//! Offline commands over the embedded seed.

use bsn_core::layers::BaseLayer;
use bsn_core::view::Module;
use bsn_core::{classify_risk, CrowdZone, MonitoringNode, Seed, ViewMode};
use bsn_map::{MapEntity, MapSynchronizer, MapView, MemoryScene};
use log::info;

fn mode_for(historical: bool) -> ViewMode {
    if historical {
        ViewMode::Historical
    } else {
        ViewMode::Live
    }
}

pub fn node_table(nodes: &[MonitoringNode], mode: ViewMode) -> String {
    let mut out = format!(
        "{:<4} {:<24} {:>8} {:<9} {:<10} {}\n",
        "ID",
        "NAME",
        mode.score_caption(),
        "RISK",
        "TREND",
        "NEXT 6H"
    );
    for node in nodes {
        let reading = node.display(mode);
        out.push_str(&format!(
            "{:<4} {:<24} {:>8.1} {:<9} {:<10} {}\n",
            node.id,
            node.name,
            reading.score,
            reading.risk,
            node.prediction.trend.label(),
            node.prediction.next_6_hrs,
        ));
    }
    out
}

pub fn zone_table(zones: &[CrowdZone]) -> String {
    let mut out = format!(
        "{:<5} {:<22} {:>6} {:>9} {:>8} {:<9} {:<6} {}\n",
        "ID", "NAME", "OCC %", "HEADCOUNT", "FLOW/MIN", "RISK", "DRONE", "NEXT EVENT"
    );
    for zone in zones {
        let flag = if zone.is_overloaded() { "!" } else { " " };
        out.push_str(&format!(
            "{:<5} {:<22} {:>5.0}{} {:>9} {:>8.0} {:<9} {:<6} {}\n",
            zone.id,
            zone.name,
            zone.occupancy,
            flag,
            zone.headcount,
            zone.flow_rate,
            zone.risk_level,
            zone.drone_id,
            zone.next_event,
        ));
    }
    out
}

pub fn classify_line(score: f64) -> String {
    let risk = classify_risk(score);
    format!("{score} -> {risk} ({})", risk.color())
}

/// Run one synchronizer pass into an in-memory scene and describe each marker.
pub fn marker_table(seed: &Seed, module: Module, select: Option<&str>, mode: ViewMode) -> String {
    let mut scene = MemoryScene::new();
    let mut sync = MapSynchronizer::new();
    let view = MapView {
        selected: select,
        mode,
        base_layer: BaseLayer::Dark,
    };
    let report = match module {
        Module::Water => sync.refresh(&mut scene, &seed.nodes, view),
        Module::Crowd => sync.refresh(&mut scene, &seed.zones, view),
    };
    info!("Sync: {report:?}");

    let ids: Vec<&str> = match module {
        Module::Water => seed.nodes.iter().map(|n| n.id.as_str()).collect(),
        Module::Crowd => seed.zones.iter().map(|z| z.id.as_str()).collect(),
    };
    let mut out = format!(
        "{:<5} {:<24} {:<8} {:>4} {:>6} {:<5} {}\n",
        "ID", "TOOLTIP", "COLOR", "PX", "Z", "ALARM", "VALUE"
    );
    for id in ids {
        let Some(marker) = scene.get(id) else {
            out.push_str(&format!("{id:<5} (skipped: invalid coordinates)\n"));
            continue;
        };
        let props = &marker.props;
        out.push_str(&format!(
            "{:<5} {:<24} {:<8} {:>4} {:>6} {:<5} {} {}\n",
            id,
            props.tooltip.title,
            props.style.color,
            props.style.size_px,
            props.style.z_offset,
            if props.style.alarm { "yes" } else { "" },
            props.tooltip.caption,
            props.tooltip.value,
        ));
    }
    out
}

pub fn run_nodes(historical: bool, json: bool) -> anyhow::Result<()> {
    let seed = Seed::load()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&seed.nodes)?);
    } else {
        print!("{}", node_table(&seed.nodes, mode_for(historical)));
    }
    Ok(())
}

pub fn run_zones(json: bool) -> anyhow::Result<()> {
    let seed = Seed::load()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&seed.zones)?);
    } else {
        print!("{}", zone_table(&seed.zones));
    }
    Ok(())
}

pub fn run_markers(module: Module, select: Option<String>, historical: bool) -> anyhow::Result<()> {
    let seed = Seed::load()?;
    print!(
        "{}",
        marker_table(&seed, module, select.as_deref(), mode_for(historical))
    );
    Ok(())
}
