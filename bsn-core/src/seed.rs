//! The static entity store loaded once at startup.

use log::info;

use crate::geo::Coordinates;
use crate::node::{MonitoringNode, NODES_CSV};
use crate::zone::{CrowdZone, ZONES_CSV};

/// Node selected when the dashboard opens (Ramkund).
pub const DEFAULT_NODE_ID: &str = "6";
/// Zone selected when the crowd module is first opened (Ramkund Main Ghat).
pub const DEFAULT_ZONE_ID: &str = "cz1";

/// All monitoring nodes and crowd zones. Never mutated after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    pub nodes: Vec<MonitoringNode>,
    pub zones: Vec<CrowdZone>,
}

impl Seed {
    /// Parse the embedded fixtures.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_csv(NODES_CSV, ZONES_CSV)
    }

    pub fn from_csv(nodes_csv: &str, zones_csv: &str) -> anyhow::Result<Self> {
        let nodes = MonitoringNode::parse_node_csv(nodes_csv)?;
        let zones = CrowdZone::parse_zone_csv(zones_csv)?;
        info!("Loaded {} monitoring nodes and {} crowd zones", nodes.len(), zones.len());
        Ok(Self { nodes, zones })
    }

    pub fn node(&self, id: &str) -> Option<&MonitoringNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn zone(&self, id: &str) -> Option<&CrowdZone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn node_coordinates(&self) -> Vec<Coordinates> {
        self.nodes.iter().map(|n| n.coordinates).collect()
    }

    pub fn zone_coordinates(&self) -> Vec<Coordinates> {
        self.zones.iter().map(|z| z.coordinates).collect()
    }
}
