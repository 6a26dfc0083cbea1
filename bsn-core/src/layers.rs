//! Basemap tile sources and the simulated data overlays.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Interchangeable raster basemap. Exactly one is active at a time.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseLayer {
    Dark,
    Satellite,
    Street,
    Terrain,
    Contour,
}

impl BaseLayer {
    pub const ALL: [BaseLayer; 5] = [
        BaseLayer::Dark,
        BaseLayer::Street,
        BaseLayer::Satellite,
        BaseLayer::Terrain,
        BaseLayer::Contour,
    ];

    /// Stable identifier, used as the layer menu entry key.
    pub fn key(&self) -> &'static str {
        match self {
            BaseLayer::Dark => "dark",
            BaseLayer::Satellite => "satellite",
            BaseLayer::Street => "street",
            BaseLayer::Terrain => "terrain",
            BaseLayer::Contour => "contour",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BaseLayer::Dark => "Dark Matter",
            BaseLayer::Satellite => "Satellite",
            BaseLayer::Street => "Street Map",
            BaseLayer::Terrain => "Topography",
            BaseLayer::Contour => "Contours",
        }
    }

    /// Leaflet-style URL template keyed by `{z}/{x}/{y}`.
    pub fn tile_url(&self) -> &'static str {
        match self {
            BaseLayer::Dark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            BaseLayer::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            BaseLayer::Street => "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png",
            BaseLayer::Terrain => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}"
            }
            BaseLayer::Contour => "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn subdomains(&self) -> &'static str {
        match self {
            BaseLayer::Dark | BaseLayer::Street => "abcd",
            BaseLayer::Contour => "abc",
            BaseLayer::Satellite | BaseLayer::Terrain => "",
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            BaseLayer::Dark | BaseLayer::Street => "&copy; CARTO",
            BaseLayer::Satellite | BaseLayer::Terrain => "&copy; Esri",
            BaseLayer::Contour => "&copy; OpenTopoMap",
        }
    }

    pub fn max_zoom(&self) -> u8 {
        match self {
            BaseLayer::Contour => 17,
            _ => 19,
        }
    }

    /// Light basemaps need dark marker fills and light tooltips.
    pub fn is_light(&self) -> bool {
        matches!(self, BaseLayer::Street | BaseLayer::Terrain | BaseLayer::Contour)
    }

    /// Expand the template for a concrete tile.
    pub fn tile_for(&self, zoom: u8, x: u32, y: u32) -> String {
        let subdomain = self.subdomains().chars().next().map(String::from).unwrap_or_default();
        self.tile_url()
            .replace("{s}", &subdomain)
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}

/// Toggleable simulated overlay.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    Rainfall,
    Clouds,
    RiskZones,
}

impl Overlay {
    pub const ALL: [Overlay; 3] = [Overlay::Rainfall, Overlay::Clouds, Overlay::RiskZones];

    pub fn key(&self) -> &'static str {
        match self {
            Overlay::Rainfall => "rainfall",
            Overlay::Clouds => "clouds",
            Overlay::RiskZones => "risk_zones",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Overlay::Rainfall => "Rainfall Sim",
            Overlay::Clouds => "Cloud Cover",
            Overlay::RiskZones => "Risk Heatmap",
        }
    }

    /// Fixed circles drawn when the overlay is on.
    pub fn circles(&self) -> Vec<OverlayCircle> {
        let c = |lat, lng, radius_m, fill: &'static str, opacity| OverlayCircle {
            center: Coordinates::new(lat, lng),
            radius_m,
            fill,
            opacity,
        };
        match self {
            Overlay::Rainfall => vec![
                c(19.9322, 73.5306, 3000.0, "#3b82f6", 0.2),
                c(19.95, 73.55, 4500.0, "#3b82f6", 0.15),
                c(20.0, 73.7, 6000.0, "#6366f1", 0.1),
            ],
            Overlay::Clouds => vec![
                c(19.98, 73.6, 5000.0, "#f8fafc", 0.15),
                c(20.02, 73.75, 4000.0, "#cbd5e1", 0.2),
            ],
            Overlay::RiskZones => vec![
                c(19.9895, 73.8457, 1500.0, "#ef476f", 0.3),
                c(19.9996, 73.8124, 1200.0, "#ef476f", 0.25),
            ],
        }
    }
}

/// A filled circle in an overlay layer.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct OverlayCircle {
    pub center: Coordinates,
    pub radius_m: f64,
    pub fill: &'static str,
    pub opacity: f64,
}

/// Which overlays are switched on.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct OverlayFlags {
    pub rainfall: bool,
    pub clouds: bool,
    pub risk_zones: bool,
}

impl OverlayFlags {
    pub fn is_on(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::Rainfall => self.rainfall,
            Overlay::Clouds => self.clouds,
            Overlay::RiskZones => self.risk_zones,
        }
    }

    pub fn toggle(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Rainfall => self.rainfall = !self.rainfall,
            Overlay::Clouds => self.clouds = !self.clouds,
            Overlay::RiskZones => self.risk_zones = !self.risk_zones,
        }
    }
}
