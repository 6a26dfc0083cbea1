//! Reusable Dioxus RSX components for the dashboard.

mod broadcast_alert;
mod chart_container;
mod chart_header;
mod empty_state;
mod error_display;
mod intel_output;
mod intelligence_panel;
mod loading_spinner;
mod map_controls;
mod module_tabs;
mod node_dashboard;
mod risk_legend;
mod sentinel_map;
mod summary_cards;
mod trend_chart;
mod zone_dashboard;

pub use broadcast_alert::BroadcastAlert;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use intel_output::IntelOutput;
pub use intelligence_panel::IntelligencePanel;
pub use loading_spinner::LoadingSpinner;
pub use map_controls::MapControls;
pub use module_tabs::ModuleTabs;
pub use node_dashboard::NodeDashboard;
pub use risk_legend::RiskLegend;
pub use sentinel_map::SentinelMap;
pub use summary_cards::SummaryCards;
pub use trend_chart::TrendChart;
pub use zone_dashboard::ZoneDashboard;
