//! Reusable RSX components for the dashboard.

mod chart_container;
mod cost_saving_chart;
mod error_display;
mod loading_spinner;
mod map_heatmap;
mod metrics_chart;
mod nav_tree;
mod overview;
mod region_switcher;
mod sensor_detail;
mod site_header;
mod status_chart;

pub use chart_container::ChartContainer;
pub use cost_saving_chart::CostSavingChart;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_heatmap::MapHeatmap;
pub use metrics_chart::MetricsChart;
pub use nav_tree::NavSidebar;
pub use overview::OverviewPage;
pub use region_switcher::RegionSwitcher;
pub use sensor_detail::SensorDetailView;
pub use site_header::SiteHeader;
pub use status_chart::StatusChart;

/// Card wrapper shared by the overview widgets.
pub(crate) const CARD_STYLE: &str =
    "background: #ffffff; border: 1px solid #e4e7eb; border-radius: 12px; padding: 12px 16px;";

/// Small-caps style for widget titles.
pub(crate) const CARD_TITLE_STYLE: &str =
    "margin: 0 0 8px 0; font-size: 13px; font-weight: 600; color: #3e4c59;";
