pub mod navigation_footer;
pub mod notify_banner;
pub mod team_panel;
pub mod timeline_chart;
