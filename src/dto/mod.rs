pub mod aggregation_entry;
pub mod chart_artifact;
pub mod dashboard_view;
