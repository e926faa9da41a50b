pub mod aggregation_service;
pub mod chart_service;
