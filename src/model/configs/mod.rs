pub mod chart_config;
pub mod remote_object_config;
pub mod storage_config;
pub mod system_config;
pub mod total_config;
