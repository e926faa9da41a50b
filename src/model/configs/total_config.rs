use crate::common::*;

use crate::model::configs::{
    chart_config::*, remote_object_config::*, storage_config::*, system_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_dashboard_config);

#[doc = "Function to initialize the dashboard configuration instance"]
pub fn initialize_dashboard_config() -> TotalConfig {
    info!("initialize_dashboard_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub storage: StorageConfig,
    /* Only required when storage.backend = remote_object. */
    pub remote_object: Option<RemoteObjectConfig>,
    pub chart: ChartConfig,
    pub system: SystemConfig,
}

#[doc = "Backing store selection and paths"]
pub fn get_storage_config_info() -> &'static StorageConfig {
    &TOTAL_CONFIG.storage
}

#[doc = "Cloud object store settings; `None` for a purely local deployment"]
pub fn get_remote_object_config_info() -> Option<&'static RemoteObjectConfig> {
    TOTAL_CONFIG.remote_object.as_ref()
}

#[doc = "Chart rendering settings"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "System-wide settings"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&DASHBOARD_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg =
                    "Failed to convert the data from DASHBOARD_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
