use crate::common::*;

#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub output_dir: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    900
}

fn default_height() -> u32 {
    600
}
