pub use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
pub use chrono::Utc;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use reqwest::Client;
pub use urlencoding::encode;
