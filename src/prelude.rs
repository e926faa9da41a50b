pub use std::{
    collections::HashMap,
    env, fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub use anyhow::anyhow;
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use futures::future::join3;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use once_cell::sync::Lazy as once_lazy;
pub use serde::{de::DeserializeOwned, Deserialize, Serialize};
pub use serde_json::Value;
pub use thiserror::Error;
