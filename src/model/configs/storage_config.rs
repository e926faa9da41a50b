use crate::common::*;

use crate::enums::storage_backend::*;

#[doc = "Backing store selection and the paths the adapters work on."]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /* Canonical spreadsheet path for the local-file backend. */
    pub csv_path: String,
    /* Local mirror the remote-object backend downloads into / uploads from. */
    pub staging_path: String,
}
