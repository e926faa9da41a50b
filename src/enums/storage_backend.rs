use crate::common::*;

#[doc = r#"
    Which backing store holds the canonical sales spreadsheet.

    Resolved once at process start into a concrete `TabularSource`
    implementation; the pipeline itself never branches on this value.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    LocalFile,
    RemoteObject,
}
