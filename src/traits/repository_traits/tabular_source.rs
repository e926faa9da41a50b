use crate::common::*;

use crate::errors::pipeline_error::*;
use crate::model::sale::raw_sale_row::*;

#[doc = r#"
    Access to the backing artifact holding the canonical sales table.

    `read` fails with `SourceUnavailable` when the file/blob is missing,
    unreadable or fails header validation. `write` fully replaces the
    artifact and fails with `Persistence`; a partial write must never
    leave the artifact truncated. The remote-object variant is the only
    component allowed to block on network I/O, and it never falls back to
    stale local state without signaling.
"#]
#[async_trait]
pub trait TabularSource: Send + Sync {
    async fn read(&self) -> Result<Vec<RawSaleRow>, PipelineError>;
    async fn write(&self, rows: &[RawSaleRow]) -> Result<(), PipelineError>;
}
