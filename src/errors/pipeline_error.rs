use crate::common::*;

#[doc = r#"
    Failure taxonomy of the load-mutate-aggregate-render pipeline.

    * `SourceUnavailable` - the backing spreadsheet cannot be read
      (missing file/blob, network or auth failure, invalid header).
    * `Persistence` - the backing spreadsheet cannot be written back;
      the in-memory dataset is rolled back by the caller.
    * `Render` - chart generation failed on otherwise valid data; the
      caller downgrades the single chart to an unavailable placeholder.

    Rows dropped during parsing are NOT errors; they are counted by the
    repository and surfaced in the user message.
"#]
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("fonte de dados indisponível: {reason}")]
    SourceUnavailable { reason: String },

    #[error("falha ao persistir a planilha: {reason}")]
    Persistence { reason: String },

    #[error("falha ao gerar gráfico: {reason}")]
    Render { reason: String },
}

impl PipelineError {
    pub fn source_unavailable(reason: impl Into<String>) -> Self {
        PipelineError::SourceUnavailable {
            reason: reason.into(),
        }
    }

    pub fn persistence(reason: impl Into<String>) -> Self {
        PipelineError::Persistence {
            reason: reason.into(),
        }
    }

    pub fn render(reason: impl Into<String>) -> Self {
        PipelineError::Render {
            reason: reason.into(),
        }
    }
}
