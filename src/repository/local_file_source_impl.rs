use crate::common::*;

use crate::errors::pipeline_error::*;
use crate::model::sale::raw_sale_row::*;
use crate::traits::repository_traits::tabular_source::*;
use crate::utils_modules::io_utils::*;

#[doc = "Local-filesystem backing store: the CSV at `csv_path` is the single source of truth."]
#[derive(Debug, Clone, new)]
pub struct LocalFileSourceImpl {
    csv_path: PathBuf,
}

#[async_trait]
impl TabularSource for LocalFileSourceImpl {
    async fn read(&self) -> Result<Vec<RawSaleRow>, PipelineError> {
        read_sales_csv(&self.csv_path)
    }

    async fn write(&self, rows: &[RawSaleRow]) -> Result<(), PipelineError> {
        write_sales_csv_atomic(&self.csv_path, rows)?;
        info!(
            "Persisted {} row(s) to {}",
            rows.len(),
            self.csv_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(produto: &str, quantidade: &str, categoria: &str, mes: &str) -> RawSaleRow {
        RawSaleRow::new(
            produto.to_string(),
            quantidade.to_string(),
            categoria.to_string(),
            mes.to_string(),
        )
    }

    #[tokio::test]
    async fn write_read_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalFileSourceImpl::new(dir.path().join("vendas.csv"));
        let rows = vec![
            raw("Caneta", "10", "Escritorio", "1"),
            raw("Caderno", "3", "Papelaria", "2"),
            raw("Lapis", "7", "Escritorio", "1"),
        ];

        source.write(&rows).await.unwrap();
        let reread = source.read().await.unwrap();

        assert_eq!(rows, reread);
    }

    #[tokio::test]
    async fn read_of_missing_artifact_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = LocalFileSourceImpl::new(dir.path().join("inexistente.csv"));

        let err = source.read().await.unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
    }
}
