use crate::common::*;

use crate::dto::{aggregation_entry::*, chart_artifact::*, dashboard_view::*};
use crate::enums::delete_status::*;
use crate::errors::pipeline_error::*;
use crate::model::sale::sales_repository::*;
use crate::traits::repository_traits::tabular_source::*;
use crate::traits::service_traits::{aggregation_service::*, chart_service::*};

pub const TITLE_MONTHLY: &str = "Vendas por Mês";
pub const TITLE_PRODUCT: &str = "Vendas por Produto";
pub const TITLE_CATEGORY: &str = "Distribuição de Vendas";

#[doc = r#"
    Orchestrates one dashboard request: reload the dataset from the
    backing store, apply the optional mutation, recompute the three
    aggregation views and render their charts.

    There is deliberately no shared repository across requests; every
    request reloads from the source, so cross-request consistency is
    whatever the backing store guarantees (last-writer-wins). Two
    simultaneous deletes can therefore race; see the known-limitation
    note in the tests.
"#]
#[derive(Debug, new)]
pub struct DashboardController<S: TabularSource, A: AggregationService, C: ChartService> {
    source: S,
    aggregation_service: A,
    chart_service: C,
}

impl<S: TabularSource, A: AggregationService, C: ChartService> DashboardController<S, A, C> {
    #[doc = r#"
        Load request: read the backing artifact, build the repository and
        hand back the fully rendered dashboard.

        # Returns
        * `Ok(DashboardView)` - dataset plus charts; individual charts may
          be `None` (unavailable placeholder) without failing the request
        * `Err(SourceUnavailable)` - backing artifact unreachable; nothing
          is mutated, the previous committed state stands
    "#]
    pub async fn carregar(&self) -> Result<DashboardView, PipelineError> {
        let raw_rows = self.source.read().await?;
        let repository: SalesRepository = SalesRepository::load(&raw_rows);

        info!(
            "Loaded {} record(s), {} row(s) skipped",
            repository.len(),
            repository.skipped_rows()
        );

        let message: String = load_message(&repository);
        Ok(self.build_view(&repository, message).await)
    }

    #[doc = r#"
        Delete request: reload, remove every row keyed by `produto`,
        persist, then re-aggregate and re-render.

        Deletion is transactional: the removal is applied in memory and
        only committed if the write succeeds; on a persistence failure
        the in-memory state is rolled back so the displayed table always
        matches the backing artifact's committed contents.
    "#]
    pub async fn excluir(&self, produto: &str) -> Result<DashboardView, PipelineError> {
        let raw_rows = self.source.read().await?;
        let mut repository: SalesRepository = SalesRepository::load(&raw_rows);

        let status: DeleteStatus = self.delete_and_persist(&mut repository, produto).await?;

        let message: String = match status {
            DeleteStatus::Removed => {
                info!("Product '{}' deleted and persisted", produto);
                format!("Venda '{}' excluída com sucesso.", produto)
            }
            DeleteStatus::NotFound => {
                warn!("Delete requested for absent product '{}'", produto);
                format!("Erro: Produto '{}' não encontrado.", produto)
            }
        };

        Ok(self.build_view(&repository, message).await)
    }

    async fn delete_and_persist(
        &self,
        repository: &mut SalesRepository,
        produto: &str,
    ) -> Result<DeleteStatus, PipelineError> {
        let snapshot: SalesRepository = repository.clone();

        if !repository.delete(produto) {
            return Ok(DeleteStatus::NotFound);
        }

        if let Err(e) = self.source.write(&repository.serialize()).await {
            error!(
                "[DashboardController->delete_and_persist] persistence failed, rolling back: {:?}",
                e
            );
            *repository = snapshot;
            return Err(e);
        }

        Ok(DeleteStatus::Removed)
    }

    #[doc = r#"
        Computes the three aggregation views fresh and renders them
        concurrently. A failed render downgrades that single chart to the
        unavailable placeholder; the others still come through.
    "#]
    async fn build_view(&self, repository: &SalesRepository, message: String) -> DashboardView {
        let records = repository.all();

        let by_month: Vec<AggregationEntry> = self.aggregation_service.aggregate_by_month(records);
        let by_product: Vec<AggregationEntry> =
            self.aggregation_service.aggregate_by_product(records);
        let by_category: Vec<AggregationEntry> =
            self.aggregation_service.aggregate_by_category(records);

        let (monthly, product, category) = join3(
            self.chart_service.render_line_chart(TITLE_MONTHLY, &by_month),
            self.chart_service.render_bar_chart(TITLE_PRODUCT, &by_product),
            self.chart_service
                .render_pie_chart(TITLE_CATEGORY, &by_category),
        )
        .await;

        DashboardView::new(
            records.to_vec(),
            downgrade_render_failure(TITLE_MONTHLY, monthly),
            downgrade_render_failure(TITLE_PRODUCT, product),
            downgrade_render_failure(TITLE_CATEGORY, category),
            repository.skipped_rows(),
            message,
        )
    }
}

fn load_message(repository: &SalesRepository) -> String {
    if repository.skipped_rows() > 0 {
        format!(
            "Dados carregados com sucesso! {} linha(s) ignorada(s).",
            repository.skipped_rows()
        )
    } else {
        String::from("Dados carregados com sucesso!")
    }
}

fn downgrade_render_failure(
    title: &str,
    result: Result<ChartArtifact, PipelineError>,
) -> Option<ChartArtifact> {
    match result {
        Ok(artifact) => Some(artifact),
        Err(e) => {
            warn!("{}: '{}' ({:?})", CHART_UNAVAILABLE, title, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::enums::chart_kind::*;
    use crate::model::sale::raw_sale_row::*;
    use crate::service::aggregation_service_impl::*;

    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    /* In-memory source double; `fail_read`/`fail_write` simulate an
    unreachable backing store. */
    #[derive(Debug, Default)]
    struct MemorySource {
        rows: Mutex<Vec<RawSaleRow>>,
        fail_read: bool,
        fail_write: bool,
        write_calls: AtomicUsize,
    }

    impl MemorySource {
        fn with_rows(rows: Vec<RawSaleRow>) -> Self {
            MemorySource {
                rows: Mutex::new(rows),
                ..Default::default()
            }
        }

        fn persisted_rows(&self) -> Vec<RawSaleRow> {
            self.rows.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TabularSource for &MemorySource {
        async fn read(&self) -> Result<Vec<RawSaleRow>, PipelineError> {
            if self.fail_read {
                return Err(PipelineError::source_unavailable("rede fora do ar"));
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn write(&self, rows: &[RawSaleRow]) -> Result<(), PipelineError> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_write {
                return Err(PipelineError::persistence("disco cheio"));
            }
            *self.rows.lock().unwrap() = rows.to_vec();
            Ok(())
        }
    }

    /* Chart double: renders a fixed artifact, or fails like the real
    renderer does on an empty view. */
    #[derive(Debug, Default)]
    struct StubChartService;

    impl StubChartService {
        fn artifact(kind: ChartKind) -> ChartArtifact {
            let png_bytes = vec![0x89, 0x50, 0x4e, 0x47];
            let encoded = BASE64_STANDARD.encode(&png_bytes);
            ChartArtifact::new(kind, png_bytes, encoded)
        }

        fn render(
            kind: ChartKind,
            entries: &[AggregationEntry],
        ) -> Result<ChartArtifact, PipelineError> {
            if entries.is_empty() {
                return Err(PipelineError::render("nenhuma venda encontrada"));
            }
            Ok(Self::artifact(kind))
        }
    }

    #[async_trait]
    impl ChartService for StubChartService {
        async fn render_line_chart(
            &self,
            _title: &str,
            entries: &[AggregationEntry],
        ) -> Result<ChartArtifact, PipelineError> {
            Self::render(ChartKind::Line, entries)
        }

        async fn render_bar_chart(
            &self,
            _title: &str,
            entries: &[AggregationEntry],
        ) -> Result<ChartArtifact, PipelineError> {
            Self::render(ChartKind::Bar, entries)
        }

        async fn render_pie_chart(
            &self,
            _title: &str,
            entries: &[AggregationEntry],
        ) -> Result<ChartArtifact, PipelineError> {
            Self::render(ChartKind::Pie, entries)
        }
    }

    fn raw(produto: &str, quantidade: &str, categoria: &str, mes: &str) -> RawSaleRow {
        RawSaleRow::new(
            produto.to_string(),
            quantidade.to_string(),
            categoria.to_string(),
            mes.to_string(),
        )
    }

    fn controller(
        source: &MemorySource,
    ) -> DashboardController<&MemorySource, AggregationServiceImpl, StubChartService> {
        DashboardController::new(source, AggregationServiceImpl::new(), StubChartService)
    }

    #[tokio::test]
    async fn load_renders_all_three_charts_and_the_row_table() {
        let source = MemorySource::with_rows(vec![
            raw("Caneta", "10", "Escritorio", "1"),
            raw("Caderno", "3", "Papelaria", "2"),
        ]);

        let view = controller(&source).carregar().await.unwrap();

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.skipped_rows, 0);
        assert_eq!(view.message, "Dados carregados com sucesso!");
        assert!(view.monthly_chart.is_some());
        assert!(view.product_chart.is_some());
        assert!(view.category_chart.is_some());
    }

    #[tokio::test]
    async fn skipped_rows_are_counted_and_surfaced_in_the_message() {
        let source = MemorySource::with_rows(vec![
            raw("Caneta", "10", "Escritorio", "1"),
            raw("", "5", "Escritorio", "1"),
            raw("Lapis", "abc", "Escritorio", "2"),
        ]);

        let view = controller(&source).carregar().await.unwrap();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.skipped_rows, 2);
        assert_eq!(
            view.message,
            "Dados carregados com sucesso! 2 linha(s) ignorada(s)."
        );
    }

    #[tokio::test]
    async fn deleting_the_last_product_leaves_unavailable_charts() {
        /* Scenario: single row; delete empties the repository, every
        aggregation is empty and all charts downgrade to placeholders. */
        let source = MemorySource::with_rows(vec![raw("Caneta", "10", "Escritorio", "1")]);
        let controller = controller(&source);

        let view = controller.excluir("Caneta").await.unwrap();

        assert!(view.rows.is_empty());
        assert_eq!(view.message, "Venda 'Caneta' excluída com sucesso.");
        assert!(view.monthly_chart.is_none());
        assert!(view.product_chart.is_none());
        assert!(view.category_chart.is_none());
        assert!(source.persisted_rows().is_empty());
    }

    #[tokio::test]
    async fn delete_of_absent_product_changes_nothing_and_skips_the_write() {
        let source = MemorySource::with_rows(vec![raw("Caneta", "10", "Escritorio", "1")]);
        let controller = controller(&source);

        let view = controller.excluir("Borracha").await.unwrap();

        assert_eq!(view.message, "Erro: Produto 'Borracha' não encontrado.");
        assert_eq!(view.rows.len(), 1);
        assert_eq!(source.write_calls.load(Ordering::SeqCst), 0);
        assert_eq!(source.persisted_rows().len(), 1);
    }

    #[tokio::test]
    async fn unreachable_source_fails_the_load_without_mutation() {
        let source = MemorySource {
            fail_read: true,
            ..Default::default()
        };

        let err = controller(&source).carregar().await.unwrap_err();

        assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
        assert_eq!(source.write_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_persistence_rolls_the_repository_back() {
        let source = MemorySource {
            rows: Mutex::new(vec![
                raw("Caneta", "10", "Escritorio", "1"),
                raw("Lapis", "5", "Escritorio", "2"),
            ]),
            fail_write: true,
            ..Default::default()
        };
        let controller = controller(&source);

        let mut repository =
            SalesRepository::load(&(&source).read().await.unwrap());
        let err = controller
            .delete_and_persist(&mut repository, "Caneta")
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Persistence { .. }));
        /* Rolled back: the view still matches the committed artifact. */
        assert_eq!(repository.len(), 2);
        assert_eq!(repository.all()[0].produto, "Caneta");
        assert_eq!(source.persisted_rows().len(), 2);
    }

    /* Known limitation, by design: requests share no repository, so two
    concurrent deletes reload independently and the last writer wins.
    There is no locking layer to assert stronger consistency against. */
    #[tokio::test]
    async fn concurrent_deletes_are_last_writer_wins() {
        let source = MemorySource::with_rows(vec![
            raw("Caneta", "10", "Escritorio", "1"),
            raw("Lapis", "5", "Escritorio", "2"),
        ]);
        let controller = controller(&source);

        controller.excluir("Caneta").await.unwrap();
        controller.excluir("Lapis").await.unwrap();

        /* Sequential here; interleaved reads could resurrect a deleted
        row. The backing store's own guarantees are the only arbiter. */
        assert!(source.persisted_rows().is_empty());
    }
}
