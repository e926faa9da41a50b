mod common;
mod external_deps;
mod prelude;
use common::*;

mod env_configuration;

mod errors;

mod enums;
use enums::storage_backend::*;

mod model;
use model::configs::total_config::*;
use model::configs::{chart_config::*, storage_config::*};

mod dto;
use dto::dashboard_view::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod traits;
use traits::repository_traits::tabular_source::*;

mod repository;
use repository::{local_file_source_impl::*, remote_object_source_impl::*};

mod service;
use service::{aggregation_service_impl::*, chart_service_impl::*};

mod controller;
use controller::dashboard_controller::*;

#[doc = r#"
    Request taken from the command line: `carregar` (default) mirrors the
    dashboard load route, `excluir <produto>` mirrors the delete route.
    The HTTP layer itself lives outside this crate; this binary is the
    pipeline behind those routes.
"#]
enum DashboardRequest {
    Carregar,
    Excluir(String),
}

fn parse_request() -> DashboardRequest {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None | Some("carregar") => DashboardRequest::Carregar,
        Some("excluir") => match args.next() {
            Some(produto) => DashboardRequest::Excluir(produto),
            None => {
                let err_msg: &str = "[main] 'excluir' requires a product name";
                error!("{}", err_msg);
                panic!("{}", err_msg)
            }
        },
        Some(other) => {
            let err_msg = format!(
                "[main] unknown request '{}' (expected 'carregar' or 'excluir <produto>')",
                other
            );
            error!("{}", err_msg);
            panic!("{}", err_msg)
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    set_global_logger();

    info!(
        "Sales dashboard pipeline start! ({})",
        get_system_config_info().dashboard_title()
    );

    let storage_config: &StorageConfig = get_storage_config_info();
    let chart_config: &ChartConfig = get_chart_config_info();
    let request: DashboardRequest = parse_request();

    /* The backend enum is resolved once, here, into a concrete source
    adapter; the pipeline itself never branches on it. */
    match storage_config.backend() {
        StorageBackend::LocalFile => {
            let source: LocalFileSourceImpl =
                LocalFileSourceImpl::new(PathBuf::from(storage_config.csv_path()));
            serve_request(source, chart_config.clone(), request).await;
        }
        StorageBackend::RemoteObject => {
            let remote_config = get_remote_object_config_info().unwrap_or_else(|| {
                let err_msg: &str =
                    "[main] storage.backend = remote_object but the [remote_object] section is missing";
                error!("{}", err_msg);
                panic!("{}", err_msg)
            });

            let source: RemoteObjectSourceImpl = RemoteObjectSourceImpl::new(
                remote_config,
                PathBuf::from(storage_config.staging_path()),
            )
            .unwrap_or_else(|e| {
                let err_msg: &str = "[main] An issue occurred while initializing the remote object source.";
                error!("{} {:?}", err_msg, e);
                panic!("{} {:?}", err_msg, e)
            });

            serve_request(source, chart_config.clone(), request).await;
        }
    }
}

async fn serve_request<S: TabularSource>(
    source: S,
    chart_config: ChartConfig,
    request: DashboardRequest,
) {
    /* Dependency injection */
    let aggregation_service: AggregationServiceImpl = AggregationServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(chart_config);

    let dashboard_controller: DashboardController<S, AggregationServiceImpl, ChartServiceImpl> =
        DashboardController::new(source, aggregation_service, chart_service);

    let result = match request {
        DashboardRequest::Carregar => dashboard_controller.carregar().await,
        DashboardRequest::Excluir(produto) => dashboard_controller.excluir(&produto).await,
    };

    match result {
        Ok(view) => report_view(&view),
        Err(e) => {
            /* Pipeline failures surface as an informational message; the
            serving process itself never crashes on them. */
            error!("{}", e);
        }
    }
}

fn report_view(view: &DashboardView) {
    info!("{}", view.message());
    info!("Rows on the dashboard: {}", view.rows().len());

    for (name, chart) in [
        (TITLE_MONTHLY, view.monthly_chart()),
        (TITLE_PRODUCT, view.product_chart()),
        (TITLE_CATEGORY, view.category_chart()),
    ] {
        match chart {
            Some(artifact) => info!(
                "{}: generated ({} PNG bytes, {} base64 chars)",
                name,
                artifact.png_bytes().len(),
                artifact.encoded_base64().len()
            ),
            None => info!("{}: {}", name, CHART_UNAVAILABLE),
        }
    }
}
