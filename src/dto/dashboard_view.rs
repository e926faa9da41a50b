use crate::common::*;

use crate::dto::chart_artifact::*;
use crate::model::sale::sale_record::*;

pub const CHART_UNAVAILABLE: &str = "Gráfico não disponível";

#[doc = r#"
    Everything the template layer needs to render one dashboard page:
    the current row table, the three charts (a `None` chart means the
    "Gráfico não disponível" placeholder), the count of rows dropped
    during parsing, and the user-facing informational message.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct DashboardView {
    pub rows: Vec<SaleRecord>,
    pub monthly_chart: Option<ChartArtifact>,
    pub product_chart: Option<ChartArtifact>,
    pub category_chart: Option<ChartArtifact>,
    pub skipped_rows: usize,
    pub message: String,
}
