use crate::common::*;

use crate::dto::{aggregation_entry::*, chart_artifact::*};
use crate::errors::pipeline_error::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render one aggregation view as a line chart (sales by month)
        # Arguments
        * `title` - Chart title
        * `entries` - Aggregated groups, already ordered for display
    "]
    async fn render_line_chart(
        &self,
        title: &str,
        entries: &[AggregationEntry],
    ) -> Result<ChartArtifact, PipelineError>;

    #[doc = "Render one aggregation view as a bar chart (sales by product)"]
    async fn render_bar_chart(
        &self,
        title: &str,
        entries: &[AggregationEntry],
    ) -> Result<ChartArtifact, PipelineError>;

    #[doc = "Render one aggregation view as a pie chart (sales share by category)"]
    async fn render_pie_chart(
        &self,
        title: &str,
        entries: &[AggregationEntry],
    ) -> Result<ChartArtifact, PipelineError>;
}
