use crate::common::*;
use crate::traits::service_traits::chart_service::*;
use plotters::prelude::*;

use crate::dto::{aggregation_entry::*, chart_artifact::*};
use crate::enums::chart_kind::*;
use crate::errors::pipeline_error::*;
use crate::model::configs::chart_config::*;

const BACKGROUND: RGBColor = RGBColor(20, 20, 20);
const CAPTION_COLOR: RGBColor = RGBColor(240, 240, 240);
const TEXT_COLOR: RGBColor = RGBColor(200, 200, 200);
const GRID_COLOR: RGBColor = RGBColor(60, 60, 60);
const AXIS_COLOR: RGBColor = RGBColor(120, 120, 120);
const LINE_COLOR: RGBColor = RGBColor(0, 191, 255);

const PALETTE: [RGBColor; 8] = [
    RGBColor(0, 191, 255),
    RGBColor(255, 99, 132),
    RGBColor(75, 192, 120),
    RGBColor(255, 159, 64),
    RGBColor(153, 102, 255),
    RGBColor(255, 205, 86),
    RGBColor(54, 162, 235),
    RGBColor(201, 103, 207),
];

#[doc = r#"
    Color assignment keyed by the group name (FNV-1a over the key), so a
    produto/categoria keeps its color across re-renders regardless of its
    position in the view. Snapshot tests rely on this.
"#]
pub(crate) fn palette_color(group_key: &str) -> RGBColor {
    let mut hash: u64 = 0xcbf29ce484222325;
    for byte in group_key.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    PALETTE[(hash % PALETTE.len() as u64) as usize]
}

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    config: ChartConfig,
}

impl ChartServiceImpl {
    #[doc = "Y-axis upper bound with 10% headroom, never collapsing to an empty range."]
    fn calculate_y_max(totals: &[u64]) -> u64 {
        let max_val: u64 = totals.iter().max().copied().unwrap_or(0);
        let padding: u64 = ((max_val as f64) * 0.1).max(1.0) as u64;
        max_val + padding
    }

    fn ensure_renderable(entries: &[AggregationEntry]) -> Result<(), PipelineError> {
        if entries.is_empty() {
            return Err(PipelineError::render(
                "nenhuma venda encontrada para gerar o gráfico",
            ));
        }
        Ok(())
    }

    fn output_path(&self, kind: ChartKind) -> PathBuf {
        Path::new(self.config.output_dir()).join(kind.file_name())
    }

    #[doc = "Reads the rendered PNG back and wraps it for inline embedding."]
    async fn into_artifact(
        &self,
        kind: ChartKind,
        output_path: &Path,
    ) -> Result<ChartArtifact, PipelineError> {
        let png_bytes: Vec<u8> = tokio::fs::read(output_path).await.map_err(|e| {
            PipelineError::render(format!(
                "não foi possível ler o gráfico gerado {}: {}",
                output_path.display(),
                e
            ))
        })?;

        let encoded_base64: String = BASE64_STANDARD.encode(&png_bytes);
        Ok(ChartArtifact::new(kind, png_bytes, encoded_base64))
    }

    async fn prepare_output_dir(&self, output_path: &Path) -> Result<(), PipelineError> {
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                PipelineError::render(format!(
                    "não foi possível criar o diretório de gráficos: {}",
                    e
                ))
            })?;
        }
        Ok(())
    }

    #[doc = "Runs the blocking plotters closure on the blocking pool and maps both failure layers."]
    async fn run_drawing<F>(&self, draw: F) -> Result<(), PipelineError>
    where
        F: FnOnce() -> Result<(), anyhow::Error> + Send + 'static,
    {
        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(draw);

        let drawing_result: Result<(), anyhow::Error> = handle.await.map_err(|e| {
            PipelineError::render(format!("tarefa de desenho interrompida: {}", e))
        })?;

        drawing_result.map_err(|e| PipelineError::render(format!("{:?}", e)))
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_line_chart(
        &self,
        title: &str,
        entries: &[AggregationEntry],
    ) -> Result<ChartArtifact, PipelineError> {
        Self::ensure_renderable(entries)?;

        let output_path: PathBuf = self.output_path(ChartKind::Line);
        self.prepare_output_dir(&output_path).await?;

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();
        let x_labels: Vec<String> = entries.iter().map(|e| e.group_label.clone()).collect();
        let y_data: Vec<u64> = entries.iter().map(|e| e.total).collect();
        let y_max: u64 = Self::calculate_y_max(&y_data);
        let (width, height) = (*self.config.width(), *self.config.height());

        self.run_drawing(move || {
            let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, ("sans-serif", 32).into_font().color(&CAPTION_COLOR))
                .margin(24)
                .x_label_area_size(60)
                .y_label_area_size(70)
                .build_cartesian_2d(0..x_labels.len(), 0u64..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Mês")
                .y_desc("Quantidade")
                .x_labels(x_labels.len().min(12))
                .y_labels(10)
                .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
                .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
                .x_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
                .y_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
                .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                .draw()?;

            chart.draw_series(LineSeries::new(
                y_data.iter().enumerate().map(|(i, &y)| (i, y)),
                ShapeStyle::from(&LINE_COLOR).stroke_width(3),
            ))?;

            chart.draw_series(
                y_data
                    .iter()
                    .enumerate()
                    .map(|(i, &y)| Circle::new((i, y), 4, LINE_COLOR.filled())),
            )?;

            root.present()?;
            Ok(())
        })
        .await?;

        info!("Line chart generated successfully: {:?}", output_path);
        self.into_artifact(ChartKind::Line, &output_path).await
    }

    async fn render_bar_chart(
        &self,
        title: &str,
        entries: &[AggregationEntry],
    ) -> Result<ChartArtifact, PipelineError> {
        Self::ensure_renderable(entries)?;

        let output_path: PathBuf = self.output_path(ChartKind::Bar);
        self.prepare_output_dir(&output_path).await?;

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();
        let x_labels: Vec<String> = entries.iter().map(|e| e.group_label.clone()).collect();
        let bars: Vec<(String, u64)> = entries
            .iter()
            .map(|e| (e.group_key.clone(), e.total))
            .collect();
        let y_max: u64 =
            Self::calculate_y_max(&entries.iter().map(|e| e.total).collect::<Vec<u64>>());
        let (width, height) = (*self.config.width(), *self.config.height());

        self.run_drawing(move || {
            let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&title, ("sans-serif", 32).into_font().color(&CAPTION_COLOR))
                .margin(24)
                .x_label_area_size(60)
                .y_label_area_size(70)
                .build_cartesian_2d(0..bars.len(), 0u64..y_max)?;

            chart
                .configure_mesh()
                .x_desc("Produto")
                .y_desc("Quantidade")
                .x_labels(bars.len().min(15))
                .y_labels(10)
                .disable_x_mesh()
                .axis_style(ShapeStyle::from(&AXIS_COLOR).stroke_width(2))
                .light_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
                .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(2))
                .x_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
                .y_label_style(("sans-serif", 16).into_font().color(&TEXT_COLOR))
                .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                .draw()?;

            chart.draw_series(bars.iter().enumerate().map(|(i, (group_key, total))| {
                Rectangle::new([(i, 0u64), (i + 1, *total)], palette_color(group_key).filled())
            }))?;

            root.present()?;
            Ok(())
        })
        .await?;

        info!("Bar chart generated successfully: {:?}", output_path);
        self.into_artifact(ChartKind::Bar, &output_path).await
    }

    async fn render_pie_chart(
        &self,
        title: &str,
        entries: &[AggregationEntry],
    ) -> Result<ChartArtifact, PipelineError> {
        Self::ensure_renderable(entries)?;

        let total_sum: u64 = entries.iter().map(|e| e.total).sum();
        if total_sum == 0 {
            return Err(PipelineError::render(
                "nenhuma quantidade para distribuir no gráfico de pizza",
            ));
        }

        let output_path: PathBuf = self.output_path(ChartKind::Pie);
        self.prepare_output_dir(&output_path).await?;

        let output_path_str: String = output_path.to_string_lossy().to_string();
        let title: String = title.to_string();
        let sizes: Vec<f64> = entries.iter().map(|e| e.total as f64).collect();
        let colors: Vec<RGBColor> = entries.iter().map(|e| palette_color(&e.group_key)).collect();
        let labels: Vec<String> = entries.iter().map(|e| e.group_label.clone()).collect();
        let (width, height) = (*self.config.width(), *self.config.height());

        self.run_drawing(move || {
            let root = BitMapBackend::new(&output_path_str, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND)?;

            let root =
                root.titled(&title, ("sans-serif", 32).into_font().color(&CAPTION_COLOR))?;

            let (w, h) = root.dim_in_pixel();
            let center: (i32, i32) = (w as i32 / 2, h as i32 / 2);
            let radius: f64 = (w.min(h) as f64) * 0.35;

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(90.0);
            pie.label_style(("sans-serif", 18).into_font().color(&TEXT_COLOR));
            pie.percentages(("sans-serif", 15).into_font().color(&BACKGROUND));

            root.draw(&pie)?;
            root.present()?;
            Ok(())
        })
        .await?;

        info!("Pie chart generated successfully: {:?}", output_path);
        self.into_artifact(ChartKind::Pie, &output_path).await
    }
}
