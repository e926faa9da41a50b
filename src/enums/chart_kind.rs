use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    #[doc = "Fixed output file name per chart kind; deterministic so a re-render replaces the previous image."]
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::Line => "vendas_por_mes.png",
            ChartKind::Bar => "vendas_por_produto.png",
            ChartKind::Pie => "distribuicao_vendas.png",
        }
    }
}
