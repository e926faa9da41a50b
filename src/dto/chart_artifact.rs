use crate::common::*;

use crate::enums::chart_kind::*;

#[doc = r#"
    A rendered chart: raw PNG bytes plus their base64 encoding for inline
    `data:` URI embedding. Produced per request, never persisted.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub png_bytes: Vec<u8>,
    pub encoded_base64: String,
}

impl ChartArtifact {
    #[doc = "Inline embedding form consumed by the dashboard template."]
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.encoded_base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_is_the_prefixed_encoding() {
        let artifact: ChartArtifact = ChartArtifact::new(
            ChartKind::Pie,
            vec![0x89, 0x50, 0x4e, 0x47],
            "iVBORw==".to_string(),
        );

        assert_eq!(artifact.data_uri(), "data:image/png;base64,iVBORw==");
        /* The prefix is part of the URI, not of the encoding itself. */
        assert_eq!(
            artifact.data_uri().len(),
            "data:image/png;base64,".len() + artifact.encoded_base64().len()
        );
    }
}
