use crate::common::*;

use crate::errors::pipeline_error::*;
use crate::model::sale::raw_sale_row::*;
use crate::utils_modules::time_utils::*;

/* Header columns the backing spreadsheet must carry. */
pub const REQUIRED_COLUMNS: [&str; 4] = ["produto", "quantidade", "categoria", "mes"];

#[doc = r#"
    Reads a TOML configuration file into the given structure.

    # Arguments
    * `file_path` - Path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - Parsed structure on success
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Reads the sales CSV at `path` into raw rows, insertion order preserved.

    1. Missing or unreadable file -> `SourceUnavailable`
    2. Header must contain every column in `REQUIRED_COLUMNS`, otherwise
       `SourceUnavailable` (schema validation happens here, per-row type
       coercion happens later in `SalesRepository::load`)
    3. Structurally broken records (wrong field count) -> `SourceUnavailable`
"#]
pub fn read_sales_csv(path: &Path) -> Result<Vec<RawSaleRow>, PipelineError> {
    if !path.exists() {
        return Err(PipelineError::source_unavailable(format!(
            "planilha não encontrada: {}",
            path.display()
        )));
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        PipelineError::source_unavailable(format!(
            "não foi possível ler a planilha {}: {}",
            path.display(),
            e
        ))
    })?;

    validate_csv_header(&mut reader)?;

    let mut rows: Vec<RawSaleRow> = Vec::new();
    for record in reader.deserialize::<RawSaleRow>() {
        let row: RawSaleRow = record.map_err(|e| {
            PipelineError::source_unavailable(format!("registro inválido na planilha: {}", e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

fn validate_csv_header(reader: &mut csv::Reader<std::fs::File>) -> Result<(), PipelineError> {
    let headers = reader.headers().map_err(|e| {
        PipelineError::source_unavailable(format!("cabeçalho da planilha ilegível: {}", e))
    })?;

    let present: Vec<&str> = headers.iter().map(|h| h.trim()).collect();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(col))
        .copied()
        .collect();

    if !missing.is_empty() {
        return Err(PipelineError::source_unavailable(format!(
            "a planilha não contém as colunas necessárias: {}",
            missing.join(", ")
        )));
    }

    Ok(())
}

#[doc = r#"
    Fully replaces the sales CSV at `path` with `rows`.

    Writes into a timestamped sibling temp file first and renames it over
    the target, so an I/O failure can never leave a truncated artifact.
"#]
pub fn write_sales_csv_atomic(path: &Path, rows: &[RawSaleRow]) -> Result<(), PipelineError> {
    let tmp_path: PathBuf = path.with_extension(format!("tmp-{}", current_timestamp_compact()));

    let write_result: Result<(), PipelineError> = write_rows(&tmp_path, rows);
    if let Err(e) = write_result {
        /* Leave the original artifact untouched. */
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        PipelineError::persistence(format!(
            "não foi possível substituir a planilha {}: {}",
            path.display(),
            e
        ))
    })
}

fn write_rows(tmp_path: &Path, rows: &[RawSaleRow]) -> Result<(), PipelineError> {
    if let Some(parent) = tmp_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                PipelineError::persistence(format!("não foi possível criar diretório: {}", e))
            })?;
        }
    }

    /* Automatic headers are off because the header is written explicitly
    below, even for an emptied spreadsheet, so the next read still
    validates; field order matches RawSaleRow. */
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(tmp_path)
        .map_err(|e| {
            PipelineError::persistence(format!("não foi possível criar arquivo temporário: {}", e))
        })?;

    writer
        .write_record(REQUIRED_COLUMNS)
        .map_err(|e| PipelineError::persistence(format!("falha ao gravar cabeçalho: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PipelineError::persistence(format!("falha ao gravar registro: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| PipelineError::persistence(format!("falha ao finalizar gravação: {}", e)))
}
