use crate::common::*;

use crate::errors::pipeline_error::*;
use crate::model::configs::remote_object_config::*;
use crate::model::sale::raw_sale_row::*;
use crate::traits::repository_traits::tabular_source::*;
use crate::utils_modules::io_utils::*;

#[doc = r#"
    Cloud-object backing store over the GCS JSON API.

    The canonical spreadsheet lives in `bucket/object_key`; every `read`
    downloads the object into `staging_path` first and every `write`
    uploads the staging file after the atomic local replace. Network or
    auth failure surfaces as `SourceUnavailable` / `Persistence`; the
    staging mirror is never served stale without that signal.

    The bearer token is read from the environment at construction, so a
    missing credential fails the process fast instead of mid-request.
"#]
#[derive(Debug, Clone)]
pub struct RemoteObjectSourceImpl {
    http_client: Client,
    config: RemoteObjectConfig,
    staging_path: PathBuf,
    access_token: String,
}

impl RemoteObjectSourceImpl {
    pub fn new(
        config: &RemoteObjectConfig,
        staging_path: PathBuf,
    ) -> Result<Self, PipelineError> {
        let access_token: String = env::var(config.access_token_env()).map_err(|_| {
            PipelineError::source_unavailable(format!(
                "credencial ausente: variável de ambiente '{}' não definida",
                config.access_token_env()
            ))
        })?;

        let http_client: Client = Client::builder()
            .timeout(Duration::from_secs(*config.timeout_secs()))
            .build()
            .map_err(|e| {
                PipelineError::source_unavailable(format!(
                    "não foi possível criar o cliente HTTP: {}",
                    e
                ))
            })?;

        Ok(RemoteObjectSourceImpl {
            http_client,
            config: config.clone(),
            staging_path,
            access_token,
        })
    }

    pub(crate) fn download_url(&self) -> String {
        format!(
            "{}/storage/v1/b/{}/o/{}?alt=media",
            self.config.endpoint(),
            self.config.bucket(),
            encode(self.config.object_key())
        )
    }

    pub(crate) fn upload_url(&self) -> String {
        format!(
            "{}/upload/storage/v1/b/{}/o?uploadType=media&name={}",
            self.config.endpoint(),
            self.config.bucket(),
            encode(self.config.object_key())
        )
    }

    #[doc = "Pulls `error.message` out of a GCS JSON error body, falling back to the raw text."]
    fn error_detail(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or_else(|| body.to_string())
    }

    async fn download_to_staging(&self) -> Result<(), PipelineError> {
        let response = self
            .http_client
            .get(self.download_url())
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| {
                PipelineError::source_unavailable(format!(
                    "falha de rede ao baixar o objeto '{}': {}",
                    self.config.object_key(),
                    e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            return Err(PipelineError::source_unavailable(format!(
                "download do objeto '{}' retornou {}: {}",
                self.config.object_key(),
                status,
                Self::error_detail(&body)
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            PipelineError::source_unavailable(format!("falha ao ler o corpo do download: {}", e))
        })?;

        if let Some(parent) = self.staging_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    PipelineError::source_unavailable(format!(
                        "não foi possível criar o diretório de staging: {}",
                        e
                    ))
                })?;
            }
        }

        fs::write(&self.staging_path, &bytes).map_err(|e| {
            PipelineError::source_unavailable(format!(
                "não foi possível gravar o staging {}: {}",
                self.staging_path.display(),
                e
            ))
        })?;

        info!(
            "Downloaded object '{}' ({} bytes) into {}",
            self.config.object_key(),
            bytes.len(),
            self.staging_path.display()
        );

        Ok(())
    }

    async fn upload_from_staging(&self) -> Result<(), PipelineError> {
        let bytes: Vec<u8> = fs::read(&self.staging_path).map_err(|e| {
            PipelineError::persistence(format!(
                "não foi possível ler o staging {}: {}",
                self.staging_path.display(),
                e
            ))
        })?;

        let response = self
            .http_client
            .post(self.upload_url())
            .bearer_auth(&self.access_token)
            .header("Content-Type", "text/csv")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                PipelineError::persistence(format!(
                    "falha de rede ao enviar o objeto '{}': {}",
                    self.config.object_key(),
                    e
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default();
            return Err(PipelineError::persistence(format!(
                "upload do objeto '{}' retornou {}: {}",
                self.config.object_key(),
                status,
                Self::error_detail(&body)
            )));
        }

        info!(
            "Uploaded object '{}' to bucket '{}'",
            self.config.object_key(),
            self.config.bucket()
        );

        Ok(())
    }
}

#[async_trait]
impl TabularSource for RemoteObjectSourceImpl {
    async fn read(&self) -> Result<Vec<RawSaleRow>, PipelineError> {
        self.download_to_staging().await?;
        read_sales_csv(&self.staging_path)
    }

    async fn write(&self, rows: &[RawSaleRow]) -> Result<(), PipelineError> {
        write_sales_csv_atomic(&self.staging_path, rows)?;
        self.upload_from_staging().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token_env: &str) -> RemoteObjectConfig {
        toml::from_str(&format!(
            r#"
            bucket = "meu-bucket-pi"
            object_key = "planilhas/VENDAS.csv"
            access_token_env = "{token_env}"
            "#
        ))
        .unwrap()
    }

    #[test]
    fn missing_credential_fails_fast_as_source_unavailable() {
        let cfg = config("SALES_DASHBOARD_TEST_TOKEN_ABSENT");
        let err =
            RemoteObjectSourceImpl::new(&cfg, PathBuf::from("/tmp/staging.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::SourceUnavailable { .. }));
    }

    #[test]
    fn object_key_is_url_encoded_in_both_urls() {
        let var = "SALES_DASHBOARD_TEST_TOKEN_SET";
        env::set_var(var, "token-de-teste");
        let source =
            RemoteObjectSourceImpl::new(&config(var), PathBuf::from("/tmp/staging.csv")).unwrap();

        assert_eq!(
            source.download_url(),
            "https://storage.googleapis.com/storage/v1/b/meu-bucket-pi/o/planilhas%2FVENDAS.csv?alt=media"
        );
        assert!(source
            .upload_url()
            .ends_with("uploadType=media&name=planilhas%2FVENDAS.csv"));
    }
}
