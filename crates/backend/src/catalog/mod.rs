use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::config::CatalogConfig;

/// Falhas ao consultar o catálogo remoto.
///
/// Every variant renders as the user-facing "Erro ao buscar produtos"
/// message that the proxy relays in its 500 body.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Upstream answered with a non-success status.
    #[error("Erro ao buscar produtos: {0}")]
    UpstreamStatus(String),

    /// Upstream unreachable or the transfer failed.
    #[error("Erro ao buscar produtos: {0}")]
    Network(String),

    /// Upstream body was not valid JSON.
    #[error("Erro ao buscar produtos: resposta JSON inválida")]
    MalformedBody(#[source] serde_json::Error),
}

/// HTTP client for the external product catalog
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// GET {base_url}/products/ and return the parsed JSON body as-is.
    pub async fn fetch_products(&self) -> Result<serde_json::Value, CatalogError> {
        let url = format!("{}/products/", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Catalog request to {} failed with status {}", url, status);
            let reason = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(CatalogError::UpstreamStatus(reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(CatalogError::MalformedBody)
    }
}

static CATALOG_CLIENT: OnceCell<CatalogClient> = OnceCell::new();

/// Install the process-wide catalog client. Called once at startup.
pub fn initialize(config: &CatalogConfig) -> anyhow::Result<()> {
    CATALOG_CLIENT
        .set(CatalogClient::new(config.base_url.clone()))
        .map_err(|_| anyhow::anyhow!("Catalog client already initialized"))?;
    tracing::info!("Catalog client ready for {}", config.base_url);
    Ok(())
}

pub fn client() -> &'static CatalogClient {
    CATALOG_CLIENT
        .get()
        .expect("Catalog client has not been initialized")
}
