use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::{ApiError, CatalogApi};
use crate::catalog::{Product, ProductId, ProductPage};
use crate::config::ApiConfig;

/// Error body shape used by the catalog server.
#[derive(Deserialize)]
struct ServerMessage {
    message: String,
}

enum Fetched {
    Body(Vec<u8>),
    NotFound,
}

/// [`CatalogApi`] backed by the catalog's JSON HTTP endpoints.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn fetch(&self, url: &str) -> Result<Fetched, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "not found");
            return Ok(Fetched::NotFound);
        }
        if !status.is_success() {
            let server_message = serde_json::from_slice::<ServerMessage>(&body)
                .ok()
                .map(|m| m.message);
            tracing::warn!(%url, status = status.as_u16(), "catalog request failed");
            return Err(ApiError::http_status(
                status.as_u16(),
                status.canonical_reason(),
                server_message.as_deref(),
            ));
        }
        Ok(Fetched::Body(body))
    }

    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn list_products(&self) -> Result<ProductPage, ApiError> {
        let url = self.endpoint("products");
        match self.fetch(&url).await? {
            Fetched::Body(body) => {
                let page: ProductPage = Self::decode(&body)?;
                page.validate()?;
                tracing::debug!(
                    count = page.products.len(),
                    total = page.total,
                    "decoded product page"
                );
                Ok(page)
            }
            Fetched::NotFound => Err(ApiError::http_status(
                StatusCode::NOT_FOUND.as_u16(),
                StatusCode::NOT_FOUND.canonical_reason(),
                None,
            )),
        }
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, ApiError> {
        let url = self.endpoint(&format!("products/{id}"));
        match self.fetch(&url).await? {
            Fetched::Body(body) => Self::decode(&body).map(Some),
            Fetched::NotFound => Ok(None),
        }
    }
}
