//! # Catalog Sources
//!
//! Where the product list comes from. The storefront reads its catalog
//! exactly once per session; a failure is final for that session.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CatalogFetchError;
use crate::models::{CatalogResponse, Product};
use crate::state::StorefrontConfig;

/// Something that can produce the full product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every product. Called once per session, never retried.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogFetchError>;
}

/// Decode a `{ "products": [...] }` catalog document
pub fn decode_catalog(body: &str) -> Result<Vec<Product>, CatalogFetchError> {
    let response: CatalogResponse = serde_json::from_str(body)?;
    Ok(response.products)
}

/// Catalog fetched with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Build a source from configuration (URL, timeout, user agent)
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogFetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                CatalogFetchError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self::with_client(client, config.catalog_url.clone()))
    }

    /// Use an existing client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<Vec<Product>, CatalogFetchError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.text().await?;
        decode_catalog(&body)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogFetchError> {
        tracing::debug!(url = %self.url, "Fetching catalog");
        let result = self.request().await;

        match &result {
            Ok(products) => {
                tracing::info!(url = %self.url, count = products.len(), "Catalog loaded")
            }
            Err(e) => tracing::warn!(url = %self.url, "Catalog fetch failed: {}", e),
        }

        result
    }
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    products: Vec<Product>,
}

impl StaticCatalogSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogFetchError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog() {
        let body = r#"{"products":[
            {"id":1,"title":"Apple","description":"Red","category":"fruit","price":10,"thumbnail":"a.png"},
            {"id":2,"title":"Banana","description":"Yellow","category":"fruit","price":5.5,"thumbnail":"b.png"}
        ],"total":2}"#;

        let products = decode_catalog(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].price, 5.5);
    }

    #[test]
    fn test_decode_rejects_missing_products_field() {
        let err = decode_catalog(r#"{"items":[]}"#).unwrap_err();
        assert!(matches!(err, CatalogFetchError::Decode(_)));

        let err = decode_catalog("<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CatalogFetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticCatalogSource::new(vec![Product::new(1, "Apple", "fruit", 10.0)]);
        let products = source.fetch_products().await.unwrap();
        assert_eq!(products[0].title, "Apple");
    }

    #[test]
    fn test_http_source_from_config() {
        let config = StorefrontConfig::default().with_catalog_url("http://127.0.0.1:9/products");
        let source = HttpCatalogSource::new(&config).unwrap();
        assert_eq!(source.url(), "http://127.0.0.1:9/products");
    }
}
