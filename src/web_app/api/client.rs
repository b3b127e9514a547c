// web_app/api/client.rs - HTTP client for the remote product API
//
// One method per endpoint, one request per call. Any non-success status is
// an error; nothing is retried.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::config::CatalogConfig;
use super::error::ApiError;
use crate::web_app::model::{
    Category, DeletedProduct, NewProduct, PageQuery, Product, ProductListing, ProductUpdate,
    SortOrder,
};

#[derive(Clone, Debug)]
pub struct DummyJsonClient {
    client: Client,
    base_url: String,
}

impl DummyJsonClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Client against an arbitrary products root (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: String,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered {}", url, status);
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);
        let request = self.client.request(Method::GET, &url).query(query);
        self.send(url, request).await
    }

    /// `GET /products` without parameters (the API's default first page)
    pub async fn all_products(&self) -> Result<ProductListing, ApiError> {
        self.get("", &[]).await
    }

    /// `GET /products?limit=&skip=&select=`
    pub async fn list_products(&self, query: &PageQuery) -> Result<ProductListing, ApiError> {
        self.get("", &query.params()).await
    }

    /// `GET /products/search?q=`
    pub async fn search_products(&self, query: &str) -> Result<ProductListing, ApiError> {
        self.get("search", &[("q", query.to_string())]).await
    }

    /// `GET /products/category/{slug}`
    pub async fn products_by_category(&self, slug: &str) -> Result<ProductListing, ApiError> {
        self.get(&format!("category/{}", slug), &[]).await
    }

    /// `GET /products/categories`
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("categories", &[]).await
    }

    /// `GET /products?sortBy=&order=`
    pub async fn sort_products(
        &self,
        sort_by: &str,
        order: SortOrder,
    ) -> Result<ProductListing, ApiError> {
        self.get(
            "",
            &[("sortBy", sort_by.to_string()), ("order", order.as_str().to_string())],
        )
        .await
    }

    /// `POST /products/add`
    pub async fn add_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let url = self.url("add");
        tracing::info!("POST {} title='{}'", url, product.title);
        let request = self.client.request(Method::POST, &url).json(product);
        self.send(url, request).await
    }

    /// `PUT /products/{id}`
    pub async fn update_product(
        &self,
        id: i64,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        let url = self.url(&id.to_string());
        tracing::info!("PUT {} title='{}'", url, update.title);
        let request = self.client.request(Method::PUT, &url).json(update);
        self.send(url, request).await
    }

    /// `DELETE /products/{id}`
    pub async fn delete_product(&self, id: i64) -> Result<DeletedProduct, ApiError> {
        let url = self.url(&id.to_string());
        tracing::info!("DELETE {}", url);
        let request = self.client.request(Method::DELETE, &url);
        self.send(url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = DummyJsonClient::with_base_url("http://localhost:9999/products/");
        assert_eq!(client.base_url(), "http://localhost:9999/products");
        assert_eq!(client.url(""), "http://localhost:9999/products");
        assert_eq!(client.url("search"), "http://localhost:9999/products/search");
        assert_eq!(client.url("42"), "http://localhost:9999/products/42");
    }

    #[test]
    fn test_new_from_config() {
        let client = DummyJsonClient::new(&CatalogConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://dummyjson.com/products");
    }
}
