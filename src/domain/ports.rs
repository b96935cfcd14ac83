use crate::domain::model::{ApiResponse, PageRequest, ProductId, RelatedQuery, SearchFilter};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the catalog lives: a base URL plus the path of each endpoint.
///
/// Paths are absolute (`/api/...`) and are appended to `base_url` as-is.
pub trait EndpointProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn products_path(&self) -> String;
    fn product_by_id_path(&self, id: &ProductId) -> String;
    fn search_path(&self) -> String;
    fn related_path(&self, id: &ProductId) -> String;
}

/// Catalog operations as seen by the rest of the application.
///
/// The operations differ in what they hand back and in how they fail:
/// `list_products` and `get_all_product_images` return the whole envelope,
/// the others only the body; `get_related_products` never fails, and
/// `get_all_product_images` fails without logging.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self, page: PageRequest) -> Result<ApiResponse>;
    async fn get_product_by_id(&self, id: &ProductId) -> Result<serde_json::Value>;
    async fn search_products(&self, filter: &SearchFilter) -> Result<serde_json::Value>;
    async fn get_related_products(
        &self,
        id: &ProductId,
        query: &RelatedQuery,
    ) -> Vec<serde_json::Value>;
    async fn get_all_product_images(&self) -> Result<ApiResponse>;
}
