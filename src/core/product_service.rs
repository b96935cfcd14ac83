use crate::core::query::QueryParams;
use crate::domain::model::{ApiResponse, PageRequest, ProductId, RelatedQuery, SearchFilter};
use crate::domain::ports::{EndpointProvider, ProductApi};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

/// Image listing lives at a fixed path regardless of the endpoint config.
pub const PRODUCT_IMAGES_PATH: &str = "/api/products/images";

/// Stateless facade over the catalog REST API.
///
/// Build one at startup and share it (`Arc`) with whoever needs catalog data;
/// the inner `reqwest::Client` pools connections across concurrent calls.
pub struct ProductService<C: EndpointProvider> {
    config: C,
    client: Client,
}

impl<C: EndpointProvider> ProductService<C> {
    pub fn new(config: C) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: C, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url().trim_end_matches('/'), path)
    }

    fn get(&self, path: &str, params: QueryParams) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, params.as_pairs());

        let request = self.client.get(url);
        if params.is_empty() {
            request
        } else {
            request.query(params.as_pairs())
        }
    }

    pub fn list_request(&self, page: PageRequest) -> RequestBuilder {
        let params = QueryParams::new().with("page", page.page).with("size", page.size);
        self.get(&self.config.products_path(), params)
    }

    pub fn product_request(&self, id: &ProductId) -> RequestBuilder {
        self.get(&self.config.product_by_id_path(id), QueryParams::new())
    }

    pub fn search_request(&self, filter: &SearchFilter) -> RequestBuilder {
        let params = QueryParams::new()
            .with_non_empty("brand", filter.brand.as_deref())
            .with_non_empty("category", filter.category.as_deref())
            .with("page", filter.effective_page())
            .with("size", filter.effective_size());
        self.get(&self.config.search_path(), params)
    }

    pub fn related_request(&self, id: &ProductId, query: &RelatedQuery) -> RequestBuilder {
        let params = QueryParams::new()
            .with_opt("brandId", query.brand_id.as_ref())
            .with_each("categoryIds", &query.category_ids)
            .with("limit", query.limit);
        self.get(&self.config.related_path(id), params)
    }

    pub fn images_request(&self) -> RequestBuilder {
        self.get(PRODUCT_IMAGES_PATH, QueryParams::new())
    }
}

async fn fetch(request: RequestBuilder) -> Result<ApiResponse> {
    let response = request.send().await?.error_for_status()?;
    read_envelope(response).await
}

async fn read_envelope(response: Response) -> Result<ApiResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.bytes().await?;
    tracing::debug!("Response {} ({} bytes)", status, body.len());

    let data = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)?
    };

    Ok(ApiResponse {
        status,
        headers,
        data,
    })
}

#[async_trait]
impl<C: EndpointProvider> ProductApi for ProductService<C> {
    async fn list_products(&self, page: PageRequest) -> Result<ApiResponse> {
        fetch(self.list_request(page)).await.map_err(|e| {
            tracing::error!(error = %e, "Error fetching products");
            e
        })
    }

    async fn get_product_by_id(&self, id: &ProductId) -> Result<Value> {
        match fetch(self.product_request(id)).await {
            Ok(response) => Ok(response.into_data()),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching product {}", id);
                Err(e)
            }
        }
    }

    async fn search_products(&self, filter: &SearchFilter) -> Result<Value> {
        match fetch(self.search_request(filter)).await {
            Ok(response) => Ok(response.into_data()),
            Err(e) => {
                tracing::error!(error = %e, "Error searching products");
                Err(e)
            }
        }
    }

    /// Failures are logged and turned into an empty list.
    async fn get_related_products(&self, id: &ProductId, query: &RelatedQuery) -> Vec<Value> {
        let result = fetch(self.related_request(id, query))
            .await
            .and_then(|response| {
                serde_json::from_value::<Vec<Value>>(response.into_data()).map_err(ClientError::from)
            });

        match result {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching related products");
                Vec::new()
            }
        }
    }

    // NOTE: unlike the other operations this one does not log its failures;
    // callers only get the raw error.
    async fn get_all_product_images(&self) -> Result<ApiResponse> {
        fetch(self.images_request()).await
    }
}
