#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::domain::model::ProductId;
use crate::domain::ports::EndpointProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, ID_PLACEHOLDER};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path templates of the catalog endpoints. `{id}` is replaced per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub products: String,
    pub product_by_id: String,
    pub search: String,
    pub related: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            products: "/api/products".to_string(),
            product_by_id: "/api/products/{id}".to_string(),
            search: "/api/products/search".to_string(),
            related: "/api/products/{id}/related".to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn render(template: &str, id: &ProductId) -> String {
        template.replace(ID_PLACEHOLDER, id.as_str())
    }
}

impl Validate for EndpointConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_endpoint_template("endpoints.products", &self.products, false)?;
        validation::validate_endpoint_template("endpoints.product_by_id", &self.product_by_id, true)?;
        validation::validate_endpoint_template("endpoints.search", &self.search, false)?;
        validation::validate_endpoint_template("endpoints.related", &self.related, true)?;
        Ok(())
    }
}

/// Resolved client configuration, whatever source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoints: EndpointConfig,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoints: EndpointConfig::default(),
        }
    }

    pub fn with_endpoints(mut self, endpoints: EndpointConfig) -> Self {
        self.endpoints = endpoints;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.base_url)?;
        self.endpoints.validate()
    }
}

impl EndpointProvider for ApiConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_path(&self) -> String {
        self.endpoints.products.clone()
    }

    fn product_by_id_path(&self, id: &ProductId) -> String {
        EndpointConfig::render(&self.endpoints.product_by_id, id)
    }

    fn search_path(&self) -> String {
        self.endpoints.search.clone()
    }

    fn related_path(&self, id: &ProductId) -> String {
        EndpointConfig::render(&self.endpoints.related, id)
    }
}
