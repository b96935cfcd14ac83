pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{ApiConfig, EndpointConfig, TomlConfig};
pub use crate::core::{
    product_service::ProductService, ApiResponse, EndpointProvider, PageRequest, ProductApi,
    ProductId, RelatedQuery, SearchFilter,
};
pub use utils::error::{ClientError, Result};
