pub mod product_service;
pub mod query;

pub use crate::domain::model::{ApiResponse, PageRequest, ProductId, RelatedQuery, SearchFilter};
pub use crate::domain::ports::{EndpointProvider, ProductApi};
pub use crate::utils::error::Result;
