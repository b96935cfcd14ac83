use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LIST_SIZE: u32 = 10;
pub const DEFAULT_SEARCH_SIZE: u32 = 20;
pub const DEFAULT_RELATED_LIMIT: u32 = 4;

/// Backend identifier for a product, brand or category.
///
/// The client never looks inside it; it is written verbatim into paths and
/// query strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_LIST_SIZE,
        }
    }
}

/// Search criteria. Empty `brand`/`category` strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl SearchFilter {
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub fn effective_size(&self) -> u32 {
        self.size.unwrap_or(DEFAULT_SEARCH_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedQuery {
    pub brand_id: Option<ProductId>,
    pub category_ids: Vec<ProductId>,
    pub limit: u32,
}

impl RelatedQuery {
    pub fn brand_id(mut self, brand_id: impl Into<ProductId>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }

    pub fn category_ids<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ProductId>,
    {
        self.category_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for RelatedQuery {
    fn default() -> Self {
        Self {
            brand_id: None,
            category_ids: Vec::new(),
            limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

/// Full transport response: status, headers and the decoded JSON body.
///
/// `data` is `Value::Null` when the backend sent an empty body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: serde_json::Value,
}

impl ApiResponse {
    pub fn into_data(self) -> serde_json::Value {
        self.data
    }
}
