use crate::utils::error::{ClientError, Result};
use url::Url;

pub const ID_PLACEHOLDER: &str = "{id}";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Endpoint templates are absolute paths; id-scoped ones must carry `{id}`.
pub fn validate_endpoint_template(field_name: &str, template: &str, requires_id: bool) -> Result<()> {
    validate_non_empty_string(field_name, template)?;

    if !template.starts_with('/') {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Endpoint path must start with '/'".to_string(),
        });
    }

    let has_id = template.contains(ID_PLACEHOLDER);
    if requires_id && !has_id {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Endpoint path must contain the {} placeholder", ID_PLACEHOLDER),
        });
    }
    if !requires_id && has_id {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Endpoint path does not take an {} placeholder", ID_PLACEHOLDER),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://shop.example.com").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_endpoint_template() {
        assert!(validate_endpoint_template("endpoints.products", "/api/products", false).is_ok());
        assert!(validate_endpoint_template("endpoints.product_by_id", "/api/products/{id}", true).is_ok());

        assert!(validate_endpoint_template("endpoints.products", "api/products", false).is_err());
        assert!(validate_endpoint_template("endpoints.products", "  ", false).is_err());
        assert!(validate_endpoint_template("endpoints.related", "/api/products/related", true).is_err());
        assert!(validate_endpoint_template("endpoints.search", "/api/{id}/search", false).is_err());
    }
}
