use crate::utils::error::{CartError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts either a site-relative path ("/plants") or an absolute
/// http(s) URL; anything else is rejected before the session starts.
pub fn validate_listing_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    if url_str.starts_with('/') {
        return Ok(());
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CartError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_seed_extension(field_name: &str, path: &str) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("json") | Some("toml") => Ok(()),
        Some(extension) => Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported seed file extension: {}. Allowed extensions: json, toml",
                extension
            ),
        }),
        None => Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CartError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_listing_url() {
        assert!(validate_listing_url("listing_url", "/plants").is_ok());
        assert!(validate_listing_url("listing_url", "https://example.com/plants").is_ok());
        assert!(validate_listing_url("listing_url", "http://example.com").is_ok());
        assert!(validate_listing_url("listing_url", "").is_err());
        assert!(validate_listing_url("listing_url", "not a url").is_err());
        assert!(validate_listing_url("listing_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_seed_extension() {
        assert!(validate_seed_extension("seed_file", "cart.json").is_ok());
        assert!(validate_seed_extension("seed_file", "cart.toml").is_ok());
        assert!(validate_seed_extension("seed_file", "cart.csv").is_err());
        assert!(validate_seed_extension("seed_file", "cart").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("seed_file", "seeds/cart.json").is_ok());
        assert!(validate_path("seed_file", "").is_err());
    }
}
