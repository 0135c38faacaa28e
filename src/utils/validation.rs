use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Characters a storage key may contain.
pub fn is_storage_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// The namespace becomes the prefix of every storage key, so it must pass the
/// same character check the storage adapter applies.
pub fn validate_storage_namespace(field_name: &str, namespace: &str) -> Result<()> {
    if namespace.is_empty()
        || namespace.starts_with('.')
        || !namespace.chars().all(is_storage_key_char)
    {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: namespace.to_string(),
            reason: "Namespace may only contain letters, digits, '_', '-' and '.', and may not start with '.'"
                .to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 必填欄位：去除空白後不可為空，回傳修剪後的值
pub fn require_non_empty(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::MissingFieldError {
            field: field_name.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Parses a user-entered amount. Blank counts as zero and negatives clamp to
/// zero; anything that is not a finite number is rejected.
pub fn coerce_non_negative(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        CatalogError::validation(field_name, format!("'{}' is not a number", trimmed))
    })?;

    if !value.is_finite() {
        return Err(CatalogError::validation(
            field_name,
            format!("'{}' is not a finite number", trimmed),
        ));
    }

    // "-0" 也要變成 +0，否則會顯示成負號
    Ok(if value <= 0.0 { 0.0 } else { value })
}
