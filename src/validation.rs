use uuid::{Uuid, Variant};

pub const CATEGORY_NAME_MAX: usize = 32;
pub const PRODUCT_NAME_MIN: usize = 5;
pub const PRODUCT_NAME_MAX: usize = 128;

/// Why a path identifier was rejected; the two cases carry different
/// client-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdParamError {
    Empty,
    Format,
}

/// Strict hyphenated UUID v4 shape: 8-4-4-4-12 hex groups with version
/// nibble 4 and an RFC 4122 variant nibble. Other textual encodings the
/// uuid crate would accept (simple, braced, urn) are rejected.
pub fn is_uuid_v4(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36
        || bytes[8] != b'-'
        || bytes[13] != b'-'
        || bytes[18] != b'-'
        || bytes[23] != b'-'
    {
        return false;
    }
    match Uuid::parse_str(value) {
        Ok(parsed) => parsed.get_version_num() == 4 && parsed.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

pub fn validate_id_param(raw: &str) -> Result<String, IdParamError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdParamError::Empty);
    }
    if !is_uuid_v4(trimmed) {
        return Err(IdParamError::Format);
    }
    Ok(trimmed.to_string())
}

/// Category names in the path carry no format constraint beyond being
/// non-empty once trimmed.
pub fn validate_name_param(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn is_json_content_type(header: Option<&str>) -> bool {
    header
        .map(|value| value.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}

pub fn category_name_field(value: &serde_json::Value, field: &str) -> Result<String, String> {
    let raw = value
        .as_str()
        .ok_or_else(|| format!("{field} must be a string"))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if trimmed.chars().count() > CATEGORY_NAME_MAX {
        return Err(format!(
            "{field} must be at most {CATEGORY_NAME_MAX} characters"
        ));
    }
    Ok(trimmed.to_string())
}

pub fn product_name_field(value: &serde_json::Value) -> Result<String, String> {
    let raw = value.as_str().ok_or("name must be a string")?;
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length < PRODUCT_NAME_MIN {
        return Err(format!(
            "name must be at least {PRODUCT_NAME_MIN} characters"
        ));
    }
    if length > PRODUCT_NAME_MAX {
        return Err(format!("name must be at most {PRODUCT_NAME_MAX} characters"));
    }
    Ok(trimmed.to_string())
}

pub fn price_field(value: &serde_json::Value) -> Result<i64, String> {
    let price = value.as_i64().ok_or("price must be an integer")?;
    if price < 0 {
        return Err("price must be a non-negative integer".to_string());
    }
    Ok(price)
}

/// Foreign-key reference to a category; existence is the storage
/// layer's concern, only shape is checked here.
pub fn category_ref_field(value: &serde_json::Value) -> Result<String, String> {
    let raw = value.as_str().ok_or("categoryName must be a string")?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("categoryName must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

pub fn ids_field(value: &serde_json::Value) -> Result<Vec<String>, String> {
    let entries = value.as_array().ok_or("ids must be an array")?;
    if entries.is_empty() {
        return Err("ids must not be empty".to_string());
    }
    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw = entry.as_str().ok_or("ids must contain only strings")?;
        let trimmed = raw.trim();
        if !is_uuid_v4(trimmed) {
            return Err("ids must contain only valid product ids".to_string());
        }
        ids.push(trimmed.to_string());
    }
    Ok(ids)
}
