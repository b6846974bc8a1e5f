use serde_json::Value;

use crate::validation::{
    category_name_field, category_ref_field, ids_field, price_field, product_name_field,
};

// Request body schemas, one per operation. Bodies are parsed from raw
// JSON so that malformed syntax (400) stays distinguishable from a
// failed schema (422). Unknown fields are ignored.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryRequest {
    pub name: String,
}

impl CreateCategoryRequest {
    pub fn from_value(body: &Value) -> Result<Self, String> {
        let object = body.as_object().ok_or("body must be a JSON object")?;
        let name = match object.get("name") {
            Some(value) => category_name_field(value, "name")?,
            None => return Err("name is required".to_string()),
        };
        Ok(Self { name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

impl UpdateCategoryRequest {
    pub fn from_value(body: &Value) -> Result<Self, String> {
        let object = body.as_object().ok_or("body must be a JSON object")?;
        let name = match object.get("name") {
            Some(value) => Some(category_name_field(value, "name")?),
            None => None,
        };
        Ok(Self { name })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub category_name: String,
}

impl CreateProductRequest {
    pub fn from_value(body: &Value) -> Result<Self, String> {
        let object = body.as_object().ok_or("body must be a JSON object")?;
        let name = match object.get("name") {
            Some(value) => product_name_field(value)?,
            None => return Err("name is required".to_string()),
        };
        let price = match object.get("price") {
            Some(value) => price_field(value)?,
            None => return Err("price is required".to_string()),
        };
        let category_name = match object.get("categoryName") {
            Some(value) => category_ref_field(value)?,
            None => return Err("categoryName is required".to_string()),
        };
        Ok(Self {
            name,
            price,
            category_name,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category_name: Option<String>,
}

impl UpdateProductRequest {
    pub fn from_value(body: &Value) -> Result<Self, String> {
        let object = body.as_object().ok_or("body must be a JSON object")?;
        let name = match object.get("name") {
            Some(value) => Some(product_name_field(value)?),
            None => None,
        };
        let price = match object.get("price") {
            Some(value) => Some(price_field(value)?),
            None => None,
        };
        let category_name = match object.get("categoryName") {
            Some(value) => Some(category_ref_field(value)?),
            None => None,
        };
        Ok(Self {
            name,
            price,
            category_name,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.category_name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkRecategorizeRequest {
    pub ids: Vec<String>,
    pub category_name: String,
}

impl BulkRecategorizeRequest {
    pub fn from_value(body: &Value) -> Result<Self, String> {
        let object = body.as_object().ok_or("body must be a JSON object")?;
        let ids = match object.get("ids") {
            Some(value) => ids_field(value)?,
            None => return Err("ids is required".to_string()),
        };
        let category_name = match object.get("categoryName") {
            Some(value) => category_ref_field(value)?,
            None => return Err("categoryName is required".to_string()),
        };
        Ok(Self { ids, category_name })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDeleteRequest {
    pub ids: Vec<String>,
}

impl BulkDeleteRequest {
    pub fn from_value(body: &Value) -> Result<Self, String> {
        let object = body.as_object().ok_or("body must be a JSON object")?;
        let ids = match object.get("ids") {
            Some(value) => ids_field(value)?,
            None => return Err("ids is required".to_string()),
        };
        Ok(Self { ids })
    }
}
