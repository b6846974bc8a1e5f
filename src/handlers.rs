use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::{json, Value};

use crate::db::connection::SqlitePooledConnection;
use crate::db::repository;
use crate::errors::{ApiError, FailureScope};
use crate::models::{
    BulkDeleteRequest, BulkRecategorizeRequest, CreateCategoryRequest, CreateProductRequest,
    UpdateCategoryRequest, UpdateProductRequest,
};
use crate::db::models::{UpdateCategory, UpdateProduct};
use crate::validation::{self, IdParamError};
use crate::AppState;

fn require_json(req: &HttpRequest) -> Result<(), ApiError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    if validation::is_json_content_type(content_type) {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMediaType)
    }
}

fn parse_body(body: &web::Bytes) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::BadRequest("Invalid JSON body".to_string()))
}

fn db_conn(data: &web::Data<AppState>) -> Result<SqlitePooledConnection, ApiError> {
    data.pool.get().map_err(|err| {
        log::error!("failed to check out a database connection: {err}");
        ApiError::Unavailable("Database unavailable".to_string())
    })
}

fn category_name_param(raw: &str) -> Result<String, ApiError> {
    validation::validate_name_param(raw)
        .ok_or_else(|| ApiError::BadRequest("Invalid category name".to_string()))
}

fn product_id_param(raw: &str) -> Result<String, ApiError> {
    validation::validate_id_param(raw).map_err(|err| match err {
        IdParamError::Empty => ApiError::BadRequest("Invalid product id".to_string()),
        IdParamError::Format => ApiError::BadRequest("Invalid product id format".to_string()),
    })
}

pub async fn get_categories(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut db_conn(&data)?;
    let rows = repository::list_categories(conn)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to fetch categories"))?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_category(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    require_json(&req)?;
    let value = parse_body(&body)?;
    let parsed = CreateCategoryRequest::from_value(&value).map_err(ApiError::Unprocessable)?;

    let conn = &mut db_conn(&data)?;
    let inserted = repository::create_category(conn, &parsed.name).map_err(|f| {
        ApiError::from_storage(f, FailureScope::CategoryCreate, "Failed to create category")
    })?;

    match inserted {
        Some(category) => {
            let location = format!("/categories/{}", urlencoding::encode(&category.name));
            Ok(HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(category))
        }
        None => Err(ApiError::Conflict("Category already exists".to_string())),
    }
}

pub async fn get_category(
    data: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = category_name_param(&name)?;
    let conn = &mut db_conn(&data)?;
    let row = repository::get_category(conn, &name)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to fetch category"))?;
    match row {
        Some(category) => Ok(HttpResponse::Ok().json(category)),
        None => Err(ApiError::NotFound("Category not found".to_string())),
    }
}

pub async fn update_category(
    data: web::Data<AppState>,
    name: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let name = category_name_param(&name)?;
    require_json(&req)?;
    let value = parse_body(&body)?;
    let parsed = UpdateCategoryRequest::from_value(&value).map_err(ApiError::Unprocessable)?;
    if parsed.is_empty() {
        return Err(ApiError::Unprocessable("No valid fields to update".to_string()));
    }

    let changes = UpdateCategory { name: parsed.name };
    let conn = &mut db_conn(&data)?;
    let updated = repository::update_category(conn, &name, &changes).map_err(|f| {
        ApiError::from_storage(f, FailureScope::CategoryUpdate, "Failed to update category")
    })?;

    match updated {
        Some(category) => Ok(HttpResponse::Ok().json(category)),
        None => Err(ApiError::NotFound("Category not found".to_string())),
    }
}

pub async fn delete_category(
    data: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let name = category_name_param(&name)?;
    let conn = &mut db_conn(&data)?;
    let deleted = repository::delete_category(conn, &name)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to delete category"))?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Category not found".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_products(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let conn = &mut db_conn(&data)?;
    let rows = repository::list_products(conn)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to fetch products"))?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_product(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    require_json(&req)?;
    let value = parse_body(&body)?;
    let parsed = CreateProductRequest::from_value(&value).map_err(ApiError::Unprocessable)?;

    let conn = &mut db_conn(&data)?;
    let product = repository::create_product(conn, &parsed.name, parsed.price, &parsed.category_name)
        .map_err(|f| {
            ApiError::from_storage(f, FailureScope::ProductCreate, "Failed to create product")
        })?;

    let location = format!("/products/{}", urlencoding::encode(&product.id));
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(product))
}

pub async fn get_product(
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = product_id_param(&id)?;
    let conn = &mut db_conn(&data)?;
    let row = repository::get_product(conn, &id)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to fetch product"))?;
    match row {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(ApiError::NotFound("Product not found".to_string())),
    }
}

pub async fn update_product(
    data: web::Data<AppState>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let id = product_id_param(&id)?;
    require_json(&req)?;
    let value = parse_body(&body)?;
    let parsed = UpdateProductRequest::from_value(&value).map_err(ApiError::Unprocessable)?;
    if parsed.is_empty() {
        return Err(ApiError::Unprocessable("No valid fields to update".to_string()));
    }

    let changes = UpdateProduct {
        name: parsed.name,
        price: parsed.price,
        category_name: parsed.category_name,
    };
    let conn = &mut db_conn(&data)?;
    let updated = repository::update_product(conn, &id, &changes).map_err(|f| {
        ApiError::from_storage(f, FailureScope::ProductUpdate, "Failed to update product")
    })?;

    match updated {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(ApiError::NotFound("Product not found".to_string())),
    }
}

pub async fn delete_product(
    data: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = product_id_param(&id)?;
    let conn = &mut db_conn(&data)?;
    let deleted = repository::delete_product(conn, &id)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to delete product"))?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// PATCH /products: move a set of products to one category in a single
/// statement. Missing ids are skipped; a missing target category fails
/// the whole statement.
pub async fn bulk_update_products(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    require_json(&req)?;
    let value = parse_body(&body)?;
    let parsed = BulkRecategorizeRequest::from_value(&value).map_err(ApiError::Unprocessable)?;

    let conn = &mut db_conn(&data)?;
    let updated =
        repository::bulk_update_products_category(conn, &parsed.ids, &parsed.category_name)
            .map_err(|f| {
                ApiError::from_storage(f, FailureScope::ProductUpdate, "Failed to update products")
            })?;

    Ok(HttpResponse::Ok().json(json!({ "updated": updated })))
}

/// DELETE /products: delete a set of products in a single statement.
/// Missing ids are not an error.
pub async fn bulk_delete_products(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    require_json(&req)?;
    let value = parse_body(&body)?;
    let parsed = BulkDeleteRequest::from_value(&value).map_err(ApiError::Unprocessable)?;

    let conn = &mut db_conn(&data)?;
    repository::bulk_delete_products(conn, &parsed.ids)
        .map_err(|f| ApiError::from_storage(f, FailureScope::General, "Failed to delete products"))?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/categories", web::get().to(get_categories))
        .route("/categories", web::post().to(create_category))
        .route("/categories/{name}", web::get().to(get_category))
        .route("/categories/{name}", web::patch().to(update_category))
        .route("/categories/{name}", web::delete().to(delete_category))
        .route("/products", web::get().to(get_products))
        .route("/products", web::post().to(create_product))
        .route("/products", web::patch().to(bulk_update_products))
        .route("/products", web::delete().to(bulk_delete_products))
        .route("/products/{id}", web::get().to(get_product))
        .route("/products/{id}", web::patch().to(update_product))
        .route("/products/{id}", web::delete().to(delete_product));
}
