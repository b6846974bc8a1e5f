use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

use crate::db::failure::StorageFailure;
use crate::db::models::{Category, NewProduct, Product, UpdateCategory, UpdateProduct};
use crate::db::schema::{categories, products};

type StorageResult<T> = Result<T, StorageFailure>;

pub fn list_categories(conn: &mut SqliteConnection) -> StorageResult<Vec<Category>> {
    categories::table
        .load(conn)
        .map_err(StorageFailure::from)
}

pub fn get_category(conn: &mut SqliteConnection, name: &str) -> StorageResult<Option<Category>> {
    categories::table
        .find(name)
        .first(conn)
        .optional()
        .map_err(StorageFailure::from)
}

/// Returns `None` when the name already exists; the insert is a no-op
/// in that case rather than an error.
pub fn create_category(conn: &mut SqliteConnection, name: &str) -> StorageResult<Option<Category>> {
    diesel::insert_into(categories::table)
        .values(&Category {
            name: name.to_string(),
        })
        .on_conflict_do_nothing()
        .get_result(conn)
        .optional()
        .map_err(StorageFailure::from)
}

/// Renames by primary key. Referencing products follow through the
/// cascade-on-update on products.category_name.
pub fn update_category(
    conn: &mut SqliteConnection,
    name: &str,
    changes: &UpdateCategory,
) -> StorageResult<Option<Category>> {
    diesel::update(categories::table.find(name))
        .set(changes)
        .get_result(conn)
        .optional()
        .map_err(StorageFailure::from)
}

/// Deletes by primary key, cascading to referencing products. Returns
/// the number of category rows removed (0 when the name was absent).
pub fn delete_category(conn: &mut SqliteConnection, name: &str) -> StorageResult<usize> {
    diesel::delete(categories::table.find(name))
        .execute(conn)
        .map_err(StorageFailure::from)
}

pub fn list_products(conn: &mut SqliteConnection) -> StorageResult<Vec<Product>> {
    products::table.load(conn).map_err(StorageFailure::from)
}

pub fn get_product(conn: &mut SqliteConnection, id: &str) -> StorageResult<Option<Product>> {
    products::table
        .find(id)
        .first(conn)
        .optional()
        .map_err(StorageFailure::from)
}

pub fn create_product(
    conn: &mut SqliteConnection,
    name: &str,
    price: i64,
    category_name: &str,
) -> StorageResult<Product> {
    let new_product = NewProduct {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        price,
        category_name: category_name.to_string(),
    };
    diesel::insert_into(products::table)
        .values(&new_product)
        .get_result(conn)
        .map_err(StorageFailure::from)
}

pub fn update_product(
    conn: &mut SqliteConnection,
    id: &str,
    changes: &UpdateProduct,
) -> StorageResult<Option<Product>> {
    diesel::update(products::table.find(id))
        .set(changes)
        .get_result(conn)
        .optional()
        .map_err(StorageFailure::from)
}

pub fn delete_product(conn: &mut SqliteConnection, id: &str) -> StorageResult<usize> {
    diesel::delete(products::table.find(id))
        .execute(conn)
        .map_err(StorageFailure::from)
}

/// Single UPDATE over the id set. Ids with no matching row are skipped,
/// so the returned count may be lower than `ids.len()`; a missing
/// target category fails the whole statement instead.
pub fn bulk_update_products_category(
    conn: &mut SqliteConnection,
    ids: &[String],
    category_name: &str,
) -> StorageResult<usize> {
    diesel::update(products::table.filter(products::id.eq_any(ids)))
        .set(products::category_name.eq(category_name))
        .execute(conn)
        .map_err(StorageFailure::from)
}

/// Single DELETE over the id set; ids with no matching row are ignored.
pub fn bulk_delete_products(conn: &mut SqliteConnection, ids: &[String]) -> StorageResult<usize> {
    diesel::delete(products::table.filter(products::id.eq_any(ids)))
        .execute(conn)
        .map_err(StorageFailure::from)
}
