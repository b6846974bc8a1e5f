use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use dotenv::dotenv;
use log::info;

use inventory_backend::db::connection;
use inventory_backend::db::models::{Category, NewProduct};
use inventory_backend::db::schema::{categories, products};

fn default_categories() -> Vec<Category> {
    ["Electronics", "Books", "Furniture", "Clothing", "Groceries"]
        .into_iter()
        .map(|name| Category {
            name: name.to_string(),
        })
        .collect()
}

// Fixed ids keep re-runs idempotent: conflicting rows are skipped.
fn default_products() -> Vec<NewProduct> {
    let rows = [
        (
            "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "Smartphone",
            699,
            "Electronics",
        ),
        (
            "7b7f4b21-8c7a-4d8a-8c7c-2b7c8b7a8c7a",
            "Laptop",
            1299,
            "Electronics",
        ),
        (
            "9b8a7c6d-5e4f-4a2b-8c0d-9e8f7a6b5c4d",
            "Office chair",
            149,
            "Furniture",
        ),
        (
            "2f1e0d9c-8b7a-4c5d-9e3f-2a1b0c9d8e7f",
            "T-shirt",
            25,
            "Clothing",
        ),
        (
            "0a1b2c3d-4e5f-4789-abcd-ef0123456789",
            "Paperback novel",
            19,
            "Books",
        ),
        (
            "123e4567-e89b-42d3-a456-426614174000",
            "Apples (1 kg)",
            4,
            "Groceries",
        ),
    ];
    rows.into_iter()
        .map(|(id, name, price, category_name)| NewProduct {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category_name: category_name.to_string(),
        })
        .collect()
}

fn seed(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.transaction(|conn| {
        // SQLite's Diesel backend cannot express a batched insert combined with
        // ON CONFLICT, so insert row by row; the end state is identical.
        for category in default_categories() {
            diesel::insert_into(categories::table)
                .values(&category)
                .on_conflict_do_nothing()
                .execute(conn)?;
        }
        for product in default_products() {
            diesel::insert_into(products::table)
                .values(&product)
                .on_conflict_do_nothing()
                .execute(conn)?;
        }
        Ok(())
    })
}

fn main() {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Seeding database...");
    let pool = connection::init_pool();
    let conn = &mut pool.get().expect("Failed to get connection from pool");
    connection::run_migrations(conn).expect("Failed to run migrations");
    seed(conn).expect("Seeding failed");
    info!("Seeding complete.");
}
