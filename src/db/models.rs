use serde::{Deserialize, Serialize};
use diesel::prelude::*;
use crate::db::schema::{categories, products};

#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = categories)]
pub struct Category {
    pub name: String,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: i64,
    #[serde(rename = "categoryName")]
    pub category_name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub category_name: String,
}

// None fields are left untouched by the update statement.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = products)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category_name: Option<String>,
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = categories)]
pub struct UpdateCategory {
    pub name: Option<String>,
}
