use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An item for sale. `id` is assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub image: String,
}

/// The writable fields of a product, for create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub image: String,
}
