use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

// row and wire shape in one: a baked good serializes exactly as stored.
// field order here is the serialization contract, do not reorder.
#[derive(sqlx::FromRow, Serialize, Deserialize, PartialEq, Clone, Debug, Display)]
#[display("'{}' (id {})", name, id)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

// raw form fields; everything arrives as an optional string and the handler
// decides what counts as present
#[derive(Deserialize)]
pub struct CreateBakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}
