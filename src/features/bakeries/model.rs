use crate::features::baked_goods::model::BakedGood;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Eq, PartialEq, Clone, Debug, Display)]
#[display("'{}' (id {})", name, id)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
}

// the wire shape of a bakery: the row plus the goods it owns.
// field order here is the serialization contract, do not reorder.
#[derive(Serialize, Deserialize)]
pub struct JsonBakery {
    pub id: i64,
    pub name: String,
    pub baked_goods: Vec<BakedGood>,
}

#[derive(Deserialize)]
pub struct UpdateBakeryForm {
    pub name: Option<String>,
}
