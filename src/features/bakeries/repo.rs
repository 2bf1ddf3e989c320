use crate::features::bakeries::model::Bakery;
use sqlx::{Pool, Sqlite};

pub async fn get_all_bakeries(pool: &Pool<Sqlite>) -> sqlx::Result<Vec<Bakery>> {
    // store-default order, the contract promises nothing more
    sqlx::query_as::<_, Bakery>("SELECT id, name FROM bakeries")
        .fetch_all(pool)
        .await
}

pub async fn get_bakery_by_id(pool: &Pool<Sqlite>, id: i64) -> sqlx::Result<Option<Bakery>> {
    sqlx::query_as::<_, Bakery>("SELECT id, name FROM bakeries WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn update_bakery_name(pool: &Pool<Sqlite>, id: i64, name: &str) -> sqlx::Result<()> {
    sqlx::query("UPDATE bakeries SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await?;

    println!("Successfully renamed bakery {} to '{}'.", id, name);

    Ok(())
}
