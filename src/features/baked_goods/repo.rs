use crate::features::baked_goods::model::BakedGood;
use sqlx::{Pool, Sqlite};

pub async fn get_all_goods(pool: &Pool<Sqlite>) -> sqlx::Result<Vec<BakedGood>> {
    sqlx::query_as::<_, BakedGood>("SELECT id, name, price, bakery_id FROM baked_goods")
        .fetch_all(pool)
        .await
}

pub async fn get_goods_by_price_desc(pool: &Pool<Sqlite>) -> sqlx::Result<Vec<BakedGood>> {
    sqlx::query_as::<_, BakedGood>(
        "SELECT id, name, price, bakery_id FROM baked_goods ORDER BY price DESC",
    )
    .fetch_all(pool)
    .await
}

// ties on price fall back to store scan order, same as the listing above
pub async fn get_most_expensive_good(pool: &Pool<Sqlite>) -> sqlx::Result<Option<BakedGood>> {
    sqlx::query_as::<_, BakedGood>(
        "SELECT id, name, price, bakery_id FROM baked_goods ORDER BY price DESC LIMIT 1",
    )
    .fetch_optional(pool)
    .await
}

pub async fn get_good_by_id(pool: &Pool<Sqlite>, id: i64) -> sqlx::Result<Option<BakedGood>> {
    sqlx::query_as::<_, BakedGood>("SELECT id, name, price, bakery_id FROM baked_goods WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_goods_for_bakery(
    pool: &Pool<Sqlite>,
    bakery_id: i64,
) -> sqlx::Result<Vec<BakedGood>> {
    sqlx::query_as::<_, BakedGood>(
        "SELECT id, name, price, bakery_id FROM baked_goods WHERE bakery_id = ?",
    )
    .bind(bakery_id)
    .fetch_all(pool)
    .await
}

// RETURNING hands back the stored row with its generated id in one round trip
pub async fn insert_baked_good(
    pool: &Pool<Sqlite>,
    name: &str,
    price: f64,
    bakery_id: i64,
) -> sqlx::Result<BakedGood> {
    let good = sqlx::query_as::<_, BakedGood>(
        r#"
        INSERT INTO baked_goods (name, price, bakery_id)
        VALUES (?, ?, ?)
        RETURNING id, name, price, bakery_id
        "#,
    )
    .bind(name)
    .bind(price)
    .bind(bakery_id)
    .fetch_one(pool)
    .await?;

    println!("Successfully created baked good {}.", good);

    Ok(good)
}

pub async fn delete_baked_good(pool: &Pool<Sqlite>, id: i64) -> sqlx::Result<()> {
    sqlx::query("DELETE FROM baked_goods WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    println!("Successfully deleted baked good {} from db.", id);

    Ok(())
}
