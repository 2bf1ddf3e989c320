use crate::config::BakeryConfig;
use anyhow::Context;
use axum::{Router, response::Html, routing::get};
use dotenv;
use sqlx::Sqlite;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;

pub mod config;
pub mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::Pool<Sqlite>,
}

// verify the database file exists, create it on a first run
pub async fn ensure_database_exists(database_url: &str) -> anyhow::Result<()> {
    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        println!(
            "Unable to connect to database at {}, creating...",
            database_url
        );
        Sqlite::create_database(database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", database_url))?;
        println!("Successfully created database at {}.", database_url);
    }
    Ok(())
}

// the full routing table: feature routers composed next to the root route
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .nest("/bakeries", features::bakeries::bakeries_router())
        .nest("/baked_goods", features::baked_goods::baked_goods_router())
}

async fn home_handler() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = BakeryConfig::from_env();

    // verify db exists
    ensure_database_exists(&config.database_url).await?;

    // connect to our db
    let pool = match SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            panic!("Failed to create pool on {}: {}", config.database_url, e);
        }
    };

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations.");

    let app_state = AppState { pool };

    println!("Starting server...");

    let app = app_router().with_state(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    println!("Server listening on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
