#[derive(Clone, Debug)]
pub struct BakeryConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
}

impl BakeryConfig {
    pub fn from_env() -> Self {
        // the original deployment hardcodes its store location and port, so
        // every variable falls back to those values instead of panicking
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://app.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let port = std::env::var("PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(5555);

        Self {
            database_url,
            max_connections,
            port,
        }
    }
}
