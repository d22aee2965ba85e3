use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    /// Base URL of the public food-facts service used for barcode lookups.
    pub food_api_url: String,
    /// Number of meals kept in a user's history; older rows are pruned.
    pub history_limit: usize,
    pub sessions_page_size: usize,
    /// Offset used for diary day boundaries when the client does not send one.
    pub diary_utc_offset_minutes: i32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "fittrack-auth".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "authenticated".into()),
        };
        Ok(Self {
            database_url,
            jwt,
            food_api_url: std::env::var("FOOD_API_URL")
                .unwrap_or_else(|_| "https://world.openfoodfacts.org".into()),
            history_limit: env_or("HISTORY_LIMIT", 20),
            sessions_page_size: env_or("SESSIONS_PAGE_SIZE", 5),
            diary_utc_offset_minutes: env_or("DIARY_UTC_OFFSET_MINUTES", 0),
        })
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}
