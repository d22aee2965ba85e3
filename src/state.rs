use std::sync::Arc;

use crate::config::AppConfig;
use crate::nutrition::{FoodLookup, OpenFoodFacts};
use crate::store::{postgres, PgStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub food: Arc<dyn FoodLookup>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = postgres::connect(&config.database_url).await?;
        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let store = Arc::new(PgStore::new(db)) as Arc<dyn Store>;
        let food = Arc::new(OpenFoodFacts::new(&config.food_api_url)?) as Arc<dyn FoodLookup>;

        Ok(Self {
            store,
            food,
            config,
        })
    }

    pub fn from_parts(
        store: Arc<dyn Store>,
        food: Arc<dyn FoodLookup>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            store,
            food,
            config,
        }
    }
}
