use crate::{config::Config, database::Database, error::ServerError};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub questions_per_page: usize,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self, ServerError> {
        let db = Database::connect(&config.database_url, config.max_connections.get()).await?;

        Ok(Self {
            db,
            questions_per_page: config.questions_per_page.get(),
        })
    }
}
