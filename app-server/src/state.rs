use crate::config::AppConfig;
use crate::data_api::{DataClient, QueryError};
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub templates: Arc<Tera>,
    pub data_client: Arc<DataClient>,
}

impl AppState {
    pub fn new(config: &AppConfig, templates: Tera) -> Result<Self, QueryError> {
        Ok(Self {
            config: Arc::new(config.clone()),
            templates: Arc::new(templates),
            data_client: Arc::new(DataClient::new(&config.data)?),
        })
    }

    #[cfg(test)]
    pub fn for_testing(config: &AppConfig) -> Self {
        let templates = crate::templates::load_templates(&config.templates.glob)
            .expect("Failed to load templates");
        Self::new(config, templates).expect("Failed to create test state")
    }
}
