use crate::client::CatalogBackend;
use crate::config::AppConfig;
use crate::web::errors::WebError;
use crate::web::templates::init_templates;
use minijinja::Environment;
use std::sync::Arc;
use tracing::error;

/// Shared application state for the web server
pub struct AppState {
    pub config: AppConfig,
    pub backend: Arc<dyn CatalogBackend>,
    pub template_env: Environment<'static>,
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, backend: Arc<dyn CatalogBackend>) -> Result<Self, WebError> {
        let template_env = init_templates()?;

        Ok(Self {
            config,
            backend,
            template_env,
            startup_time: chrono::Utc::now(),
        })
    }

    pub fn render(&self, template_name: &str, context: minijinja::Value) -> Result<String, WebError> {
        let template = self.template_env.get_template(template_name).map_err(|e| {
            error!("Template not found: {} ({})", template_name, e);
            WebError::from(e)
        })?;

        template.render(context).map_err(|e| {
            error!("Template render error: {}", e);
            WebError::from(e)
        })
    }

    pub fn uptime_seconds(&self) -> i64 {
        (chrono::Utc::now() - self.startup_time).num_seconds()
    }
}
