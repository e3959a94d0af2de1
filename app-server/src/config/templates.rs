use serde::Deserialize;

/// Configuration for the HTML templates
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TemplateConfig {
    /// Glob matching the template files (default: templates/*.html)
    pub glob: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            glob: "templates/*.html".to_string(),
        }
    }
}
