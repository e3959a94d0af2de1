use crate::errors::ApiError;
use axum::response::Html;
use tera::{Context, Tera};
use thiserror::Error;

pub const INDEX: &str = "index.html";
pub const AUTH_ANONYMOUS: &str = "auth_anonymous.html";
pub const AUTH_USER: &str = "auth_user.html";
pub const DATA: &str = "data.html";
pub const FILESTORE_ANONYMOUS: &str = "filestore_anonymous.html";
pub const FILESTORE_USER: &str = "filestore_user.html";

/// Every template a route renders
pub const REQUIRED_TEMPLATES: [&str; 6] = [
    INDEX,
    AUTH_ANONYMOUS,
    AUTH_USER,
    DATA,
    FILESTORE_ANONYMOUS,
    FILESTORE_USER,
];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to load templates from '{glob}': {source}")]
    Load {
        glob: String,
        #[source]
        source: tera::Error,
    },
    #[error("Template '{name}' not found in '{glob}' (relative globs resolve from the working directory)")]
    Missing { name: &'static str, glob: String },
}

/// Load and parse every template matched by `glob`.
///
/// Parsing happens once here, so a malformed or missing template is reported
/// at startup rather than on the first request that renders it.
pub fn load_templates(glob: &str) -> Result<Tera, TemplateError> {
    let tera = Tera::new(glob).map_err(|source| TemplateError::Load {
        glob: glob.to_string(),
        source,
    })?;

    let loaded: Vec<&str> = tera.get_template_names().collect();
    log::debug!("Loaded templates: {:?}", loaded);
    for name in REQUIRED_TEMPLATES {
        if !loaded.contains(&name) {
            return Err(TemplateError::Missing {
                name,
                glob: glob.to_string(),
            });
        }
    }
    Ok(tera)
}

pub fn render(tera: &Tera, name: &str, context: &Context) -> Result<Html<String>, ApiError> {
    Ok(Html(tera.render(name, context)?))
}
