use crate::errors::ApiError;
use crate::openapi::PAGES_TAG;
use crate::state::AppState;
use crate::templates::{render, INDEX};
use axum::extract::State;
use axum::response::Html;
use tera::Context;

#[utoipa::path(
    get,
    path = "/",
    tag = PAGES_TAG,
    responses(
        (status = 200, description = "Index page", content_type = "text/html", body = String)
    )
)]
pub(crate) async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state.templates, INDEX, &Context::new())
}
