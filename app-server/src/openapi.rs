use crate::api;
use crate::data_api::files::FileRecord;
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const PAGES_TAG: &str = "Example pages";

#[derive(OpenApi)]
#[openapi(
    paths(
        api::index::index_handler,
        api::auth::auth_handler,
        api::data::data_handler,
        api::filestore::filestore_handler,
        api::health::health_check,
    ),
    components(schemas(FileRecord, api::health::Health)),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = PAGES_TAG, description = "HTML pages backed by the API gateway and the data API"),
    ),
    info(
        title = "Hasura app examples",
        description = "Example app behind the Hasura API gateway",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;

/// Handler for the OpenAPI JSON specification endpoint
async fn openapi_json_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Creates a router for OpenAPI documentation routes
pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json_handler))
}
