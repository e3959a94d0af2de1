use crate::data_api::files::select_user_files;
use crate::errors::ApiError;
use crate::identity::{gateway_required, GatewayIdentity};
use crate::openapi::PAGES_TAG;
use crate::state::AppState;
use crate::templates::{render, FILESTORE_ANONYMOUS, FILESTORE_USER};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tera::Context;

/// Lists the files the logged-in user owns and offers an upload box.
///
/// Uploads and downloads go straight to the filestore service from the
/// browser; this handler only reads the filestore catalog.
#[utoipa::path(
    get,
    path = "/examples/filestore",
    tag = PAGES_TAG,
    params(
        ("X-Hasura-Allowed-Roles" = Option<String>, Header, description = "Comma separated roles set by the gateway"),
        ("X-Hasura-Base-Domain" = Option<String>, Header, description = "Base domain of the cluster"),
        ("X-Hasura-User-Id" = Option<String>, Header, description = "Id of the logged-in user"),
    ),
    responses(
        (status = 200, description = "Login prompt or the user's files", content_type = "text/html", body = String),
        (status = 500, description = "Data API unreachable, failed, or returned an unexpected shape. Other error statuses of the data API are passed through")
    )
)]
pub(crate) async fn filestore_handler(
    State(state): State<AppState>,
    identity: GatewayIdentity,
) -> Result<Response, ApiError> {
    let mut context = Context::new();
    let template = match identity {
        GatewayIdentity::Missing => return Ok(gateway_required()),
        GatewayIdentity::Anonymous { base_domain } => {
            context.insert("base_domain", &base_domain);
            FILESTORE_ANONYMOUS
        }
        GatewayIdentity::User {
            base_domain,
            user_id,
            ..
        } => {
            let files = select_user_files(&state.data_client, &user_id).await?;
            log::debug!("Found {} files for user {}", files.len(), user_id);
            context.insert("base_domain", &base_domain);
            context.insert("files", &files);
            FILESTORE_USER
        }
    };

    Ok(render(&state.templates, template, &context)?.into_response())
}
