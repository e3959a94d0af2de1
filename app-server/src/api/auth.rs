use crate::errors::ApiError;
use crate::identity::{gateway_required, GatewayIdentity};
use crate::openapi::PAGES_TAG;
use crate::state::AppState;
use crate::templates::{render, AUTH_ANONYMOUS, AUTH_USER};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tera::Context;

/// Shows who the gateway resolved the caller's session to.
///
/// The gateway's auth UI handles login and signup and redirects back here, so
/// this service contains no session handling of its own.
#[utoipa::path(
    get,
    path = "/examples/auth",
    tag = PAGES_TAG,
    params(
        ("X-Hasura-Allowed-Roles" = Option<String>, Header, description = "Comma separated roles set by the gateway"),
        ("X-Hasura-Base-Domain" = Option<String>, Header, description = "Base domain of the cluster"),
        ("X-Hasura-User-Id" = Option<String>, Header, description = "Id of the logged-in user"),
    ),
    responses(
        (status = 200, description = "Login prompt or user details", content_type = "text/html", body = String)
    )
)]
pub(crate) async fn auth_handler(
    State(state): State<AppState>,
    identity: GatewayIdentity,
) -> Result<Response, ApiError> {
    let mut context = Context::new();
    let template = match identity {
        GatewayIdentity::Missing => return Ok(gateway_required()),
        GatewayIdentity::Anonymous { base_domain } => {
            context.insert("base_domain", &base_domain);
            AUTH_ANONYMOUS
        }
        GatewayIdentity::User {
            base_domain,
            user_id,
            roles,
            raw_roles,
        } => {
            context.insert("base_domain", &base_domain);
            context.insert("user_id", &user_id);
            context.insert("roles", &raw_roles);
            context.insert("role_list", &roles);
            AUTH_USER
        }
    };

    Ok(render(&state.templates, template, &context)?.into_response())
}
