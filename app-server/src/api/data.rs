use crate::data_api::articles::select_articles;
use crate::errors::ApiError;
use crate::openapi::PAGES_TAG;
use crate::state::AppState;
use crate::templates::{render, DATA};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use http::header::HOST;
use http::{HeaderMap, StatusCode, Uri};
use tera::Context;

/// Shown when the data API is the in-cluster address but the request did not
/// come through the cluster, so the address cannot resolve.
pub const LOCAL_DATA_HINT_HTML: &str = "Set <code>APP_DATA__URL</code> to a reachable data API \
(e.g. <code>http://localhost:9000/v1/query</code> after \
<code>hasura ms port-forward data -n hasura --local-port=9000</code>) to test locally.";

/// Renders the articles table fetched through the data API
#[utoipa::path(
    get,
    path = "/examples/data",
    tag = PAGES_TAG,
    responses(
        (status = 200, description = "Articles as indented JSON", content_type = "text/html", body = String),
        (status = 500, description = "Data API unreachable, failed, or returned invalid JSON. Other error statuses of the data API are passed through")
    )
)]
pub(crate) async fn data_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, ApiError> {
    let host = request_host(&headers, &uri);
    if !state.config.data.reachable_from(host) {
        log::warn!(
            "Data API at {} is not reachable from host '{}'",
            state.config.data.url,
            host
        );
        return Ok((StatusCode::OK, Html(LOCAL_DATA_HINT_HTML)).into_response());
    }

    let articles = select_articles(&state.data_client).await?;
    let pretty = serde_json::to_string_pretty(&articles).map_err(ApiError::internal)?;

    let mut context = Context::new();
    context.insert("data", &pretty);
    Ok(render(&state.templates, DATA, &context)?.into_response())
}

/// Host the request was addressed to. HTTP/2 requests carry it in the
/// `:authority` pseudo-header, which ends up in the URI instead of `Host`.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri) -> &'a str {
    headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or_default()
}
