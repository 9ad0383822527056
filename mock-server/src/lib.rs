use std::collections::BTreeMap;

use axum::{
    extract::{OriginalUri, Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Body returned by `GET /get`: the query arguments it received and the
/// request target they came from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Echo {
    pub args: BTreeMap<String, String>,
    pub url: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/get", get(echo))
        .route("/status/{code}", get(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(
    OriginalUri(uri): OriginalUri,
    Query(args): Query<BTreeMap<String, String>>,
) -> Json<Echo> {
    tracing::debug!(%uri, "echo");
    Json(Echo {
        args,
        url: uri.to_string(),
    })
}

async fn status(Path(code): Path<u16>) -> StatusCode {
    // 1xx is informational and never a final response.
    if !(200..=599).contains(&code) {
        return StatusCode::BAD_REQUEST;
    }
    tracing::debug!(code, "status");
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
}
