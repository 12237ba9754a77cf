//! Embedded SPA assets.

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use http::header;
use rust_embed::Embed;
use tower_http::trace::TraceLayer;

const INDEX: &str = "index.html";

/// Embedded static files from dist/ directory
#[derive(Embed)]
#[folder = "../../dist/"]
struct Assets;

pub fn router() -> Router {
    Router::new()
        .fallback(serve_embedded)
        .layer(TraceLayer::new_for_http())
}

/// Maps a request path to an asset name.
fn asset_path(path: &str) -> &str {
    let path = path.trim_start_matches('/');
    if path.is_empty() { INDEX } else { path }
}

fn asset_response(path: &str) -> Option<Response> {
    let content = Assets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            [(header::CONTENT_TYPE, mime.as_ref())],
            content.data.into_owned(),
        )
            .into_response(),
    )
}

/// Serve embedded static files with SPA fallback
async fn serve_embedded(uri: Uri) -> Response {
    let path = asset_path(uri.path());

    if let Some(response) = asset_response(path) {
        return response;
    }

    tracing::debug!("No asset for {path}, serving {INDEX}");
    asset_response(INDEX).unwrap_or_else(|| {
        tracing::warn!("{INDEX} missing from embedded assets");
        StatusCode::NOT_FOUND.into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::Request;
    use tower::ServiceExt;

    async fn get(path: &str) -> Response {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        router().oneshot(request).await.unwrap()
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path("/"), "index.html");
        assert_eq!(asset_path(""), "index.html");
        assert_eq!(asset_path("/sarview-client.js"), "sarview-client.js");
        assert_eq!(asset_path("/historical"), "historical");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }

    #[tokio::test]
    async fn test_client_route_falls_back_to_index() {
        let index = axum::body::to_bytes(get("/").await.into_body(), usize::MAX)
            .await
            .unwrap();

        let response = get("/historical").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body, index);
    }
}
