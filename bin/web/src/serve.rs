//! Static server for the built browser bundle.
//!
//! Client-side routing relies on history URLs, so any path that is not a
//! file in the bundle directory is answered with `index.html` and left for
//! the browser application to route.

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Builds the router serving `site_root` with an `index.html` fallback.
pub fn router(site_root: &Path) -> Router {
    let index = site_root.join("index.html");
    let files = ServeDir::new(site_root).fallback(ServeFile::new(index));

    Router::new()
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("index.html"), "<html>app</html>").expect("write index");
        std::fs::create_dir(dir.path().join("pkg")).expect("mkdir");
        std::fs::write(dir.path().join("pkg").join("app.js"), "// bundle").expect("write bundle");
        dir
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn serves_bundle_files() {
        let dir = site();
        let (status, body) = get(router(dir.path()), "/pkg/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "// bundle");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dir = site();
        for uri in ["/", "/login", "/poem/42", "/does/not/exist"] {
            let (status, body) = get(router(dir.path()), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, "<html>app</html>", "{uri}");
        }
    }
}
