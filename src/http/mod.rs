//! HTTP facade: axum router, middleware, and the server loop.

pub mod error;
pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument};

use crate::{base::types::Void, runtime::Runtime};

/// Builds the router with all routes and middleware.
pub fn build_router(runtime: Runtime) -> Router {
    let cors_permissive = runtime.config.cors_permissive;

    let router = Router::new()
        .route("/", get(handlers::get_root))
        .route("/test", get(handlers::get_test))
        .route("/contact", post(handlers::post_contact))
        .route("/chat", post(handlers::post_chat))
        .with_state(runtime)
        .layer(TraceLayer::new_for_http());

    if cors_permissive { router.layer(CorsLayer::permissive()) } else { router }
}

/// Serves the router on the configured address until Ctrl-C.
#[instrument(skip_all)]
pub async fn serve(runtime: Runtime) -> Void {
    let address = runtime.config.address();
    let app = build_router(runtime);

    let listener = TcpListener::bind(&address).await?;
    info!("Listening on {} ...", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down gracefully.");
        })
        .await?;

    Ok(())
}
