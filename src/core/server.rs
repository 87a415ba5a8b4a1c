use crate::adapters::storage::LocalStorage;
use crate::config::server_config::ServerSettings;
use crate::core::static_files::{not_found, serve_file};
use crate::core::Storage;
use crate::domain::model::{PostAck, ServiceCatalog};
use crate::utils::error::Result;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub struct AppState<S: Storage> {
    pub storage: S,
    pub catalog: ServiceCatalog,
    pub index_file: String,
}

impl<S: Storage> AppState<S> {
    pub fn new(storage: S, catalog: ServiceCatalog, index_file: impl Into<String>) -> Self {
        Self {
            storage,
            catalog,
            index_file: index_file.into(),
        }
    }
}

pub fn build_router<S: Storage + 'static>(state: AppState<S>, services_path: &str) -> Router {
    Router::new()
        .route(
            services_path,
            get(list_services::<S>)
                .head(unsupported_method)
                .post(acknowledge_post)
                .fallback(unsupported_method),
        )
        .fallback(dispatch::<S>)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn list_services<S: Storage>(State(state): State<Arc<AppState<S>>>) -> Json<ServiceCatalog> {
    tracing::debug!("Serving {} services", state.catalog.len());
    Json(state.catalog.clone())
}

async fn acknowledge_post() -> Json<PostAck> {
    Json(PostAck::default())
}

async fn unsupported_method() -> Response {
    not_found()
}

// GET 走靜態檔案，POST 一律回覆確認訊息，其餘方法回 404
async fn dispatch<S: Storage>(
    State(state): State<Arc<AppState<S>>>,
    method: Method,
    uri: Uri,
) -> Response {
    match method {
        Method::GET => serve_file(&state.storage, uri.path(), &state.index_file).await,
        Method::POST => acknowledge_post().await.into_response(),
        _ => not_found(),
    }
}

/// Builds the production router: files from the configured web root plus the services endpoint.
pub fn router_from_settings(settings: &ServerSettings) -> Router {
    let storage = LocalStorage::new(&settings.server.web_root);
    let state = AppState::new(
        storage,
        ServiceCatalog::new(settings.api.services.clone()),
        settings.server.index_file.clone(),
    );
    build_router(state, &settings.api.services_path)
}

pub async fn serve_until<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn start_server(settings: &ServerSettings) -> Result<()> {
    let listener =
        TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        bind_address = %local_addr,
        web_root = %settings.server.web_root,
        services_path = %settings.api.services_path,
        "🚀 Server started on port {}",
        local_addr.port()
    );

    serve_until(listener, router_from_settings(settings), shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received, draining connections"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
