// SPDX-License-Identifier: GPL-3.0-only
use axum::{
    extract::State,
    response::Response,
    routing::get,
    Form, Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::api::error::AppError;
use crate::api::handlers::PageHandlers;
use crate::api::session::Session;
use crate::forms::FormInput;

pub struct HttpServer {
    handlers: Arc<PageHandlers>,
    addr: SocketAddr,
}

impl HttpServer {
    pub fn new(handlers: PageHandlers, addr: SocketAddr) -> Self {
        Self {
            handlers: Arc::new(handlers),
            addr,
        }
    }

    /// Serve until `shutdown` resolves, then let in-flight requests finish.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_router(Arc::clone(&self.handlers));

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!(addr = %listener.local_addr()?, "Starting HTTP server");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server exited");
        Ok(())
    }
}

pub fn create_router(handlers: Arc<PageHandlers>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/cafes", get(list_cafes_handler))
        .route("/add", get(add_form_handler).post(submit_add_handler))
        .route("/delete", get(delete_form_handler).post(submit_delete_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(handlers)
}

async fn index_handler(
    State(handlers): State<Arc<PageHandlers>>,
    session: Session,
) -> Response {
    session.attach(handlers.index(&session).await)
}

async fn list_cafes_handler(
    State(handlers): State<Arc<PageHandlers>>,
    session: Session,
) -> Result<Response, AppError> {
    Ok(session.attach(handlers.list_cafes().await?))
}

async fn add_form_handler(
    State(handlers): State<Arc<PageHandlers>>,
    session: Session,
) -> Response {
    session.attach(handlers.add_form(&session))
}

async fn submit_add_handler(
    State(handlers): State<Arc<PageHandlers>>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Result<Response, AppError> {
    Ok(session.attach(handlers.submit_add(&session, input).await?))
}

async fn delete_form_handler(
    State(handlers): State<Arc<PageHandlers>>,
    session: Session,
) -> Response {
    session.attach(handlers.delete_form(&session))
}

async fn submit_delete_handler(
    State(handlers): State<Arc<PageHandlers>>,
    session: Session,
    Form(input): Form<FormInput>,
) -> Result<Response, AppError> {
    Ok(session.attach(handlers.submit_delete(&session, input).await?))
}

async fn not_found_handler(State(handlers): State<Arc<PageHandlers>>) -> Response {
    handlers.not_found()
}
