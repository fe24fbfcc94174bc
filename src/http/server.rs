//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all employee endpoints
//! - Wire up middleware (tracing, timeout, request ID, panic catch)
//! - Construct the upstream client and employee service
//! - Bind the server to a listener and serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::client::{ClientError, UpstreamClient};
use crate::config::AppConfig;
use crate::http::handlers;
use crate::http::response::handle_panic;
use crate::service::EmployeeService;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}

/// HTTP server for the employee gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Result<Self, ClientError> {
        let client = Arc::new(UpstreamClient::new(&config.upstream)?);
        let service = EmployeeService::new(client, config.retries.clone());

        let router = Self::build_router(&config, AppState { service });
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Static segments (`search`, `highestSalary`, ...) take precedence
    /// over the `{id}` capture in axum's route matching.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/api/v1/employee",
                get(handlers::list_employees).post(handlers::create_employee),
            )
            .route("/api/v1/employee/search/{fragment}", get(handlers::search_employees))
            .route("/api/v1/employee/highestSalary", get(handlers::highest_salary))
            .route(
                "/api/v1/employee/topTenHighestEarningEmployeeNames",
                get(handlers::top_ten_earning_names),
            )
            .route(
                "/api/v1/employee/{id}",
                get(handlers::employee_by_id).delete(handlers::delete_employee),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.listener.request_timeout_secs,
                    )))
                    .layer(CatchPanicLayer::custom(handle_panic)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for Ctrl+C or an explicit shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown signal received");
        }
    }
}
