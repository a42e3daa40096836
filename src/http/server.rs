//! HTTP server setup and lifecycle.
//!
//! # Responsibilities
//! - Create the Axum Router for the camera endpoint
//! - Wire up middleware (tracing, request ID, timeout, access log, auth)
//! - Serve on a listener until shutdown is signalled
//! - Hand back a `ServerHandle` so callers can stop the server deterministically

use std::net::SocketAddr;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::camera::MotionState;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::http::auth::require_digest_auth;
use crate::http::handlers::{config_manager, not_found, CONFIG_MANAGER_PATH};
use crate::http::request::{access_log, MakeRequestUuid};
use crate::lifecycle::{Shutdown, ShutdownSignal};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub motion: MotionState,
}

/// HTTP server for the simulated camera.
pub struct CameraServer {
    router: Router,
    config: ServerConfig,
    motion: MotionState,
}

impl CameraServer {
    /// Create a server with motion detection initially disabled.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, MotionState::new())
    }

    /// Create a server around an existing motion state.
    pub fn with_state(config: ServerConfig, motion: MotionState) -> Self {
        let state = AppState {
            motion: motion.clone(),
        };
        let router = Self::build_router(&config, state);

        Self {
            router,
            config,
            motion,
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost first: trace, request ID, timeout, access log,
    /// then the digest gate in front of both the endpoint and the fallback.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route(CONFIG_MANAGER_PATH, get(config_manager))
            .fallback(not_found)
            .layer(middleware::from_fn(require_digest_auth))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(middleware::from_fn(access_log)),
            )
    }

    /// The assembled router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Shared motion state served by this instance.
    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Spawn the server onto the runtime.
    ///
    /// The returned handle owns the shutdown trigger; dropping it without
    /// calling [`ServerHandle::stop`] leaves the server running.
    pub fn start(self, listener: TcpListener) -> Result<ServerHandle, ServerError> {
        let local_addr = listener.local_addr()?;
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();

        let task = tokio::spawn(self.run(listener, signal));

        Ok(ServerHandle {
            local_addr,
            shutdown,
            task,
        })
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// A running server.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown: Shutdown,
    task: JoinHandle<Result<(), std::io::Error>>,
}

impl ServerHandle {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Stop accepting connections, let in-flight requests drain, and wait
    /// for the serving task to finish.
    pub async fn stop(self) -> Result<(), ServerError> {
        self.shutdown.trigger();
        self.task.await??;
        Ok(())
    }
}
