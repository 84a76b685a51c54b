//! HTTP/WebSocket server

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::audio::{AudioController, CardsWithDevices};
use crate::config::ServerConfig;
use crate::pubsub::{Message, PubSub};
use crate::ui::handlers;
use crate::ui::websocket;

/// Shared application state
pub struct AppState {
    pub audio: AudioController,
    pub bus: Arc<PubSub>,
}

impl AppState {
    pub fn new(audio: AudioController, bus: Arc<PubSub>) -> Self {
        Self { audio, bus }
    }

    /// Fetch a fresh snapshot and publish it to every subscriber
    pub async fn emit_device_state(&self) -> Arc<CardsWithDevices> {
        let snapshot = Arc::new(self.audio.fetch_snapshot().await);

        if let Err(e) = self.bus.publish(Message::device_state(snapshot.clone())).await {
            tracing::error!("Could not publish device state: {}", e);
        }

        snapshot
    }
}

/// Web server for the control API
pub struct WebServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl WebServer {
    pub fn new(config: ServerConfig, audio: AudioController, bus: Arc<PubSub>) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new(audio, bus)),
        }
    }

    /// Build the router
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/", get(handlers::index))
            .route("/audio", get(handlers::get_audio))
            .route("/audio/ws", get(websocket::websocket_handler))
            .route("/audio/volume", post(handlers::set_volume))
            .route("/audio/mute", post(handlers::set_mute))
            .route("/audio/default", post(handlers::set_default_device))
            .route("/audio/profile", post(handlers::set_card_profile))
            .route("/health", get(|| async { "OK" }))
            .with_state(self.state.clone());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Start the web server
    pub async fn start(&self) -> anyhow::Result<()> {
        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port).parse()?;

        let router = self.router();

        tracing::info!("Web server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router.into_make_service_with_connect_info::<SocketAddr>()).await?;

        Ok(())
    }

    /// Start the web server in the background
    pub fn start_background(self) -> tokio::task::JoinHandle<anyhow::Result<()>> {
        tokio::spawn(async move { self.start().await })
    }
}
