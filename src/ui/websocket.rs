//! WebSocket feed of device-state snapshots

use axum::{
    extract::{
        ws::{Message as WsMessage, WebSocket, WebSocketUpgrade},
        ConnectInfo, State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::protocol::SnapshotResponse;
use crate::pubsub::{Message, Payload, Topic};
use crate::ui::server::AppState;

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state, remote))
}

/// Serialize a bus message into a text frame
pub fn snapshot_frame(msg: &Message) -> Option<String> {
    match &msg.payload {
        Payload::DeviceState(snapshot) => match serde_json::to_string(&SnapshotResponse::now(snapshot.clone())) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!("Could not serialize device state: {}", e);
                None
            }
        },
    }
}

/// Forward every published snapshot until either side goes away
async fn handle_socket(socket: WebSocket, state: Arc<AppState>, remote: SocketAddr) {
    tracing::info!("New websocket connection from {}", remote);

    let (mut sender, mut receiver) = socket.split();

    // Dropping the inbox on disconnect gets the subscription evicted on the next publish
    let mut inbox = state.bus.subscribe(Topic::DeviceState);

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = inbox.recv().await {
            let Some(json) = snapshot_frame(&msg) else {
                continue;
            };

            tracing::debug!("Sending device state down the websocket");
            if sender.send(WsMessage::Text(json)).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let WsMessage::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    tracing::info!("Websocket connection from {} has been closed", remote);
}
