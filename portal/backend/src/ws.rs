//! WebSocket handling for real-time dashboard updates

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::time::{interval, Duration};

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct WsMessage {
    pub msg_type: String,
    pub data: serde_json::Value,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    // Send initial connection success
    let welcome = WsMessage {
        msg_type: "connected".into(),
        data: serde_json::json!({ "status": "ok" }),
    };

    if socket
        .send(Message::Text(serde_json::to_string(&welcome).unwrap()))
        .await
        .is_err()
    {
        return;
    }

    // Push a board summary every few seconds so the dashboard stays live
    // without polling.
    let mut ticker = interval(Duration::from_secs(5));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let update = status_update(&state).await;
                if socket.send(Message::Text(serde_json::to_string(&update).unwrap())).await.is_err() {
                    break;
                }
            }

            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if let Ok(parsed) = serde_json::from_str::<WsMessage>(&text) {
                            match parsed.msg_type.as_str() {
                                "ping" => {
                                    let pong = WsMessage {
                                        msg_type: "pong".into(),
                                        data: serde_json::json!({}),
                                    };
                                    let _ = socket.send(Message::Text(serde_json::to_string(&pong).unwrap())).await;
                                }
                                _ => {}
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }
}

async fn status_update(state: &AppState) -> WsMessage {
    let lanes = state.tickets.read().await.board("");
    let unread = state.notifications.read().await.unread_count();

    WsMessage {
        msg_type: "status_update".into(),
        data: serde_json::json!({
            "new": lanes.new.len(),
            "in_progress": lanes.in_progress.len(),
            "repaired": lanes.repaired.len(),
            "scrap": lanes.scrap.len(),
            "unread_notifications": unread,
            "fleet_health_index": state.registry.fleet_health_index(),
        }),
    }
}
