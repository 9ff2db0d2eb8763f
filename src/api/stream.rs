//! Live odds feed over WebSocket.
//!
//! The storefront backend pushes odds and score changes for live matches
//! over a broadcast WebSocket. This module connects, decodes the JSON
//! frames, and hands each decoded message to a callback. Frames that fail
//! to decode are logged and skipped; the loop ends when the server closes
//! the connection or a transport error occurs.
//!
//! This implementation does not automatically reconnect. When `run`
//! returns, the caller decides whether to dial again.

use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::domain::{Odds, Outcome};

/// Odds moved for a match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OddsUpdate {
    pub match_id: String,
    #[serde(default)]
    pub home_odds: Option<Odds>,
    #[serde(default)]
    pub draw_odds: Option<Odds>,
    #[serde(default)]
    pub away_odds: Option<Odds>,
}

impl OddsUpdate {
    /// The new odds for one outcome, when this update carried them.
    #[must_use]
    pub fn odds_for(&self, outcome: Outcome) -> Option<Odds> {
        match outcome {
            Outcome::Home => self.home_odds,
            Outcome::Draw => self.draw_odds,
            Outcome::Away => self.away_odds,
        }
    }
}

/// Score or clock changed for a live match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub match_id: String,
    pub home_score: u32,
    pub away_score: u32,
    #[serde(default)]
    pub current_time: Option<String>,
}

/// A decoded frame from the live feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum FeedMessage {
    OddsUpdate(OddsUpdate),
    ScoreUpdate(ScoreUpdate),
}

/// WebSocket client for the live odds feed.
///
/// Stateless after construction; connection state lives inside [`run`].
///
/// [`run`]: OddsStream::run
pub struct OddsStream {
    url: String,
}

impl OddsStream {
    /// Create a new stream for the given WebSocket URL
    /// (e.g. `ws://localhost:5000`).
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    /// Connect and process feed messages until the connection ends.
    ///
    /// Pings are answered with pongs to keep the connection alive. Decode
    /// failures are logged as warnings and the loop continues; transport
    /// errors terminate the loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// transport error occurs mid-stream.
    pub async fn run<F>(&self, mut on_message: F) -> crate::error::Result<()>
    where
        F: FnMut(FeedMessage),
    {
        info!(url = %self.url, "Connecting to odds feed");
        let (mut ws, response) = connect_async(&self.url).await?;
        info!(status = %response.status(), "Odds feed connected");

        while let Some(frame) = ws.next().await {
            match frame? {
                Message::Text(text) => match serde_json::from_str::<FeedMessage>(&text) {
                    Ok(message) => {
                        debug!(?message, "feed message");
                        on_message(message);
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to decode feed message, skipping");
                    }
                },
                Message::Ping(payload) => {
                    ws.send(Message::Pong(payload)).await?;
                }
                Message::Close(_) => {
                    info!("Odds feed closed by server");
                    break;
                }
                _ => {}
            }
        }

        Ok(())
    }
}
