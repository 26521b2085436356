use crate::connection::{SessionId, SessionRegistry};
use crate::message::RandomNumber;
use async_stream::stream;
use axum::response::sse::Event;
use futures::Stream;
use log::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// One open `/random` stream.
///
/// A session owns its recurring timer and its random number generator. It is
/// registered in the `SessionRegistry` for as long as it lives and removes
/// itself on drop, so the timer can never outlive the connection that owns it.
pub struct Session {
    id: SessionId,
    ticker: Interval,
    rng: StdRng,
    shutdown: watch::Receiver<bool>,
    registry: Arc<SessionRegistry>,
}

impl Session {
    pub(crate) fn open(
        registry: Arc<SessionRegistry>,
        tick_interval: Duration,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        let id = registry.register();

        // First frame goes out one full period after the stream opens
        let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        Self {
            id,
            ticker,
            rng: StdRng::from_entropy(),
            shutdown,
            registry,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Waits for the next tick and draws a new value.
    ///
    /// Returns `None` once the server has started shutting down.
    pub async fn next_message(&mut self) -> Option<RandomNumber> {
        if *self.shutdown.borrow() {
            return None;
        }

        tokio::select! {
            _ = self.ticker.tick() => {
                let message = RandomNumber::generate(&mut self.rng);
                info!(
                    "Random integer (0..99) generated: {} (session {})",
                    message.random, self.id
                );
                Some(message)
            }
            // A dropped sender means the manager is gone, treat it like shutdown
            _ = self.shutdown.changed() => None,
        }
    }

    /// Turns the session into an SSE event stream.
    ///
    /// The stream owns the session: when the HTTP server drops the response
    /// body (client went away or the write failed) the timer goes with it.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<Event, Infallible>> + Send {
        stream! {
            while let Some(message) = self.next_message().await {
                match message.to_event() {
                    Ok(event) => yield Ok(event),
                    Err(e) => error!("Failed to serialize SSE message for session {}: {e}", self.id),
                }
            }

            debug!("SSE stream for session {} ended", self.id);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(info) = self.registry.unregister(&self.id) {
            info!(
                "Closed SSE session {} after {:?}, {} still active",
                self.id,
                info.opened_at.elapsed(),
                self.registry.len()
            );
        }
    }
}
