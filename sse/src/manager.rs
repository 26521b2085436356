use crate::connection::SessionRegistry;
use crate::session::Session;
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Default period between two frames of a stream.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

pub struct Manager {
    registry: Arc<SessionRegistry>,
    tick_interval: Duration,
    shutdown: watch::Sender<bool>,
}

impl Manager {
    pub fn new(tick_interval: Duration) -> Self {
        let (shutdown, _) = watch::channel(false);

        Self {
            registry: Arc::new(SessionRegistry::new()),
            tick_interval,
            shutdown,
        }
    }

    /// Open a new session and start its timer
    pub fn open_session(&self) -> Session {
        let session = Session::open(
            Arc::clone(&self.registry),
            self.tick_interval,
            self.shutdown.subscribe(),
        );
        info!(
            "Opened SSE session {}, {} active",
            session.id(),
            self.registry.len()
        );
        session
    }

    pub fn active_sessions(&self) -> usize {
        self.registry.len()
    }

    #[cfg(test)]
    pub(crate) fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Ask every open session to end its stream.
    ///
    /// Sessions opened afterwards end immediately as well.
    pub fn shutdown(&self) {
        info!(
            "Shutting down SSE sessions, {} active",
            self.registry.len()
        );
        self.shutdown.send_replace(true);
    }

    pub fn is_shutting_down(&self) -> bool {
        *self.shutdown.borrow()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_default_tick_interval_is_two_seconds() {
        let manager = Manager::default();
        assert_eq!(manager.tick_interval(), Duration::from_millis(2000));
        assert!(!manager.is_shutting_down());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sessions_are_tracked_independently() {
        let manager = Manager::default();

        let first = manager.open_session();
        let second = manager.open_session();
        assert_ne!(first.id(), second.id());
        assert_eq!(manager.active_sessions(), 2);

        drop(first);
        assert_eq!(manager.active_sessions(), 1);

        drop(second);
        assert_eq!(manager.active_sessions(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_sessions_each_receive_frames() {
        let manager = Manager::default();
        let mut first = Box::pin(manager.open_session().into_stream());
        let mut second = Box::pin(manager.open_session().into_stream());

        let (a, b) = tokio::join!(first.next(), second.next());

        assert!(matches!(a, Some(Ok(_))));
        assert!(matches!(b, Some(Ok(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_ends_all_open_streams() {
        let manager = Manager::default();
        let mut first = Box::pin(manager.open_session().into_stream());
        let mut second = Box::pin(manager.open_session().into_stream());

        manager.shutdown();

        assert!(manager.is_shutting_down());
        assert!(first.next().await.is_none());
        assert!(second.next().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sessions_opened_after_shutdown_end_immediately() {
        let manager = Manager::default();
        manager.shutdown();

        let mut session = manager.open_session();
        assert!(session.next_message().await.is_none());
    }
}
