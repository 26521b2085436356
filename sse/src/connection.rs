use dashmap::DashMap;
use std::fmt;
use std::time::Instant;

/// Unique identifier for a stream session (server-generated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    #[cfg(test)]
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bookkeeping kept for every open session
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub opened_at: Instant,
}

/// Registry of the currently open stream sessions.
///
/// Sessions are inserted when a client opens the stream and removed when the
/// session is dropped, so `len()` is the number of live timers in the process.
pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionInfo>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Register a new session - O(1)
    pub fn register(&self) -> SessionId {
        let session_id = SessionId::new();

        self.sessions.insert(
            session_id.clone(),
            SessionInfo {
                opened_at: Instant::now(),
            },
        );

        session_id
    }

    /// Unregister a session - O(1)
    pub fn unregister(&self, session_id: &SessionId) -> Option<SessionInfo> {
        self.sessions.remove(session_id).map(|(_, info)| info)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
