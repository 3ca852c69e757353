//! Stream session identifiers
//!
//! The streaming layer keys incremental token events by session. Identifier
//! generation is injected by the owning caller rather than read from global
//! state, so tests can substitute a deterministic counter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one streaming generation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of collision-resistant session identifiers.
pub trait SessionIdSource: Send {
    /// Produce the next identifier.
    fn next_id(&mut self) -> SessionId;
}

/// Random UUID-v4 identifiers for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessions;

impl SessionIdSource for UuidSessions {
    fn next_id(&mut self) -> SessionId {
        SessionId(Uuid::new_v4())
    }
}

/// Monotonic identifiers for deterministic tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSessions {
    next: u64,
}

impl SessionIdSource for CountingSessions {
    fn next_id(&mut self) -> SessionId {
        let id = SessionId(Uuid::from_u128(self.next as u128));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_sessions_do_not_collide() {
        let mut source = UuidSessions;
        let first = source.next_id();
        let second = source.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn counting_sessions_are_deterministic() {
        let mut source = CountingSessions::default();
        let a = source.next_id();
        let b = source.next_id();

        let mut replay = CountingSessions::default();
        assert_eq!(replay.next_id(), a);
        assert_eq!(replay.next_id(), b);
        assert_ne!(a, b);
    }

    #[test]
    fn session_id_displays_as_uuid() {
        let uuid = Uuid::from_u128(7);
        let id = SessionId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }
}
