//! Identifier generators.

use minefield_domain::GameId;
use uuid::Uuid;

use crate::infrastructure::ports::IdGeneratorPort;

/// Random v4 UUIDs rendered as hyphenated strings.
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGeneratorPort for UuidGenerator {
    fn next_id(&self) -> GameId {
        GameId::from_uuid(Uuid::new_v4())
    }
}

/// Deterministic ids for testing: `game-1`, `game-2`, ...
#[cfg(test)]
pub struct SequentialIds(std::sync::atomic::AtomicU64);

#[cfg(test)]
impl SequentialIds {
    pub fn new() -> Self {
        Self(std::sync::atomic::AtomicU64::new(0))
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.0.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl IdGeneratorPort for SequentialIds {
    fn next_id(&self) -> GameId {
        let n = self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
        GameId::new(format!("game-{n}"))
    }
}
