//! Game aggregate - a single minefield owned by the service
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: identity and board cannot be changed after creation
//! - **Valid by construction**: `new()` takes a pre-validated `Board`
//! - **Value semantics**: callers get clones, never a handle into storage

use serde::{Deserialize, Serialize};

use crate::value_objects::Board;
use crate::GameId;

/// A created game.
///
/// # Invariants
///
/// - `id` is assigned once, at creation, and never changes
/// - `board.bomb_count() < board.size()^2` (enforced by `Board`)
///
/// # Example
///
/// ```
/// use minefield_domain::{Game, GameId};
/// use minefield_domain::value_objects::Board;
///
/// let board = Board::new(5, 3).unwrap();
/// let game = Game::new(GameId::new("g-1"), "Alpha", board);
///
/// assert_eq!(game.name(), "Alpha");
/// assert_eq!(game.size(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    name: String,
    #[serde(flatten)]
    board: Board,
}

impl Game {
    /// Create a game from an already-assigned id and a validated board.
    ///
    /// `name` is stored as given; it carries no validation.
    pub fn new(id: GameId, name: impl Into<String>, board: Board) -> Self {
        Self {
            id,
            name: name.into(),
            board,
        }
    }

    #[inline]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Grid side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.board.size()
    }

    #[inline]
    pub fn bomb_count(&self) -> u32 {
        self.board.bomb_count()
    }
}
