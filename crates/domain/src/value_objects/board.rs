//! Board dimensions for a minefield game
//!
//! A `Board` is valid by construction: the bomb count is always strictly
//! smaller than the number of cells on the square grid.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Validated grid dimension and bomb count.
///
/// # Invariants
///
/// - `bomb_count < size * size` (so `size` is always at least 1)
///
/// # Example
///
/// ```
/// use minefield_domain::value_objects::Board;
///
/// let board = Board::new(5, 3).unwrap();
/// assert_eq!(board.cell_count(), 25);
/// assert!(Board::new(2, 4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: u32,
    #[serde(rename = "bombs")]
    bomb_count: u32,
}

impl Board {
    /// Create a new validated board.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `bomb_count >= size * size`.
    pub fn new(size: u32, bomb_count: u32) -> Result<Self, DomainError> {
        let cells = u64::from(size) * u64::from(size);
        if u64::from(bomb_count) >= cells {
            return Err(DomainError::validation("the number of bombs is invalid"));
        }
        Ok(Self { size, bomb_count })
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn bomb_count(&self) -> u32 {
        self.bomb_count
    }

    /// Total number of cells; computed in `u64` so large sizes cannot overflow.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.size) * u64::from(self.size)
    }
}

#[derive(Deserialize)]
struct RawBoard {
    size: u32,
    bombs: u32,
}

impl TryFrom<RawBoard> for Board {
    type Error = DomainError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::new(raw.size, raw.bombs)
    }
}
