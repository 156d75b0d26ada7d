use alloc::collections::BTreeSet;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// A 5x5 card stored row-major. Boards are never edited in place by the game,
/// every move produces a new value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    squares: [Square; BOARD_SQUARES],
}

impl Board {
    pub const fn from_squares(squares: [Square; BOARD_SQUARES]) -> Self {
        Self { squares }
    }

    pub fn squares(&self) -> &[Square; BOARD_SQUARES] {
        &self.squares
    }

    pub fn get(&self, id: SquareId) -> Option<&Square> {
        self.squares.get(usize::from(id))
    }

    pub fn is_marked(&self, id: SquareId) -> bool {
        self.get(id).is_some_and(|square| square.is_marked)
    }

    pub fn marked_count(&self) -> usize {
        self.squares.iter().filter(|square| square.is_marked).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(BOARD_SIDE.into())
    }

    /// Returns a copy with the square `id` flipped. The free space and unknown
    /// ids give back an unchanged copy.
    pub fn toggled(&self, id: SquareId) -> Self {
        let mut board = self.clone();
        match board.squares.get_mut(usize::from(id)) {
            Some(square) if square.can_toggle() => square.is_marked = !square.is_marked,
            Some(_) => log::trace!("square {} is the free space, not toggled", id),
            None => log::debug!("no square with id {}, board unchanged", id),
        }
        board
    }

    /// Checks the invariants a generated board always holds. Used when a board
    /// comes from outside the generator, e.g. a stored snapshot.
    pub fn validate(&self) -> core::result::Result<(), SnapshotError> {
        let mut texts = BTreeSet::new();

        for (position, square) in self.squares.iter().enumerate() {
            let position = position as SquareId;
            let invalid = |reason| SnapshotError::InvalidBoard { position, reason };

            if square.id != position {
                return Err(invalid("id does not match position"));
            }

            if position == FREE_SPACE_ID {
                if !square.is_free_space {
                    return Err(invalid("center square must be the free space"));
                }
                if !square.is_marked {
                    return Err(invalid("free space must be marked"));
                }
            } else {
                if square.is_free_space {
                    return Err(invalid("free space outside the center"));
                }
                if !texts.insert(square.text.as_str()) {
                    return Err(invalid("duplicate prompt"));
                }
            }
        }

        Ok(())
    }
}

impl Index<SquareId> for Board {
    type Output = Square;

    fn index(&self, id: SquareId) -> &Self::Output {
        &self.squares[usize::from(id)]
    }
}

/// Free-function form of [`Board::toggled`].
pub fn toggle_square(board: &Board, id: SquareId) -> Board {
    board.toggled(id)
}

/// Board with `prompt N` on square N and nothing but the free space marked.
#[cfg(test)]
pub(crate) fn numbered_board() -> Board {
    Board::from_squares(core::array::from_fn(|i| {
        let id = i as SquareId;
        if id == FREE_SPACE_ID {
            Square::free_space(id, "FREE")
        } else {
            Square::prompt(id, alloc::format!("prompt {}", i))
        }
    }))
}
