use alloc::collections::BTreeSet;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// A winning pattern of five squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub index: u8,
    pub square_ids: [SquareId; BOARD_SIDE as usize],
}

impl Line {
    pub const fn row(index: u8) -> Self {
        let first = square_id(index, 0);
        Self {
            kind: LineKind::Row,
            index,
            square_ids: [first, first + 1, first + 2, first + 3, first + 4],
        }
    }

    pub const fn column(index: u8) -> Self {
        Self {
            kind: LineKind::Column,
            index,
            square_ids: [
                square_id(0, index),
                square_id(1, index),
                square_id(2, index),
                square_id(3, index),
                square_id(4, index),
            ],
        }
    }

    /// Diagonal 0 runs top-left to bottom-right, diagonal 1 top-right to
    /// bottom-left.
    pub const fn diagonal(index: u8) -> Self {
        let square_ids = if index == 0 {
            [0, 6, 12, 18, 24]
        } else {
            [4, 8, 12, 16, 20]
        };
        Self {
            kind: LineKind::Diagonal,
            index,
            square_ids,
        }
    }

    pub fn is_complete(&self, board: &Board) -> bool {
        self.square_ids.iter().all(|&id| board.is_marked(id))
    }

    pub fn is_canonical(&self) -> bool {
        LINES.contains(self)
    }
}

/// Every winning line, in the order they are checked.
pub const LINES: [Line; 12] = [
    Line::row(0),
    Line::row(1),
    Line::row(2),
    Line::row(3),
    Line::row(4),
    Line::column(0),
    Line::column(1),
    Line::column(2),
    Line::column(3),
    Line::column(4),
    Line::diagonal(0),
    Line::diagonal(1),
];

/// Returns the first complete line in [`LINES`] order, so rows win ties over
/// columns and columns over diagonals.
pub fn check_bingo(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| line.is_complete(board))
}

pub fn winning_square_ids(line: &Line) -> BTreeSet<SquareId> {
    line.square_ids.iter().copied().collect()
}
