/// Position of a square on the board, `row * BOARD_SIDE + col`.
pub type SquareId = u8;

/// Width and height of the board.
pub const BOARD_SIDE: u8 = 5;

/// Total number of squares on a board.
pub const BOARD_SQUARES: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// The center square, always the free space.
pub const FREE_SPACE_ID: SquareId = 12;

/// Number of prompts needed to fill every square except the free space.
pub const PROMPTS_REQUIRED: usize = BOARD_SQUARES - 1;

pub const fn square_id(row: u8, col: u8) -> SquareId {
    row * BOARD_SIDE + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_space_is_the_center() {
        assert_eq!(square_id(2, 2), FREE_SPACE_ID);
    }

    #[test]
    fn ids_are_row_major() {
        assert_eq!(square_id(0, 4), 4);
        assert_eq!(square_id(1, 0), 5);
        assert_eq!(square_id(4, 4), 24);
    }
}
