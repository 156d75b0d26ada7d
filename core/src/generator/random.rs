use alloc::vec::Vec;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Generation strategy that draws prompts uniformly from the pool, seeded so a
/// board can be reproduced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, pool: &PromptPool) -> Result<Board> {
        use rand::SeedableRng;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_board(pool, &mut rng)
    }
}

/// Shuffles the distinct prompts of `pool` and lays the first 24 out row-major
/// around the free space.
pub fn generate_board<R: Rng + ?Sized>(pool: &PromptPool, rng: &mut R) -> Result<Board> {
    let mut prompts: Vec<&str> = pool.distinct_prompts();
    if prompts.len() < PROMPTS_REQUIRED {
        return Err(GameError::InsufficientPrompts {
            available: prompts.len(),
            required: PROMPTS_REQUIRED,
        });
    }

    if prompts.len() > PROMPTS_REQUIRED {
        log::trace!(
            "drawing {} of {} distinct prompts",
            PROMPTS_REQUIRED,
            prompts.len()
        );
    }

    prompts.shuffle(rng);

    let squares = core::array::from_fn(|position| {
        let id = position as SquareId;
        match position.cmp(&usize::from(FREE_SPACE_ID)) {
            core::cmp::Ordering::Less => Square::prompt(id, prompts[position]),
            core::cmp::Ordering::Equal => Square::free_space(id, pool.free_space.as_str()),
            core::cmp::Ordering::Greater => Square::prompt(id, prompts[position - 1]),
        }
    });

    Ok(Board::from_squares(squares))
}
