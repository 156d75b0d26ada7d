use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, pool: &PromptPool) -> Result<Board>;
}
