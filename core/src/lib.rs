#![no_std]

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use generator::*;
pub use line::*;
pub use session::*;
pub use snapshot::*;
pub use square::*;
pub use storage::*;
pub use types::*;

mod board;
mod error;
mod generator;
mod line;
mod session;
mod snapshot;
mod square;
mod storage;
mod types;

/// Prompts a board is drawn from, plus the label printed on the free space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPool {
    pub free_space: String,
    pub prompts: Vec<String>,
}

impl PromptPool {
    pub fn new<I, S>(free_space: impl Into<String>, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            free_space: free_space.into(),
            prompts: prompts.into_iter().map(Into::into).collect(),
        }
    }

    /// Prompts with repeats removed, keeping the first occurrence of each.
    pub fn distinct_prompts(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.prompts
            .iter()
            .map(String::as_str)
            .filter(|prompt| seen.insert(*prompt))
            .collect()
    }

    pub fn has_enough_prompts(&self) -> bool {
        self.distinct_prompts().len() >= PROMPTS_REQUIRED
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    NoChange,
    Changed,
    Bingo,
}

impl Transition {
    pub const fn has_update(self) -> bool {
        use Transition::*;
        match self {
            NoChange => false,
            Changed => true,
            Bingo => true,
        }
    }
}
