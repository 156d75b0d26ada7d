use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::SquareId;

/// One cell of the bingo card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    pub id: SquareId,
    pub text: String,
    pub is_marked: bool,
    pub is_free_space: bool,
}

impl Square {
    pub fn prompt(id: SquareId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_marked: false,
            is_free_space: false,
        }
    }

    pub fn free_space(id: SquareId, label: impl Into<String>) -> Self {
        Self {
            id,
            text: label.into(),
            is_marked: true,
            is_free_space: true,
        }
    }

    pub const fn can_toggle(&self) -> bool {
        !self.is_free_space
    }
}
