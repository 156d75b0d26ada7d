use alloc::collections::BTreeSet;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Start,
    Playing,
    Bingo,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Bingo)
    }
}

/// One player's game: the current board and state, mirrored into `store`
/// after every transition.
#[derive(Debug)]
pub struct GameSession<S: KeyValueStore> {
    store: S,
    prompts: PromptPool,
    rng: SmallRng,
    state: GameState,
    board: Option<Board>,
    winning_line: Option<Line>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Creates a session, resuming from `store` when it holds a valid snapshot
    /// of the current schema. Anything else starts a fresh game.
    pub fn restore(mut store: S, prompts: PromptPool, seed: u64) -> Self {
        let snapshot = Self::load(&mut store);
        let mut session = Self {
            store,
            prompts,
            rng: SmallRng::seed_from_u64(seed),
            state: GameState::Start,
            board: None,
            winning_line: None,
        };

        if let Some(snapshot) = snapshot {
            log::debug!("resuming saved game in state {:?}", snapshot.game_state);
            session.state = snapshot.game_state;
            session.board = snapshot.board;
            session.winning_line = snapshot.winning_line;
        }

        session
    }

    fn load(store: &mut S) -> Option<PersistedSnapshot> {
        let raw = match store.get(PersistedSnapshot::KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no saved game");
                return None;
            }
            Err(err) => {
                log::warn!("could not read saved game: {}", err);
                return None;
            }
        };

        match decode_snapshot(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("discarding saved game: {}", err);
                if let Err(err) = store.remove(PersistedSnapshot::KEY) {
                    log::warn!("could not remove saved game: {}", err);
                }
                None
            }
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    pub fn winning_square_ids(&self) -> BTreeSet<SquareId> {
        self.winning_line
            .as_ref()
            .map(winning_square_ids)
            .unwrap_or_default()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot::new(self.state, self.board.clone(), self.winning_line)
    }

    /// Deals a new board. Only valid from [`GameState::Start`]; a running or
    /// won game has to be reset first.
    pub fn start_game(&mut self) -> Result<Transition> {
        if self.state != GameState::Start {
            log::debug!("start ignored in state {:?}", self.state);
            return Ok(Transition::NoChange);
        }

        let board = generate_board(&self.prompts, &mut self.rng)?;
        self.board = Some(board);
        self.winning_line = None;
        self.state = GameState::Playing;
        log::debug!("game started");
        self.save();
        Ok(Transition::Changed)
    }

    pub fn mark_square(&mut self, id: SquareId) -> Transition {
        if !self.state.is_playing() {
            log::debug!("mark {} ignored in state {:?}", id, self.state);
            return Transition::NoChange;
        }

        let Some(board) = &self.board else {
            return Transition::NoChange;
        };

        if !board.get(id).is_some_and(Square::can_toggle) {
            log::debug!("square {} cannot be toggled", id);
            return Transition::NoChange;
        }

        let board = board.toggled(id);
        let winning_line = check_bingo(&board);
        self.board = Some(board);

        let transition = match winning_line {
            Some(line) => {
                log::debug!("bingo on {:?} {}", line.kind, line.index);
                self.winning_line = Some(line);
                self.state = GameState::Bingo;
                Transition::Bingo
            }
            None => Transition::Changed,
        };
        self.save();
        transition
    }

    /// Returns to [`GameState::Start`] from any state.
    pub fn reset_game(&mut self) -> Transition {
        if self.state == GameState::Start && self.board.is_none() {
            return Transition::NoChange;
        }

        self.state = GameState::Start;
        self.board = None;
        self.winning_line = None;
        log::debug!("game reset");
        self.save();
        Transition::Changed
    }

    fn save(&mut self) {
        let raw = match encode_snapshot(&self.snapshot()) {
            Ok(raw) => raw,
            Err(err) => {
                log::error!("could not encode game: {}", err);
                return;
            }
        };

        if let Err(err) = self.store.set(PersistedSnapshot::KEY, &raw) {
            log::warn!("could not save game: {}", err);
        }
    }
}
