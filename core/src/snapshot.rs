use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Bumped whenever the stored shape changes; older snapshots are discarded.
pub const SCHEMA_VERSION: u32 = 1;

/// Everything needed to resume a session, as written to the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    pub version: u32,
    pub game_state: GameState,
    pub board: Option<Board>,
    pub winning_line: Option<Line>,
}

impl StorageKey for PersistedSnapshot {
    const KEY: &'static str = "bingo:game";
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl PersistedSnapshot {
    pub fn new(game_state: GameState, board: Option<Board>, winning_line: Option<Line>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            game_state,
            board,
            winning_line,
        }
    }

    pub fn validate(&self) -> core::result::Result<(), SnapshotError> {
        use GameState::*;

        if self.version != SCHEMA_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: self.version,
                expected: SCHEMA_VERSION,
            });
        }

        if let Some(board) = &self.board {
            board.validate()?;
        }

        if let Some(line) = &self.winning_line {
            if !line.is_canonical() {
                return Err(SnapshotError::InvalidLine);
            }
        }

        match (self.game_state, &self.board, &self.winning_line) {
            (Start, None, None) => Ok(()),
            (Start, _, _) => Err(SnapshotError::Inconsistent(
                "start state carries a board or line",
            )),
            (Playing, Some(board), None) => match check_bingo(board) {
                None => Ok(()),
                Some(_) => Err(SnapshotError::Inconsistent(
                    "playing board already has a complete line",
                )),
            },
            (Playing, _, _) => Err(SnapshotError::Inconsistent(
                "playing state needs a board and no winning line",
            )),
            (Bingo, Some(board), Some(line)) if line.is_complete(board) => Ok(()),
            (Bingo, Some(_), Some(_)) => Err(SnapshotError::Inconsistent(
                "winning line is not fully marked",
            )),
            (Bingo, _, _) => Err(SnapshotError::Inconsistent(
                "bingo state needs a board and a winning line",
            )),
        }
    }
}

pub fn encode_snapshot(snapshot: &PersistedSnapshot) -> core::result::Result<String, SnapshotError> {
    serde_json::to_string(snapshot).map_err(|err| SnapshotError::Malformed(err.to_string()))
}

/// Parses and validates a stored snapshot. The version is checked before the
/// rest of the shape so snapshots from other schema versions are reported as
/// such rather than as malformed.
pub fn decode_snapshot(raw: &str) -> core::result::Result<PersistedSnapshot, SnapshotError> {
    let malformed = |err: serde_json::Error| SnapshotError::Malformed(err.to_string());

    let VersionProbe { version } = serde_json::from_str(raw).map_err(malformed)?;
    if version != SCHEMA_VERSION {
        return Err(SnapshotError::VersionMismatch {
            found: version,
            expected: SCHEMA_VERSION,
        });
    }

    let snapshot: PersistedSnapshot = serde_json::from_str(raw).map_err(malformed)?;
    snapshot.validate()?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::numbered_board;
    use alloc::format;

    fn bingo_snapshot() -> PersistedSnapshot {
        let board = [0, 1, 2, 3, 4]
            .into_iter()
            .fold(numbered_board(), |board, id| board.toggled(id));
        PersistedSnapshot::new(GameState::Bingo, Some(board), Some(Line::row(0)))
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = bingo_snapshot();
        let raw = encode_snapshot(&snapshot).unwrap();
        assert_eq!(decode_snapshot(&raw), Ok(snapshot));
    }

    #[test]
    fn snapshot_uses_camel_case_fields() {
        let raw = encode_snapshot(&PersistedSnapshot::new(GameState::Start, None, None)).unwrap();
        assert_eq!(
            raw,
            r#"{"version":1,"gameState":"start","board":null,"winningLine":null}"#
        );
    }

    #[test]
    fn square_uses_camel_case_fields() {
        let raw = serde_json::to_string(&numbered_board()[FREE_SPACE_ID]).unwrap();
        assert_eq!(
            raw,
            r#"{"id":12,"text":"FREE","isMarked":true,"isFreeSpace":true}"#
        );
    }

    #[test]
    fn other_version_is_rejected_before_shape() {
        let raw = r#"{"version":0,"state":"legacy"}"#;
        assert_eq!(
            decode_snapshot(raw),
            Err(SnapshotError::VersionMismatch {
                found: 0,
                expected: SCHEMA_VERSION,
            })
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(
            decode_snapshot("not json"),
            Err(SnapshotError::Malformed(_))
        ));
        assert!(matches!(
            decode_snapshot(r#"{"version":1,"gameState":"won","board":null,"winningLine":null}"#),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn short_board_is_malformed() {
        let raw = format!(
            r#"{{"version":1,"gameState":"playing","board":[{}],"winningLine":null}}"#,
            serde_json::to_string(&numbered_board()[0]).unwrap()
        );
        assert!(matches!(
            decode_snapshot(&raw),
            Err(SnapshotError::Malformed(_))
        ));
    }

    #[test]
    fn non_canonical_line_is_rejected() {
        let mut snapshot = bingo_snapshot();
        snapshot.winning_line = Some(Line {
            kind: LineKind::Row,
            index: 0,
            square_ids: [0, 1, 2, 3, 5],
        });
        let raw = encode_snapshot(&snapshot).unwrap();

        assert_eq!(decode_snapshot(&raw), Err(SnapshotError::InvalidLine));
    }

    #[test]
    fn state_must_agree_with_board_and_line() {
        let cases = [
            PersistedSnapshot::new(GameState::Start, Some(numbered_board()), None),
            PersistedSnapshot::new(GameState::Playing, None, None),
            PersistedSnapshot::new(GameState::Playing, Some(numbered_board()), Some(Line::row(0))),
            PersistedSnapshot::new(GameState::Bingo, Some(numbered_board()), None),
            PersistedSnapshot::new(GameState::Bingo, Some(numbered_board()), Some(Line::row(0))),
            PersistedSnapshot::new(GameState::Playing, bingo_snapshot().board, None),
        ];

        for snapshot in cases {
            assert!(
                matches!(snapshot.validate(), Err(SnapshotError::Inconsistent(_))),
                "{:?}",
                snapshot.game_state
            );
        }
    }

    #[test]
    fn tampered_board_is_rejected() {
        let mut snapshot = bingo_snapshot();
        let mut squares = snapshot.board.take().unwrap().squares().clone();
        squares[usize::from(FREE_SPACE_ID)].is_free_space = false;
        snapshot.board = Some(Board::from_squares(squares));

        let raw = encode_snapshot(&snapshot).unwrap();
        assert!(matches!(
            decode_snapshot(&raw),
            Err(SnapshotError::InvalidBoard { .. })
        ));
    }
}
