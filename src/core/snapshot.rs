//! Snapshot types for read-only observers
//!
//! The presentation layer never touches [`GameState`] internals; it receives
//! these plain-data views instead. `snapshot_into` fills a caller-owned
//! buffer so observation allocates nothing.

use crate::core::game_state::{GameState, PiecePair};
use crate::core::rng::PairColors;
use crate::types::{GamePhase, Orientation, TokenColor, BOARD_HEIGHT, BOARD_WIDTH, QUEUE_LOOKAHEAD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub primary: TokenColor,
    pub secondary: TokenColor,
    pub x: i8,
    pub y: i8,
    pub orientation: Orientation,
}

impl From<PiecePair> for ActiveSnapshot {
    fn from(value: PiecePair) -> Self {
        Self {
            primary: value.primary,
            secondary: value.secondary,
            x: value.x,
            y: value.y,
            orientation: value.orientation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// 0 = empty, 1..=5 = token color code
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub hold: Option<PairColors>,
    pub next: [PairColors; QUEUE_LOOKAHEAD],
    pub can_hold: bool,
    pub phase: GamePhase,
    pub score: u32,
    pub chains: u32,
    pub pieces_locked: u32,
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            hold: None,
            next: [PairColors::default(); QUEUE_LOOKAHEAD],
            can_hold: true,
            phase: GamePhase::NotStarted,
            score: 0,
            chains: 0,
            pieces_locked: 0,
            seed: 0,
        }
    }
}

impl GameState {
    /// Fill a caller-owned snapshot buffer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board().write_u8_grid(&mut out.board);
        out.active = self.active().map(ActiveSnapshot::from);
        out.hold = self.held();
        out.next = self.next_pairs();
        out.can_hold = self.can_hold();
        out.phase = self.phase();
        out.score = self.score();
        out.chains = self.chains();
        out.pieces_locked = self.pieces_locked();
        out.seed = self.seed();
    }

    /// Convenience allocation of a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
