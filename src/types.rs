//! Core types shared across the engine
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 6;
pub const BOARD_HEIGHT: u8 = 12;

/// Minimum connected group size that clears
pub const MATCH_MIN: usize = 4;

/// Upcoming-pair lookahead maintained by the queue
pub const QUEUE_LOOKAHEAD: usize = 4;

/// Spawn anchor for the primary token. The secondary sits one row above
/// (spawn orientation is Up), so the pair occupies rows 0 and 1.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;
pub const SPAWN_Y: i8 = 1;

/// Points per cleared cell, before the chain multiplier
pub const CELL_SCORE: u32 = 10;

/// Recommended presentation delay between the post-removal and post-gravity
/// phases of a resolution pass. A hint for the caller, not a rule.
pub const SETTLE_DELAY_MS: u32 = 250;

/// Fall cadence by difficulty level (milliseconds per row).
/// Cadence is caller-owned; the engine only publishes this table.
pub const FALL_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];
pub const FALL_INTERVAL_FLOOR_MS: u32 = 120;

/// Pieces locked per difficulty level step
pub const LOCKS_PER_LEVEL: u32 = 10;

/// Token colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl TokenColor {
    /// The full palette, in drawing order for the uniform generator
    pub const ALL: [TokenColor; 5] = [
        TokenColor::Red,
        TokenColor::Green,
        TokenColor::Blue,
        TokenColor::Yellow,
        TokenColor::Purple,
    ];

    /// Stable non-zero code for u8 grid exports (0 means empty)
    pub fn code(self) -> u8 {
        match self {
            TokenColor::Red => 1,
            TokenColor::Green => 2,
            TokenColor::Blue => 3,
            TokenColor::Yellow => 4,
            TokenColor::Purple => 5,
        }
    }
}

/// Cell on the board (None = empty, Some = colored token)
pub type Cell = Option<TokenColor>;

/// Orientation of the secondary token relative to the anchor
/// (Up = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    /// (column, row) offset of the secondary token from the anchor
    pub fn offset(self) -> (i8, i8) {
        match self {
            Orientation::Up => (0, -1),
            Orientation::Right => (1, 0),
            Orientation::Down => (0, 1),
            Orientation::Left => (-1, 0),
        }
    }

    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
            Orientation::Right => Orientation::Up,
        }
    }
}

/// Step directions for the active pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Left,
    Right,
    Down,
}

impl MoveDir {
    /// (column, row) delta applied to the anchor
    pub fn delta(self) -> (i8, i8) {
        match self {
            MoveDir::Left => (-1, 0),
            MoveDir::Right => (1, 0),
            MoveDir::Down => (0, 1),
        }
    }
}

/// Rotation directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDir {
    Cw,
    Ccw,
}

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    NotStarted,
    Running,
    Paused,
    Ended,
}

/// Caller-facing actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    RotateCw,
    RotateCcw,
    Hold,
    Pause,
    Restart,
}
