//! Core module - pure game rules with no external dependencies
//!
//! Everything here is deterministic and synchronous: no timers, no I/O, no
//! wall-clock. Callers drive the engine through discrete operations and read
//! results back through return values, events, and snapshots.

pub mod board;
pub mod chain;
pub mod game_state;
pub mod resolve;
pub mod rng;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use chain::{resolve as resolve_chains, ChainOutcome, ChainState, ChainStep, Resolution};
pub use game_state::{GameState, LockEvent, PiecePair};
pub use resolve::{apply_gravity, find_matches, remove_matches, MatchSet};
pub use rng::{PairColors, PairQueue, SimpleRng};
pub use scoring::{fall_interval_ms, level_for, pass_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
