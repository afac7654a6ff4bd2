//! chainfall - rules engine for a falling-pair chain puzzle
//!
//! Pairs of colored tokens descend over a fixed 6x12 grid, lock into place,
//! and clear whenever a 4-connected group of one color reaches four cells.
//! Clears pull the survivors down and re-scan, chaining until the board
//! settles; each successive pass in a sequence is worth proportionally more.
//!
//! The crate is the simulation core only. Rendering, input mapping, audio,
//! persistence, and the fall-cadence timer are callers: they invoke discrete
//! operations ([`GameState::tick`](core::GameState::tick),
//! [`GameState::apply_action`](core::GameState::apply_action)) and read
//! state back through [`GameSnapshot`](core::GameSnapshot) and
//! [`LockEvent`](core::LockEvent). The engine owns no timers and performs no
//! I/O, and every operation is deterministic given the injected RNG seed.
//!
//! # Example
//!
//! ```
//! use chainfall::core::GameState;
//! use chainfall::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::RotateCw);
//!
//! // The caller's cadence driver calls tick(); a pair that cannot fall
//! // locks and resolves chains before the next pair spawns.
//! while game.tick() {}
//!
//! assert!(game.take_last_event().is_some());
//! ```

pub mod core;
pub mod types;
