//! Chain engine - drives repeated match/remove/gravity passes to settlement
//!
//! After a pair locks, the board is resolved in strictly ordered passes:
//! find matches, remove them, compact, re-scan. Each pass is committed as one
//! atomic mutation before the next is even computed, and the whole sequence
//! is an explicit loop carrying (board, chain index) rather than recursion.

use crate::core::resolve::{apply_gravity, find_matches, remove_matches};
use crate::core::scoring::pass_score;
use crate::core::Board;

/// Where a resolution currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainState {
    /// No pass computed yet
    Idle,
    /// `n` passes have cleared cells so far; the next pass has index `n`
    Resolving(u32),
    /// A pass found no matches; resolution is finished
    Settled,
}

/// One committed resolution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainStep {
    /// 0-based index of this pass within the resolution sequence
    pub chain_index: u32,
    /// Cells cleared this pass, all simultaneous groups combined
    pub cleared: u32,
    /// Points awarded for this pass: cleared x 10 x (chain_index + 1)
    pub score: u32,
    /// Board after removal, before gravity (for the presentation sink)
    pub after_removal: Board,
    /// Board after gravity, the input to the next pass
    pub after_gravity: Board,
}

/// An in-flight resolution, steppable one pass at a time so callers can
/// interleave presentation delays between passes.
#[derive(Debug, Clone)]
pub struct Resolution {
    board: Board,
    state: ChainState,
}

impl Resolution {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: ChainState::Idle,
        }
    }

    pub fn state(&self) -> ChainState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state == ChainState::Settled
    }

    /// Current board. Only ever observed between committed passes.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Run exactly one pass. Returns None once no matches remain, which is
    /// the "chain finished" signal: the caller may resume spawning/falling
    /// and must treat the session chain count as reset to zero.
    pub fn step(&mut self) -> Option<ChainStep> {
        let chain_index = match self.state {
            ChainState::Idle => 0,
            ChainState::Resolving(n) => n,
            ChainState::Settled => return None,
        };

        let matches = find_matches(&self.board);
        if matches.is_empty() {
            self.state = ChainState::Settled;
            return None;
        }

        let cleared = remove_matches(&mut self.board, &matches) as u32;
        let after_removal = self.board.clone();
        apply_gravity(&mut self.board);
        let after_gravity = self.board.clone();

        self.state = ChainState::Resolving(chain_index + 1);

        Some(ChainStep {
            chain_index,
            cleared,
            score: pass_score(cleared, chain_index),
            after_removal,
            after_gravity,
        })
    }
}

/// Result of resolving a board to settlement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Settled board with no remaining matches
    pub board: Board,
    /// Every committed pass, in order
    pub steps: Vec<ChainStep>,
    /// Summed score across all passes
    pub score: u32,
    /// Number of passes that cleared cells (the chain length)
    pub chains: u32,
    /// Total cells cleared across all passes
    pub cleared: u32,
}

/// Resolve a board to settlement in one call.
pub fn resolve(board: Board) -> ChainOutcome {
    let mut resolution = Resolution::new(board);
    let mut steps = Vec::new();
    let mut score = 0u32;
    let mut cleared = 0u32;

    while let Some(step) = resolution.step() {
        score += step.score;
        cleared += step.cleared;
        steps.push(step);
    }

    ChainOutcome {
        board: resolution.into_board(),
        chains: steps.len() as u32,
        steps,
        score,
        cleared,
    }
}
