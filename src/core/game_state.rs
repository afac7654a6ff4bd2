//! Game state module - active pair control and the session state machine
//!
//! Ties together the board, the match/chain machinery, and the pair queue.
//! All session state lives in this one struct; there are no ambient globals,
//! no timers, and no I/O. The caller owns the fall cadence and calls [`GameState::tick`]
//! once per cadence interval.

use crate::core::chain::{resolve, ChainStep};
use crate::core::resolve::apply_gravity;
use crate::core::rng::{PairColors, PairQueue};
use crate::core::Board;
use crate::types::{
    GameAction, GamePhase, MoveDir, Orientation, RotateDir, TokenColor, QUEUE_LOOKAHEAD, SPAWN_X,
    SPAWN_Y,
};

/// The active falling pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PiecePair {
    pub primary: TokenColor,
    pub secondary: TokenColor,
    /// Anchor position of the primary token (x = column, y = row)
    pub x: i8,
    pub y: i8,
    pub orientation: Orientation,
}

impl PiecePair {
    /// Place a pair at the spawn anchor in spawn orientation
    pub fn new(colors: PairColors) -> Self {
        Self {
            primary: colors.primary,
            secondary: colors.secondary,
            x: SPAWN_X,
            y: SPAWN_Y,
            orientation: Orientation::Up,
        }
    }

    pub fn colors(&self) -> PairColors {
        PairColors {
            primary: self.primary,
            secondary: self.secondary,
        }
    }

    /// Position of the secondary token under the current orientation
    pub fn secondary_pos(&self) -> (i8, i8) {
        let (dx, dy) = self.orientation.offset();
        (self.x + dx, self.y + dy)
    }

    /// Both occupied positions with their colors, primary first
    pub fn cells(&self) -> [(i8, i8, TokenColor); 2] {
        let (sx, sy) = self.secondary_pos();
        [(self.x, self.y, self.primary), (sx, sy, self.secondary)]
    }

    /// Check that both tokens sit on in-bounds, empty board positions
    pub fn is_valid(&self, board: &Board) -> bool {
        let (sx, sy) = self.secondary_pos();
        board.is_valid(self.x, self.y) && board.is_valid(sx, sy)
    }
}

/// Emitted once per lock, consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    /// The two positions written at lock time, primary first (pre-gravity)
    pub locked: [(i8, i8); 2],
    /// Chain length of the resolution that followed (0 = no match)
    pub chains: u32,
    /// Total cells cleared across all passes
    pub cleared: u32,
    /// Score added by this lock's resolution
    pub score_delta: u32,
    /// Per-pass intermediate boards for animation
    pub steps: Vec<ChainStep>,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<PiecePair>,
    hold: Option<PairColors>,
    queue: PairQueue,
    can_hold: bool,
    score: u32,
    /// Live chain counter; resets to 0 whenever a resolution pass finds no
    /// matches, so it reads 0 between locks. The achieved chain length of
    /// the last lock is reported via [`LockEvent`].
    chains: u32,
    pieces_locked: u32,
    phase: GamePhase,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            hold: None,
            queue: PairQueue::new(seed),
            can_hold: true,
            score: 0,
            chains: 0,
            pieces_locked: 0,
            phase: GamePhase::NotStarted,
            last_event: None,
        }
    }

    /// Start the session and spawn the first pair
    pub fn start(&mut self) {
        if self.phase != GamePhase::NotStarted {
            return;
        }
        self.phase = GamePhase::Running;
        self.spawn_pair();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn chains(&self) -> u32 {
        self.chains
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<PiecePair> {
        self.active
    }

    pub fn held(&self) -> Option<PairColors> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Next pair to enter play
    pub fn peek_next(&self) -> PairColors {
        self.queue.peek()
    }

    /// The full lookahead window
    pub fn next_pairs(&self) -> [PairColors; QUEUE_LOOKAHEAD] {
        self.queue.preview()
    }

    /// Current RNG stream state
    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    /// Take and clear the last lock event
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn the next pair from the queue at the spawn anchor.
    /// A blocked spawn is fatal: the session ends and no pair is produced.
    pub fn spawn_pair(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let candidate = PiecePair::new(self.queue.peek());
        if !candidate.is_valid(&self.board) {
            self.phase = GamePhase::Ended;
            return false;
        }

        self.queue.advance();
        self.active = Some(candidate);
        true
    }

    /// Try to shift the active pair one step. Commits and returns true when
    /// both resulting positions are in bounds and empty; otherwise leaves
    /// the pair untouched. A rejected Down is the caller's lock trigger.
    pub fn try_move(&mut self, dir: MoveDir) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let (dx, dy) = dir.delta();
        let candidate = PiecePair {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };

        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// Try to rotate the active pair one step around its anchor. No wall
    /// kick: a rotation whose secondary position is blocked is refused
    /// outright, with no side effect.
    pub fn try_rotate(&mut self, dir: RotateDir) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let orientation = match dir {
            RotateDir::Cw => active.orientation.rotate_cw(),
            RotateDir::Ccw => active.orientation.rotate_ccw(),
        };
        let candidate = PiecePair {
            orientation,
            ..active
        };

        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            return true;
        }
        false
    }

    /// One cadence step: attempt to fall one row. On a rejected fall the
    /// pair locks and the board resolves to settlement. Returns whether the
    /// pair actually fell.
    pub fn tick(&mut self) -> bool {
        if self.phase != GamePhase::Running || self.active.is_none() {
            return false;
        }
        if self.try_move(MoveDir::Down) {
            return true;
        }
        self.lock_active();
        false
    }

    /// Swap the active pair with the held one (or stash it and pull from the
    /// queue when the hold slot is empty). Allowed once per lock cycle.
    pub fn hold(&mut self) -> bool {
        if self.phase != GamePhase::Running || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let stashed = active.colors();
        match self.hold.take() {
            Some(held) => {
                // Swap: the held pair re-enters at the spawn anchor
                let candidate = PiecePair::new(held);
                if !candidate.is_valid(&self.board) {
                    self.phase = GamePhase::Ended;
                    self.active = None;
                    self.hold = Some(held);
                    return false;
                }
                self.active = Some(candidate);
                self.hold = Some(stashed);
            }
            None => {
                // First hold: stash and advance the queue into play
                self.hold = Some(stashed);
                self.active = None;
                if !self.spawn_pair() {
                    return false;
                }
            }
        }

        self.can_hold = false;
        true
    }

    /// Lock the active pair into the board, settle gravity, and resolve
    /// chains. Positions are re-validated first; an invalid lock position is
    /// fatal (equivalent to a blocked spawn), never silently ignored.
    pub fn lock_active(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        if !active.is_valid(&self.board) {
            self.phase = GamePhase::Ended;
            return;
        }

        let mut locked = [(0i8, 0i8); 2];
        for (i, (x, y, color)) in active.cells().into_iter().enumerate() {
            self.board.set(x, y, Some(color));
            locked[i] = (x, y);
        }

        // Tokens may lock with air underneath (horizontal pair on uneven
        // ground); settle before scanning for matches
        apply_gravity(&mut self.board);

        let outcome = resolve(self.board.clone());
        self.board = outcome.board;
        self.score = self.score.saturating_add(outcome.score);

        self.pieces_locked += 1;
        self.can_hold = true;
        self.last_event = Some(LockEvent {
            locked,
            chains: outcome.chains,
            cleared: outcome.cleared,
            score_delta: outcome.score,
            steps: outcome.steps,
        });

        // Resolution settled with no further matches: chain count resets
        self.chains = 0;

        self.spawn_pair();
    }

    /// Apply a caller action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(MoveDir::Left),
            GameAction::MoveRight => self.try_move(MoveDir::Right),
            GameAction::MoveDown => self.try_move(MoveDir::Down),
            GameAction::RotateCw => self.try_rotate(RotateDir::Cw),
            GameAction::RotateCcw => self.try_rotate(RotateDir::Ccw),
            GameAction::Hold => self.hold(),
            GameAction::Pause => match self.phase {
                GamePhase::Running => {
                    self.phase = GamePhase::Paused;
                    true
                }
                GamePhase::Paused => {
                    self.phase = GamePhase::Running;
                    true
                }
                _ => false,
            },
            GameAction::Restart => {
                *self = Self::new(self.queue.seed());
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
