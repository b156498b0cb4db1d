//! Game state module - the engine tying everything together
//!
//! Owns the board, the at-most-one live piece, scoring, and the gravity
//! timer, and drives the piece lifecycle: spawn, fall and player moves, lock,
//! line clear, score, respawn. All player transforms are speculative: build
//! the candidate piece, test it with the collision predicate, commit only on
//! success. Illegal moves are silent no-ops, never errors.

use crate::board::Board;
use crate::collision::collides;
use crate::pieces::Piece;
use crate::rng::PieceFactory;
use crate::scoring::{drop_interval_ms, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    factory: PieceFactory,
    score: u32,
    lines: u32,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            factory: PieceFactory::new(seed),
            score: 0,
            lines: 0,
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current gravity interval, derived from the score.
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.score)
    }

    /// Advance the gravity clock. Returns true if the piece stepped or locked.
    ///
    /// No-op while paused, after game over, or before `start`. When the
    /// accumulated time reaches the current drop interval the piece attempts
    /// one downward step; a step that collides is reverted and the piece
    /// locks instead.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over || !self.started {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_shift(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Apply a player intent. Returns true if it changed the state.
    ///
    /// Game over is terminal: nothing is accepted. While paused, only the
    /// pause toggle gets through; everything else is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.game_over || !self.started {
            return false;
        }

        match action {
            GameAction::TogglePause => {
                self.paused = !self.paused;
                true
            }
            _ if self.paused => false,
            GameAction::MoveLeft => self.try_shift(-1, 0),
            GameAction::MoveRight => self.try_shift(1, 0),
            GameAction::SoftDrop => self.try_shift(0, 1),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    /// Try to translate the active piece; commit only if the result is legal.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.moved(dx, dy);
        if collides(&candidate, &self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Try to rotate the active piece; commit only if the result is legal.
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotated();
        if collides(&candidate, &self.board) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Drop until the next step collides, then run the normal lock sequence.
    fn hard_drop(&mut self) -> bool {
        if self.active.is_none() {
            return false;
        }

        while self.try_shift(0, 1) {}
        self.lock_piece();
        true
    }

    /// Transfer the active piece onto the board, clear lines, score, respawn.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        for (x, y) in active.cells() {
            self.board.set(x, y, Some(active.kind()));
        }

        let cleared = self.board.clear_full_rows().len();
        self.lines += cleared as u32;
        self.score += line_clear_score(cleared);

        self.spawn_piece();
    }

    /// Spawn a random piece at the top. A colliding spawn ends the game.
    fn spawn_piece(&mut self) -> bool {
        let piece = self.factory.next_piece();
        if collides(&piece, &self.board) {
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        true
    }

    /// Fill a snapshot for the renderer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.score = self.score;
        out.lines = self.lines;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, PieceKind};

    fn fill_row(state: &mut GameState, y: i8, gap: Option<i8>) {
        for x in 0..BOARD_WIDTH as i8 {
            if Some(x) == gap {
                continue;
            }
            state.board_mut().set(x, y, Some(PieceKind::I));
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started());
        assert!(!state.game_over());
        assert!(!state.paused());
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert!(state.active().is_none());
    }

    #[test]
    fn test_start_spawns_once() {
        let mut state = GameState::new(12345);
        state.start();
        assert!(state.started());
        let first = state.active();
        assert!(first.is_some());

        // Second start is a no-op
        state.start();
        assert_eq!(state.active(), first);
    }

    #[test]
    fn test_tick_accumulates_to_interval() {
        let mut state = GameState::new(1);
        state.start();
        let start_cells = state.active().unwrap().cells();

        // Below the interval: nothing moves
        assert!(!state.tick(state.drop_interval_ms() - 1));
        assert_eq!(state.active().unwrap().cells(), start_cells);

        // Crossing it: one step down
        assert!(state.tick(1));
        let stepped: Vec<_> = start_cells.iter().map(|&(x, y)| (x, y + 1)).collect();
        assert_eq!(state.active().unwrap().cells().to_vec(), stepped);
    }

    #[test]
    fn test_failed_transform_leaves_piece_untouched() {
        let mut state = GameState::new(1);
        state.start();

        // Wall off the row directly below the spawned piece
        let max_y = state
            .active()
            .unwrap()
            .cells()
            .iter()
            .map(|c| c.1)
            .max()
            .unwrap();
        fill_row(&mut state, max_y + 1, None);

        let before = state.active().unwrap();
        assert!(!state.apply_action(GameAction::SoftDrop));
        assert_eq!(state.active().unwrap(), before);
    }

    #[test]
    fn test_lock_scores_single_line() {
        let mut state = GameState::new(1);
        state.start();

        // Complete the bottom row by hand; the hard-dropped piece locks on
        // top of it and the clear runs through the normal lock path.
        fill_row(&mut state, (BOARD_HEIGHT - 1) as i8, None);
        state.apply_action(GameAction::HardDrop);

        assert_eq!(state.lines(), 1);
        assert_eq!(state.score(), 100);
        assert!(!state.game_over());
    }

    #[test]
    fn test_lock_scores_by_table() {
        // Fill the bottom n rows; the hard-dropped piece rests on top of
        // them and the lock clears all n at once.
        for (n, expected) in [(2usize, 300u32), (3, 500), (4, 800)] {
            let mut state = GameState::new(1);
            state.start();
            for i in 0..n {
                fill_row(&mut state, (BOARD_HEIGHT as usize - 1 - i) as i8, None);
            }

            state.apply_action(GameAction::HardDrop);
            assert_eq!(state.lines(), n as u32, "lines for {}-row clear", n);
            assert_eq!(state.score(), expected, "score for {}-row clear", n);
        }
    }

    #[test]
    fn test_lock_without_clear_scores_nothing() {
        let mut state = GameState::new(1);
        state.start();
        state.apply_action(GameAction::HardDrop);

        assert_eq!(state.lines(), 0);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_gravity_speeds_up_past_score_threshold() {
        let mut state = GameState::new(1);
        state.start();
        assert_eq!(state.drop_interval_ms(), 500);

        // A four-line clear scores 800, crossing the 500-point threshold.
        for i in 0..4 {
            fill_row(&mut state, (BOARD_HEIGHT as usize - 1 - i) as i8, None);
        }
        state.apply_action(GameAction::HardDrop);

        assert_eq!(state.score(), 800);
        assert_eq!(state.drop_interval_ms(), 450);
    }

    #[test]
    fn test_pause_gates_gravity_and_moves() {
        let mut state = GameState::new(1);
        state.start();
        let before = state.active().unwrap();

        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused());

        // Gravity and intents are ignored while paused
        assert!(!state.tick(10_000));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert_eq!(state.active().unwrap(), before);

        // The toggle itself still works
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(!state.paused());
        assert!(state.apply_action(GameAction::MoveLeft));
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(1);
        state.start();

        // Brick the spawn rows so the next spawn collides
        for y in 0..2 {
            fill_row(&mut state, y, Some(0));
        }
        state.apply_action(GameAction::HardDrop);
        assert!(state.game_over());
        assert!(state.active().is_none());

        // No further intents or ticks are processed
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::TogglePause));
        assert!(!state.tick(10_000));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(9);
        state.start();
        state.board_mut().set(0, 19, Some(PieceKind::L));

        let snap = state.snapshot();
        assert_eq!(snap.board[19][0], Some(PieceKind::L));
        assert_eq!(snap.score, 0);
        assert!(!snap.paused);
        assert!(!snap.game_over);
        let active = snap.active.expect("live piece after start");
        assert_eq!(active.cells, state.active().unwrap().cells());
        assert!(snap.playable());
    }
}
