use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use ttt_core::{Board, GameOutcome, IllegalMove, Side, WinLine};
use ttt_engine::{Difficulty, MoveSelector};

/// Pause the front end should wait before asking for the computer's move.
pub const DEFAULT_COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// The human always plays X and moves first.
pub const HUMAN_SIDE: Side = Side::X;
pub const COMPUTER_SIDE: Side = Side::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Human X against the computer as O.
    SinglePlayer,
    /// Two humans sharing the board.
    #[default]
    TwoPlayer,
}

/// Settings chosen before a game starts; fixed until [`GameSession::reconfigure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_delay: Duration,
}

impl SessionConfig {
    pub fn single_player(difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            difficulty,
            ..Self::default()
        }
    }

    pub fn two_player() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            computer_delay: DEFAULT_COMPUTER_DELAY,
        }
    }
}

/// Indicator shown between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPrompt {
    Player(Side),
    Computer,
    Finished(GameOutcome),
}

impl fmt::Display for TurnPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnPrompt::Player(side) => write!(f, "Player {}'s Turn", side),
            TurnPrompt::Computer => write!(f, "Computer's Turn"),
            TurnPrompt::Finished(outcome) => write!(f, "{}", outcome),
        }
    }
}

/// One game in progress plus the settings it was started with.
///
/// Owns the board exclusively. The front end routes clicks to [`play`],
/// waits `computer_delay`, then calls [`computer_move`] while
/// [`awaiting_computer`] holds.
///
/// [`play`]: GameSession::play
/// [`computer_move`]: GameSession::computer_move
/// [`awaiting_computer`]: GameSession::awaiting_computer
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    turn: Side,
    outcome: GameOutcome,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        debug!("new session: {:?}", config);
        Self {
            config,
            board: Board::new(),
            turn: HUMAN_SIDE,
            outcome: GameOutcome::InProgress,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next. Meaningless once the game is over.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Cells to highlight after a win.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.board.winning_line()
    }

    pub fn awaiting_computer(&self) -> bool {
        self.is_computer_turn() && self.is_active()
    }

    pub fn turn_prompt(&self) -> TurnPrompt {
        if !self.is_active() {
            TurnPrompt::Finished(self.outcome)
        } else if self.is_computer_turn() {
            TurnPrompt::Computer
        } else {
            TurnPrompt::Player(self.turn)
        }
    }

    /// Places the current human player's mark on `index`.
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, IllegalMove> {
        self.ensure_active()?;
        if self.is_computer_turn() {
            warn!("rejected move {}: waiting for the computer", index);
            return Err(IllegalMove::OutOfTurn(self.turn));
        }
        self.place(index)
    }

    /// Lets the computer pick and play its move.
    ///
    /// Returns the chosen cell and the resulting outcome, or `None` if the
    /// board had no empty cell.
    pub fn computer_move(&mut self) -> Result<Option<(usize, GameOutcome)>, IllegalMove> {
        self.ensure_active()?;
        if !self.is_computer_turn() {
            warn!("computer asked to move on {}'s turn", self.turn);
            return Err(IllegalMove::OutOfTurn(COMPUTER_SIDE));
        }

        let selector = MoveSelector::new(self.config.difficulty, COMPUTER_SIDE);
        match selector.choose(&self.board) {
            Some(index) => {
                let outcome = self.place(index)?;
                Ok(Some((index, outcome)))
            }
            None => Ok(None),
        }
    }

    /// Starts a new game with the same settings.
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.board.reset();
        self.turn = HUMAN_SIDE;
        self.outcome = GameOutcome::InProgress;
    }

    /// Starts a new game under different settings.
    pub fn reconfigure(&mut self, config: SessionConfig) {
        debug!("reconfigured: {:?}", config);
        self.config = config;
        self.restart();
    }

    fn is_computer_turn(&self) -> bool {
        self.config.mode == GameMode::SinglePlayer && self.turn == COMPUTER_SIDE
    }

    fn ensure_active(&self) -> Result<(), IllegalMove> {
        if self.is_active() {
            Ok(())
        } else {
            warn!("move rejected: game already finished ({})", self.outcome);
            Err(IllegalMove::GameOver)
        }
    }

    fn place(&mut self, index: usize) -> Result<GameOutcome, IllegalMove> {
        self.ensure_active()?;
        if let Err(err) = self.board.apply_move(index, self.turn) {
            warn!("rejected move {} by {}: {}", index, self.turn, err);
            return Err(err);
        }

        self.outcome = self.board.evaluate();
        if self.outcome.is_terminal() {
            debug!("game over: {}", self.outcome);
        } else {
            self.turn = self.turn.opponent();
        }
        Ok(self.outcome)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
