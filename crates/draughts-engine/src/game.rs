//! Game session: turn order, chain captures, history and undo.
//!
//! The [`Game`] struct owns the canonical board and enforces:
//! - Whose turn it is, including a chain capture in progress
//! - Mandatory capture through the move generator
//! - Exact undo from recorded move metadata
//! - Computer moves for a configured side

use crate::movegen::{apply_move, capture_moves_from, generate_moves};
use crate::rules::{outcome, Outcome};
use crate::search::{choose_move_among, Difficulty};
use crate::{Board, MoveList};
use draughts_core::{Move, MoveRequest, Piece, Side, Square};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move in internal format.
    pub mov: Move,
    /// Notation such as `a3-b4` or `c3xe5`.
    pub notation: String,
    /// The side that played it.
    pub side: Side,
    /// The captured piece as it stood before the jump.
    pub captured: Option<(Square, Piece)>,
    /// Whether the moving man was crowned.
    pub promoted: bool,
    /// Chain origin before the move, if a chain was in progress.
    pub chain_before: Option<Square>,
}

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("the game is over")]
    GameOver,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("{0} has no legal moves")]
    NoLegalMoves(Side),
    #[error("it is not the computer's turn")]
    NotComputerTurn,
}

/// What happened to the turn after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The same piece must keep capturing from this square.
    ChainContinues(Square),
    /// The opponent is now to move.
    Passed,
    /// The move ended the game.
    GameOver(Side),
}

/// A draughts game with history and an optional computer opponent.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    /// Landing square of the piece that must continue capturing.
    chain_origin: Option<Square>,
    history: Vec<GameMove>,
    outcome: Outcome,
    start: (Board, Side),
    computer: Option<Side>,
    difficulty: Difficulty,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a two-player game from the standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Side::Red)
    }

    /// Creates a game against the computer, which plays `computer`.
    pub fn with_options(computer: Option<Side>, difficulty: Difficulty) -> Self {
        let mut game = Self::new();
        game.computer = computer;
        game.difficulty = difficulty;
        game
    }

    /// Creates a two-player game from a custom position.
    ///
    /// The outcome is checked immediately, so a position where `side_to_move`
    /// is stuck starts out decided.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Game {
            board,
            side_to_move,
            chain_origin: None,
            history: Vec::new(),
            outcome: outcome(&board, side_to_move),
            start: (board, side_to_move),
            computer: None,
            difficulty: Difficulty::default(),
        }
    }

    /// Restarts from the starting position, keeping the players and difficulty.
    pub fn reset(&mut self) {
        let (board, side) = self.start;
        self.board = board;
        self.side_to_move = side;
        self.chain_origin = None;
        self.history.clear();
        self.outcome = outcome(&board, side);
        debug!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Square of the piece that must continue a chain capture, if any.
    pub fn chain_origin(&self) -> Option<Square> {
        self.chain_origin
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn history(&self) -> &[GameMove] {
        &self.history
    }

    pub fn computer(&self) -> Option<Side> {
        self.computer
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns true if the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_game_over() && self.computer == Some(self.side_to_move)
    }

    /// Returns the moves the side to move may play right now.
    ///
    /// During a chain capture only the chaining piece's captures are legal.
    pub fn legal_moves(&self) -> MoveList {
        if self.is_game_over() {
            return MoveList::new();
        }
        match self.chain_origin {
            Some(origin) => capture_moves_from(&self.board, origin),
            None => generate_moves(&self.board, self.side_to_move),
        }
    }

    /// Returns the legal moves of the piece on `from`.
    ///
    /// Empty when another piece has a capture and this one does not.
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut moves = self.legal_moves();
        moves.retain(|m| m.from() == from);
        moves
    }

    /// Plays the legal move from `from` to `to`.
    pub fn request_move(&mut self, from: Square, to: Square) -> Result<TurnStatus, GameError> {
        self.request(MoveRequest::new(from, to))
    }

    /// Plays the legal move matching `request`.
    ///
    /// A rejected request leaves the game unchanged.
    pub fn request(&mut self, request: MoveRequest) -> Result<TurnStatus, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let legal = self.legal_moves();
        let Some(&m) = legal.as_slice().iter().find(|m| m.matches(request)) else {
            let notation = format!("{}-{}", request.from, request.to);
            debug!(side = %self.side_to_move, request = %notation, "move rejected");
            return Err(GameError::IllegalMove(notation));
        };
        Ok(self.play(m))
    }

    /// Chooses the computer's next single jump or step without playing it.
    pub fn computer_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Move, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.computer != Some(self.side_to_move) {
            return Err(GameError::NotComputerTurn);
        }
        let candidates = self.legal_moves();
        choose_move_among(
            &self.board,
            self.side_to_move,
            candidates.as_slice(),
            self.difficulty,
            rng,
        )
        .ok_or(GameError::NoLegalMoves(self.side_to_move))
    }

    /// Plays the computer's whole turn, following its chain captures.
    ///
    /// Returns the moves played, in order.
    pub fn play_computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<Move>, GameError> {
        let mut played = Vec::new();
        loop {
            let m = self.computer_move(rng)?;
            played.push(m);
            if !matches!(self.play(m), TurnStatus::ChainContinues(_)) {
                return Ok(played);
            }
        }
    }

    /// Takes back the last single jump or step.
    ///
    /// Refused once the game is over.
    pub fn undo(&mut self) -> Result<GameMove, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        let entry = self.history.pop().ok_or(GameError::NothingToUndo)?;

        if let Some(piece) = self.board.remove_piece(entry.mov.to()) {
            let restored = if entry.promoted {
                Piece::man(piece.side)
            } else {
                piece
            };
            self.board.set_piece(entry.mov.from(), restored);
        }
        if let Some((sq, piece)) = entry.captured {
            self.board.set_piece(sq, piece);
        }
        self.side_to_move = entry.side;
        self.chain_origin = entry.chain_before;
        self.outcome = Outcome::Ongoing;
        debug!(side = %entry.side, mv = %entry.notation, "move undone");
        Ok(entry)
    }

    /// Takes back moves until a human is to move at the start of a turn.
    ///
    /// This rewinds the computer's reply and any unfinished or completed
    /// capture chain, so the board is as it was before the human's last turn.
    pub fn undo_turn(&mut self) -> Result<(), GameError> {
        self.undo()?;
        while self.is_computer_turn() || self.chain_origin.is_some() {
            if self.undo().is_err() {
                break;
            }
        }
        Ok(())
    }

    fn play(&mut self, m: Move) -> TurnStatus {
        let effect = apply_move(&self.board, m);
        let side = self.side_to_move;
        self.history.push(GameMove {
            mov: m,
            notation: m.to_notation(),
            side,
            captured: effect.captured,
            promoted: effect.promoted,
            chain_before: self.chain_origin,
        });
        self.board = effect.board;
        debug!(side = %side, mv = %m, promoted = effect.promoted, "move played");

        if effect.further_capture {
            self.chain_origin = Some(m.to());
            debug!(side = %side, from = %m.to(), "chain capture continues");
            return TurnStatus::ChainContinues(m.to());
        }

        self.chain_origin = None;
        self.side_to_move = side.opposite();
        self.outcome = outcome(&self.board, self.side_to_move);
        match self.outcome.winner() {
            Some(winner) => {
                info!(winner = %winner, moves = self.history.len(), "game over");
                TurnStatus::GameOver(winner)
            }
            None => {
                debug!(side = %self.side_to_move, "turn passed");
                TurnStatus::Passed
            }
        }
    }
}
