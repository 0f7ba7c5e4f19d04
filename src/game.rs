//! # Module: `game`
//!
//! A game in progress: the position stack of one variant with move entry, undo and
//! end of game detection. Each entry of the stack is a [`GameState`]; the first one is
//! the starting position and every later one records the move that produced it.
//!
//! The whole stack is serialisable, which is all that is needed to resume a game.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{
    Board, Checkerboard, InvalidMove, MoveList, MoveRecord, NotationError, RulesError,
    Validation, moves_for, validate,
};
use crate::config::Variant;
use crate::core::*;

/******************************************\
|==========================================|
|               Game Errors                |
|==========================================|
\******************************************/

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Rules(#[from] RulesError),
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    Invalid(#[from] InvalidMove),
    #[error("The move {0} is not finished")]
    Incomplete(String),
    #[error("The game is over")]
    GameOver,
    #[error("There is no move to undo")]
    NothingToUndo,
    #[error("A saved game must hold at least one position")]
    EmptyHistory,
    #[error("Invalid saved game: {0}")]
    Json(#[from] serde_json::Error),
}

/******************************************\
|==========================================|
|                Game State                |
|==========================================|
\******************************************/

/// One entry of the position stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub side: Player,
    /// The move that led here, `None` for the starting position
    pub last: Option<MoveRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    /// The opponent of the winner has no legal move left
    Won(Player),
}

/******************************************\
|==========================================|
|                   Game                   |
|==========================================|
\******************************************/

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    variant: Variant,
    states: Vec<GameState>,
}

impl Game {
    /// Sets up the opening position of `variant`
    pub fn new(variant: Variant) -> Result<Game, GameError> {
        Game::from_position(variant, variant.opening())
    }

    /// Starts a game of `variant` from a position in board notation
    pub fn from_position(variant: Variant, notation: &str) -> Result<Game, GameError> {
        let (board, side) = Board::from_notation(notation, &variant.geometry())?;

        Ok(Game {
            variant,
            states: vec![GameState {
                board,
                side,
                last: None,
            }],
        })
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn geometry(&self) -> Checkerboard {
        self.variant.geometry()
    }

    /// The current position
    pub fn current(&self) -> Result<&GameState, GameError> {
        self.states.last().ok_or(GameError::EmptyHistory)
    }

    pub fn board(&self) -> Result<&Board, GameError> {
        Ok(&self.current()?.board)
    }

    pub fn side_to_move(&self) -> Result<Player, GameError> {
        Ok(self.current()?.side)
    }

    /// Number of moves played
    pub fn ply(&self) -> usize {
        self.states.len().saturating_sub(1)
    }

    /// The current position in board notation
    pub fn notation(&self) -> Result<String, GameError> {
        let state = self.current()?;
        Ok(state.board.notation(&self.geometry(), state.side))
    }

    /// Legal moves of the side to move
    pub fn moves(&self) -> Result<MoveList, GameError> {
        let state = self.current()?;
        Ok(moves_for(&state.board, &self.geometry(), state.side)?)
    }

    /// Validates a possibly unfinished move of the side to move
    pub fn validate(&self, candidate: &str) -> Result<Validation, GameError> {
        let state = self.current()?;
        Ok(validate(&state.board, &self.geometry(), state.side, candidate)?)
    }

    /// Plays `candidate` for the side to move.
    ///
    /// Only a complete legal move is played; anything else leaves the game unchanged.
    pub fn play(&mut self, candidate: &str) -> Result<&MoveRecord, GameError> {
        if self.outcome()? != Outcome::Ongoing {
            return Err(GameError::GameOver);
        }

        let mv = match self.validate(candidate)? {
            Validation::Complete(mv) => mv,
            Validation::Incomplete { .. } => {
                return Err(GameError::Incomplete(candidate.trim().to_string()));
            }
            Validation::Invalid(reason) => return Err(reason.into()),
        };

        let geometry = self.geometry();
        let state = self.current()?;
        let mut board = state.board.clone();
        let record = board.apply(&geometry, &mv)?;
        let side = !state.side;

        debug!(
            ply = self.ply() + 1,
            mv = %record.mv,
            captured = record.captured.len(),
            promoted = record.promoted,
            "move played"
        );

        self.states.push(GameState {
            board,
            side,
            last: Some(record),
        });

        self.states
            .last()
            .and_then(|state| state.last.as_ref())
            .ok_or(GameError::EmptyHistory)
    }

    /// Takes back the last move and returns its record
    pub fn undo(&mut self) -> Result<MoveRecord, GameError> {
        if self.states.len() < 2 {
            return Err(GameError::NothingToUndo);
        }

        let record = self
            .states
            .pop()
            .and_then(|state| state.last)
            .ok_or(GameError::NothingToUndo)?;

        debug!(ply = self.ply(), mv = %record.mv, "move taken back");

        Ok(record)
    }

    /// The side to move loses when it has no legal move
    pub fn outcome(&self) -> Result<Outcome, GameError> {
        if self.moves()?.is_empty() {
            let winner = !self.side_to_move()?;
            debug!(winner = %winner, ply = self.ply(), "game over");
            Ok(Outcome::Won(winner))
        } else {
            Ok(Outcome::Ongoing)
        }
    }

    /// Records of the moves played so far, oldest first
    pub fn history(&self) -> impl Iterator<Item = &MoveRecord> {
        self.states.iter().filter_map(|state| state.last.as_ref())
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a game saved with [`Game::to_json`]
    pub fn from_json(json: &str) -> Result<Game, GameError> {
        let game: Game = serde_json::from_str(json)?;

        if game.states.is_empty() {
            return Err(GameError::EmptyHistory);
        }

        let geometry = game.geometry();
        for state in &game.states {
            state.board.check(&geometry)?;
        }

        Ok(game)
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
