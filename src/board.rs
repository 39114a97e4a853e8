use crate::error::BoardError;
use std::fmt::{Debug, Display};

/// The central trait of the library, defining the interface for a game state.
///
/// The search engine only consumes this interface: it clones the root board once per
/// simulation and drives the clone with the methods below. Implementations must make
/// `clone` a deep copy that shares no mutable state with the original.
pub trait Board: Clone {
    /// The type representing a move in the game, e.g. the column a piece is dropped into.
    type Move: Copy + PartialEq + Debug + Display;

    /// Returns the player whose turn it is to make a move.
    fn get_current_player(&self) -> Player;

    /// Returns the terminal result of the game, or `None` while it is still ongoing.
    fn get_result(&self) -> Option<GameResult>;

    /// Returns all legal moves in a stable order. Empty when the board is full.
    fn get_valid_moves(&self) -> Vec<Self::Move>;

    /// Places a piece for the current player.
    ///
    /// This does not pass the turn; callers that track turn order call
    /// [`Board::switch_player`] themselves.
    fn make_move(&mut self, b_move: Self::Move) -> Result<(), BoardError>;

    /// Toggles whose turn it is.
    fn switch_player(&mut self);
}

/// The two sides of a two-player game.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Player {
    /// The side that moves first from the empty board (written `Y`).
    First,
    /// The side that moves second (written `R`).
    Second,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// The single-letter symbol used in text positions.
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'Y',
            Player::Second => 'R',
        }
    }
}

/// The terminal result of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameResult {
    /// The board filled up with no winner.
    Draw,
    /// The given side completed a line.
    Win(Player),
}

impl GameResult {
    /// Whether this result counts as a win for `player`. A draw is a win for nobody.
    pub fn is_win_for(self, player: Player) -> bool {
        self == GameResult::Win(player)
    }
}
