//! Text positions: the algorithm to play, the player to move and the grid.
//!
//! ```text
//! UCT
//! R
//! OOOOOOO
//! OOOOOOO
//! OOOOOOO
//! OOOOOOO
//! OOOOOOO
//! OOOYOOO
//! ```

use crate::arena::Algorithm;
use crate::board::Player;
use crate::boards::connect_four::ConnectFourBoard;
use crate::error::PositionError;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A position to recommend a move for.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub algorithm: Algorithm,
    pub board: ConnectFourBoard,
}

impl Position {
    /// Reads and parses a position file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, PositionError> {
        fs::read_to_string(path)?.parse()
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let algorithm = lines
            .next()
            .ok_or(PositionError::MissingLine("algorithm"))?
            .parse()?;
        let to_move = match lines.next().ok_or(PositionError::MissingLine("player"))? {
            "Y" => Player::First,
            "R" => Player::Second,
            other => return Err(PositionError::UnknownPlayer(other.to_string())),
        };
        let rows: Vec<&str> = lines.collect();
        let board = ConnectFourBoard::from_rows(&rows, to_move)?;

        Ok(Position { algorithm, board })
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::Algorithm;
    use crate::board::{Board, Player};
    use crate::boards::connect_four::Column;
    use crate::error::PositionError;
    use crate::position::Position;

    const INPUT: &str = "PMCGS\nR\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOOOOO\nOOOYOOO\n";

    #[test]
    fn parses_position_file() {
        let position: Position = INPUT.parse().unwrap();
        assert_eq!(position.algorithm, Algorithm::Pmcgs);
        assert_eq!(position.board.get_current_player(), Player::Second);
        assert_eq!(position.board.rows(), 6);
        assert_eq!(position.board.columns(), 7);
        assert_eq!(position.board.cell(5, 3), Some(Player::First));
        assert_eq!(position.board.get_valid_moves().len(), 7);
        assert_eq!(position.board.get_result(), None);
    }

    #[test]
    fn tolerates_windows_line_endings() {
        let input = INPUT.replace('\n', "\r\n");
        let position: Position = input.parse().unwrap();
        assert_eq!(position.board.get_valid_moves()[0], Column(0));
    }

    #[test]
    fn rejects_unknown_headers() {
        assert!(matches!(
            "DFS\nY\nOOO\n".parse::<Position>(),
            Err(PositionError::UnknownAlgorithm(name)) if name == "DFS"
        ));
        assert!(matches!(
            "UR\nB\nOOO\n".parse::<Position>(),
            Err(PositionError::UnknownPlayer(name)) if name == "B"
        ));
        assert!(matches!(
            "UCT\n".parse::<Position>(),
            Err(PositionError::MissingLine("player"))
        ));
        assert!(matches!(
            "UCT\nY\n".parse::<Position>(),
            Err(PositionError::EmptyGrid)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Position::read("does/not/exist.txt"),
            Err(PositionError::Io(_))
        ));
    }
}
