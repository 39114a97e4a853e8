use thiserror::Error;

/// Errors raised by a [`Board`](crate::board::Board) when asked to do something illegal.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BoardError {
    /// The column index does not exist on this board.
    #[error("column {column} is outside the board (width {width})")]
    ColumnOutOfRange { column: usize, width: usize },
    /// The column has no empty cell left.
    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors that can abort a whole search call.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    /// The root position has no legal move to recommend.
    #[error("no legal moves at the root position")]
    NoLegalMoves,
    /// A node id that does not belong to the search tree.
    #[error("node does not belong to the search tree")]
    UnknownNode,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors produced while reading a text position.
#[derive(Debug, Error)]
pub enum PositionError {
    #[error("unknown algorithm `{0}` (expected UR, PMCGS or UCT)")]
    UnknownAlgorithm(String),
    #[error("unknown player `{0}` (expected Y or R)")]
    UnknownPlayer(String),
    #[error("unexpected cell `{cell}` in row {row}")]
    UnknownCell { row: usize, cell: char },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("the grid has no rows")]
    EmptyGrid,
    #[error("missing {0} line")]
    MissingLine(&'static str),
    #[error("failed to read position: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while two agents play each other.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// An agent answered with a move that is not legal on the current board.
    #[error("{agent} returned illegal move {column}")]
    IllegalMove { agent: String, column: usize },
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Board(#[from] BoardError),
}
