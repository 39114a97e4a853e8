use crate::board::{Board, GameResult, Player};
use crate::error::{BoardError, PositionError};
use std::fmt;

/// Number of pieces in a line needed to win.
pub const CONNECT: usize = 4;

/// A column to drop a piece into. 0-based; displayed 1-based.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct Column(pub usize);

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// An implementation of the `Board` trait for Connect Four.
///
/// Cells are stored row-major with row 0 at the top, the same orientation as the text form.
/// Pieces fall to the lowest empty cell of their column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFourBoard {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Player>>,
    current_player: Player,
    result: Option<GameResult>,
}

impl Default for ConnectFourBoard {
    /// An empty 6x7 board with the first player to move.
    fn default() -> Self {
        ConnectFourBoard::new(Self::ROWS, Self::COLUMNS, Player::First)
    }
}

impl ConnectFourBoard {
    pub const ROWS: usize = 6;
    pub const COLUMNS: usize = 7;

    /// Creates an empty board.
    pub fn new(rows: usize, columns: usize, to_move: Player) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
            current_player: to_move,
            result: None,
        }
    }

    /// Builds a board from text rows, top row first: `O` empty, `Y` first player, `R` second.
    ///
    /// An existing line of four is detected and becomes the board's result.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], to_move: Player) -> Result<Self, PositionError> {
        let expected = rows
            .first()
            .map(|row| row.as_ref().trim().chars().count())
            .ok_or(PositionError::EmptyGrid)?;
        if expected == 0 {
            return Err(PositionError::EmptyGrid);
        }

        let mut board = ConnectFourBoard::new(rows.len(), expected, to_move);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref().trim();
            let found = row.chars().count();
            if found != expected {
                return Err(PositionError::RaggedRow {
                    row: r,
                    found,
                    expected,
                });
            }
            for (c, cell) in row.chars().enumerate() {
                board.cells[r * expected + c] = match cell.to_ascii_uppercase() {
                    'O' | '.' => None,
                    'Y' => Some(Player::First),
                    'R' => Some(Player::Second),
                    _ => return Err(PositionError::UnknownCell { row: r, cell }),
                };
            }
        }

        board.result = board.scan_result();
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The piece at `(row, column)`, row 0 being the top. `None` outside the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Player> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells[row * self.columns + column]
    }

    fn has_room(&self, column: usize) -> bool {
        self.rows > 0 && column < self.columns && self.cell(0, column).is_none()
    }

    fn is_full(&self) -> bool {
        (0..self.columns).all(|c| !self.has_room(c))
    }

    /// Counts the pieces of `player` in direction `(dr, dc)` from `(row, column)`,
    /// the starting cell excluded.
    fn run_length(&self, row: usize, column: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = column as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < self.rows
            && (c as usize) < self.columns
            && self.cell(r as usize, c as usize) == Some(player)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    fn completes_line(&self, row: usize, column: usize, player: Player) -> bool {
        [(0, 1), (1, 0), (1, 1), (1, -1)].iter().any(|&(dr, dc)| {
            1 + self.run_length(row, column, dr, dc, player)
                + self.run_length(row, column, -dr, -dc, player)
                >= CONNECT
        })
    }

    fn scan_result(&self) -> Option<GameResult> {
        for row in 0..self.rows {
            for column in 0..self.columns {
                if let Some(player) = self.cell(row, column) {
                    if self.completes_line(row, column, player) {
                        return Some(GameResult::Win(player));
                    }
                }
            }
        }

        if self.is_full() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }
}

impl Board for ConnectFourBoard {
    type Move = Column;

    fn get_current_player(&self) -> Player {
        self.current_player
    }

    fn get_result(&self) -> Option<GameResult> {
        self.result
    }

    fn get_valid_moves(&self) -> Vec<Self::Move> {
        (0..self.columns)
            .filter(|&c| self.has_room(c))
            .map(Column)
            .collect()
    }

    fn make_move(&mut self, b_move: Self::Move) -> Result<(), BoardError> {
        let Column(column) = b_move;
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfRange {
                column,
                width: self.columns,
            });
        }

        let row = (0..self.rows)
            .rev()
            .find(|&r| self.cell(r, column).is_none())
            .ok_or(BoardError::ColumnFull { column })?;
        self.cells[row * self.columns + column] = Some(self.current_player);

        if self.result.is_none() {
            if self.completes_line(row, column, self.current_player) {
                self.result = Some(GameResult::Win(self.current_player));
            } else if self.is_full() {
                self.result = Some(GameResult::Draw);
            }
        }
        Ok(())
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

impl fmt::Display for ConnectFourBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                let symbol = self.cell(row, column).map_or('O', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameResult, Player};
    use crate::boards::connect_four::{Column, ConnectFourBoard};
    use crate::error::{BoardError, PositionError};

    fn drop_all(board: &mut ConnectFourBoard, columns: &[usize]) {
        for &c in columns {
            board.make_move(Column(c)).unwrap();
            board.switch_player();
        }
    }

    #[test]
    fn pieces_fall_to_the_bottom() {
        let mut board = ConnectFourBoard::default();
        board.make_move(Column(3)).unwrap();
        assert_eq!(board.cell(5, 3), Some(Player::First));
        assert_eq!(board.cell(4, 3), None);

        board.switch_player();
        board.make_move(Column(3)).unwrap();
        assert_eq!(board.cell(4, 3), Some(Player::Second));
    }

    #[test]
    fn make_move_does_not_pass_the_turn() {
        let mut board = ConnectFourBoard::default();
        board.make_move(Column(0)).unwrap();
        assert_eq!(board.get_current_player(), Player::First);
        board.switch_player();
        assert_eq!(board.get_current_player(), Player::Second);
    }

    #[test]
    fn full_and_missing_columns_are_rejected() {
        let mut board = ConnectFourBoard::default();
        drop_all(&mut board, &[0, 0, 0, 0, 0, 0]);
        assert_eq!(
            board.make_move(Column(0)),
            Err(BoardError::ColumnFull { column: 0 })
        );
        assert_eq!(
            board.make_move(Column(7)),
            Err(BoardError::ColumnOutOfRange {
                column: 7,
                width: 7
            })
        );
        assert_eq!(board.get_valid_moves(), (1..7).map(Column).collect::<Vec<_>>());
    }

    #[test]
    fn detects_horizontal_win() {
        let mut board = ConnectFourBoard::default();
        drop_all(&mut board, &[0, 0, 1, 1, 2, 2]);
        assert_eq!(board.get_result(), None);
        board.make_move(Column(3)).unwrap();
        assert_eq!(board.get_result(), Some(GameResult::Win(Player::First)));
    }

    #[test]
    fn detects_vertical_win_for_second_player() {
        let mut board = ConnectFourBoard::default();
        drop_all(&mut board, &[0, 6, 1, 6, 2, 6, 4]);
        assert_eq!(board.get_current_player(), Player::Second);
        board.make_move(Column(6)).unwrap();
        assert_eq!(board.get_result(), Some(GameResult::Win(Player::Second)));
    }

    #[test]
    fn detects_diagonal_wins() {
        let rising = ConnectFourBoard::from_rows(
            &[
                "OOOOOOO",
                "OOOOOOO",
                "OOOYOOO",
                "OOYROOO",
                "OYRROOO",
                "YRRYOOO",
            ],
            Player::Second,
        )
        .unwrap();
        assert_eq!(rising.get_result(), Some(GameResult::Win(Player::First)));

        let falling = ConnectFourBoard::from_rows(
            &[
                "OOOOOOO",
                "OOOOOOO",
                "ROOOOOO",
                "YROOOOO",
                "YYROOOO",
                "YYYROOO",
            ],
            Player::First,
        )
        .unwrap();
        assert_eq!(falling.get_result(), Some(GameResult::Win(Player::Second)));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let mut board = ConnectFourBoard::from_rows(
            &[
                "YYRRYYO",
                "RRYYRRY",
                "YYRRYYR",
                "RRYYRRY",
                "YYRRYYR",
                "RRYYRRY",
            ],
            Player::Second,
        )
        .unwrap();
        assert_eq!(board.get_result(), None);
        assert_eq!(board.get_valid_moves(), vec![Column(6)]);

        board.make_move(Column(6)).unwrap();
        assert_eq!(board.get_result(), Some(GameResult::Draw));
        assert!(board.get_valid_moves().is_empty());
    }

    #[test]
    fn clones_are_independent() {
        let board = ConnectFourBoard::default();
        let mut copy = board.clone();
        copy.make_move(Column(2)).unwrap();
        copy.switch_player();
        assert_eq!(board.cell(5, 2), None);
        assert_eq!(board.get_current_player(), Player::First);
        assert_ne!(board, copy);
    }

    #[test]
    fn text_form_round_trips() {
        let rows = [
            "OOOOOOO", "OOOOOOO", "OOOOOOO", "OOOOOOO", "OOORYOO", "OOYRYRO",
        ];
        let board = ConnectFourBoard::from_rows(&rows, Player::First).unwrap();
        assert_eq!(board.to_string(), rows.join("\n") + "\n");
    }

    #[test]
    fn malformed_rows_are_rejected() {
        let ragged = ConnectFourBoard::from_rows(&["OOO", "OO"], Player::First);
        assert!(matches!(
            ragged,
            Err(PositionError::RaggedRow {
                row: 1,
                found: 2,
                expected: 3
            })
        ));

        let unknown = ConnectFourBoard::from_rows(&["OXO"], Player::First);
        assert!(matches!(
            unknown,
            Err(PositionError::UnknownCell { row: 0, cell: 'X' })
        ));

        let empty: [&str; 0] = [];
        assert!(matches!(
            ConnectFourBoard::from_rows(&empty, Player::First),
            Err(PositionError::EmptyGrid)
        ));
    }

    #[test]
    fn zero_sized_board_has_no_moves() {
        let mut board = ConnectFourBoard::new(0, 7, Player::First);
        assert!(board.get_valid_moves().is_empty());
        assert_eq!(board.cell(0, 0), None);
        assert_eq!(
            board.make_move(Column(2)),
            Err(BoardError::ColumnFull { column: 2 })
        );

        let narrow = ConnectFourBoard::new(6, 0, Player::First);
        assert!(narrow.get_valid_moves().is_empty());
        assert_eq!(narrow.cell(5, 0), None);
    }

    #[test]
    fn cells_outside_the_board_are_empty() {
        let board = ConnectFourBoard::default();
        assert_eq!(board.cell(6, 0), None);
        assert_eq!(board.cell(0, 7), None);
    }

    #[test]
    fn column_is_displayed_one_based() {
        assert_eq!(Column(0).to_string(), "1");
        assert_eq!(Column(6).to_string(), "7");
    }
}
