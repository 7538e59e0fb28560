// Coordinate: (col, row), 0-indexed, row 0 in cima (lato Rosso)
// Il Nero avanza verso row 0, il Rosso verso row N-1

use crate::error::BoardError;
use std::fmt;

pub const BOARD_SIZE: i8 = 8;

/// Weight of a king relative to a man in the material heuristic.
pub const KING_WEIGHT: f64 = 0.8;

/// Standard opening layout, row 0 first.
pub const START_DIAGRAM: &str = "r.r.r.r./.r.r.r.r/r.r.r.r./......../......../.b.b.b.b/b.b.b.b./.b.b.b.b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black = 0,
    Red = 1,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Row delta of a forward move: Black climbs towards row 0, Red towards row N-1.
    pub fn forward(self) -> i8 {
        match self {
            Player::Black => -1,
            Player::Red => 1,
        }
    }

    /// The row on which a man of this player is crowned.
    pub fn king_row(self, size: i8) -> i8 {
        match self {
            Player::Black => 0,
            Player::Red => size - 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::Red => "red",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Player {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Player::Black),
            "red" | "r" => Ok(Player::Red),
            _ => Err(BoardError::InvalidPlayer(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub col: i8,
    pub row: i8,
}

impl Square {
    /// Placeholder coordinates carried by search sentinels; never on any board.
    pub const NONE: Square = Square { col: -1, row: -1 };

    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    pub fn offset(self, d_col: i8, d_row: i8) -> Square {
        Square::new(self.col + d_col, self.row + d_row)
    }

    /// Square halfway between `self` and `other`. Only meaningful for two-square jumps.
    pub fn midpoint(self, other: Square) -> Square {
        Square::new((self.col + other.col) / 2, (self.row + other.row) / 2)
    }

    /// Parses `d6` (file letter, 1-based row) or `3,5` (col,row).
    pub fn from_notation(s: &str) -> Result<Square, BoardError> {
        let s = s.trim();
        let invalid = || BoardError::InvalidSquare(s.to_string());

        let sq = if let Some((c, r)) = s.split_once(',') {
            let col = c.trim().parse::<i8>().map_err(|_| invalid())?;
            let row = r.trim().parse::<i8>().map_err(|_| invalid())?;
            Square::new(col, row)
        } else {
            let bytes = s.as_bytes();
            if bytes.len() < 2 || !bytes[0].is_ascii_lowercase() {
                return Err(invalid());
            }
            let col = (bytes[0] - b'a') as i8;
            let row = s[1..]
                .parse::<i8>()
                .ok()
                .and_then(|r| r.checked_sub(1))
                .ok_or_else(invalid)?;
            Square::new(col, row)
        };

        if sq.col < 0 || sq.row < 0 || sq.col >= BOARD_SIZE || sq.row >= BOARD_SIZE {
            return Err(invalid());
        }
        Ok(sq)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.col) && self.row >= 0 {
            write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({},{})", self.col, self.row)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub player: Player,
    pub king: bool,
}

impl Piece {
    pub const fn man(player: Player) -> Self {
        Self { player, king: false }
    }

    pub const fn king(player: Player) -> Self {
        Self { player, king: true }
    }

    /// Diagonal unit vectors this piece may travel along: both forward diagonals,
    /// plus both backward ones for a king.
    pub fn directions(&self) -> Vec<(i8, i8)> {
        let dir = self.player.forward();
        let mut dirs = vec![(1, dir), (-1, dir)];
        if self.king {
            dirs.push((1, -dir));
            dirs.push((-1, -dir));
        }
        dirs
    }

    pub fn to_char(self) -> char {
        match (self.player, self.king) {
            (Player::Black, false) => 'b',
            (Player::Black, true) => 'B',
            (Player::Red, false) => 'r',
            (Player::Red, true) => 'R',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'b' => Some(Piece::man(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            'r' => Some(Piece::man(Player::Red)),
            'R' => Some(Piece::king(Player::Red)),
            _ => None,
        }
    }
}

/// A single step or jump.
///
/// `captured` and `made_king` are filled in by [`Board::make_move`] so the very
/// same value can be handed back to [`Board::unmake_move`]. `score` is only
/// meaningful on moves returned by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub start: Square,
    pub destination: Square,
    pub captured: Option<Piece>,
    pub made_king: bool,
    pub score: f64,
}

impl Move {
    pub fn new(start: Square, destination: Square) -> Self {
        Self {
            start,
            destination,
            captured: None,
            made_king: false,
            score: 0.0,
        }
    }

    /// Score-only move used by the search at leaves and terminal nodes.
    pub fn sentinel(score: f64) -> Self {
        Self {
            score,
            ..Self::new(Square::NONE, Square::NONE)
        }
    }

    pub fn is_null(&self) -> bool {
        self.start == Square::NONE
    }

    pub fn is_capture(&self) -> bool {
        (self.start.col - self.destination.col).abs() == 2
    }

    pub fn captured_square(&self) -> Option<Square> {
        self.is_capture()
            .then(|| self.start.midpoint(self.destination))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return f.write_str("0000");
        }
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.start, sep, self.destination)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: i8,
    // Griglia row-major: index = row * size + col
    grid: Vec<Option<Piece>>,
    // Contatori denormalizzati, indicizzati da Player as usize
    pieces: [u32; 2],
    kings: [u32; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(BOARD_SIZE)
    }
}

impl Board {
    /// Board with the standard opening layout.
    pub fn new() -> Self {
        let mut board = Self::empty(BOARD_SIZE);
        board.reset();
        board
    }

    // Board vuota, da popolare con set_piece o from_diagram
    pub fn empty(size: i8) -> Self {
        Self {
            size,
            grid: vec![None; (size as usize) * (size as usize)],
            pieces: [0; 2],
            kings: [0; 2],
        }
    }

    /// Wipes the board and places both armies on their three back rows.
    pub fn reset(&mut self) {
        self.grid.fill(None);
        self.pieces = [0; 2];
        self.kings = [0; 2];

        for row in 0..self.size {
            let player = if row < 3 {
                Player::Red
            } else if row >= self.size - 3 {
                Player::Black
            } else {
                continue;
            };
            for col in 0..self.size {
                if (col + row) % 2 == 0 {
                    self.set_piece(Square::new(col, row), Piece::man(player));
                }
            }
        }
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    pub fn in_bounds(&self, sq: Square) -> bool {
        sq.col >= 0 && sq.row >= 0 && sq.col < self.size && sq.row < self.size
    }

    fn index(&self, sq: Square) -> usize {
        debug_assert!(self.in_bounds(sq), "square {} outside the board", sq);
        (sq.row as usize) * (self.size as usize) + sq.col as usize
    }

    /// Piece on `sq`, or `None` when empty or out of bounds.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.in_bounds(sq) {
            return None;
        }
        self.grid[self.index(sq)]
    }

    /// Places a piece, replacing whatever was there and keeping the counters exact.
    pub fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.remove_piece(sq);
        let idx = self.index(sq);
        self.grid[idx] = Some(piece);
        self.pieces[piece.player as usize] += 1;
        if piece.king {
            self.kings[piece.player as usize] += 1;
        }
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let idx = self.index(sq);
        let removed = self.grid[idx].take();
        if let Some(p) = removed {
            self.pieces[p.player as usize] -= 1;
            if p.king {
                self.kings[p.player as usize] -= 1;
            }
        }
        removed
    }

    pub fn piece_count(&self, player: Player) -> u32 {
        self.pieces[player as usize]
    }

    pub fn king_count(&self, player: Player) -> u32 {
        self.kings[player as usize]
    }

    /// Material balance from Red's point of view: positive favours Red.
    pub fn material(&self) -> f64 {
        let side = |p: Player| self.piece_count(p) as f64 + KING_WEIGHT * self.king_count(p) as f64;
        side(Player::Red) - side(Player::Black)
    }

    /// Every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = self.size as usize;
        self.grid.iter().enumerate().filter_map(move |(i, p)| {
            p.map(|piece| (Square::new((i % size) as i8, (i / size) as i8), piece))
        })
    }

    /// Recounts the grid and compares against the cached counters.
    pub fn counters_consistent(&self) -> bool {
        let mut pieces = [0u32; 2];
        let mut kings = [0u32; 2];
        for (_, p) in self.pieces() {
            pieces[p.player as usize] += 1;
            if p.king {
                kings[p.player as usize] += 1;
            }
        }
        pieces == self.pieces && kings == self.kings
    }

    /// Applies an already validated move and records what it captured and
    /// whether it crowned the mover inside `mv`.
    ///
    /// # Panics
    /// Panics if `start` is empty, or if a jump has nothing to jump over.
    pub fn make_move(&mut self, mv: &mut Move, turn: Player) {
        let from = mv.start;
        let to = mv.destination;
        debug_assert!(self.in_bounds(from) && self.in_bounds(to), "move {} out of bounds", mv);
        debug_assert!(self.piece_at(to).is_none(), "destination {} occupied", to);

        mv.captured = None;
        mv.made_king = false;

        if let Some(mid) = mv.captured_square() {
            let captured = self
                .remove_piece(mid)
                .unwrap_or_else(|| panic!("make_move {}: no piece to capture on {}", mv, mid));
            mv.captured = Some(captured);
        }

        let idx_from = self.index(from);
        let mut piece = self.grid[idx_from]
            .take()
            .unwrap_or_else(|| panic!("make_move {}: no piece on {}", mv, from));
        debug_assert_eq!(piece.player, turn, "make_move {}: wrong side to move", mv);

        if to.row == turn.king_row(self.size) && !piece.king {
            piece.king = true;
            self.kings[turn as usize] += 1;
            mv.made_king = true;
        }

        let idx_to = self.index(to);
        self.grid[idx_to] = Some(piece);
    }

    /// Exact inverse of [`Board::make_move`]; `mv` must be the value that call filled in.
    ///
    /// # Panics
    /// Panics if the destination is empty or a capture move carries no captured piece.
    pub fn unmake_move(&mut self, mv: &Move, turn: Player) {
        let idx_to = self.index(mv.destination);
        let mut piece = self.grid[idx_to]
            .take()
            .unwrap_or_else(|| panic!("unmake_move {}: no piece on {}", mv, mv.destination));

        if mv.made_king {
            debug_assert!(piece.king);
            piece.king = false;
            self.kings[turn as usize] -= 1;
        }

        let idx_from = self.index(mv.start);
        debug_assert!(self.grid[idx_from].is_none(), "unmake_move {}: origin occupied", mv);
        self.grid[idx_from] = Some(piece);

        if let Some(mid) = mv.captured_square() {
            let captured = mv
                .captured
                .unwrap_or_else(|| panic!("unmake_move {}: capture was never applied", mv));
            self.set_piece(mid, captured);
        }
    }

    /// Parses a diagram such as [`START_DIAGRAM`]: rows separated by `/` or
    /// newlines, row 0 first; `.` empty, `b`/`B` black man/king, `r`/`R` red
    /// man/king, digits skip that many empty squares.
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = diagram
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        let size = rows.len();
        if size == 0 || size > 26 {
            return Err(BoardError::BadRowCount(size));
        }

        let mut board = Board::empty(size as i8);
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                if ch != '.' {
                    let piece = Piece::from_char(ch).ok_or(BoardError::InvalidPieceChar(ch))?;
                    if col >= size {
                        return Err(BoardError::BadRowWidth { row, width: col + 1 });
                    }
                    board.set_piece(Square::new(col as i8, row as i8), piece);
                }
                col += 1;
            }
            if col != size {
                return Err(BoardError::BadRowWidth { row, width: col });
            }
        }
        Ok(board)
    }

    /// Diagram in the `from_diagram` format, rows joined by `/`.
    pub fn to_diagram(&self) -> String {
        self.to_string().trim_end().replace('\n', "/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = self
                    .piece_at(Square::new(col, row))
                    .map_or('.', Piece::to_char);
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board({}, black {}/{}k, red {}/{}k)",
            self.to_diagram(),
            self.pieces[0],
            self.kings[0],
            self.pieces[1],
            self.kings[1]
        )
    }
}
