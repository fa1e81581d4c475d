use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Numeric code used by the input/output records (1 = Black, 2 = White).
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::Black),
            2 => Some(Color::White),
            _ => None,
        }
    }
}

/// A board coordinate as `(row, col)`.
pub type Point = (usize, usize);

/// An n×n grid of cells. `None` marks an empty point.
///
/// The size is fixed at construction; two boards compare equal when every
/// cell matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from rows of cells. Every row must have `rows.len()` cells.
    pub fn from_rows(rows: &[Vec<Option<Color>>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.size && col < self.size
    }

    /// Cell at `pt`, or `None` if the point is empty or off the board.
    pub fn get(&self, (row, col): Point) -> Option<Color> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    pub fn is_empty_at(&self, pt: Point) -> bool {
        self.contains(pt) && self.get(pt).is_none()
    }

    /// Set a cell. Panics if `pt` is off the board.
    pub fn set(&mut self, pt: Point, cell: Option<Color>) {
        assert!(
            self.contains(pt),
            "point {pt:?} outside {0}x{0} board",
            self.size
        );
        let i = self.idx(pt.0, pt.1);
        self.cells[i] = cell;
    }

    /// The up to four in-bounds orthogonal neighbors of `pt`.
    pub fn neighbors(&self, (row, col): Point) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if row > 0 {
            v.push((row - 1, col));
        }
        if row + 1 < s {
            v.push((row + 1, col));
        }
        if col > 0 {
            v.push((row, col - 1));
        }
        if col + 1 < s {
            v.push((row, col + 1));
        }
        v.into_iter()
    }

    /// All points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let s = self.size;
        (0..s).flat_map(move |row| (0..s).map(move |col| (row, col)))
    }

    pub fn empty_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(|&pt| self.get(pt).is_none())
    }

    /// Number of stones of `color` on the board.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == Some(color)).count()
    }

    /// The four corners, in the order (0,0), (0,n-1), (n-1,0), (n-1,n-1).
    pub fn corners(&self) -> [Point; 4] {
        let last = self.size.saturating_sub(1);
        [(0, 0), (0, last), (last, 0), (last, last)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get((row, col)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build a board from strings like `"X.O.."`, one per row.
///
/// `X` is Black, `O` is White, anything else is empty.
pub fn board_from_strs(rows: &[&str]) -> Board {
    let rows: Vec<Vec<Option<Color>>> = rows
        .iter()
        .map(|r| {
            r.chars()
                .map(|c| match c {
                    'X' => Some(Color::Black),
                    'O' => Some(Color::White),
                    _ => None,
                })
                .collect()
        })
        .collect();
    Board::from_rows(&rows).unwrap_or_else(|| panic!("board rows are not square: {rows:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_corner_and_center() {
        let board = Board::new(5);
        let corner: Vec<Point> = board.neighbors((0, 0)).collect();
        assert_eq!(corner.len(), 2);
        assert!(corner.contains(&(1, 0)));
        assert!(corner.contains(&(0, 1)));

        let edge: Vec<Point> = board.neighbors((0, 2)).collect();
        assert_eq!(edge.len(), 3);

        let center: Vec<Point> = board.neighbors((2, 2)).collect();
        assert_eq!(center.len(), 4);
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let board = Board::new(5);
        assert_eq!(board.get((5, 0)), None);
        assert!(!board.is_empty_at((0, 5)));
    }

    #[test]
    fn test_board_equality() {
        let mut a = Board::new(5);
        let b = Board::new(5);
        assert_eq!(a, b);
        a.set((1, 1), Some(Color::Black));
        assert_ne!(a, b);
    }

    #[test]
    fn test_display() {
        let board = board_from_strs(&["X.", ".O"]);
        assert_eq!(board.to_string(), "X . \n. O \n");
    }

    #[test]
    fn test_corners_order() {
        let board = Board::new(5);
        assert_eq!(board.corners(), [(0, 0), (0, 4), (4, 0), (4, 4)]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![None, None], vec![None]];
        assert!(Board::from_rows(&rows).is_none());
    }
}
