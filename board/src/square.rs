//! Board coordinates and coordinate arithmetic.
//!
//! A square is an (x, y) pair with x the file index (0 = a) and y the rank
//! index taken from the fixed rank string `"87654321"`: rank 8 maps to y = 0
//! and rank 1 to y = 7, so y grows going down the board from black's back
//! rank toward white's.

use std::str::FromStr;

/// File letters in x order.
pub const FILES: &str = "abcdefgh";

/// Rank digits in y order (rank 8 first).
pub const RANKS: &str = "87654321";

/// One of the 64 board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    x: i8,
    y: i8,
}

#[derive(Debug, thiserror::Error)]
pub enum SquareError {
    #[error("not a real square: {0}")]
    Invalid(String),
}

impl Square {
    /// Construct from internal coordinates; `None` outside the 8x8 grid.
    pub fn new(x: i8, y: i8) -> Option<Self> {
        if (0..8).contains(&x) && (0..8).contains(&y) {
            Some(Self { x, y })
        } else {
            None
        }
    }

    pub fn x(self) -> i8 {
        self.x
    }

    pub fn y(self) -> i8 {
        self.y
    }

    /// The square displaced by (dx, dy), if it stays on the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The square at position `index` in [`Square::all`] order, with the
    /// index taken modulo 64. Total, for uniform sampling.
    pub fn from_index(index: usize) -> Self {
        let index = index % 64;
        Self {
            x: (index % 8) as i8,
            y: (index / 8) as i8,
        }
    }

    /// All 64 squares, rank 8 first, files a through h within each rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|y| (0..8).map(move |x| Square { x, y }))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(SquareError::Invalid(s.to_string())),
        };
        let x = FILES
            .find(file.to_ascii_lowercase())
            .ok_or_else(|| SquareError::Invalid(s.to_string()))?;
        let y = RANKS
            .find(rank)
            .ok_or_else(|| SquareError::Invalid(s.to_string()))?;
        Ok(Square {
            x: x as i8,
            y: y as i8,
        })
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.x as u8) as char;
        let rank = RANKS.as_bytes()[self.y as usize] as char;
        write!(f, "{}{}", file, rank)
    }
}

/// Squares strictly between `src` and `dst` along a rank, file, or diagonal.
///
/// Deltas that are neither collinear nor diagonal yield an empty list; the
/// caller's shape validation is responsible for rejecting such moves.
pub fn intermediate_squares(src: Square, dst: Square) -> Vec<Square> {
    let dx = dst.x - src.x;
    let dy = dst.y - src.y;
    let steps = if dx == 0 {
        dy.abs()
    } else if dy == 0 {
        dx.abs()
    } else if dx.abs() == dy.abs() {
        dx.abs()
    } else {
        return Vec::new();
    };
    (1..steps)
        .filter_map(|i| src.offset(i * dx.signum(), i * dy.signum()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(sq("a8"), Square::new(0, 0).unwrap());
        assert_eq!(sq("h1"), Square::new(7, 7).unwrap());
        assert_eq!(sq("E2"), Square::new(4, 6).unwrap());
        assert_eq!(sq("e2").to_string(), "e2");
        assert_eq!(sq("A8").to_string(), "a8");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for bad in ["", "e", "e9", "i1", "e22", "22", "2e"] {
            assert!(bad.parse::<Square>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_exactly_64_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        for file in FILES.chars() {
            for rank in RANKS.chars() {
                let name = format!("{}{}", file, rank);
                assert!(squares.contains(&sq(&name)), "missing {}", name);
            }
        }
    }

    #[test]
    fn test_from_index_matches_all_order() {
        let squares: Vec<Square> = Square::all().collect();
        for (index, &square) in squares.iter().enumerate() {
            assert_eq!(Square::from_index(index), square);
        }
        assert_eq!(Square::from_index(64), squares[0]);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(sq("e2").offset(0, -1), Some(sq("e3")));
        assert_eq!(sq("a8").offset(-1, 0), None);
        assert_eq!(sq("h1").offset(0, 1), None);
    }

    #[test]
    fn test_intermediate_squares_straight_and_diagonal() {
        assert_eq!(intermediate_squares(sq("e2"), sq("e4")), vec![sq("e3")]);
        assert_eq!(intermediate_squares(sq("e2"), sq("e3")), vec![]);
        assert_eq!(
            intermediate_squares(sq("a1"), sq("d1")),
            vec![sq("b1"), sq("c1")]
        );
        assert_eq!(
            intermediate_squares(sq("a1"), sq("d4")),
            vec![sq("b2"), sq("c3")]
        );
    }

    #[test]
    fn test_intermediate_squares_off_line_is_empty() {
        // A knight-shaped delta is neither collinear nor diagonal.
        assert_eq!(intermediate_squares(sq("b1"), sq("c3")), vec![]);
    }
}
