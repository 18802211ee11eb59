//! The 8x8 board: a total mapping from squares to optional pieces.

use crate::square::Square;
use crate::types::{Piece, PieceColor, PieceKind};

/// Standard back-rank order, files a through h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupancy of all 64 squares, indexed internally as `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with every square empty.
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position: black on ranks 7/8, white on 1/2.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (x, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][x] = Some(Piece {
                color: PieceColor::Black,
                kind,
            });
            board.squares[1][x] = Some(Piece {
                color: PieceColor::Black,
                kind: PieceKind::Pawn,
            });
            board.squares[6][x] = Some(Piece {
                color: PieceColor::White,
                kind: PieceKind::Pawn,
            });
            board.squares[7][x] = Some(Piece {
                color: PieceColor::White,
                kind,
            });
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.y() as usize][square.x() as usize]
    }

    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.y() as usize][square.x() as usize].take()
    }

    pub(crate) fn put(&mut self, square: Square, piece: Piece) {
        self.squares[square.y() as usize][square.x() as usize] = Some(piece);
    }
}
