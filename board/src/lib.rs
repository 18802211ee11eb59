//! Minimal chess-program state machine.
//!
//! The [`ChessProgram`] interprets a small textual command language against a
//! single authoritative board plus turn state, and records every exchanged
//! line in an append-only transcript. It is a strict, fail-fast interpreter,
//! not a full rules engine: only pawn forward moves are legal.

pub mod board;
pub mod command;
pub mod program;
pub mod square;
pub mod types;

pub use board::{Board, BACK_RANK};
pub use command::{Command, CommandError, Layout};
pub use program::{
    ChessProgram, MoveError, ProgramError, INPUT_PREFIX, LINE_SUFFIX, OUTPUT_PREFIX,
};
pub use square::{intermediate_squares, Square, SquareError};
pub use types::{Piece, PieceColor, PieceKind};
