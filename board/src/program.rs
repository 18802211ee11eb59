//! The command interpreter: board + turn state + transcript.

use crate::board::Board;
use crate::command::{Command, CommandError, Layout};
use crate::square::{intermediate_squares, Square};
use crate::types::{PieceColor, PieceKind};

/// Prefix of every operator input line. Always ends in a space.
pub const INPUT_PREFIX: &str = "$ ";

/// Prefix of every engine output line. Always ends in a space.
pub const OUTPUT_PREFIX: &str = "> ";

/// Terminator of every transcript line.
pub const LINE_SUFFIX: &str = "\n";

/// Callback invoked synchronously with each transcript line as it is
/// appended. Listeners persist for the program's lifetime.
pub type LineListener = Box<dyn FnMut(&str)>;

#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Why a move is illegal. Checks run in a fixed order and the first failure
/// wins; a failed move leaves board and turn state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("source square is empty")]
    SourceEmpty,

    #[error("cannot move the other player's piece")]
    WrongColor,

    #[error("piece has to move")]
    NullMove,

    #[error("destination is not empty")]
    DestinationOccupied,

    #[error("path is blocked at {0}")]
    PathBlocked(Square),

    #[error("pawns cannot move sideways")]
    PawnSideways,

    #[error("pawns cannot move backwards")]
    PawnBackwards,

    #[error("pawns cannot move more than 2 squares")]
    PawnTooFar,

    #[error("pawns can only move 2 from their starting rank")]
    PawnDoubleNotFromStart,

    #[error("unsupported piece: {0}")]
    UnsupportedPiece(PieceKind),
}

/// The chess program: one board, one active color, one transcript.
pub struct ChessProgram {
    board: Board,
    active_color: PieceColor,
    lines: Vec<String>,
    listeners: Vec<LineListener>,
}

impl ChessProgram {
    /// A fresh program: empty board, white to move, empty transcript.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            active_color: PieceColor::White,
            lines: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener for every subsequent transcript line.
    pub fn on_line(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The transcript so far, in append order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> PieceColor {
        self.active_color
    }

    /// Interpret one command line.
    ///
    /// A trailing `# ...` comment is stripped first and is not preserved.
    /// The (stripped) input line is always appended to the transcript; a
    /// successful command then appends exactly one output line. A failing
    /// command appends no output line and mutates nothing.
    pub fn handle_command(&mut self, text: &str) -> Result<(), ProgramError> {
        let text = match text.split_once('#') {
            Some((head, _comment)) => head,
            None => text,
        }
        .trim();
        self.add_line(format!("{INPUT_PREFIX}{text}{LINE_SUFFIX}"));
        tracing::trace!(command = text, "handling command");
        match Command::parse(text)? {
            Command::Init(layout) => {
                // Resets the board only; the active color carries over.
                self.board = match layout {
                    Layout::Standard => Board::standard(),
                    Layout::Empty => Board::empty(),
                };
                self.respond("ok");
            }
            Command::PrintSquare(square) => match self.board.piece_at(square) {
                Some(piece) => self.respond(&piece.to_string()),
                None => self.respond("empty"),
            },
            Command::PrintActiveColor => {
                self.respond(self.active_color.as_str());
            }
            Command::DetailedMove {
                color,
                piece,
                from,
                to,
            } => {
                self.check_move(color, piece, from, to)?;
                if let Some(moved) = self.board.take(from) {
                    self.board.put(to, moved);
                }
                self.active_color = self.active_color.opposite();
                self.respond("ok");
            }
        }
        Ok(())
    }

    /// Pure legality query: no mutation, no transcript writes.
    ///
    /// The piece actually occupying `from` is authoritative for legality;
    /// the caller-supplied color and kind are informational only.
    pub fn check_move(
        &self,
        _color: PieceColor,
        _piece: PieceKind,
        from: Square,
        to: Square,
    ) -> Result<(), MoveError> {
        let occupant = self.board.piece_at(from).ok_or(MoveError::SourceEmpty)?;
        if occupant.color != self.active_color {
            return Err(MoveError::WrongColor);
        }
        if from == to {
            return Err(MoveError::NullMove);
        }
        if self.board.piece_at(to).is_some() {
            return Err(MoveError::DestinationOccupied);
        }
        self.check_move_shape(occupant.color, occupant.kind, from, to)
    }

    fn check_move_shape(
        &self,
        color: PieceColor,
        kind: PieceKind,
        from: Square,
        to: Square,
    ) -> Result<(), MoveError> {
        if self.board.piece_at(to).is_some() {
            return Err(MoveError::DestinationOccupied);
        }
        for square in intermediate_squares(from, to) {
            if self.board.piece_at(square).is_some() {
                return Err(MoveError::PathBlocked(square));
            }
        }
        match kind {
            PieceKind::Pawn => {
                let dx = to.x() - from.x();
                let dy = to.y() - from.y();
                let forward = color.forward_dy();
                if dx != 0 {
                    Err(MoveError::PawnSideways)
                } else if dy.signum() != forward {
                    Err(MoveError::PawnBackwards)
                } else if dy.abs() > 2 {
                    Err(MoveError::PawnTooFar)
                } else if dy == 2 * forward && from.y() != color.pawn_start_y() {
                    Err(MoveError::PawnDoubleNotFromStart)
                } else {
                    Ok(())
                }
            }
            other => Err(MoveError::UnsupportedPiece(other)),
        }
    }

    fn respond(&mut self, content: &str) {
        self.add_line(format!("{OUTPUT_PREFIX}{content}{LINE_SUFFIX}"));
    }

    fn add_line(&mut self, line: String) {
        self.lines.push(line);
        if let Some(last) = self.lines.last() {
            for listener in &mut self.listeners {
                listener(last);
            }
        }
    }
}

impl Default for ChessProgram {
    fn default() -> Self {
        Self::new()
    }
}
