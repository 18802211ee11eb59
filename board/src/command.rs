//! Command parsing.
//!
//! Commands are parsed once at the boundary into a tagged enum; dispatch in
//! the interpreter is an exhaustive match. Keywords are case-sensitive and
//! whitespace-tokenized. Trailing `# ...` comments are stripped by the
//! interpreter before the text reaches the parser.

use crate::square::Square;
use crate::types::{PieceColor, PieceKind};

/// A named board configuration accepted by `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Standard,
    Empty,
}

/// One parsed operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init(Layout),
    PrintSquare(Square),
    PrintActiveColor,
    DetailedMove {
        color: PieceColor,
        piece: PieceKind,
        from: Square,
        to: Square,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unsupported command: {0}")]
    Unsupported(String),

    #[error("unsupported board configuration: {0}")]
    UnknownLayout(String),

    #[error("cannot print square: {0}")]
    UnprintableSquare(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown piece: {0}")]
    UnknownPiece(String),

    #[error("source is not a real square: {0}")]
    InvalidSource(String),

    #[error("destination is not a real square: {0}")]
    InvalidDestination(String),
}

impl Command {
    /// Parse a single comment-free command line.
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let words: Vec<&str> = text.split_whitespace().collect();
        match words.as_slice() {
            ["init", layout] => match *layout {
                "standard" => Ok(Self::Init(Layout::Standard)),
                "empty" => Ok(Self::Init(Layout::Empty)),
                other => Err(CommandError::UnknownLayout(other.to_string())),
            },
            ["print", "square", square] => {
                let square = square
                    .parse()
                    .map_err(|_| CommandError::UnprintableSquare(square.to_string()))?;
                Ok(Self::PrintSquare(square))
            }
            ["print", "active", "color"] => Ok(Self::PrintActiveColor),
            ["detailed", "move", color, piece, "from", from, "to", to] => {
                let color = PieceColor::from_name(color)
                    .ok_or_else(|| CommandError::UnknownColor(color.to_string()))?;
                let piece = PieceKind::from_name(piece)
                    .ok_or_else(|| CommandError::UnknownPiece(piece.to_string()))?;
                let from = from
                    .parse()
                    .map_err(|_| CommandError::InvalidSource(from.to_string()))?;
                let to = to
                    .parse()
                    .map_err(|_| CommandError::InvalidDestination(to.to_string()))?;
                Ok(Self::DetailedMove {
                    color,
                    piece,
                    from,
                    to,
                })
            }
            _ => Err(CommandError::Unsupported(text.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_init() {
        assert_eq!(
            Command::parse("init standard").unwrap(),
            Command::Init(Layout::Standard)
        );
        assert_eq!(
            Command::parse("init empty").unwrap(),
            Command::Init(Layout::Empty)
        );
        assert!(matches!(
            Command::parse("init sideways"),
            Err(CommandError::UnknownLayout(_))
        ));
    }

    #[test]
    fn test_parse_prints() {
        assert_eq!(
            Command::parse("print square e2").unwrap(),
            Command::PrintSquare("e2".parse().unwrap())
        );
        assert_eq!(
            Command::parse("print active color").unwrap(),
            Command::PrintActiveColor
        );
        assert!(matches!(
            Command::parse("print square z9"),
            Err(CommandError::UnprintableSquare(_))
        ));
    }

    #[test]
    fn test_parse_detailed_move() {
        let command = Command::parse("detailed move white pawn from e2 to e4").unwrap();
        assert_eq!(
            command,
            Command::DetailedMove {
                color: PieceColor::White,
                piece: PieceKind::Pawn,
                from: "e2".parse().unwrap(),
                to: "e4".parse().unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        // Unknown verbs and wrong argument counts are both unsupported.
        for bad in [
            "",
            "hello",
            "print",
            "print square",
            "detailed move white pawn from e2",
            "detailed move white pawn e2 to e4",
        ] {
            assert!(matches!(
                Command::parse(bad),
                Err(CommandError::Unsupported(_))
            ));
        }
        assert!(matches!(
            Command::parse("detailed move teal pawn from e2 to e4"),
            Err(CommandError::UnknownColor(_))
        ));
        assert!(matches!(
            Command::parse("detailed move white wizard from e2 to e4"),
            Err(CommandError::UnknownPiece(_))
        ));
        assert!(matches!(
            Command::parse("detailed move white pawn from e2 to e9"),
            Err(CommandError::InvalidDestination(_))
        ));
    }
}
