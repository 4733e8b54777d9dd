//! Per-square classifier labels.

use serde::{Deserialize, Serialize};

/// Piece color. Also used for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposite color.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// FEN side-to-move letter (`w` / `b`).
    #[inline]
    pub fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Piece type, color-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Uppercase FEN letter for this piece type.
    pub fn fen_char(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    /// Parse a FEN letter of either case.
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// Output alphabet of the per-square classifier: a colored piece or empty.
///
/// Labels are produced per square by an external classifier and may be
/// wrong; nothing in this crate assumes a frame of labels forms a legal
/// chess position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PieceLabel {
    Empty,
    Piece { kind: PieceKind, color: Color },
}

impl PieceLabel {
    /// Shorthand constructor for an occupied square.
    pub const fn piece(kind: PieceKind, color: Color) -> Self {
        PieceLabel::Piece { kind, color }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, PieceLabel::Empty)
    }

    /// FEN letter: uppercase for white, lowercase for black, `None` for empty.
    pub fn fen_char(self) -> Option<char> {
        match self {
            PieceLabel::Empty => None,
            PieceLabel::Piece { kind, color } => Some(match color {
                Color::White => kind.fen_char(),
                Color::Black => kind.fen_char().to_ascii_lowercase(),
            }),
        }
    }

    /// Parse a FEN placement letter into a label.
    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(PieceLabel::piece(kind, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters_round_trip() {
        for c in ['K', 'q', 'R', 'b', 'N', 'p'] {
            let label = PieceLabel::from_fen_char(c).expect("valid letter");
            assert_eq!(label.fen_char(), Some(c));
        }
        assert!(PieceLabel::from_fen_char('x').is_none());
        assert_eq!(PieceLabel::Empty.fen_char(), None);
    }

    #[test]
    fn label_serde_uses_snake_case() {
        let knight = PieceLabel::piece(PieceKind::Knight, Color::Black);
        let json = serde_json::to_string(&knight).expect("serialize");
        assert_eq!(json, r#"{"piece":{"kind":"knight","color":"black"}}"#);

        let empty: PieceLabel = serde_json::from_str(r#""empty""#).expect("deserialize");
        assert!(empty.is_empty());
    }

    #[test]
    fn color_flips() {
        assert_eq!(Color::White.other(), Color::Black);
        assert_eq!(Color::Black.other(), Color::White);
        assert_eq!(Color::White.fen_char(), 'w');
        assert_eq!(Color::Black.fen_char(), 'b');
    }
}
