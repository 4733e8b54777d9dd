//! Normalized position encoding.
//!
//! A normalized position is the string `<placement> <side> - - 0 1`: piece
//! placement and side-to-move are kept, castling/en-passant/clock fields are
//! pinned to placeholders. The classifier cannot observe those fields, so
//! they must never influence position equality or de-duplication.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{BoardState, FrameError};
use crate::label::{Color, PieceLabel};

const PINNED_FIELDS: &str = "- - 0 1";

/// Canonical placement + side-to-move encoding of a board state.
///
/// Two frames whose placement and side-to-move agree normalize to
/// byte-identical strings, whatever their original metadata fields said.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPosition(String);

impl NormalizedPosition {
    /// Normalize a full FEN string: keep the placement and side fields, pin
    /// the rest.
    ///
    /// A missing side field defaults to white to move. No syntax validation
    /// happens here; an unparseable placement surfaces later, when the
    /// string is actually decoded.
    pub fn from_fen(fen: &str) -> Self {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().unwrap_or("");
        let side = match fields.next() {
            Some("b") => "b",
            _ => "w",
        };
        Self(format!("{placement} {side} {PINNED_FIELDS}"))
    }

    /// The piece placement field.
    pub fn placement(&self) -> &str {
        self.0.split(' ').next().unwrap_or("")
    }

    /// The side-to-move field.
    pub fn side_to_move(&self) -> Color {
        match self.0.split(' ').nth(1) {
            Some("b") => Color::Black,
            _ => Color::White,
        }
    }

    /// The full normalized string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl BoardState {
    /// Serialize into a normalized position, rank 8 down to rank 1.
    ///
    /// Consecutive empty squares within a rank are run-length encoded with a
    /// single counter flushed at each occupied square and at rank end, so
    /// adjacent runs always merge into one count (eight empties encode as
    /// `8`, never as e.g. `44`).
    pub fn to_normalized(&self, side: Color) -> NormalizedPosition {
        let mut placement = String::with_capacity(72);
        for rank in (0..8).rev() {
            if rank != 7 {
                placement.push('/');
            }
            let mut empty_run = 0u8;
            for file in 0..8 {
                match self.squares[rank * 8 + file].fen_char() {
                    None => empty_run += 1,
                    Some(c) => {
                        if empty_run > 0 {
                            placement.push(char::from(b'0' + empty_run));
                            empty_run = 0;
                        }
                        placement.push(c);
                    }
                }
            }
            if empty_run > 0 {
                placement.push(char::from(b'0' + empty_run));
            }
        }
        NormalizedPosition(format!("{placement} {} {PINNED_FIELDS}", side.fen_char()))
    }

    /// Parse the placement field of a FEN string.
    ///
    /// Syntax-only: eight `/`-separated ranks, each covering exactly eight
    /// files via piece letters and empty-run digits. Any piece multiset is
    /// accepted; noisy classifier frames are not legal positions and must
    /// not be rejected for that.
    pub fn from_placement(placement: &str) -> Result<Self, FrameError> {
        let bad = |reason: String| FrameError::BadPlacement { reason };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad(format!("expected 8 ranks, got {}", ranks.len())));
        }

        let mut squares = [PieceLabel::Empty; Self::SQUARES];
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(bad(format!("bad empty-run digit {c:?}")));
                    }
                    file += run as usize;
                } else if let Some(label) = PieceLabel::from_fen_char(c) {
                    if file >= 8 {
                        return Err(bad(format!("rank {} overflows 8 files", rank + 1)));
                    }
                    squares[rank * 8 + file] = label;
                    file += 1;
                } else {
                    return Err(bad(format!("unexpected character {c:?}")));
                }
            }
            if file != 8 {
                return Err(bad(format!("rank {} covers {file} files", rank + 1)));
            }
        }
        Ok(Self { squares })
    }
}
