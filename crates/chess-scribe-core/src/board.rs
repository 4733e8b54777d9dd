//! Board state decoding and comparison.

use crate::label::PieceLabel;
use crate::square::Square;

/// Errors produced while decoding classifier frames or placement strings.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("expected {expected} square labels, got {got}")]
    WrongSquareCount { expected: usize, got: usize },

    #[error("malformed piece placement: {reason}")]
    BadPlacement { reason: String },
}

/// A total mapping from [`Square`] to [`PieceLabel`].
///
/// Equality is structural (square by square). A board state is a plain
/// snapshot of classifier output; it is not required to be a legal position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) squares: [PieceLabel; BoardState::SQUARES],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    pub const SQUARES: usize = 64;

    /// A board with every square empty.
    pub const fn empty() -> Self {
        Self {
            squares: [PieceLabel::Empty; Self::SQUARES],
        }
    }

    /// Decode one classifier frame.
    ///
    /// Labels arrive in the classifier's visual scan order: rank 8 first,
    /// files a→h within each rank, down to rank 1.
    pub fn decode(labels: &[PieceLabel]) -> Result<Self, FrameError> {
        if labels.len() != Self::SQUARES {
            return Err(FrameError::WrongSquareCount {
                expected: Self::SQUARES,
                got: labels.len(),
            });
        }

        let mut squares = [PieceLabel::Empty; Self::SQUARES];
        for (pos, &label) in labels.iter().enumerate() {
            let file = pos % 8;
            let rank = 7 - pos / 8;
            squares[rank * 8 + file] = label;
        }
        Ok(Self { squares })
    }

    /// Serialize back into the classifier's visual scan order.
    ///
    /// Inverse of [`BoardState::decode`].
    pub fn scan_labels(&self) -> Vec<PieceLabel> {
        let mut labels = Vec::with_capacity(Self::SQUARES);
        for rank in (0..8).rev() {
            for file in 0..8 {
                labels.push(self.squares[rank * 8 + file]);
            }
        }
        labels
    }

    /// Label on a square.
    #[inline]
    pub fn label_at(&self, square: Square) -> PieceLabel {
        self.squares[square.index()]
    }

    /// Replace the label on a square.
    #[inline]
    pub fn set(&mut self, square: Square, label: PieceLabel) {
        self.squares[square.index()] = label;
    }

    /// Squares whose labels differ between `self` and `other`, in
    /// enumeration order, as `(square, self label, other label)`.
    pub fn diff<'a>(
        &'a self,
        other: &'a BoardState,
    ) -> impl Iterator<Item = (Square, PieceLabel, PieceLabel)> + 'a {
        Square::all().filter_map(move |square| {
            let (a, b) = (self.label_at(square), other.label_at(square));
            (a != b).then_some((square, a, b))
        })
    }

    /// Number of squares whose labels differ.
    pub fn diff_count(&self, other: &BoardState) -> usize {
        self.diff(other).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{Color, PieceKind};

    #[test]
    fn decode_requires_exactly_64_labels() {
        let short = vec![PieceLabel::Empty; 63];
        match BoardState::decode(&short) {
            Err(FrameError::WrongSquareCount { expected, got }) => {
                assert_eq!(expected, 64);
                assert_eq!(got, 63);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(BoardState::decode(&vec![PieceLabel::Empty; 65]).is_err());
    }

    #[test]
    fn decode_maps_scan_order_onto_coordinates() {
        // First scanned square is a8, last is h1.
        let mut labels = vec![PieceLabel::Empty; 64];
        labels[0] = PieceLabel::piece(PieceKind::King, Color::Black);
        labels[63] = PieceLabel::piece(PieceKind::Rook, Color::White);

        let board = BoardState::decode(&labels).expect("decode");
        let a8 = Square::new(0, 7).expect("a8");
        let h1 = Square::new(7, 0).expect("h1");
        assert_eq!(
            board.label_at(a8),
            PieceLabel::piece(PieceKind::King, Color::Black)
        );
        assert_eq!(
            board.label_at(h1),
            PieceLabel::piece(PieceKind::Rook, Color::White)
        );
        assert_eq!(board.diff_count(&BoardState::empty()), 2);
    }

    #[test]
    fn scan_labels_round_trips_decode() {
        let mut board = BoardState::empty();
        board.set(
            Square::new(4, 3).expect("e4"),
            PieceLabel::piece(PieceKind::Pawn, Color::White),
        );
        board.set(
            Square::new(2, 5).expect("c6"),
            PieceLabel::piece(PieceKind::Knight, Color::Black),
        );

        let labels = board.scan_labels();
        assert_eq!(labels.len(), 64);
        assert_eq!(BoardState::decode(&labels).expect("decode"), board);
    }

    #[test]
    fn diff_reports_both_labels() {
        let mut a = BoardState::empty();
        let mut b = BoardState::empty();
        let e4 = Square::new(4, 3).expect("e4");
        a.set(e4, PieceLabel::piece(PieceKind::Queen, Color::White));
        b.set(e4, PieceLabel::piece(PieceKind::Queen, Color::Black));

        let diffs: Vec<_> = a.diff(&b).collect();
        assert_eq!(
            diffs,
            vec![(
                e4,
                PieceLabel::piece(PieceKind::Queen, Color::White),
                PieceLabel::piece(PieceKind::Queen, Color::Black),
            )]
        );
    }
}
