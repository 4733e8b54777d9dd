//! Approximate move notation.

use chess::{Board, ChessMove, Piece};

/// Render a move about to be played on `board`.
///
/// Format: `<piece letter><x if the destination is occupied><destination>`.
/// Pawns get no letter, en-passant captures no `x` (the destination square
/// is empty when the move is made), and castling renders as a king move.
pub fn render_move(board: &Board, mv: ChessMove) -> String {
    let letter = match board.piece_on(mv.get_source()) {
        Some(Piece::King) => "K",
        Some(Piece::Queen) => "Q",
        Some(Piece::Rook) => "R",
        Some(Piece::Bishop) => "B",
        Some(Piece::Knight) => "N",
        _ => "",
    };
    let capture = if board.piece_on(mv.get_dest()).is_some() {
        "x"
    } else {
        ""
    };
    format!("{letter}{capture}{}", mv.get_dest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{MoveGen, Square};
    use std::str::FromStr;

    fn legal(board: &Board, from: Square, to: Square) -> ChessMove {
        MoveGen::new_legal(board)
            .find(|mv| mv.get_source() == from && mv.get_dest() == to)
            .expect("move is legal")
    }

    #[test]
    fn pawn_pushes_render_bare() {
        let board = Board::default();
        let e4 = legal(&board, Square::E2, Square::E4);
        assert_eq!(render_move(&board, e4), "e4");
    }

    #[test]
    fn piece_moves_carry_their_letter() {
        let board = Board::default();
        let nf3 = legal(&board, Square::G1, Square::F3);
        assert_eq!(render_move(&board, nf3), "Nf3");
    }

    #[test]
    fn captures_are_marked() {
        // After 1.e4 d5, the pawn capture exd5 renders without a file prefix.
        let board =
            Board::from_str("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w - - 0 1")
                .expect("position");
        let exd5 = legal(&board, Square::E4, Square::D5);
        assert_eq!(render_move(&board, exd5), "xd5");
    }
}
