//! Adapters between the core board types and the `chess` rules engine.

use chess::{Board, Color as EngineColor, Piece, Square as EngineSquare};
use chess_scribe_core::{BoardState, Color, PieceKind, PieceLabel, Square};

/// Convert a core square into the engine's square type.
pub fn to_engine_square(square: Square) -> EngineSquare {
    EngineSquare::make_square(
        chess::Rank::from_index(usize::from(square.rank())),
        chess::File::from_index(usize::from(square.file())),
    )
}

fn label_from_engine(piece: Piece, color: EngineColor) -> PieceLabel {
    let kind = match piece {
        Piece::King => PieceKind::King,
        Piece::Queen => PieceKind::Queen,
        Piece::Rook => PieceKind::Rook,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Knight => PieceKind::Knight,
        Piece::Pawn => PieceKind::Pawn,
    };
    let color = match color {
        EngineColor::White => Color::White,
        EngineColor::Black => Color::Black,
    };
    PieceLabel::piece(kind, color)
}

/// Snapshot an engine board into a per-square label map.
pub fn engine_board_state(board: &Board) -> BoardState {
    let mut state = BoardState::empty();
    for square in Square::all() {
        let engine_square = to_engine_square(square);
        if let (Some(piece), Some(color)) =
            (board.piece_on(engine_square), board.color_on(engine_square))
        {
            state.set(square, label_from_engine(piece, color));
        }
    }
    state
}
