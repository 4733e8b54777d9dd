//! Reconstruct a short game from synthetic, noise-injected classifier frames.
//!
//! Run with `cargo run --example noisy_game -p chess-scribe`.

use chess_scribe::core::{init_with_level, BoardState, Color, PieceKind, PieceLabel, Square};
use chess_scribe::{positions_from_frames, AlignParams, GameMeta, SequenceAligner, TranscriptSynthesizer};
use log::LevelFilter;

// 1.e4 e5 2.Nf3, one placement per held position.
const GAME: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
    "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR",
    "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Debug)?;

    let mut frames: Vec<Vec<PieceLabel>> = Vec::new();
    for (index, placement) in GAME.iter().enumerate() {
        let board = BoardState::from_placement(placement)?;

        // Each position is held for a few video frames.
        frames.push(board.scan_labels());
        frames.push(board.scan_labels());

        // Inject a stuck misclassification on one of them: a phantom white
        // bishop on h4.
        if index == 1 {
            let mut noisy = board;
            if let Some(h4) = Square::new(7, 3) {
                noisy.set(h4, PieceLabel::piece(PieceKind::Bishop, Color::White));
            }
            frames.push(noisy.scan_labels());
        }
    }

    let (positions, skipped) = positions_from_frames(&frames);
    println!("{} frames observed, {} skipped", frames.len(), skipped);

    let mut aligner = SequenceAligner::new(AlignParams::default());
    let corrected = aligner.reconstruct(&positions)?;
    println!("{} corrected positions:", corrected.len());
    for position in &corrected {
        println!("  {position}");
    }
    for record in aligner.discrepancies().iter() {
        println!("unresolved discrepancy on {}", record.square);
    }

    let transcript = TranscriptSynthesizer::new(GameMeta::default()).synthesize(&corrected)?;
    println!("\n{transcript}");
    Ok(())
}
