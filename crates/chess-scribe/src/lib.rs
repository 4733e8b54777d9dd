//! High-level facade crate for the `chess-scribe-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the underlying pipeline crates
//! - end-to-end helpers that decode classifier label frames, reconstruct the
//!   game trajectory and synthesize a transcript in one call.
//!
//! ## Quickstart
//!
//! ```
//! use chess_scribe::core::BoardState;
//! use chess_scribe::{transcribe_frames, AlignParams, GameMeta};
//!
//! // Three clean frames (visual scan order, rank 8 first): the start
//! // position, then 1.e4, then 1...e5.
//! let frames: Vec<Vec<_>> = [
//!     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR",
//! ]
//! .iter()
//! .map(|p| BoardState::from_placement(p).expect("placement").scan_labels())
//! .collect();
//!
//! let transcript =
//!     transcribe_frames(&frames, AlignParams::default(), GameMeta::default()).expect("transcribe");
//! assert_eq!(transcript.movetext(), "1.e4 e5 *");
//! ```
//!
//! ## API map
//! - `chess_scribe::core`: squares, labels, board states, normalized positions.
//! - `chess_scribe::align`: the sequence aligner and its discrepancy memory.
//! - `chess_scribe::pgn`: transcript synthesis and headers.
//! - top level: the classifier boundary and the end-to-end pipeline.
//!
//! Per-frame classification is embarrassingly parallel and may be dispatched
//! concurrently by the caller, but the resulting frames must be re-joined in
//! original order before entering the pipeline: reconstruction is strictly
//! sequential and order-dependent.

pub use chess_scribe_align as align;
pub use chess_scribe_core as core;
pub use chess_scribe_pgn as pgn;

pub use chess_scribe_align::{
    AlignError, AlignParams, DiscrepancyLog, DiscrepancyRecord, SequenceAligner,
};
pub use chess_scribe_core::{
    BoardState, Color, FrameError, NormalizedPosition, PieceKind, PieceLabel, Square,
};
pub use chess_scribe_pgn::{GameMeta, SynthesisError, Transcript, TranscriptSynthesizer};

mod transcribe;

pub use transcribe::{
    classify_frame, positions_from_frames, transcribe_frames, SquareClassifier, TranscribeError,
};
