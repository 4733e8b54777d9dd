//! Core types for reconstructing chess games from per-square classifier output.
//!
//! This crate is intentionally small and purely combinatorial. It does *not*
//! depend on the chess rules engine or on any concrete square classifier:
//! it owns the board coordinate mapping, the 13-way per-square label
//! alphabet, frame decoding, and the normalized position encoding that the
//! rest of the workspace de-duplicates and compares.

mod board;
mod fen;
mod label;
mod logger;
mod square;

pub use board::{BoardState, FrameError};
pub use fen::NormalizedPosition;
pub use label::{Color, PieceKind, PieceLabel};
pub use square::Square;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
