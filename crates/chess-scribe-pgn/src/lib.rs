//! Transcript synthesis: replay a corrected position sequence against the
//! rules engine, recover the moves actually taken and render an approximate
//! PGN transcript.
//!
//! The notation is deliberately approximate:
//! `<piece letter><x if capture><destination>` with no disambiguation,
//! check/mate suffixes, castling or promotion rendering.

mod meta;
mod notation;
mod synth;

pub use meta::GameMeta;
pub use notation::render_move;
pub use synth::{SynthesisError, Transcript, TranscriptSynthesizer};
