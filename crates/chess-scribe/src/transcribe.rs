//! End-to-end helpers: classifier output → transcript.

use log::warn;

use chess_scribe_align::{AlignError, AlignParams, SequenceAligner};
use chess_scribe_core::{BoardState, Color, FrameError, NormalizedPosition, PieceLabel};
use chess_scribe_pgn::{GameMeta, SynthesisError, Transcript, TranscriptSynthesizer};

/// Errors produced by the end-to-end helpers.
#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    /// Every observed frame failed to decode into a 64-square board.
    #[error("no observed frame decoded into a 64-square board")]
    NoDecodableFrames,

    #[error(transparent)]
    Align(#[from] AlignError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Pure per-square classifier boundary.
///
/// One square image in, one label out, no retained state between calls.
/// Closures with the matching signature implement this automatically.
pub trait SquareClassifier<I> {
    fn classify_square(&self, image: &I) -> PieceLabel;
}

impl<I, F> SquareClassifier<I> for F
where
    F: Fn(&I) -> PieceLabel,
{
    fn classify_square(&self, image: &I) -> PieceLabel {
        self(image)
    }
}

/// Classify one frame's square images (visual scan order, rank 8 first)
/// into a board state.
pub fn classify_frame<I, C>(classifier: &C, squares: &[I]) -> Result<BoardState, FrameError>
where
    C: SquareClassifier<I>,
{
    let labels: Vec<PieceLabel> = squares
        .iter()
        .map(|square| classifier.classify_square(square))
        .collect();
    BoardState::decode(&labels)
}

/// Decode observed label frames into normalized positions.
///
/// Every frame is stamped "white to move"; the classifier cannot observe
/// the side, so the aligner derives it procedurally. Malformed frames are
/// skipped with a warning; the skipped count is returned alongside.
pub fn positions_from_frames(frames: &[Vec<PieceLabel>]) -> (Vec<NormalizedPosition>, usize) {
    let mut positions = Vec::with_capacity(frames.len());
    let mut skipped = 0usize;
    for (index, labels) in frames.iter().enumerate() {
        match BoardState::decode(labels) {
            Ok(state) => positions.push(state.to_normalized(Color::White)),
            Err(err) => {
                warn!("frame {index} dropped: {err}");
                skipped += 1;
            }
        }
    }
    (positions, skipped)
}

/// Full pipeline: label frames → corrected trajectory → transcript.
///
/// Empty input yields a transcript with no moves. Input where *every* frame
/// is malformed is the one catastrophic decode failure; a partially
/// decodable input produces a degraded transcript instead.
pub fn transcribe_frames(
    frames: &[Vec<PieceLabel>],
    params: AlignParams,
    meta: GameMeta,
) -> Result<Transcript, TranscribeError> {
    let (positions, skipped) = positions_from_frames(frames);
    if positions.is_empty() && skipped > 0 {
        return Err(TranscribeError::NoDecodableFrames);
    }

    let mut aligner = SequenceAligner::new(params);
    let corrected = aligner.reconstruct(&positions)?;
    Ok(TranscriptSynthesizer::new(meta).synthesize(&corrected)?)
}
