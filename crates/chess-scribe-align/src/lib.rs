//! Sequence aligner: folds noisy per-frame board observations into the
//! best-effort true game trajectory.
//!
//! Algorithm, per observed frame after the trusted first one:
//! 1. Diff the canonical position against the observation square by square,
//!    ignoring mismatches already recorded as known classification errors.
//! 2. No remaining difference → the frame carries no new evidence; skip it.
//! 3. Enumerate every legal move from the canonical position, apply each and
//!    count the squares still differing from the observation.
//! 4. Accept the first move with the minimal count if that count is within
//!    the noise tolerance; the move (never the raw observation) advances the
//!    canonical position.
//! 5. Otherwise reject the frame as noise: remember each mismatched square
//!    as a discrepancy record and carry the canonical position forward.
//!
//! A final pass removes every repeated position, first occurrence winning,
//! so the transcript stage never sees a spurious null transition.

mod adapt;
mod aligner;
mod discrepancy;
mod params;

pub use adapt::{engine_board_state, to_engine_square};
pub use aligner::{AlignError, SequenceAligner};
pub use discrepancy::{DiscrepancyLog, DiscrepancyRecord};
pub use params::AlignParams;
