//! Greedy alignment of observed positions against legal move sequences.

use std::collections::HashSet;
use std::str::FromStr;

use chess::{Board, ChessMove, MoveGen};
use log::{debug, warn};

use chess_scribe_core::{BoardState, NormalizedPosition};

use crate::adapt::engine_board_state;
use crate::discrepancy::{DiscrepancyLog, DiscrepancyRecord};
use crate::params::AlignParams;

/// Errors returned by [`SequenceAligner::reconstruct`].
#[derive(thiserror::Error, Debug)]
pub enum AlignError {
    /// The first observed frame anchors the whole run and must parse as a
    /// chess position. Later frames that fail to parse are skipped instead.
    #[error("observed frame {index} is not a usable position: {reason}")]
    InvalidPosition { index: usize, reason: String },
}

/// The reconstruction core.
///
/// Owns the canonical "best current belief" board across a run. The
/// canonical position is only ever advanced by applying a legal move; a
/// noisy observation never overwrites it directly.
pub struct SequenceAligner {
    params: AlignParams,
    discrepancies: DiscrepancyLog,
}

impl SequenceAligner {
    pub fn new(params: AlignParams) -> Self {
        Self {
            params,
            discrepancies: DiscrepancyLog::default(),
        }
    }

    /// Per-square classification errors accumulated so far.
    #[inline]
    pub fn discrepancies(&self) -> &DiscrepancyLog {
        &self.discrepancies
    }

    /// Fold an ordered sequence of observed positions into a de-duplicated
    /// legal trajectory.
    ///
    /// Frame 0 is trusted verbatim as the starting observation. Every later
    /// frame either selects the legal move that explains it best or is
    /// rejected as noise, leaving the canonical position untouched.
    /// Rejection is an expected outcome, not an error; the only hard failure
    /// is a frame 0 the rules engine cannot parse.
    pub fn reconstruct(
        &mut self,
        observed: &[NormalizedPosition],
    ) -> Result<Vec<NormalizedPosition>, AlignError> {
        let Some(first) = observed.first() else {
            return Ok(Vec::new());
        };

        let mut canonical =
            Board::from_str(first.as_str()).map_err(|err| AlignError::InvalidPosition {
                index: 0,
                reason: err.to_string(),
            })?;
        let mut canonical_state = engine_board_state(&canonical);
        let mut current = NormalizedPosition::from_fen(&canonical.to_string());
        let mut trajectory = vec![current.clone()];

        for (index, observation) in observed.iter().enumerate().skip(1) {
            let observed_state = match BoardState::from_placement(observation.placement()) {
                Ok(state) => state,
                Err(err) => {
                    warn!("frame {index}: {err}; carrying the canonical position forward");
                    trajectory.push(current.clone());
                    continue;
                }
            };

            let fresh: Vec<DiscrepancyRecord> = canonical_state
                .diff(&observed_state)
                .map(|(square, expected, seen)| DiscrepancyRecord {
                    square,
                    expected,
                    observed: seen,
                })
                .filter(|record| !self.discrepancies.contains(record))
                .collect();

            if fresh.is_empty() {
                debug!("frame {index}: no new evidence, skipped");
                continue;
            }

            let best = best_move(&canonical, &observed_state);
            match best {
                Some((mv, residual)) if residual <= self.params.noise_tolerance as usize => {
                    debug!(
                        "frame {index}: accepted {}{} ({residual} residual squares)",
                        mv.get_source(),
                        mv.get_dest()
                    );
                    canonical = canonical.make_move_new(mv);
                    canonical_state = engine_board_state(&canonical);
                    current = NormalizedPosition::from_fen(&canonical.to_string());
                    trajectory.push(current.clone());
                }
                _ => {
                    debug!(
                        "frame {index}: rejected as noise ({} unexplained squares, best residual {:?})",
                        fresh.len(),
                        best.map(|(_, residual)| residual)
                    );
                    for record in fresh {
                        self.discrepancies.insert(record);
                    }
                    trajectory.push(current.clone());
                }
            }
        }

        Ok(dedup_keep_first(trajectory))
    }
}

/// The legal move whose result is closest to the observed frame, with its
/// differing-square count.
///
/// Linear scan in the engine's enumeration order; the first minimal move
/// wins and an exact (zero-diff) match short-circuits. Move counts per
/// position are small, so nothing cleverer is warranted.
fn best_move(canonical: &Board, observed: &BoardState) -> Option<(ChessMove, usize)> {
    let mut best: Option<(ChessMove, usize)> = None;
    for mv in MoveGen::new_legal(canonical) {
        let residual = engine_board_state(&canonical.make_move_new(mv)).diff_count(observed);
        if best.map_or(true, |(_, count)| residual < count) {
            best = Some((mv, residual));
            if residual == 0 {
                break;
            }
        }
    }
    best
}

/// Remove every repeated position, preserving first-occurrence order.
///
/// Repeats carry no move information and would otherwise read as spurious
/// null transitions downstream.
fn dedup_keep_first(positions: Vec<NormalizedPosition>) -> Vec<NormalizedPosition> {
    let mut seen = HashSet::with_capacity(positions.len());
    positions
        .into_iter()
        .filter(|position| seen.insert(position.clone()))
        .collect()
}
