//! Replay corrected positions and recover the move list.

use std::fmt;
use std::str::FromStr;

use chess::{Board, ChessMove, Color, MoveGen};
use log::debug;
use serde::{Deserialize, Serialize};

use chess_scribe_core::NormalizedPosition;

use crate::meta::GameMeta;
use crate::notation::render_move;

/// Errors returned by [`TranscriptSynthesizer::synthesize`].
#[derive(thiserror::Error, Debug)]
pub enum SynthesisError {
    /// The first corrected position seeds the replay board and must parse.
    #[error("corrected position {index} is not a usable position: {reason}")]
    InvalidPosition { index: usize, reason: String },
}

/// A reconstructed transcript: headers plus rendered move tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transcript {
    pub meta: GameMeta,
    /// Rendered tokens in order, e.g. `["1.e4", "e5", "2.Nf3"]`.
    pub moves: Vec<String>,
}

impl Transcript {
    /// Movetext line: tokens joined by spaces, terminated by the
    /// unresolved-result marker.
    pub fn movetext(&self) -> String {
        if self.moves.is_empty() {
            "*".to_owned()
        } else {
            format!("{} *", self.moves.join(" "))
        }
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.meta.render(), self.movetext())
    }
}

/// Replays a corrected position sequence against the rules engine.
pub struct TranscriptSynthesizer {
    meta: GameMeta,
}

impl TranscriptSynthesizer {
    pub fn new(meta: GameMeta) -> Self {
        Self { meta }
    }

    /// Recover the move list explaining `corrected` and render a transcript.
    ///
    /// Fewer than two positions produce an empty move list. A transition
    /// that no legal move reproduces exactly is skipped and leaves a gap in
    /// the move list; the replay board stays where it was. A move accepted
    /// upstream under the noise tolerance may therefore go unrecorded here.
    pub fn synthesize(
        &self,
        corrected: &[NormalizedPosition],
    ) -> Result<Transcript, SynthesisError> {
        let mut moves = Vec::new();

        if corrected.len() >= 2 {
            let mut board = Board::from_str(corrected[0].as_str()).map_err(|err| {
                SynthesisError::InvalidPosition {
                    index: 0,
                    reason: err.to_string(),
                }
            })?;
            let mut move_number = 1u32;

            for (index, target) in corrected.iter().enumerate().skip(1) {
                match matching_move(&board, target) {
                    Some(mv) => {
                        let token = render_move(&board, mv);
                        if board.side_to_move() == Color::White {
                            moves.push(format!("{move_number}.{token}"));
                        } else {
                            moves.push(token);
                            move_number += 1;
                        }
                        board = board.make_move_new(mv);
                    }
                    None => {
                        debug!("no legal move reaches corrected position {index}; gap in the move list");
                    }
                }
            }
        }

        Ok(Transcript {
            meta: self.meta.clone(),
            moves,
        })
    }
}

/// The legal move whose resulting placement equals the target placement.
///
/// Only the placement field is compared; the target's side-to-move and
/// metadata are ignored.
fn matching_move(board: &Board, target: &NormalizedPosition) -> Option<ChessMove> {
    MoveGen::new_legal(board).find(|&mv| placement(&board.make_move_new(mv)) == target.placement())
}

fn placement(board: &Board) -> String {
    board
        .to_string()
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
    const E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR";
    const E4_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR";
    const E4_D5: &str = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR";
    const EXD5: &str = "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR";
    const NF3_NF6: &str = "rnbqkb1r/pppppppp/5n2/8/8/5N2/PPPPPPPP/RNBQKB1R";

    fn corrected(placements: &[&str]) -> Vec<NormalizedPosition> {
        // Side fields as the aligner would emit them: alternating from white.
        placements
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let side = if i % 2 == 0 { "w" } else { "b" };
                NormalizedPosition::from_fen(&format!("{p} {side}"))
            })
            .collect()
    }

    fn synthesize(positions: &[NormalizedPosition]) -> Transcript {
        TranscriptSynthesizer::new(GameMeta::default())
            .synthesize(positions)
            .expect("synthesize")
    }

    #[test]
    fn clean_game_renders_numbered_pairs() {
        let transcript = synthesize(&corrected(&[START, E4, E4_E5]));
        assert_eq!(transcript.movetext(), "1.e4 e5 *");
    }

    #[test]
    fn captures_and_piece_letters_show_up() {
        let transcript = synthesize(&corrected(&[START, E4, E4_D5, EXD5]));
        assert_eq!(transcript.movetext(), "1.e4 d5 2.xd5 *");
    }

    #[test]
    fn fewer_than_two_positions_yield_no_moves() {
        assert_eq!(synthesize(&[]).movetext(), "*");
        assert_eq!(synthesize(&corrected(&[START])).movetext(), "*");
    }

    #[test]
    fn matching_ignores_the_side_field() {
        // Raw classifier normalization stamps every frame "white to move";
        // placement-only matching still recovers the game. This is also the
        // latent gap: a same-placement move by the wrong side would match.
        let all_white: Vec<NormalizedPosition> = [START, E4, E4_E5]
            .iter()
            .map(|p| NormalizedPosition::from_fen(&format!("{p} w")))
            .collect();
        assert_eq!(synthesize(&all_white).movetext(), "1.e4 e5 *");
    }

    #[test]
    fn unmatched_transition_leaves_a_gap() {
        // START -> NF3_NF6 needs two plies; no single legal move matches, so
        // the transition is skipped and the board stays at the start.
        let transcript = synthesize(&corrected(&[START, NF3_NF6, E4]));
        assert_eq!(transcript.movetext(), "1.e4 *");
    }

    #[test]
    fn display_stacks_headers_over_movetext() {
        let meta = GameMeta {
            date: "2024.01.01".to_owned(),
            ..GameMeta::default()
        };
        let transcript = TranscriptSynthesizer::new(meta)
            .synthesize(&corrected(&[START, E4]))
            .expect("synthesize");
        let text = transcript.to_string();
        assert!(text.starts_with("[Event \"Auto-generated game\"]\n"));
        assert!(text.contains("[Date \"2024.01.01\"]\n"));
        assert!(text.ends_with("\n1.e4 *"));
    }

    #[test]
    fn unparseable_seed_position_is_an_error() {
        let bad = vec![
            NormalizedPosition::from_fen("8/8/8/8/8/8/8/8 w"),
            NormalizedPosition::from_fen(&format!("{E4} b")),
        ];
        let result = TranscriptSynthesizer::new(GameMeta::default()).synthesize(&bad);
        assert!(matches!(
            result,
            Err(SynthesisError::InvalidPosition { index: 0, .. })
        ));
    }
}
