use serde::{Deserialize, Serialize};

/// Tuning for the sequence aligner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AlignParams {
    /// Maximum differing-square count at which the best legal move is still
    /// accepted as the explanation for an observed frame.
    ///
    /// A plain move changes exactly 2 squares, en passant 3 and castling 4:
    /// at the default of 2 those last two can never be accepted. The
    /// threshold is a fixed policy, not adaptive to move type.
    pub noise_tolerance: u32,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self { noise_tolerance: 2 }
    }
}
