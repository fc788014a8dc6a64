//! Digest → design parameters.
//!
//! Each field reads one fixed hex digit of the digest and reduces it with a
//! modulo and offset, so every field lands in its range for any digest:
//!
//! | digit | field         | value                 |
//! |-------|---------------|-----------------------|
//! | 0     | motif index   | `n % MOTIF_COUNT`     |
//! | 1     | symmetry      | `n % 7 + 2`           |
//! | 2     | complexity    | `n % 5 + 1`           |
//! | 3-5   | features      | `n % 10`              |
//! | 6     | rotation      | `(n % 8) * 45`        |
//! | 7     | scale percent | `(n % 5 + 6) * 10`    |

use crate::hasher::HexDigest;
use crate::motifs::MOTIF_COUNT;
use serde::Serialize;

pub const MIN_COMPLEXITY: u8 = 1;
pub const MAX_COMPLEXITY: u8 = 5;
pub const MAX_FEATURE: u8 = 9;
pub const MIN_SYMMETRY: u8 = 2;
pub const MAX_SYMMETRY: u8 = 8;
pub const ROTATION_STEP: u16 = 45;
pub const MIN_SCALE_PERCENT: u8 = 60;
pub const MAX_SCALE_PERCENT: u8 = 100;

const POS_MOTIF: usize = 0;
const POS_SYMMETRY: usize = 1;
const POS_COMPLEXITY: usize = 2;
const POS_FEATURES: [usize; 3] = [3, 4, 5];
const POS_ROTATION: usize = 6;
const POS_SCALE: usize = 7;

/// Discrete design parameters read from a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DesignParameters {
    pub motif_index: usize,
    pub symmetry: u8,
    pub complexity: u8,
    pub feature1: u8,
    pub feature2: u8,
    pub feature3: u8,
    pub rotation: u16,
    pub scale_percent: u8,
}

impl DesignParameters {
    pub fn features(&self) -> [u8; 3] {
        [self.feature1, self.feature2, self.feature3]
    }
}

/// Read the parameter tuple out of `digest`.
pub fn extract(digest: &HexDigest) -> DesignParameters {
    let n = |pos: usize| digest.nibble(pos);
    let feature = |i: usize| n(POS_FEATURES[i]) % (MAX_FEATURE + 1);

    DesignParameters {
        motif_index: usize::from(n(POS_MOTIF)) % MOTIF_COUNT,
        symmetry: n(POS_SYMMETRY) % (MAX_SYMMETRY - MIN_SYMMETRY + 1) + MIN_SYMMETRY,
        complexity: n(POS_COMPLEXITY) % (MAX_COMPLEXITY - MIN_COMPLEXITY + 1) + MIN_COMPLEXITY,
        feature1: feature(0),
        feature2: feature(1),
        feature3: feature(2),
        rotation: u16::from(n(POS_ROTATION) % 8) * ROTATION_STEP,
        scale_percent: (n(POS_SCALE) % 5 + 6) * 10,
    }
}
