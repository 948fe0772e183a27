#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Read-only display classification of one flat grid index. Never stored;
/// computed on demand by [`PuzzleEngine::classify`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCell {
    Number(NumberCell),
    Total { total: Total, finished: bool },
    Blank,
}

/// Expected and actual sums over one row or column of number cells.
///
/// The expected total is the hidden target fixed at generation; the actual
/// total follows the player's current destiny marks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    pub expected: Total,
    pub actual: Total,
}

impl LineTotals {
    pub const fn is_finished(&self) -> bool {
        self.expected == self.actual
    }
}
