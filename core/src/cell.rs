use serde::{Deserialize, Serialize};

use crate::*;

/// Player-assigned tri-state deciding whether a cell's value is in or out of
/// its line totals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destiny {
    Undecided,
    No,
    Yes,
}

impl Destiny {
    /// Advances one step in the fixed tap cycle:
    /// `Undecided -> No -> Yes -> Undecided`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Undecided => Self::No,
            Self::No => Self::Yes,
            Self::Yes => Self::Undecided,
        }
    }
}

impl Default for Destiny {
    fn default() -> Self {
        Self::Undecided
    }
}

/// One cell of the number sub-grid. Only `destiny` ever changes after
/// generation; `index` is the cell's fixed row-major position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberCell {
    index: CellIndex,
    puzzle_value: u8,
    counts_toward_total: bool,
    destiny: Destiny,
}

impl NumberCell {
    pub(crate) const fn new(index: CellIndex, puzzle_value: u8, counts_toward_total: bool) -> Self {
        Self {
            index,
            puzzle_value,
            counts_toward_total,
            destiny: Destiny::Undecided,
        }
    }

    pub const fn index(&self) -> CellIndex {
        self.index
    }

    pub const fn puzzle_value(&self) -> u8 {
        self.puzzle_value
    }

    pub const fn counts_toward_total(&self) -> bool {
        self.counts_toward_total
    }

    pub const fn destiny(&self) -> Destiny {
        self.destiny
    }

    /// Contribution to the line's actual total under the current destiny.
    /// `Undecided` counts like `Yes`: a cell is in until marked out.
    pub const fn actual_value(&self) -> Total {
        match self.destiny {
            Destiny::No => 0,
            Destiny::Undecided | Destiny::Yes => self.puzzle_value as Total,
        }
    }

    /// Contribution to the line's hidden target total. Fixed at generation,
    /// independent of destiny.
    pub const fn expected_value(&self) -> Total {
        if self.counts_toward_total {
            self.puzzle_value as Total
        } else {
            0
        }
    }

    pub(crate) fn advance_destiny(&mut self) {
        self.destiny = self.destiny.next();
    }

    pub(crate) fn reset_destiny(&mut self) {
        self.destiny = Destiny::Undecided;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destiny_cycles_back_to_undecided_in_three_steps() {
        let mut destiny = Destiny::default();
        let mut visited = [destiny; 3];
        for slot in &mut visited {
            destiny = destiny.next();
            *slot = destiny;
        }
        assert_eq!(visited, [Destiny::No, Destiny::Yes, Destiny::Undecided]);
    }

    #[test]
    fn actual_value_drops_to_zero_only_when_marked_no() {
        let mut cell = NumberCell::new(0, 8, true);
        assert_eq!(cell.actual_value(), 8);
        cell.advance_destiny(); // No
        assert_eq!(cell.actual_value(), 0);
        cell.advance_destiny(); // Yes
        assert_eq!(cell.actual_value(), 8);
    }

    #[test]
    fn expected_value_ignores_destiny() {
        let mut counted = NumberCell::new(0, 4, true);
        let mut uncounted = NumberCell::new(1, 4, false);
        for _ in 0..3 {
            assert_eq!(counted.expected_value(), 4);
            assert_eq!(uncounted.expected_value(), 0);
            counted.advance_destiny();
            uncounted.advance_destiny();
        }
    }
}
