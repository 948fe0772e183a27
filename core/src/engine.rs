use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Flat indices whose displayed content changed after an operation: at most
/// the tapped cell plus its two total cells. Order carries no meaning.
pub type AffectedIndices = SmallVec<[CellIndex; 3]>;

/// The mutable puzzle session: one seeded grid of number cells plus the
/// arithmetic to classify, tap, and re-total them.
///
/// Invariant: `cells[i].index() == i` for every `i`; the sequence is never
/// reordered, only individual destinies change in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleEngine {
    seed: u64,
    topology: Topology,
    cells: Vec<NumberCell>,
}

impl PuzzleEngine {
    pub fn new(seed: u64, size: Coord) -> Result<Self> {
        let topology = Topology::new(size)?;
        Ok(Self {
            seed,
            topology,
            cells: SeededCellGenerator::new(seed).generate(topology),
        })
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn size(&self) -> Coord {
        self.topology.size()
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of display cells, totals and the blank corner included.
    pub const fn cell_count(&self) -> CellIndex {
        self.topology.cell_count()
    }

    /// Pure display classification of one flat index.
    pub fn classify(&self, index: CellIndex) -> Result<GridCell> {
        let pos = self.topology.grid_pos(index)?;
        let size = self.topology.size();

        Ok(match (pos.x == size, pos.y == size) {
            (true, true) => GridCell::Blank,
            (true, false) => Self::total_cell(self.row_totals(pos.y)?),
            (false, true) => Self::total_cell(self.col_totals(pos.x)?),
            (false, false) => {
                let cell_pos = self.topology.cell_pos(pos)?;
                GridCell::Number(self.cells[self.topology.cell_index_of(cell_pos) as usize])
            }
        })
    }

    /// Advances the tapped cell's destiny one step and reports which flat
    /// indices need redrawing. Totals and the blank corner are inert: no
    /// mutation, empty report.
    pub fn tap(&mut self, index: CellIndex) -> Result<AffectedIndices> {
        let pos = self.topology.grid_pos(index)?;
        let Ok(cell_pos) = self.topology.cell_pos(pos) else {
            return Ok(AffectedIndices::new());
        };

        let cell_index = self.topology.cell_index_of(cell_pos) as usize;
        self.cells[cell_index].advance_destiny();

        let [row_total, col_total] = self.topology.total_indices(cell_pos);
        Ok(AffectedIndices::from_slice(&[row_total, col_total, index]))
    }

    /// Resets every destiny to undecided. Generated values are untouched, so
    /// every actual total falls back to the full puzzle-value sum.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset_destiny();
        }
    }

    /// Replaces the grid wholesale with the one derived from `seed + 1`.
    /// The size never changes across regeneration.
    pub fn new_puzzle(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        log::debug!("regenerating puzzle from seed {}", self.seed);
        self.cells = SeededCellGenerator::new(self.seed).generate(self.topology);
    }

    /// Totals over the row at `y`.
    pub fn row_totals(&self, y: Coord) -> Result<LineTotals> {
        let size = self.topology.size();
        if y >= size {
            return Err(GridError::LineOutOfRange);
        }
        let start = y as usize * size as usize;
        Ok(line_totals(self.cells[start..start + size as usize].iter()))
    }

    /// Totals over the column at `x`.
    pub fn col_totals(&self, x: Coord) -> Result<LineTotals> {
        let size = self.topology.size();
        if x >= size {
            return Err(GridError::LineOutOfRange);
        }
        Ok(line_totals(
            self.cells[x as usize..].iter().step_by(size as usize),
        ))
    }

    /// True once every row and every column has matching totals.
    pub fn is_solved(&self) -> bool {
        let size = self.topology.size();
        (0..size).all(|y| self.row_totals(y).is_ok_and(|t| t.is_finished()))
            && (0..size).all(|x| self.col_totals(x).is_ok_and(|t| t.is_finished()))
    }

    fn total_cell(totals: LineTotals) -> GridCell {
        GridCell::Total {
            total: totals.expected,
            finished: totals.is_finished(),
        }
    }
}

fn line_totals<'a>(cells: impl Iterator<Item = &'a NumberCell>) -> LineTotals {
    let mut totals = LineTotals {
        expected: 0,
        actual: 0,
    };
    for cell in cells {
        totals.expected += cell.expected_value();
        totals.actual += cell.actual_value();
    }
    totals
}
