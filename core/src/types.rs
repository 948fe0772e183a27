use serde::{Deserialize, Serialize};

use crate::*;

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u16;

/// Flat index into the display grid or the number-cell sequence.
pub type CellIndex = u32;

/// Sum type used for line totals.
pub type Total = u32;

/// Position in the full grid, total row/column included.
///
/// `x == size` addresses the total column, `y == size` the total row, and
/// both together the blank corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub x: Coord,
    pub y: Coord,
}

/// Position within the number-cell sub-grid only, both axes `< size`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPos {
    pub x: Coord,
    pub y: Coord,
}

/// Index arithmetic for one grid shape.
///
/// The display grid is `(size + 1) x (size + 1)`: the number cells plus one
/// total column, one total row, and the blank corner. All flat indices are
/// row-major.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    size: Coord,
    size_and_total: Coord,
}

impl Topology {
    pub fn new(size: Coord) -> Result<Self> {
        // size + 1 must stay representable
        if size == 0 || size == Coord::MAX {
            return Err(GridError::InvalidSize);
        }
        Ok(Self {
            size,
            size_and_total: size + 1,
        })
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn size_and_total(&self) -> Coord {
        self.size_and_total
    }

    /// Number of cells in the display grid, totals and corner included.
    pub const fn cell_count(&self) -> CellIndex {
        let side = self.size_and_total as CellIndex;
        side * side
    }

    pub const fn number_cell_count(&self) -> CellIndex {
        let side = self.size as CellIndex;
        side * side
    }

    pub fn grid_pos(&self, index: CellIndex) -> Result<GridPos> {
        if index >= self.cell_count() {
            return Err(GridError::IndexOutOfRange);
        }
        let side = self.size_and_total as CellIndex;
        Ok(GridPos {
            x: (index % side) as Coord,
            y: (index / side) as Coord,
        })
    }

    /// Narrows a full-grid position to the number-cell sub-grid. Callers
    /// classify first; totals and the corner are rejected here.
    pub fn cell_pos(&self, pos: GridPos) -> Result<CellPos> {
        if pos.x < self.size && pos.y < self.size {
            Ok(CellPos { x: pos.x, y: pos.y })
        } else {
            Err(GridError::OutsideNumberCells)
        }
    }

    pub const fn index_of(&self, pos: GridPos) -> CellIndex {
        pos.y as CellIndex * self.size_and_total as CellIndex + pos.x as CellIndex
    }

    /// Index into the number-cell sequence, row-major over the sub-grid.
    pub const fn cell_index_of(&self, pos: CellPos) -> CellIndex {
        pos.x as CellIndex + self.size as CellIndex * pos.y as CellIndex
    }

    /// Flat indices of the two total cells owning this number cell: its row
    /// total first, its column total second. These are the displayed cells
    /// that go stale whenever the number cell's destiny changes.
    pub fn total_indices(&self, pos: CellPos) -> [CellIndex; 2] {
        [
            self.index_of(GridPos {
                x: self.size,
                y: pos.y,
            }),
            self.index_of(GridPos {
                x: pos.x,
                y: self.size,
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(Topology::new(0), Err(GridError::InvalidSize));
    }

    #[test]
    fn grid_pos_round_trips_every_index() {
        for size in [1, 2, 3, 7] {
            let topology = Topology::new(size).unwrap();
            for index in 0..topology.cell_count() {
                let pos = topology.grid_pos(index).unwrap();
                assert_eq!(topology.index_of(pos), index);
            }
        }
    }

    #[test]
    fn grid_pos_rejects_out_of_range_index() {
        let topology = Topology::new(3).unwrap();
        assert_eq!(
            topology.grid_pos(topology.cell_count()),
            Err(GridError::IndexOutOfRange)
        );
    }

    #[test]
    fn cell_pos_rejects_totals_and_corner() {
        let topology = Topology::new(3).unwrap();
        for pos in [
            GridPos { x: 3, y: 0 },
            GridPos { x: 0, y: 3 },
            GridPos { x: 3, y: 3 },
        ] {
            assert_eq!(
                topology.cell_pos(pos),
                Err(GridError::OutsideNumberCells)
            );
        }
        assert_eq!(
            topology.cell_pos(GridPos { x: 2, y: 1 }),
            Ok(CellPos { x: 2, y: 1 })
        );
    }

    #[test]
    fn total_indices_address_the_owning_total_cells() {
        // size 3, display side 4: row totals sit at x == 3, column totals at y == 3
        let topology = Topology::new(3).unwrap();
        let [row_total, col_total] = topology.total_indices(CellPos { x: 1, y: 2 });
        assert_eq!(row_total, 2 * 4 + 3);
        assert_eq!(col_total, 3 * 4 + 1);
    }
}
