use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Flat index out of range")]
    IndexOutOfRange,
    #[error("Coordinate outside the number-cell sub-grid")]
    OutsideNumberCells,
    #[error("Row or column out of range")]
    LineOutOfRange,
    #[error("Grid size must be positive")]
    InvalidSize,
}

pub type Result<T> = core::result::Result<T, GridError>;
