use crate::Pos2;
use std::collections::HashSet;
use thiserror::Error;

/// Grid error type.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A grid with a zero-sized axis has no addressable cells.
    #[error("degenerate grid dimensions: {width}x{height}")]
    Degenerate { width: u32, height: u32 },
}

/// Dimensions of a fixed-size toroidal grid backing a dense cell buffer.
///
/// The simulation itself runs on an unbounded plane; [`Dimensions`] only
/// describes how coordinates map onto a `width * height` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}
impl Dimensions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells in the dense buffer.
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Maps a cell onto its row-major index within the grid.
    ///
    /// Coordinates outside `[0,width) x [0,height)` wrap toroidally.
    /// Negative coordinates wrap to the opposite edge, so the wrap is
    /// `rem_euclid`, not the `%` remainder.
    pub fn cell_index(self, cell: Pos2) -> Result<usize, GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::Degenerate {
                width: self.width,
                height: self.height,
            });
        }

        let col = (cell.x as i64).rem_euclid(self.width as i64) as usize;
        let row = (cell.y as i64).rem_euclid(self.height as i64) as usize;
        Ok(row * self.width as usize + col)
    }

    /// Packs a live-cell set into a dense per-cell state buffer, laid out
    /// by [`Dimensions::cell_index`]. Live cells are 1, dead cells 0.
    pub fn state_buffer(self, alive: &HashSet<Pos2>) -> Result<Vec<u32>, GridError> {
        let mut states = vec![0u32; self.cell_count()];
        for &cell in alive {
            states[self.cell_index(cell)?] = 1;
        }
        Ok(states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_row_major_layout() {
        let grid = Dimensions::new(3, 3);

        assert_eq!(grid.cell_index(Pos2::new(1, 2)), Ok(7));
        assert_eq!(grid.cell_index(Pos2::new(0, 0)), Ok(0));
        assert_eq!(grid.cell_index(Pos2::new(2, 2)), Ok(8));
    }

    #[test]
    fn out_of_range_coordinates_wrap() {
        let grid = Dimensions::new(4, 4);

        assert_eq!(
            grid.cell_index(Pos2::new(5, 0)),
            grid.cell_index(Pos2::new(1, 0))
        );
        assert_eq!(
            grid.cell_index(Pos2::new(0, 9)),
            grid.cell_index(Pos2::new(0, 1))
        );
    }

    #[test]
    fn negative_coordinates_wrap_to_opposite_edge() {
        let grid = Dimensions::new(4, 4);

        assert_eq!(
            grid.cell_index(Pos2::new(-1, -1)),
            grid.cell_index(Pos2::new(3, 3))
        );
        assert_eq!(grid.cell_index(Pos2::new(-4, 0)), Ok(0));
    }

    #[test]
    fn zero_sized_axis_is_rejected() {
        let cell = Pos2::new(1, 1);

        assert_eq!(
            Dimensions::new(0, 3).cell_index(cell),
            Err(GridError::Degenerate { width: 0, height: 3 })
        );
        assert_eq!(
            Dimensions::new(3, 0).cell_index(cell),
            Err(GridError::Degenerate { width: 3, height: 0 })
        );
    }

    #[test]
    fn state_buffer_marks_live_cells() {
        let grid = Dimensions::new(3, 3);
        let alive = HashSet::from([Pos2::new(0, 0), Pos2::new(1, 2)]);

        let states = grid.state_buffer(&alive).unwrap();
        assert_eq!(states.len(), 9);
        assert_eq!(states[0], 1);
        assert_eq!(states[7], 1);
        assert_eq!(states.iter().sum::<u32>(), 2);
    }
}
