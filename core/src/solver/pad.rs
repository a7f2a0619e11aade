//! Square padding of rectangular problems.

use crate::matrix::{CostCell, CostMatrix};

/// A dense N×N grid of cost cells, indexed `0..size` in both axes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SquareMatrix {
    size: u32,
    cells: Vec<CostCell>,
}

impl SquareMatrix {
    fn filled(size: u32, cell: CostCell) -> SquareMatrix {
        SquareMatrix {
            size,
            cells: vec![cell; size as usize * size as usize],
        }
    }

    pub(crate) fn size(&self) -> u32 {
        self.size
    }

    pub(crate) fn at(&self, row: u32, col: u32) -> CostCell {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row as usize * self.size as usize + col as usize]
    }

    pub(crate) fn at_mut(&mut self, row: u32, col: u32) -> &mut CostCell {
        debug_assert!(row < self.size && col < self.size);
        &mut self.cells[row as usize * self.size as usize + col as usize]
    }
}

/// An R×C instance padded to N×N, N = max(R, C).
///
/// `working` is mutated by reduction and adjustment; `original` is read only
/// at extraction time. Synthetic padding cells are zero-cost and assignable
/// in `working` but forbidden in `original`, so the padding never perturbs
/// the true optimum and never leaks into the result.
#[derive(Debug)]
pub(crate) struct PaddedProblem {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    pub(crate) working: SquareMatrix,
    pub(crate) original: SquareMatrix,
}

impl PaddedProblem {
    pub(crate) fn new(matrix: &CostMatrix) -> PaddedProblem {
        let rows = matrix.nrows();
        let cols = matrix.ncols();
        let size = rows.max(cols);

        let mut working = SquareMatrix::filled(size, CostCell::allowed(0.0));
        let mut original = SquareMatrix::filled(size, CostCell::blocked());

        for row in 0..rows {
            for col in 0..cols {
                let cell = matrix.at(row, col);
                *working.at_mut(row, col) = cell;
                *original.at_mut(row, col) = cell;
            }
        }

        PaddedProblem {
            rows,
            cols,
            working,
            original,
        }
    }

    pub(crate) fn size(&self) -> u32 {
        self.working.size()
    }
}
