/// Default side length of the scatter grid.
pub const DEFAULT_GRID: usize = 20;

/// Square occupancy grid for discretized `(x, y)` samples. Collisions
/// are not counted; a cell is either occupied or not.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGrid {
    side: usize,
    cells: Vec<bool>,
}

impl ScatterGrid {
    pub fn side(&self) -> usize {
        self.side
    }

    /// `row` counts from 0 at the bottom (lowest y).
    pub fn occupied(&self, col: usize, row: usize) -> bool {
        self.cells[row * self.side + col]
    }
}

/// Map each sample to cell `(floor(x / x_max * (side-1)),
/// floor(y / y_max * (side-1)))`, clamped to the grid. The axis maxima
/// fall back to 1 when no sample is positive, so an all-zero snapshot
/// collapses into the origin cell instead of dividing by zero.
pub fn scatter(points: &[(f64, f64)], side: usize) -> ScatterGrid {
    let mut grid = ScatterGrid {
        side,
        cells: vec![false; side * side],
    };
    if side == 0 || points.is_empty() {
        return grid;
    }

    let x_max = axis_max(points.iter().map(|p| p.0));
    let y_max = axis_max(points.iter().map(|p| p.1));
    let top = (side - 1) as f64;

    for &(x, y) in points {
        let col = (((x / x_max) * top) as usize).min(side - 1);
        let row = (((y / y_max) * top) as usize).min(side - 1);
        grid.cells[row * side + col] = true;
    }

    grid
}

fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 { max } else { 1.0 }
}
