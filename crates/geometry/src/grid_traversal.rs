//! Walks the [SpatialHash] cells a ray passes through, nearest first.
//!
//! Input points are in cell units, as produced by [crate::SpatialHash::to_cell_space], so cell `(i, j)` covers
//! `i..i+1` by `j..j+1` and agrees with [crate::SpatialHash::cell_of].
use crate::*;

/// Iterator over the cells between two points in cell space.
///
/// The first cell yielded contains `start` and the last contains `end`.  Consecutive cells always share an edge, so
/// a segment passing exactly through a grid corner visits one of the two side cells too; that tie steps along x
/// first.  A zero-length segment yields only its own cell.
pub struct GridTraversal {
    dx: f64,
    dy: f64,
    x: i64,
    y: i64,
    n: i64,
    x_inc: i64,
    y_inc: i64,
    error: f64,
}

impl GridTraversal {
    pub fn new(start: V2, end: V2) -> GridTraversal {
        let (x0, y0) = (start.x, start.y);
        let (x1, y1) = (end.x, end.y);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let x = x0.floor() as i64;
        let y = y0.floor() as i64;
        let mut n: i64 = 1;
        let x_inc: i64;
        let y_inc: i64;
        let mut error: f64;

        if dx == 0.0 {
            x_inc = 0;
            error = f64::INFINITY;
        } else if x1 > x0 {
            x_inc = 1;
            n += x1.floor() as i64 - x;
            error = (x0.floor() + 1.0 - x0) * dy;
        } else {
            x_inc = -1;
            n += x - x1.floor() as i64;
            error = (x0 - x0.floor()) * dy;
        }

        if dy == 0.0 {
            y_inc = 0;
            error -= f64::INFINITY;
        } else if y1 > y0 {
            y_inc = 1;
            n += y1.floor() as i64 - y;
            error -= (y0.floor() + 1.0 - y0) * dx;
        } else {
            y_inc = -1;
            n += y - y1.floor() as i64;
            error -= (y0 - y0.floor()) * dx;
        }

        // Both deltas zero leaves `inf - inf`; there is only the starting cell to visit then.
        if error.is_nan() {
            error = 0.0;
        }

        GridTraversal {
            dx,
            dy,
            x,
            y,
            n,
            x_inc,
            y_inc,
            error,
        }
    }

    /// How many cells are left to visit.
    pub fn remaining(&self) -> usize {
        self.n.max(0) as usize
    }
}

impl Iterator for GridTraversal {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n <= 0 {
            return None;
        }

        self.n -= 1;
        let (x, y) = (self.x, self.y);
        if self.error > 0.0 {
            self.y += self.y_inc;
            self.error -= self.dx;
        } else {
            self.x += self.x_inc;
            self.error += self.dy;
        }
        Some((x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_one_simple() {
        let directions = vec![(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (x, y) in directions.into_iter() {
            let test = GridTraversal::new(V2::new(0.0, 0.0), V2::new(x, y)).collect::<Vec<_>>();
            let correct = vec![(0, 0), (x as i64, y as i64)];
            assert_eq!(test, correct);
        }
    }

    #[test]
    fn test_length_zero_simple() {
        let test = GridTraversal::new(V2::new(0.5, 0.5), V2::new(0.5, 0.5)).collect::<Vec<_>>();
        assert_eq!(test, vec![(0, 0)]);
    }

    #[test]
    fn test_exact_corner_steps_x_first() {
        let test = GridTraversal::new(V2::new(0.5, 0.5), V2::new(1.5, 1.5)).collect::<Vec<_>>();
        assert_eq!(test, vec![(0, 0), (1, 0), (1, 1)]);
        let test = GridTraversal::new(V2::new(0.5, 0.5), V2::new(-0.5, -0.5)).collect::<Vec<_>>();
        assert_eq!(test, vec![(0, 0), (-1, 0), (-1, -1)]);
    }

    #[test]
    fn test_diagonal_visits_connected_cells() {
        let test = GridTraversal::new(V2::new(0.5, 0.2), V2::new(3.5, 2.1)).collect::<Vec<_>>();
        assert_eq!(test.first(), Some(&(0, 0)));
        assert_eq!(test.last(), Some(&(3, 2)));
        // 3 steps in x and 2 in y, plus the starting cell.
        assert_eq!(test.len(), 6);
        for w in test.windows(2) {
            let step = (w[1].0 - w[0].0).abs() + (w[1].1 - w[0].1).abs();
            assert_eq!(step, 1, "{:?}", test);
        }
    }
}
