//! Character grids describing a map.
use crate::*;

/// A validated, rectangular grid of map symbols.
///
/// Rows run top to bottom, columns left to right.  Every symbol is either [OPEN_SYMBOL] or one of [WALL_SYMBOLS].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Grid> {
        let first = rows.first().ok_or(MapError::EmptyGrid)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(MapError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let start = cells.len();
            for (column, symbol) in line.as_ref().chars().enumerate() {
                if symbol != OPEN_SYMBOL && texture_for_symbol(symbol).is_none() {
                    return Err(MapError::UnknownSymbol {
                        symbol,
                        row,
                        column,
                    });
                }
                cells.push(symbol);
            }

            let found = cells.len() - start;
            if found != width {
                return Err(MapError::RaggedGrid {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Grid {
            cells,
            width,
            height: rows.len(),
        })
    }

    pub fn get_width(&self) -> usize {
        self.width
    }

    pub fn get_height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, column: usize) -> Option<char> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + column])
    }

    /// Is this cell open space?  Cells off the grid are not.
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == Some(OPEN_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() -> Result<()> {
        let g = Grid::parse(&["bbb", "b w", "bbb"])?;
        assert_eq!(g.get_width(), 3);
        assert_eq!(g.get_height(), 3);
        assert_eq!(g.get(1, 2), Some('w'));
        assert!(g.is_open(1, 1));
        assert!(!g.is_open(0, 0));
        assert!(!g.is_open(5, 5));
        Ok(())
    }

    #[test]
    fn test_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(Grid::parse(&empty), Err(MapError::EmptyGrid)));
        assert!(matches!(Grid::parse(&[""]), Err(MapError::EmptyGrid)));
    }

    #[test]
    fn test_ragged() {
        assert!(matches!(
            Grid::parse(&["bbb", "b", "bbb"]),
            Err(MapError::RaggedGrid {
                row: 1,
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn test_unknown_symbol() {
        assert!(matches!(
            Grid::parse(&["bbb", "bxb", "bbb"]),
            Err(MapError::UnknownSymbol {
                symbol: 'x',
                row: 1,
                column: 1
            })
        ));
    }
}
