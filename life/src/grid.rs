use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;

use crate::error::{Error, Result};

pub const ALIVE: bool = true;
pub const DEAD: bool = false;

/// A fixed-size rectangle of cells stored row after row, so that cell
/// `(x, y)` lives at `x + y * cols`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
        }
    }

    /// Like [`Grid::new`], but `None` when `rows * cols` overflows or can't
    /// be allocated.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        let len = rows.checked_mul(cols)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, DEAD);
        Some(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of `(x, y)`, or `None` if it falls off the grid.
    pub fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.cols)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.rows)?;
        Some(x + y * self.cols)
    }

    pub fn get(&self, x: i64, y: i64) -> Result<bool> {
        self.checked_index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i64, y: i64, alive: bool) -> Result<()> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Like [`Grid::get`], but anything off the grid reads as dead.
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    pub fn fill(&mut self, alive: bool) {
        self.cells.fill(alive);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&ALIVE)
    }

    /// Every coordinate in storage order, x varying fastest.
    pub fn coords(&self) -> impl Iterator<Item = (i64, i64)> + use<> {
        let cols = self.cols as i64;
        (0..self.rows as i64).cartesian_product(0..cols).map(|(y, x)| (x, y))
    }

    /// Live cells as `(x, y)` pairs in storage order.
    pub fn live_cells(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.coords().filter(move |&(x, y)| self.is_alive(x, y))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    fn checked_index(&self, x: i64, y: i64) -> Result<usize> {
        self.index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            cols: self.cols,
            rows: self.rows,
        })
    }
}

/// The Moore neighbourhood of `(x, y)`, without clipping to any grid.
pub fn neighbours((x, y): (i64, i64)) -> impl Iterator<Item = (i64, i64)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dx, dy)| (x + dx, y + dy))
}

/// Strips leading blank lines, trailing whitespace and the indentation shared
/// by every non-blank line. Indentation is counted in chars.
pub fn dedent(s: &str) -> String {
    let get_indent = |l: &str| match l.trim_start().chars().count() {
        0 => None,
        n => Some(l.chars().count() - n),
    };
    let s = s.trim_end();
    let indent = s.lines().filter_map(get_indent).min().unwrap_or_default();
    let lines = s.lines().skip_while(|l| l.trim().is_empty());
    lines
        .map(|l| l.chars().skip(indent).collect::<String>().trim_end().to_string())
        .join("\n")
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for &alive in row {
                f.write_char(if alive { 'o' } else { '.' })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let text = dedent(s);
        let lines = text.lines().collect_vec();
        let rows = lines.len();
        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
        let mut grid = Grid::new(rows, cols);
        for (y, line) in lines.into_iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    ' ' | '.' => (),
                    'o' => grid.cells[x + y * cols] = ALIVE,
                    _ => return Err(Error::Pattern(format!("Unexpected character {c}"))),
                }
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_index() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(3, 0), Some(3));
        assert_eq!(grid.index(0, 1), Some(4));
        assert_eq!(grid.index(2, 2), Some(10));
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 3), None);
        assert_eq!(grid.index(-1, 0), None);
    }

    #[test]
    fn test_neighbours() {
        let ns = neighbours((0, 0)).collect_vec();
        assert_eq!(ns.len(), 8);
        assert!(!ns.contains(&(0, 0)));
        assert!(ns.contains(&(-1, -1)));
        assert!(ns.contains(&(1, 1)));
    }

    #[test]
    fn test_display_roundtrip() {
        let grid = Grid::from_str(
            "
            .o.
            ..o
            ooo
        ",
        )
        .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.to_string(), ".o.\n..o\nooo");
    }

    #[test]
    fn test_ragged_rows_are_padded() {
        let grid = Grid::from_str("o\n..o").unwrap();
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.to_string(), "o..\n..o");
    }

    #[test]
    fn test_try_new_overflow() {
        assert!(Grid::try_new(usize::MAX, 2).is_none());
        assert_eq!(Grid::try_new(3, 4), Some(Grid::new(3, 4)));
    }

    #[test]
    fn test_dedent() {
        let s = "
            oo

             o  ";
        assert_eq!(dedent(s), "oo\n\n o");
    }

    #[test]
    fn test_dedent_counts_chars() {
        // U+3000 is a three byte whitespace char.
        assert_eq!(dedent("\u{3000}o\n \u{3000}o"), "o\n\u{3000}o");
        assert_eq!(dedent("\u{3000}o\n\u{3000} o"), "o\n o");
        let grid = Grid::from_str("\u{3000}o.\n\u{3000}.o").unwrap();
        assert_eq!(grid.to_string(), "o.\n.o");
    }

    #[test]
    fn test_bad_character() {
        assert!(matches!(Grid::from_str("o#o"), Err(Error::Pattern(_))));
        assert!(matches!(
            Grid::from_str("   \n  "),
            Err(Error::InvalidDimension { .. })
        ));
    }
}
