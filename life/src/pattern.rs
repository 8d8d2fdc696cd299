use std::str::FromStr;

use crate::{Grid, error::Error};

/// Live cells of a shape written in the `o`/`.` grid format, as offsets from
/// the top-left corner of the text. Used to stamp known shapes onto an engine.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(i64, i64)>,
}

impl Pattern {
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells.iter().copied()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let grid = Grid::from_str(s)?;
        Ok(Self {
            cells: grid.live_cells().collect(),
        })
    }
}

pub const BLOCK: &str = "
    oo
    oo";

pub const BLINKER: &str = "ooo";

pub const GLIDER: &str = "
     o
      o
    ooo";

pub const BOAT: &str = "
    oo
    o o
     o";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_from_top_left() {
        let p = Pattern::from_str(GLIDER).unwrap();
        assert_eq!(p.population(), 5);
        assert_eq!(
            p.iter().collect::<Vec<_>>(),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_dots_and_spaces_are_dead() {
        let a = Pattern::from_str(BOAT).unwrap();
        let b = Pattern::from_str("oo.\no.o\n.o.").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_unknown_characters() {
        assert_eq!(
            Pattern::from_str("o*"),
            Err(Error::Pattern("Unexpected character *".to_string()))
        );
    }
}
