//! Conway's Game of Life on a bounded, double-buffered grid.
//!
//! [`Engine`] owns two equally sized [`Grid`]s. One plays the role of
//! [`Role::Current`] (what shells read and edit) and the other of
//! [`Role::Next`] (where [`Engine::advance`] writes the following
//! generation). Advancing swaps the two labels instead of copying cells.

mod error;
mod grid;
pub mod pattern;
pub mod render;


use std::fmt::Display;

use log::{debug, trace};
use rand::Rng;

pub use crate::{
    error::{Error, Result},
    grid::{ALIVE, DEAD, Grid, neighbours},
    pattern::Pattern,
};

/// Which of the two buffers a read refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Current,
    Next,
}

#[derive(Clone, Debug)]
pub struct Engine {
    grids: [Grid; 2],
    current: usize,
    generation: u64,
}

impl Engine {
    /// Allocates both buffers, every cell dead.
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        if rows <= 0 || cols <= 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        let invalid = Error::InvalidDimension { rows, cols };
        let (Ok(r), Ok(c)) = (usize::try_from(rows), usize::try_from(cols)) else {
            return Err(invalid);
        };
        let (Some(a), Some(b)) = (Grid::try_new(r, c), Grid::try_new(r, c)) else {
            return Err(invalid);
        };
        debug!("new {cols}x{rows} engine");
        Ok(Self {
            grids: [a, b],
            current: 0,
            generation: 0,
        })
    }

    pub fn rows(&self) -> usize {
        self.current().rows()
    }

    pub fn cols(&self) -> usize {
        self.current().cols()
    }

    /// Number of `advance` calls since the grid was last seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current().population()
    }

    pub fn grid(&self, role: Role) -> &Grid {
        match role {
            Role::Current => &self.grids[self.current],
            Role::Next => &self.grids[1 - self.current],
        }
    }

    pub fn current(&self) -> &Grid {
        self.grid(Role::Current)
    }

    pub fn get(&self, role: Role, x: i64, y: i64) -> Result<bool> {
        self.grid(role).get(x, y)
    }

    /// Edits the current buffer; the next buffer is left alone.
    pub fn set_alive(&mut self, x: i64, y: i64, alive: bool) -> Result<()> {
        trace!("set ({x}, {y}) alive={alive}");
        self.current_mut().set(x, y, alive)
    }

    /// Flips a cell in the current buffer and returns its new state.
    pub fn toggle(&mut self, x: i64, y: i64) -> Result<bool> {
        let alive = !self.current().get(x, y)?;
        self.set_alive(x, y, alive)?;
        Ok(alive)
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.current_mut().fill(DEAD);
        self.generation = 0;
    }

    /// Seeds the current buffer with a fair coin per cell.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.current_mut().cells_mut() {
            *cell = rng.random_bool(0.5);
        }
        self.generation = 0;
        debug!("randomized, population {}", self.population());
    }

    /// Stamps `pattern` with its top-left corner at `(x, y)`. Nothing is
    /// written unless the whole pattern fits.
    pub fn place(&mut self, pattern: &Pattern, x: i64, y: i64) -> Result<()> {
        let grid = self.current_mut();
        let out_of_bounds = |(x, y): (i64, i64)| Error::OutOfBounds {
            x,
            y,
            cols: grid.cols(),
            rows: grid.rows(),
        };
        let mut cells = Vec::with_capacity(pattern.population());
        for (dx, dy) in pattern.iter() {
            let p = match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(px), Some(py)) if grid.index(px, py).is_some() => (px, py),
                (px, py) => return Err(out_of_bounds((px.unwrap_or(x), py.unwrap_or(y)))),
            };
            cells.push(p);
        }
        for (x, y) in cells {
            grid.set(x, y, ALIVE)?;
        }
        Ok(())
    }

    /// Live cells around `(x, y)` in the current buffer. Positions off the
    /// grid are skipped, so corners see at most 3 and edges at most 5.
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> Result<u8> {
        let grid = self.current();
        grid.get(x, y)?;
        Ok(live_neighbours(grid, (x, y)))
    }

    /// Computes the next generation into the next buffer, then swaps roles
    /// and clears the buffer that just became next.
    pub fn advance(&mut self) {
        let [a, b] = &mut self.grids;
        let (current, next) = if self.current == 0 { (&*a, b) } else { (&*b, a) };
        for ((x, y), cell) in current.coords().zip(next.cells_mut()) {
            *cell = next_state(current.is_alive(x, y), live_neighbours(current, (x, y)));
        }
        self.current = 1 - self.current;
        self.grids[1 - self.current].fill(DEAD);
        self.generation += 1;
        debug!(
            "generation {}, population {}",
            self.generation,
            self.population()
        );
    }

    /// Calls [`Engine::advance`] `n` times.
    pub fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn current_mut(&mut self) -> &mut Grid {
        &mut self.grids[self.current]
    }
}

/// The B3/S23 rule.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    matches!((alive, neighbours), (true, 2 | 3) | (false, 3))
}

fn live_neighbours(grid: &Grid, p: (i64, i64)) -> u8 {
    neighbours(p).filter(|&(x, y)| grid.is_alive(x, y)).count() as u8
}

impl Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.current().fmt(f)
    }
}
