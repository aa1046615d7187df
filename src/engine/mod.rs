mod rules;
mod window;

pub use self::window::GameEngineWindow;
use crate::Pos2;
use rayon::prelude::*;
use std::collections::HashSet;

/// Sparse Game of Life engine over an unbounded plane.
///
/// Holds only the live cells; everything absent from the set is dead.
/// Each step builds a fresh generation while the current one stays frozen,
/// then swaps it in wholesale.
#[derive(Debug, Clone, Default)]
pub struct GameOfLife {
    alive: HashSet<Pos2>,
}

impl GameOfLife {
    /// Creates an engine from any collection of live cells.
    ///
    /// Duplicate coordinates collapse into one cell.
    pub fn from_alive<I>(alive: I) -> Self
    where
        I: IntoIterator<Item = Pos2>,
    {
        Self {
            alive: alive.into_iter().collect(),
        }
    }

    /// Replaces the current generation with the next one.
    ///
    /// Candidates are the union of the 8 neighbors of every live cell, so a
    /// cell with no live neighbors is never proposed. Each candidate is
    /// evaluated once against the current generation.
    pub fn next_generation(&mut self) {
        let next = neighbor_candidates(&self.alive)
            .into_iter()
            .filter(|&cell| next_alive(&self.alive, cell))
            .collect();
        self.alive = next;
    }

    /// Same as [`GameOfLife::next_generation`], with candidate evaluation
    /// sharded across the rayon pool.
    ///
    /// Every worker reads the same frozen generation, so the result is
    /// identical to the serial path.
    pub fn next_generation_parallel(&mut self) {
        if self.alive.is_empty() {
            return;
        }

        let candidates: Vec<Pos2> = neighbor_candidates(&self.alive).into_iter().collect();
        let next = candidates
            .into_par_iter()
            .filter(|&cell| next_alive(&self.alive, cell))
            .collect();
        self.alive = next;
    }

    pub fn window(&self, top_left: Pos2, bottom_right: Pos2) -> GameEngineWindow<'_> {
        GameEngineWindow::new(self, top_left, bottom_right)
    }

    #[inline]
    pub fn is_alive(&self, cell: Pos2) -> bool {
        self.alive.contains(&cell)
    }

    #[inline]
    pub fn alive(&self) -> &HashSet<Pos2> {
        &self.alive
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn take(self) -> HashSet<Pos2> {
        self.alive
    }
}

/// Every cell adjacent to a live cell, deduplicated.
fn neighbor_candidates(alive: &HashSet<Pos2>) -> HashSet<Pos2> {
    let mut candidates = HashSet::with_capacity(alive.len() * 8);
    for cell in alive {
        candidates.extend(cell.neighbors());
    }
    candidates
}

fn live_neighbors(alive: &HashSet<Pos2>, cell: Pos2) -> u32 {
    cell.neighbors().iter().filter(|n| alive.contains(n)).count() as u32
}

fn next_alive(alive: &HashSet<Pos2>, cell: Pos2) -> bool {
    rules::next_state(alive.contains(&cell), live_neighbors(alive, cell))
}
