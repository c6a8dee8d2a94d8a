mod rules;

pub use self::rules::next_state;
use crate::Cell;
use std::collections::HashSet;

/// Stateless stepping engine for a bounded board.
///
/// The bounds are fixed for the lifetime of the engine; cells outside
/// `[0, height) x [0, width)` are never considered alive and never appear
/// in an output set. The engine holds no simulation state of its own, so
/// the same instance can drive any number of independent living sets.
#[derive(Debug, Clone, Copy)]
pub struct LifeEngine {
    width: i32,
    height: i32,
}

impl LifeEngine {
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "board bounds must be positive");
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    /// Computes the living set of the next generation.
    ///
    /// Only candidate cells are evaluated: the living cells themselves plus
    /// every neighbor of a living cell. Nothing else can change state, so
    /// the cost scales with the population instead of the board area.
    ///
    /// Neighbor counts are taken against `living`, never against the set
    /// being built, so the whole transition reads one consistent snapshot.
    pub fn step(&self, living: &HashSet<Cell>) -> HashSet<Cell> {
        let mut candidates: HashSet<Cell> = HashSet::with_capacity(living.len() * 9);
        for &cell in living {
            if self.in_bounds(cell) {
                candidates.insert(cell);
            }
            for neighbor in cell.neighbors() {
                if self.in_bounds(neighbor) {
                    candidates.insert(neighbor);
                }
            }
        }

        candidates
            .into_iter()
            .filter(|cell| {
                let count = cell
                    .neighbors()
                    .iter()
                    .filter(|n| living.contains(n))
                    .count() as u32;
                next_state(living.contains(cell), count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(cells: &[(i32, i32)]) -> HashSet<Cell> {
        cells.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn empty_set_is_a_fixed_point() {
        let engine = LifeEngine::new(7, 3);
        assert!(engine.step(&HashSet::new()).is_empty());
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let engine = LifeEngine::new(5, 5);
        assert!(engine.step(&set(&[(2, 2)])).is_empty());
    }

    #[test]
    fn block_is_a_still_life() {
        let engine = LifeEngine::new(4, 4);
        let block = set(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(engine.step(&block), block);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let engine = LifeEngine::new(5, 5);
        let horizontal = set(&[(1, 1), (1, 2), (1, 3)]);
        let vertical = set(&[(0, 2), (1, 2), (2, 2)]);

        let first = engine.step(&horizontal);
        assert_eq!(first, vertical);
        assert_eq!(engine.step(&first), horizontal);
    }

    #[test]
    fn glider_translates_by_one_after_four_steps() {
        let engine = LifeEngine::new(20, 20);
        let glider = set(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);

        let mut current = glider.clone();
        for _ in 0..4 {
            current = engine.step(&current);
        }

        let translated: HashSet<Cell> = glider
            .iter()
            .map(|&cell| cell + Cell::new(1, 1))
            .collect();
        assert_eq!(current, translated);
    }

    #[test]
    fn output_never_leaves_the_board() {
        // a blinker jammed into the top-left corner; its vertical phase
        // would reach row -1 on an unbounded board
        let engine = LifeEngine::new(5, 5);
        let mut current = set(&[(0, 0), (0, 1), (0, 2)]);

        for _ in 0..6 {
            current = engine.step(&current);
            assert!(current.iter().all(|&c| engine.in_bounds(c)));
        }
    }

    #[test]
    fn edge_cells_see_out_of_bounds_neighbors_as_dead() {
        // a block in the corner only has in-bounds neighbors on two sides,
        // but survives exactly like an interior block
        let engine = LifeEngine::new(3, 3);
        let block = set(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(engine.step(&block), block);
    }

    #[test]
    fn out_of_bounds_input_cells_are_dropped() {
        let engine = LifeEngine::new(3, 3);
        let stray = set(&[(10, 10)]);
        assert!(engine.step(&stray).is_empty());
    }

    #[test]
    fn step_is_deterministic() {
        let engine = LifeEngine::new(16, 16);
        let seed = set(&[(3, 4), (3, 5), (3, 6), (4, 4), (5, 5), (7, 7), (7, 8)]);

        assert_eq!(engine.step(&seed), engine.step(&seed));
    }
}
