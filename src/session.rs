use crate::{Cell, LifeEngine};
use std::{collections::HashSet, time::Duration};

/// Clamp range for the per-generation interval.
const MIN_INTERVAL: Duration = Duration::from_millis(15);
const MAX_INTERVAL: Duration = Duration::from_millis(960);

/// Driver-owned simulation state: the living set plus the generation
/// counter, running flag and tick interval the UI manipulates.
///
/// All rule logic stays in [`LifeEngine`]; the session only feeds the
/// engine's output back in as the next input.
#[derive(Debug)]
pub struct Session {
    engine: LifeEngine,
    living: HashSet<Cell>,
    generation: u64,
    running: bool,
    interval: Duration,
}

impl Session {
    /// Creates a session over `living`. Cells outside the engine's board
    /// are dropped here, so the set always satisfies the bounds invariant.
    pub fn new(engine: LifeEngine, living: HashSet<Cell>) -> Self {
        let living = living
            .into_iter()
            .filter(|&cell| engine.in_bounds(cell))
            .collect();
        Self {
            engine,
            living,
            generation: 0,
            running: false,
            interval: Duration::from_millis(100),
        }
    }

    #[inline]
    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }
    #[inline]
    pub fn living(&self) -> &HashSet<Cell> {
        &self.living
    }
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.living.len()
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn is_extinct(&self) -> bool {
        self.living.is_empty()
    }

    #[inline]
    pub fn take_living(self) -> HashSet<Cell> {
        self.living
    }

    /// Advances the simulation by one generation.
    pub fn advance(&mut self) {
        self.living = self.engine.step(&self.living);
        self.generation += 1;
    }

    /// Flips a single cell. Requests outside the board are ignored.
    pub fn toggle(&mut self, cell: Cell) {
        if !self.engine.in_bounds(cell) {
            return;
        }
        if !self.living.remove(&cell) {
            self.living.insert(cell);
        }
    }

    pub fn clear(&mut self) {
        self.living.clear();
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }
    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }
    pub fn faster(&mut self) {
        self.set_interval(self.interval / 2);
    }
    pub fn slower(&mut self) {
        self.set_interval(self.interval * 2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(LifeEngine::new(8, 8), HashSet::new())
    }

    #[test]
    fn new_drops_out_of_bounds_cells() {
        let seed: HashSet<Cell> = [Cell::new(1, 1), Cell::new(-1, 3), Cell::new(4, 99)]
            .into_iter()
            .collect();
        let session = Session::new(LifeEngine::new(8, 8), seed);

        assert_eq!(session.alive_count(), 1);
        assert!(session.living().contains(&Cell::new(1, 1)));
    }

    #[test]
    fn toggle_flips_and_ignores_out_of_bounds() {
        let mut session = session();

        session.toggle(Cell::new(2, 2));
        assert!(session.living().contains(&Cell::new(2, 2)));
        session.toggle(Cell::new(2, 2));
        assert!(session.is_extinct());

        session.toggle(Cell::new(-1, 0));
        session.toggle(Cell::new(0, 8));
        assert!(session.is_extinct());
    }

    #[test]
    fn advance_counts_generations() {
        let mut session = session();
        for cell in [Cell::new(1, 1), Cell::new(1, 2), Cell::new(1, 3)] {
            session.toggle(cell);
        }

        session.advance();
        session.advance();
        assert_eq!(session.generation(), 2);
        assert_eq!(session.alive_count(), 3);
    }

    #[test]
    fn interval_is_clamped() {
        let mut session = session();

        session.set_interval(Duration::from_millis(30));
        session.faster();
        assert_eq!(session.interval(), MIN_INTERVAL);
        for _ in 0..16 {
            session.slower();
        }
        assert_eq!(session.interval(), MAX_INTERVAL);
    }
}
