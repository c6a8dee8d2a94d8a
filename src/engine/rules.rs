/// The Conway Life rule table.
///
/// A living cell survives with 2 or 3 living neighbors, a dead cell is
/// born with exactly 3. Every other combination produces a dead cell.
#[inline]
pub fn next_state(alive: bool, living_neighbors: u32) -> bool {
    matches!((alive, living_neighbors), (true, 2) | (_, 3))
}
