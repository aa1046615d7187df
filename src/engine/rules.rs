/// Whether a cell is alive in the next generation, given its current state
/// and the number of its 8 neighbors alive in the current generation.
///
/// Standard Life rules: a cell with exactly 3 live neighbors is alive next
/// generation regardless of its current state, a live cell with exactly 2
/// survives, everything else is dead.
#[inline]
pub(super) fn next_state(alive: bool, live_neighbors: u32) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (_, 3) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(false, 2));
        for neighbors in 4..=8 {
            assert!(!next_state(true, neighbors));
            assert!(!next_state(false, neighbors));
        }
    }
}
