use crate::search::{Crossing, Participant, Problem};
use itertools::Itertools;

/// One side of the river, as a bitmask over the problem's population table.
/// Bit `i` set means participant `i` stands on this bank. Small masks make
/// state equality and hashing plain integer comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bank(u64);

impl Bank {
    pub const CAPACITY: usize = u64::BITS as usize;

    pub fn empty() -> Self {
        Bank(0)
    }

    /// A bank holding participants `0..population`.
    pub fn full(population: usize) -> Self {
        debug_assert!(population <= Self::CAPACITY);
        if population == Self::CAPACITY {
            Bank(u64::MAX)
        } else {
            Bank((1u64 << population) - 1)
        }
    }

    pub fn contains(self, index: usize) -> bool {
        self.0 & (1u64 << index) != 0
    }

    #[must_use]
    pub fn with(self, index: usize) -> Self {
        Bank(self.0 | (1u64 << index))
    }

    #[must_use]
    pub fn without(self, index: usize) -> Self {
        Bank(self.0 & !(1u64 << index))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The other bank, relative to the full population.
    #[must_use]
    pub fn complement(self, full: Bank) -> Self {
        debug_assert_eq!(self.0 & !full.0, 0);
        Bank(full.0 & !self.0)
    }

    /// Participant indices on this bank, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> + Clone {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let index = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(index)
            }
        })
    }

    /// The participants on this bank, in table order.
    pub fn members(self, problem: &Problem) -> impl Iterator<Item = &Participant> {
        self.iter().map(|i| &problem.participants()[i])
    }
}

/// A puzzle configuration: who is still on the origin bank and where the
/// lantern is. The destination bank is the complement of the origin within
/// the population, so it is not stored. Accumulated cost, heuristic values
/// and parent links are search bookkeeping and deliberately live on the
/// search node instead: two states are the same configuration no matter how
/// the search reached them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    origin: Bank,
    lantern_on_origin: bool,
}

impl State {
    pub fn new(origin: Bank, lantern_on_origin: bool) -> Self {
        Self {
            origin,
            lantern_on_origin,
        }
    }

    pub fn origin(&self) -> Bank {
        self.origin
    }

    pub fn destination(&self, problem: &Problem) -> Bank {
        self.origin.complement(problem.full_population())
    }

    pub fn lantern_on_origin(&self) -> bool {
        self.lantern_on_origin
    }

    /// Everyone has crossed.
    pub fn is_goal(&self) -> bool {
        self.origin.is_empty()
    }

    /// Nobody has crossed yet.
    pub fn is_start(&self, problem: &Problem) -> bool {
        self.origin == problem.full_population()
    }

    /// The bank the lantern is on; only its members may move next.
    pub fn current_bank(&self, problem: &Problem) -> Bank {
        if self.lantern_on_origin {
            self.origin
        } else {
            self.destination(problem)
        }
    }

    /// All legal moves from this state: every single participant on the
    /// lantern's bank, then every unordered pair of them. The order is
    /// deterministic (singles by index, pairs lexicographically) so searches
    /// are reproducible.
    pub fn successors(&self, problem: &Problem) -> Vec<(Crossing, State)> {
        let current = self.current_bank(problem);
        let n = current.len();
        let mut successors = Vec::with_capacity(n + n * n.saturating_sub(1) / 2);
        for mover in current.iter() {
            let crossing = Crossing::solo(mover);
            let state = self.apply(&crossing);
            successors.push((crossing, state));
        }
        for (first, second) in current.iter().tuple_combinations() {
            let crossing = Crossing::pair(first, second);
            let state = self.apply(&crossing);
            successors.push((crossing, state));
        }
        successors
    }

    /// Carry the given movers (and the lantern) to the opposite bank.
    pub fn apply(&self, crossing: &Crossing) -> State {
        let mut origin = self.origin;
        for &mover in crossing.movers() {
            debug_assert_eq!(
                origin.contains(mover),
                self.lantern_on_origin,
                "movers must stand on the lantern's bank"
            );
            origin = if self.lantern_on_origin {
                origin.without(mover)
            } else {
                origin.with(mover)
            };
        }
        State::new(origin, !self.lantern_on_origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Problem;
    use crate::test_utils::CLASSIC_FOUR_TEXT;

    fn problem() -> Problem {
        Problem::from_text(CLASSIC_FOUR_TEXT).unwrap()
    }

    #[test]
    fn banks_partition_the_population() {
        let problem = problem();
        let state = problem.initial_state();
        for (_, successor) in state.successors(&problem) {
            let origin = successor.origin();
            let destination = successor.destination(&problem);
            assert_eq!(origin.len() + destination.len(), 4);
            for i in 0..4 {
                assert_ne!(origin.contains(i), destination.contains(i));
            }
        }
    }

    #[test]
    fn successor_counts() {
        let problem = problem();
        let state = problem.initial_state();
        // 4 solo moves plus C(4, 2) pairs.
        assert_eq!(state.successors(&problem).len(), 4 + 6);

        let (_, after_pair) = state.successors(&problem).into_iter().last().unwrap();
        // Two participants crossed; the other bank holds the lantern now.
        assert_eq!(after_pair.current_bank(&problem).len(), 2);
        assert_eq!(after_pair.successors(&problem).len(), 2 + 1);
    }

    #[test]
    fn every_move_flips_the_lantern() {
        let problem = problem();
        let state = problem.initial_state();
        for (_, successor) in state.successors(&problem) {
            assert!(!successor.lantern_on_origin());
            for (_, grandchild) in successor.successors(&problem) {
                assert!(grandchild.lantern_on_origin());
            }
        }
    }

    #[test]
    fn successor_order_is_deterministic() {
        let problem = problem();
        let state = problem.initial_state();
        let first: Vec<_> = state
            .successors(&problem)
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        let second: Vec<_> = state
            .successors(&problem)
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first[0], Crossing::solo(0));
        assert_eq!(first[4], Crossing::pair(0, 1));
    }

    #[test]
    fn apply_moves_between_banks() {
        let problem = problem();
        let state = problem.initial_state();
        let crossed = state.apply(&Crossing::pair(0, 1));
        assert!(!crossed.origin().contains(0));
        assert!(!crossed.origin().contains(1));
        assert!(crossed.origin().contains(2));
        assert!(crossed.destination(&problem).contains(0));

        let back = crossed.apply(&Crossing::solo(0));
        assert!(back.origin().contains(0));
        assert!(back.lantern_on_origin());
    }

    #[test]
    fn terminal_tests() {
        let problem = problem();
        let start = problem.initial_state();
        assert!(start.is_start(&problem));
        assert!(!start.is_goal());

        let goal = State::new(Bank::empty(), false);
        assert!(goal.is_goal());
        assert!(!goal.is_start(&problem));
    }

    #[test]
    fn equal_states_hash_equal() {
        use std::collections::HashSet;
        let problem = problem();
        let a = problem.initial_state();
        let b = State::new(problem.full_population(), true);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
