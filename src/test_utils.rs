//! Shared fixtures and brute-force oracles for tests.

use crate::search::{Cost, Problem, State};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

pub(crate) const CLASSIC_FOUR_TEXT: &str = "\
# the classic four-person bridge and torch puzzle
TIME 30
A 1
B 2
C 5
D 8
END
";

pub(crate) const TRIO_TEXT: &str = "\
TIME 20
A 1
B 2
C 5
END
";

pub(crate) const FIVE_TEXT: &str = "\
TIME 100
A 1
B 2
C 5
D 10
E 25
END
";

pub(crate) const SOLO_TEXT: &str = "\
TIME 3
A 3
END
";

/// Every configuration reachable from the initial state, by breadth-first
/// traversal of the successor relation.
pub(crate) fn reachable_states(problem: &Problem) -> Vec<State> {
    let initial = problem.initial_state();
    let mut seen = HashSet::from([initial]);
    let mut queue = VecDeque::from([initial]);
    let mut states = vec![];
    while let Some(state) = queue.pop_front() {
        states.push(state);
        for (_, successor) in state.successors(problem) {
            if seen.insert(successor) {
                queue.push_back(successor);
            }
        }
    }
    states
}

/// The true optimal remaining cost from `start`, by uniform-cost search.
/// Exponential in the population size, so only suitable as a test oracle.
pub(crate) fn optimal_remaining_cost(start: &State, problem: &Problem) -> Option<Cost> {
    let mut best: HashMap<State, Cost> = HashMap::from([(*start, 0)]);
    let mut arena = vec![*start];
    let mut heap: BinaryHeap<Reverse<(Cost, usize)>> = BinaryHeap::from([Reverse((0, 0))]);

    while let Some(Reverse((cost, index))) = heap.pop() {
        let state = arena[index];
        if state.is_goal() {
            return Some(cost);
        }
        if best.get(&state).is_some_and(|&known| cost > known) {
            continue;
        }
        for (crossing, successor) in state.successors(problem) {
            let next_cost = cost + crossing.cost(problem);
            if best.get(&successor).map_or(true, |&known| next_cost < known) {
                best.insert(successor, next_cost);
                arena.push(successor);
                heap.push(Reverse((next_cost, arena.len() - 1)));
            }
        }
    }
    None
}
