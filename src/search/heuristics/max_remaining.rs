use crate::search::{heuristics::Heuristic, Cost, Problem, State};

/// The slowest participant still on the origin bank has to cross at some
/// point, so their time is a lower bound on the remaining cost. Ignores
/// return trips and pairings entirely.
#[derive(Debug, Clone, Default)]
pub struct MaxRemaining;

impl MaxRemaining {
    pub fn new() -> Self {
        MaxRemaining
    }
}

impl Heuristic for MaxRemaining {
    fn evaluate(&mut self, state: &State, problem: &Problem) -> Cost {
        state
            .origin()
            .members(problem)
            .map(|p| p.time())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Bank, Crossing};
    use crate::test_utils::{optimal_remaining_cost, reachable_states, CLASSIC_FOUR_TEXT, TRIO_TEXT};

    #[test]
    fn zero_at_goal() {
        let problem = Problem::from_text(CLASSIC_FOUR_TEXT).unwrap();
        let goal = State::new(Bank::empty(), false);
        assert_eq!(MaxRemaining::new().evaluate(&goal, &problem), 0);
    }

    #[test]
    fn slowest_remaining_time() {
        let problem = Problem::from_text(CLASSIC_FOUR_TEXT).unwrap();
        let initial = problem.initial_state();
        assert_eq!(MaxRemaining::new().evaluate(&initial, &problem), 8);

        // D (time 8) crossed with C; the slowest left behind is B.
        let crossed = initial.apply(&Crossing::pair(2, 3));
        assert_eq!(MaxRemaining::new().evaluate(&crossed, &problem), 2);
    }

    #[test]
    fn admissible_on_every_reachable_state() {
        for text in [TRIO_TEXT, CLASSIC_FOUR_TEXT] {
            let problem = Problem::from_text(text).unwrap();
            let mut heuristic = MaxRemaining::new();
            for state in reachable_states(&problem) {
                let optimal = optimal_remaining_cost(&state, &problem)
                    .expect("every reachable state can still reach the goal");
                assert!(
                    heuristic.evaluate(&state, &problem) <= optimal,
                    "overestimate at {state:?}: h > {optimal}"
                );
            }
        }
    }
}
