use crate::search::{heuristics::Heuristic, Cost, Problem, State};

/// Pairs up the participants still on the origin bank and charges every
/// pair the slowest remaining crossing time, plus a unit per unmodelled
/// return trip, plus the cheapest return carrier when the lantern is on the
/// destination bank. At the initial state it instead uses
/// `sum(times) - min(times) * floor(N / 2)`: in a perfect pairing schedule
/// the fastest participant is saved once per pair.
///
/// The return-trip term counts trips, not time, so this is a loose bound
/// that can overestimate on some instances (see the five-person test in the
/// search engine). [`super::MaxRemaining`] is the safe choice when
/// optimality has to be guaranteed.
#[derive(Debug, Clone, Default)]
pub struct PairedCrossings;

impl PairedCrossings {
    pub fn new() -> Self {
        PairedCrossings
    }
}

impl Heuristic for PairedCrossings {
    fn evaluate(&mut self, state: &State, problem: &Problem) -> Cost {
        if state.is_goal() {
            return 0;
        }
        if state.is_start(problem) {
            let fastest = state
                .origin()
                .members(problem)
                .map(|p| p.time())
                .min()
                .unwrap_or(0);
            let pairs = (problem.participants().len() / 2) as Cost;
            return problem.total_time() - fastest * pairs;
        }

        let remaining = state.origin();
        let slowest = remaining
            .members(problem)
            .map(|p| p.time())
            .max()
            .unwrap_or(0);
        let pairs = (remaining.len() / 2) as Cost;
        let mut heuristic = pairs * slowest;

        // One unit for the odd participant left waiting, one more for the
        // lantern trip that fetches them.
        let mut return_trips = (remaining.len() % 2) as Cost;
        if remaining.len() % 2 == 1 {
            return_trips += 1;
        }
        heuristic += return_trips;

        // Someone on the destination bank has to carry the lantern back.
        if !state.lantern_on_origin() {
            let destination = state.destination(problem);
            heuristic += destination
                .members(problem)
                .map(|p| p.time())
                .min()
                .unwrap_or(0);
        }
        heuristic
    }
}
