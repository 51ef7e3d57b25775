use crate::search::{Cost, Problem};
use smallvec::SmallVec;

/// A single lantern trip: one or two participants (by index into the
/// problem's population table) cross to the opposite bank. The direction is
/// implied by the lantern side of the state the crossing is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossing {
    movers: SmallVec<[usize; 2]>,
}

impl Crossing {
    pub fn solo(mover: usize) -> Self {
        Self {
            movers: SmallVec::from_slice(&[mover]),
        }
    }

    pub fn pair(first: usize, second: usize) -> Self {
        debug_assert_ne!(first, second, "a pair crossing needs two participants");
        Self {
            movers: SmallVec::from_slice(&[first, second]),
        }
    }

    pub fn movers(&self) -> &[usize] {
        &self.movers
    }

    /// The crossing takes as long as its slowest mover.
    pub fn cost(&self, problem: &Problem) -> Cost {
        self.movers
            .iter()
            .map(|&i| problem.participants()[i].time())
            .max()
            .unwrap_or(0)
    }

    pub fn to_string(&self, problem: &Problem) -> String {
        let names: Vec<&str> = self
            .movers
            .iter()
            .map(|&i| problem.participants()[i].name())
            .collect();
        names.join(" and ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Problem;

    fn problem() -> Problem {
        Problem::from_text("TIME 30\nA 1\nB 2\nC 5\nEND\n").unwrap()
    }

    #[test]
    fn solo_cost_is_the_mover_time() {
        assert_eq!(Crossing::solo(2).cost(&problem()), 5);
    }

    #[test]
    fn pair_cost_is_the_slower_time() {
        assert_eq!(Crossing::pair(0, 2).cost(&problem()), 5);
        assert_eq!(Crossing::pair(0, 1).cost(&problem()), 2);
    }

    #[test]
    fn renders_mover_names() {
        let problem = problem();
        assert_eq!(Crossing::solo(0).to_string(&problem), "A");
        assert_eq!(Crossing::pair(1, 2).to_string(&problem), "B and C");
    }
}
