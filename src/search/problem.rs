use crate::parsers::parse_problem_text;
use crate::search::{Bank, Cost, Participant, State};
use std::path::Path;
use thiserror::Error;

/// Errors raised while turning an input file into a [`Problem`]. Input
/// errors are fatal: the caller reports the diagnostic and never starts a
/// search.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("File not found!")]
    Unreadable(#[source] std::io::Error),
    #[error("{label} must not be empty!")]
    EmptyField { label: String },
    #[error("{label} must be an integer!")]
    NotAnInteger { label: String },
    #[error("{label} must be greater than 0!")]
    NotPositive { label: String },
    #[error("The total time line is missing!")]
    MissingBudget,
    #[error("{label} is too large!")]
    OutOfRange { label: String },
    #[error("At most {} participants are supported!", Bank::CAPACITY)]
    TooManyParticipants,
}

/// A problem instance: the population table, the total-time budget T, and
/// the cached sum of all crossing times (used by the paired-crossings
/// heuristic's start-state rule). Participants are referenced by their
/// index into the table everywhere else in the crate.
#[derive(Debug, Clone)]
pub struct Problem {
    participants: Vec<Participant>,
    time_budget: Cost,
    total_time: Cost,
}

impl Problem {
    pub fn new(participants: Vec<Participant>, time_budget: Cost) -> Result<Self, ProblemError> {
        if participants.len() > Bank::CAPACITY {
            return Err(ProblemError::TooManyParticipants);
        }
        let total_time = participants.iter().map(|p| p.time()).sum();
        Ok(Self {
            participants,
            time_budget,
            total_time,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ProblemError> {
        let text = std::fs::read_to_string(path).map_err(ProblemError::Unreadable)?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ProblemError> {
        let (time_budget, members) = parse_problem_text(text)?;
        let participants = members
            .into_iter()
            .map(|(name, time)| Participant::new(name, time))
            .collect();
        Self::new(participants, time_budget)
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn time_budget(&self) -> Cost {
        self.time_budget
    }

    /// Sum of all crossing times.
    pub fn total_time(&self) -> Cost {
        self.total_time
    }

    /// Bitmask with one bit set per participant.
    pub fn full_population(&self) -> Bank {
        Bank::full(self.participants.len())
    }

    /// Everyone on the origin bank, together with the lantern.
    pub fn initial_state(&self) -> State {
        State::new(self.full_population(), true)
    }
}
