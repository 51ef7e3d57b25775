use crate::search::Cost;
use std::fmt;

/// A participant in the crossing puzzle, identified by name and the time
/// they need for one crossing. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    name: String,
    time: Cost,
}

impl Participant {
    pub fn new(name: impl Into<String>, time: Cost) -> Self {
        let name = name.into();
        debug_assert!(!name.trim().is_empty(), "participant name must be non-empty");
        debug_assert!(time > 0, "crossing time must be positive");
        Self { name, time }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> Cost {
        self.time
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} - Time: {}", self.name, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let p = Participant::new("A", 1);
        assert_eq!(p.to_string(), "Name: A - Time: 1");
    }

    #[test]
    fn equality_by_name_and_time() {
        assert_eq!(Participant::new("A", 1), Participant::new("A", 1));
        assert_ne!(Participant::new("A", 1), Participant::new("A", 2));
        assert_ne!(Participant::new("A", 1), Participant::new("B", 1));
    }
}
