use crate::search::Cost;
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: i64,
    /// Number of nodes evaluated by the heuristic
    evaluated_nodes: i64,
    /// Number of unique nodes generated
    generated_nodes: i64,
    /// Number of crossings generated (including duplicates of known states)
    generated_crossings: i64,
    /// g-value of the most recently dequeued node
    time_passed: Cost,
    /// Best f-value seen so far
    best_f_value: Cost,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            evaluated_nodes: 0,
            generated_nodes: 0,
            generated_crossings: 0,
            time_passed: 0,
            best_f_value: Cost::MAX,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn register_f_value(&mut self, f_value: Cost) {
        if f_value < self.best_f_value {
            self.best_f_value = f_value;
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    pub fn register_time_passed(&mut self, time_passed: Cost) {
        self.time_passed = time_passed;
    }

    pub fn time_passed(&self) -> Cost {
        self.time_passed
    }

    pub fn expanded_nodes(&self) -> i64 {
        self.expanded_nodes
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes as i64;
        self.log_if_needed();
    }

    pub fn increment_generated_crossings(&mut self, num_crossings: usize) {
        self.generated_crossings += num_crossings as i64;
        self.log_if_needed();
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            evaluated_nodes = self.evaluated_nodes,
            generated_nodes = self.generated_nodes,
            generated_crossings = self.generated_crossings,
            time_passed = self.time_passed,
        );
    }

    pub fn finalise_search(&self) {
        info!("finalising search");
        self.log();
        info!(search_duration = self.search_start_time.elapsed().as_secs_f64());
    }
}
