//! This module implements the A* search algorithm with a budget cut-off.

use priority_queue::PriorityQueue;

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Cost, Heuristic, NodeId, Problem, SearchNodeStatus, SearchSpace, SearchStatistics,
};
use std::cmp::Reverse;
use tracing::debug;

/// Best-first search on f = g + h. The frontier is a min-priority queue on
/// (f, insertion order), so ties resolve in favour of the node pushed first
/// and runs are reproducible. Expanded configurations are closed and never
/// expanded again; a cheaper path to a still-open configuration updates the
/// node in place instead of duplicating it.
///
/// The total-time budget is enforced at dequeue time: once the cheapest
/// candidate's accumulated cost exceeds it, no plan within the budget can
/// exist and the search gives up.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        problem: &Problem,
        mut heuristic: Box<dyn Heuristic>,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let heuristic = heuristic.as_mut();
        let budget = problem.time_budget();
        let initial_state = problem.initial_state();

        let mut search_space = SearchSpace::new(initial_state);
        let mut priority_queue: PriorityQueue<NodeId, Reverse<(Cost, u64)>> = PriorityQueue::new();
        let mut insertion_order: u64 = 0;

        let root_h = heuristic.evaluate(&initial_state, problem);
        statistics.increment_evaluated_nodes();
        let root_node = search_space.get_root_node_mut();
        root_node.open(0, root_h);
        let root_id = root_node.node_id();
        let root_f = root_node.f();

        if initial_state.is_goal() {
            let plan = search_space.extract_plan(search_space.get_node(root_id));
            statistics.finalise_search();
            return (SearchResult::Success(plan), statistics);
        }

        priority_queue.push(root_id, Reverse((root_f, insertion_order)));

        while let Some((node_id, _)) = priority_queue.pop() {
            let node = search_space.get_node_mut(node_id);
            if node.status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let g_value = node.g();
            statistics.register_time_passed(g_value);
            statistics.increment_expanded_nodes();

            if g_value > budget {
                debug!(g_value, budget, "cheapest candidate exceeds the budget");
                statistics.finalise_search();
                return (SearchResult::BudgetExceeded, statistics);
            }

            let state = *search_space.get_state(node_id);
            if state.is_goal() {
                let goal_node = search_space.get_node(node_id);
                let plan = search_space.extract_plan(goal_node);
                statistics.finalise_search();
                return (SearchResult::Success(plan), statistics);
            }

            let successors = state.successors(problem);
            statistics.increment_generated_crossings(successors.len());
            for (crossing, successor_state) in successors {
                let new_g = g_value + crossing.cost(problem);
                let child_node =
                    search_space.insert_or_get_node(successor_state, crossing.clone(), node_id);
                let child_id = child_node.node_id();
                match child_node.status() {
                    SearchNodeStatus::New => {
                        let h_value = heuristic.evaluate(&successor_state, problem);
                        statistics.increment_evaluated_nodes();
                        let child_node = search_space.get_node_mut(child_id);
                        child_node.open(new_g, h_value);
                        let f_value = child_node.f();
                        statistics.increment_generated_nodes(1);
                        statistics.register_f_value(f_value);
                        insertion_order += 1;
                        priority_queue.push(child_id, Reverse((f_value, insertion_order)));
                    }
                    SearchNodeStatus::Open => {
                        if new_g < child_node.g() {
                            let h_value = child_node.h();
                            child_node.open(new_g, h_value);
                            child_node.set_parent(node_id, crossing);
                            let f_value = child_node.f();
                            insertion_order += 1;
                            priority_queue.push(child_id, Reverse((f_value, insertion_order)));
                        }
                    }
                    // A cheaper path to a closed configuration cannot exist
                    // once it has been dequeued; drop the duplicate.
                    SearchNodeStatus::Closed => {}
                }
            }
        }

        statistics.finalise_search();
        (SearchResult::Unsolvable, statistics)
    }
}
