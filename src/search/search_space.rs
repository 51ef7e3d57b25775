use crate::search::{Crossing, NodeId, Plan, PlanStep, SearchNode, State};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// A [`SearchSpace`] manages the states and nodes of one search. States are
/// stored once: inserting a configuration that was already seen hands back
/// the existing node, which is what keeps equivalent states (same banks,
/// same lantern side, any g) from being duplicated.
#[derive(Debug)]
pub struct SearchSpace {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    states: SegVec<State, Linear>,
    registered_nodes: HashMap<State, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_state: State) -> Self {
        let mut nodes = SegVec::new();
        let mut states = SegVec::new();
        let mut registered_nodes = HashMap::new();

        let root_node_id = NodeId::new(0);
        registered_nodes.insert(initial_state, root_node_id);
        nodes.push(SearchNode::new_root(root_node_id));
        states.push(initial_state);

        Self {
            root_node_id,
            nodes,
            states,
            registered_nodes,
        }
    }

    /// Look up the node for `state`, creating a fresh one (with the given
    /// parent and crossing) when the configuration has not been seen before.
    pub fn insert_or_get_node(
        &mut self,
        state: State,
        crossing: Crossing,
        parent_id: NodeId,
    ) -> &mut SearchNode {
        match self.registered_nodes.get(&state) {
            Some(&node_id) => self.get_node_mut(node_id),
            None => {
                let node_id = NodeId::new(self.nodes.len());
                self.states.push(state);
                self.nodes
                    .push(SearchNode::new_with_parent(node_id, parent_id, crossing));
                self.registered_nodes.insert(state, node_id);
                self.get_node_mut(node_id)
            }
        }
    }

    #[inline(always)]
    pub fn root_node_id(&self) -> NodeId {
        self.root_node_id
    }

    #[inline(always)]
    pub fn get_root_node_mut(&mut self) -> &mut SearchNode {
        self.get_node_mut(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.index()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes
            .get_mut(node_id.index())
            .expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_state(&self, node_id: NodeId) -> &State {
        self.states.get(node_id.index()).expect("Invalid node id")
    }

    /// Number of distinct configurations registered so far.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Walk parent pointers from the goal back to the root and return the
    /// steps in crossing order.
    pub fn extract_plan(&self, goal_node: &SearchNode) -> Plan {
        let mut steps = vec![];
        let mut current_node = goal_node;
        loop {
            steps.push(PlanStep {
                state: *self.get_state(current_node.node_id()),
                crossing: current_node.crossing().cloned(),
                g: current_node.g(),
                h: current_node.h(),
                f: current_node.f(),
            });
            match current_node.parent_id() {
                Some(parent_id) => current_node = self.get_node(parent_id),
                None => break,
            }
        }
        steps.reverse();
        Plan::new(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Problem;
    use crate::test_utils::CLASSIC_FOUR_TEXT;

    #[test]
    fn equivalent_states_share_a_node() {
        let problem = Problem::from_text(CLASSIC_FOUR_TEXT).unwrap();
        let initial = problem.initial_state();
        let mut space = SearchSpace::new(initial);
        let root_id = space.root_node_id();

        let crossing = Crossing::pair(0, 1);
        let child = initial.apply(&crossing);
        let first_id = space
            .insert_or_get_node(child, crossing.clone(), root_id)
            .node_id();
        let second_id = space.insert_or_get_node(child, crossing, root_id).node_id();
        assert_eq!(first_id, second_id);
        assert_eq!(space.num_states(), 2);
    }

    #[test]
    fn extract_plan_walks_back_to_the_root() {
        let problem = Problem::from_text(CLASSIC_FOUR_TEXT).unwrap();
        let initial = problem.initial_state();
        let mut space = SearchSpace::new(initial);
        let root_id = space.root_node_id();
        space.get_root_node_mut().open(0, 14);

        let crossing = Crossing::pair(0, 1);
        let child_state = initial.apply(&crossing);
        let child = space.insert_or_get_node(child_state, crossing, root_id);
        child.open(2, 9);
        let child = space.get_node(space.registered_nodes[&child_state]).clone();

        let plan = space.extract_plan(&child);
        assert_eq!(plan.steps().len(), 2);
        assert_eq!(plan.steps()[0].state, initial);
        assert_eq!(plan.steps()[0].g, 0);
        assert!(plan.steps()[0].crossing.is_none());
        assert_eq!(plan.steps()[1].state, child_state);
        assert_eq!(plan.steps()[1].g, 2);
    }
}
