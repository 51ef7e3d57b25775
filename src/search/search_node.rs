use crate::search::{Cost, Crossing};

/// Index of a node in the search space arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] carries the search bookkeeping for one state: g/h/f
/// values, status, and the crossing plus parent that produced it. State
/// identity itself lives in the search space's state table, keyed by the
/// same [`NodeId`].
#[derive(Debug, Clone)]
pub struct SearchNode {
    node_id: NodeId,
    status: SearchNodeStatus,
    f: Cost,
    g: Cost,
    h: Cost,
    /// Crossing that led to this node; `None` for the root.
    crossing: Option<Crossing>,
    parent_id: Option<NodeId>,
}

impl SearchNode {
    /// Create the root node of the search space. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub(crate) fn new_root(node_id: NodeId) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: Cost::MAX,
            g: Cost::MAX,
            h: Cost::MAX,
            crossing: None,
            parent_id: None,
        }
    }

    pub(crate) fn new_with_parent(node_id: NodeId, parent_id: NodeId, crossing: Crossing) -> Self {
        Self {
            node_id,
            status: SearchNodeStatus::New,
            f: Cost::MAX,
            g: Cost::MAX,
            h: Cost::MAX,
            crossing: Some(crossing),
            parent_id: Some(parent_id),
        }
    }

    pub fn open(&mut self, g: Cost, h: Cost) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Redirect the node to a cheaper producing move. Only meaningful while
    /// the node is still open.
    pub(crate) fn set_parent(&mut self, parent_id: NodeId, crossing: Crossing) {
        self.parent_id = Some(parent_id);
        self.crossing = Some(crossing);
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn f(&self) -> Cost {
        self.f
    }

    pub fn g(&self) -> Cost {
        self.g
    }

    pub fn h(&self) -> Cost {
        self.h
    }

    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn crossing(&self) -> Option<&Crossing> {
        self.crossing.as_ref()
    }
}
