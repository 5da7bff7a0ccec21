use std::collections::BTreeSet;

use petgraph::{
    csr::DefaultIx,
    graph::NodeIndex as PetgraphNodeIndex,
    visit::{Dfs, EdgeRef, IntoNodeReferences, Reversed, Walker},
    Directed, Direction, Graph,
};

use crate::NodeId;

use super::types::{edge_id, TopologyEdge, TopologyNode};

/// The type of the node index used in the TopologyGraph.
pub(crate) type NodeIndex = PetgraphNodeIndex<DefaultIx>;

/// The type of the graph used to store topology nodes and their
/// relationships.
pub(crate) type TopologyPetgraph = Graph<TopologyNode, TopologyEdge, Directed, DefaultIx>;

/// The directed graph of a node's network topology.
///
/// Owned output of the builder; the layout engines only annotate positions
/// on the side, never this structure.
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    pub(crate) inner: TopologyPetgraph,
}

/// Presentation-ready edge description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeView {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub emphasized: bool,
}

/// Combined upstream+downstream reachability result, keyed by node and edge
/// ids. Used as the visual emphasis set when a node is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    pub nodes: BTreeSet<NodeId>,
    pub edges: BTreeSet<String>,
}

impl HighlightSet {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }
}

impl TopologyGraph {
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Nodes in insertion order, which follows the input collection order.
    pub fn nodes(&self) -> impl Iterator<Item = &TopologyNode> {
        self.inner.node_weights()
    }

    /// Returns the node with the given id.
    pub fn node_by_id(&self, id: &str) -> Option<&TopologyNode> {
        self.inner.node_weights().find(|node| node.id == id)
    }

    /// Edges as presentation-ready views, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.inner.edge_references().map(|edge| EdgeView {
            id: edge_id(
                &self.inner[edge.source()].id,
                &self.inner[edge.target()].id,
            ),
            source: self.inner[edge.source()].id.clone(),
            target: self.inner[edge.target()].id.clone(),
            emphasized: edge.weight().emphasized,
        })
    }

    /// Whether a directed edge exists between the two named nodes.
    pub fn contains_edge_between(&self, source: &str, target: &str) -> bool {
        match (self.index_by_id(source), self.index_by_id(target)) {
            (Some(source_idx), Some(target_idx)) => {
                self.inner.find_edge(source_idx, target_idx).is_some()
            }
            _ => false,
        }
    }

    /// Nodes that point at the given node, i.e. its attached children:
    /// ports of a bridge, members of a bond.
    pub fn attached_to(&self, id: &str) -> Vec<&TopologyNode> {
        let Some(idx) = self.index_by_id(id) else {
            return Vec::new();
        };
        self.inner
            .neighbors_directed(idx, Direction::Incoming)
            .map(|neighbor_idx| &self.inner[neighbor_idx])
            .collect()
    }

    /// The full upstream+downstream reachability set from the given node.
    ///
    /// Two depth-first walks run from the start node: one following edges in
    /// their stored direction (downstream) and one over the reversed graph
    /// (upstream), each with its own visited set so accidental cycles from
    /// malformed input terminate. The result collects every visited node id
    /// plus the id of every edge traversed by either walk. An id that does
    /// not resolve yields an empty set, not an error; the selection may
    /// outlive the graph it was made against.
    pub fn reachable_from(&self, start: &str) -> HighlightSet {
        let Some(start_idx) = self.index_by_id(start) else {
            return HighlightSet::default();
        };

        let downstream: BTreeSet<NodeIndex> =
            Dfs::new(&self.inner, start_idx).iter(&self.inner).collect();

        let reversed = Reversed(&self.inner);
        let upstream: BTreeSet<NodeIndex> =
            Dfs::new(reversed, start_idx).iter(reversed).collect();

        let mut set = HighlightSet::default();
        for idx in downstream.iter().chain(upstream.iter()) {
            set.nodes.insert(self.inner[*idx].id.clone());
        }

        // A forward walk traverses exactly the edges leaving a
        // downstream-visited source; the reverse walk traverses exactly the
        // edges entering an upstream-visited target.
        for edge in self.inner.edge_references() {
            if downstream.contains(&edge.source()) || upstream.contains(&edge.target()) {
                set.edges.insert(edge_id(
                    &self.inner[edge.source()].id,
                    &self.inner[edge.target()].id,
                ));
            }
        }

        set
    }

    pub(crate) fn index_by_id(&self, id: &str) -> Option<NodeIndex> {
        self.inner
            .node_references()
            .find(|(_, node)| node.id == id)
            .map(|(idx, _)| idx)
    }
}
