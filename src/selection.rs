//! User selection and path-highlight state.
//!
//! A small two-state machine: either nothing is selected, or exactly one
//! node is, together with the reachability set computed for it. The set and
//! the highlight-active flag are distinct on purpose: an active selection
//! with an empty set dims everything, which is visually different from no
//! selection at all.

use crate::{
    topology_graph::graph::{HighlightSet, TopologyGraph},
    NodeId,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        node_id: NodeId,
        highlight: HighlightSet,
    },
}

impl Selection {
    /// Selects a node and computes its highlight set from the given graph.
    ///
    /// An id that does not resolve — for instance one that survived a
    /// recompute which dropped the node — yields an active selection with an
    /// empty set rather than an error.
    pub fn select(&mut self, graph: &TopologyGraph, node_id: &str) {
        *self = Selection::Selected {
            node_id: node_id.to_string(),
            highlight: graph.reachable_from(node_id),
        };
    }

    /// Returns to the idle state. Safe from either state, at any time.
    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    /// Whether highlight mode is active.
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }

    /// The currently selected node id, when any.
    pub fn selected_node(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::Selected { node_id, .. } => Some(node_id),
        }
    }

    /// The current highlight set, when a selection is active.
    pub fn highlight(&self) -> Option<&HighlightSet> {
        match self {
            Selection::Idle => None,
            Selection::Selected { highlight, .. } => Some(highlight),
        }
    }

    /// Recomputes the highlight set against a rebuilt graph, keeping the
    /// selected id. Called after the inputs change while a selection is
    /// held.
    pub(crate) fn refresh(&mut self, graph: &TopologyGraph) {
        if let Selection::Selected { node_id, highlight } = self {
            *highlight = graph.reachable_from(node_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        resources::{InterfaceRecord, InterfaceType, TopologyInputs},
        topology_graph::builder::TopologyGraphBuilder,
    };

    use super::*;

    fn graph_with_eth0() -> TopologyGraph {
        let inputs = TopologyInputs {
            interfaces: vec![InterfaceRecord {
                name: "eth0".into(),
                iface_type: InterfaceType::Ethernet,
                ..Default::default()
            }],
            ..Default::default()
        };
        TopologyGraphBuilder::build(&inputs)
    }

    #[test]
    fn test_select_then_clear() {
        let graph = graph_with_eth0();
        let mut selection = Selection::default();
        assert!(!selection.is_active());

        selection.select(&graph, "eth0");
        assert!(selection.is_active());
        assert_eq!(selection.selected_node(), Some("eth0"));
        assert!(selection.highlight().unwrap().contains_node("eth0"));

        selection.clear();
        assert_eq!(selection, Selection::Idle);
        assert_eq!(selection.highlight(), None);
    }

    #[test]
    fn test_selecting_a_missing_node_stays_active_with_empty_set() {
        let graph = graph_with_eth0();
        let mut selection = Selection::default();
        selection.select(&graph, "gone0");

        assert!(selection.is_active());
        assert!(selection.highlight().unwrap().is_empty());
    }

    #[test]
    fn test_reselect_replaces_the_previous_selection() {
        let graph = graph_with_eth0();
        let mut selection = Selection::default();
        selection.select(&graph, "gone0");
        selection.select(&graph, "eth0");
        assert_eq!(selection.selected_node(), Some("eth0"));
        assert!(!selection.highlight().unwrap().is_empty());
    }
}
