//! # Topology graph builder
//!
//! Builds the topology graph out of the three input collections in four
//! append-only passes:
//!
//! 1. **Interfaces** — one node per interface record, with its classified
//!    role. Once all interface nodes exist, a `child → controller` edge is
//!    added for every enslaved interface, and a `base → derived` edge for
//!    every VLAN/MAC-VLAN interface. The two directions are deliberately
//!    asymmetric; the upstream/downstream split of the highlight traversal
//!    relies on it.
//! 2. **Bridge mappings** — an `ovn-<localnet>` node per mapping, plus a
//!    `bridge → mapping` edge when the bridge interface exists.
//! 3. **Network definitions** — a `cudn-<name>` node per definition, plus a
//!    `mapping → definition` edge when its physical network matches a
//!    mapping's localnet.
//! 4. **Attachments** — an `attachment-<cudn-name>` node per definition
//!    whose `NetworkCreated` condition carries a namespace list, plus an
//!    emphasized `definition → attachment` edge.
//!
//! Every lookup is defensive: a missing optional field or a dangling
//! reference means the corresponding edge or node is simply not created.
//! There are no error paths; the builder always produces a graph.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    resources::{BridgeMapping, InterfaceRecord, NetworkDefinition, TopologyInputs},
    NodeId,
};

use super::{
    classify::classify,
    graph::{NodeIndex, TopologyGraph, TopologyPetgraph},
    types::{cudn_node_id, ovn_node_id, TopologyEdge, TopologyNode},
};

#[derive(Debug, Clone, Default)]
pub struct TopologyGraphBuilder {
    graph: TopologyPetgraph,
    index_by_id: BTreeMap<NodeId, NodeIndex>,
}

impl TopologyGraphBuilder {
    /// Builds the topology graph from the three input collections.
    ///
    /// The output is a pure function of the inputs: rebuilding from equal
    /// collections yields an equal graph.
    pub fn build(inputs: &TopologyInputs) -> TopologyGraph {
        debug!(
            "Building topology graph from {} interfaces, {} bridge mappings, {} network definitions",
            inputs.interfaces.len(),
            inputs.bridge_mappings.len(),
            inputs.network_definitions.len()
        );

        let mut builder = Self::default();
        builder.add_interfaces(&inputs.interfaces);
        builder.add_bridge_mappings(&inputs.bridge_mappings);
        builder.add_network_definitions(&inputs.network_definitions);
        builder.add_attachments(&inputs.network_definitions);

        debug!(
            "Topology graph built with {} nodes and {} edges",
            builder.graph.node_count(),
            builder.graph.edge_count()
        );
        TopologyGraph {
            inner: builder.graph,
        }
    }

    /// Interface pass. All nodes are inserted before any edge so that an
    /// interface may name a controller that appears later in the input
    /// order.
    fn add_interfaces(&mut self, interfaces: &[InterfaceRecord]) {
        for iface in interfaces {
            let role = classify(iface, interfaces);
            self.insert_node(TopologyNode::new_interface(iface, role));
        }

        for iface in interfaces {
            // Child points at its container; the upstream traversal follows
            // this direction toward the bond/bridge root.
            if let Some(controller) = iface.controller() {
                self.insert_edge(&iface.name, controller, TopologyEdge::default());
            }

            // The base interface points at its derived interface, the
            // reverse of the controller direction.
            if let Some(base) = iface.base_iface() {
                self.insert_edge(base, &iface.name, TopologyEdge::default());
            }
        }
    }

    /// Bridge-mapping pass. The mapping node is created even when its
    /// bridge reference dangles; it then simply has no incoming edge.
    fn add_bridge_mappings(&mut self, mappings: &[BridgeMapping]) {
        for mapping in mappings {
            let node = TopologyNode::new_ovn_mapping(mapping);
            let ovn_id = node.id.clone();
            self.insert_node(node);
            self.insert_edge(&mapping.bridge, &ovn_id, TopologyEdge::default());
        }
    }

    /// Network-definition pass. The edge direction runs from the mapping
    /// toward the definition, the reverse of the bridge→mapping edge.
    fn add_network_definitions(&mut self, definitions: &[NetworkDefinition]) {
        for definition in definitions {
            let node = TopologyNode::new_cudn(definition);
            let cudn_id = node.id.clone();
            self.insert_node(node);
            if let Some(physnet) = definition.physical_network_name() {
                self.insert_edge(&ovn_node_id(physnet), &cudn_id, TopologyEdge::default());
            }
        }
    }

    /// Attachment pass. A definition without a parseable `NetworkCreated`
    /// namespace list gets no attachment node at all.
    fn add_attachments(&mut self, definitions: &[NetworkDefinition]) {
        for definition in definitions {
            let Some(namespaces) = definition.created_namespaces() else {
                continue;
            };
            let node = TopologyNode::new_attachment(definition.name(), namespaces);
            let attachment_id = node.id.clone();
            self.insert_node(node);
            self.insert_edge(
                &cudn_node_id(definition.name()),
                &attachment_id,
                TopologyEdge { emphasized: true },
            );
        }
    }

    /// Inserts a node, replacing any earlier node with the same id in
    /// place. Last write wins; edges already attached to the id keep
    /// pointing at it.
    fn insert_node(&mut self, node: TopologyNode) -> NodeIndex {
        trace!("Adding node: {}", node.describe());
        match self.index_by_id.get(&node.id) {
            Some(&idx) => {
                self.graph[idx] = node;
                idx
            }
            None => {
                let id = node.id.clone();
                let idx = self.graph.add_node(node);
                self.index_by_id.insert(id, idx);
                idx
            }
        }
    }

    /// Inserts a directed edge between two named nodes. Skipped entirely
    /// when either endpoint is missing, and collapsed when an edge with the
    /// same endpoints already exists.
    fn insert_edge(&mut self, source_id: &str, target_id: &str, edge: TopologyEdge) {
        let (Some(&source), Some(&target)) = (
            self.index_by_id.get(source_id),
            self.index_by_id.get(target_id),
        ) else {
            trace!("Skipping edge {source_id} → {target_id}: endpoint missing");
            return;
        };
        if self.graph.find_edge(source, target).is_none() {
            self.graph.add_edge(source, target, edge);
        }
    }
}
