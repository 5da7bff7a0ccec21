//! Manual layered layout.
//!
//! Places nodes into fixed ordered layers by role — physical interfaces
//! first, attachments last — ignoring the edge structure entirely. Nodes
//! stack top to bottom within a layer in input order with uniform spacing,
//! and the canvas height follows the largest layer's node count, with every
//! layer vertically centered against it.

use crate::topology_graph::{
    graph::TopologyGraph,
    types::{NodeRole, TopologyNode},
};

use super::{LayoutEngine, Position, PositionMap, NODE_GAP, NODE_HEIGHT, NODE_WIDTH, RANK_GAP};

#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredLayout;

const LAYER_COUNT: usize = 7;

/// Fixed layer of a role. Derived interfaces and unrecognized types share
/// the logical-port layer.
fn layer_of(role: NodeRole) -> usize {
    match role {
        NodeRole::Ethernet => 0,
        NodeRole::Bond => 1,
        NodeRole::Bridge => 2,
        NodeRole::Logical | NodeRole::Vlan | NodeRole::MacVlan | NodeRole::Other => 3,
        NodeRole::OvnMapping => 4,
        NodeRole::Cudn => 5,
        NodeRole::Attachment => 6,
    }
}

impl LayoutEngine for LayeredLayout {
    fn layout(&self, graph: &TopologyGraph) -> PositionMap {
        let mut layers: Vec<Vec<&TopologyNode>> = vec![Vec::new(); LAYER_COUNT];
        for node in graph.nodes() {
            layers[layer_of(node.role)].push(node);
        }

        let tallest = layers.iter().map(Vec::len).max().unwrap_or(0);
        let canvas_height = tallest as f64 * (NODE_HEIGHT + NODE_GAP);

        let mut positions = PositionMap::new();
        for (layer, nodes) in layers.iter().enumerate() {
            let layer_height = nodes.len() as f64 * (NODE_HEIGHT + NODE_GAP);
            let top = (canvas_height - layer_height) / 2.0;
            let x = layer as f64 * (NODE_WIDTH + RANK_GAP);

            for (row, node) in nodes.iter().enumerate() {
                positions.insert(
                    node.id.clone(),
                    Position {
                        x,
                        y: top + row as f64 * (NODE_HEIGHT + NODE_GAP),
                    },
                );
            }
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        resources::{BridgeMapping, InterfaceRecord, InterfaceType, TopologyInputs},
        topology_graph::builder::TopologyGraphBuilder,
    };

    use super::*;

    fn iface(name: &str, iface_type: InterfaceType, controller: Option<&str>) -> InterfaceRecord {
        InterfaceRecord {
            name: name.into(),
            iface_type,
            controller: controller.map(Into::into),
            ..Default::default()
        }
    }

    fn sample_graph() -> TopologyGraph {
        let inputs = TopologyInputs {
            interfaces: vec![
                iface("eth0", InterfaceType::Ethernet, Some("bond0")),
                iface("eth1", InterfaceType::Ethernet, Some("bond0")),
                iface("bond0", InterfaceType::Bond, Some("br0")),
                iface("br0", InterfaceType::OvsBridge, None),
                iface("ovs0", InterfaceType::OvsInterface, None),
            ],
            bridge_mappings: vec![BridgeMapping {
                localnet: "physnet1".into(),
                bridge: "br0".into(),
            }],
            ..Default::default()
        };
        TopologyGraphBuilder::build(&inputs)
    }

    #[test]
    fn test_roles_land_in_ordered_columns() {
        let graph = sample_graph();
        let positions = LayeredLayout.layout(&graph);

        assert!(positions["eth0"].x < positions["bond0"].x);
        assert!(positions["bond0"].x < positions["br0"].x);
        assert!(positions["br0"].x < positions["ovs0"].x);
        assert!(positions["ovs0"].x < positions["ovn-physnet1"].x);
    }

    #[test]
    fn test_edge_direction_does_not_move_a_node_between_layers() {
        // bond0 is enslaved to br0, but ranking is by role, not by edges:
        // the bond stays in the bond layer.
        let graph = sample_graph();
        let positions = LayeredLayout.layout(&graph);
        assert_eq!(positions["bond0"].x, NODE_WIDTH + RANK_GAP);
    }

    #[test]
    fn test_layer_stacks_in_input_order() {
        let graph = sample_graph();
        let positions = LayeredLayout.layout(&graph);
        assert_eq!(positions["eth0"].x, positions["eth1"].x);
        assert!(positions["eth0"].y < positions["eth1"].y);
    }

    #[test]
    fn test_smaller_layers_are_centered() {
        let graph = sample_graph();
        let positions = LayeredLayout.layout(&graph);
        // The ethernet layer is the tallest (two nodes); single-node layers
        // sit centered between its rows.
        assert!(positions["bond0"].y > positions["eth0"].y);
        assert!(positions["bond0"].y < positions["eth1"].y);
    }

    #[test]
    fn test_every_node_receives_a_position() {
        let graph = sample_graph();
        let positions = LayeredLayout.layout(&graph);
        assert_eq!(positions.len(), graph.node_count());
    }

    #[test]
    fn test_layout_is_idempotent() {
        let graph = sample_graph();
        assert_eq!(LayeredLayout.layout(&graph), LayeredLayout.layout(&graph));
    }

    #[test]
    fn test_empty_graph_yields_empty_map() {
        let graph = TopologyGraphBuilder::build(&TopologyInputs::default());
        assert!(LayeredLayout.layout(&graph).is_empty());
    }

    #[test]
    fn test_every_role_has_a_layer() {
        use strum::IntoEnumIterator;

        for role in NodeRole::iter() {
            assert!(layer_of(role) < LAYER_COUNT, "no layer for role {role}");
        }
    }

    #[test]
    fn test_single_interface_sits_at_the_origin() {
        let inputs = TopologyInputs {
            interfaces: vec![iface("eth0", InterfaceType::Ethernet, None)],
            ..Default::default()
        };
        let graph = TopologyGraphBuilder::build(&inputs);
        assert_eq!(
            LayeredLayout.layout(&graph),
            maplit::btreemap! {
                "eth0".to_string() => Position { x: 0.0, y: 0.0 },
            }
        );
    }
}
