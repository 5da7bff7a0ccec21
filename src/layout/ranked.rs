//! Automatic DAG layout.
//!
//! Ranks every node by its longest path from a source node (a node with no
//! incoming edges), then orders each rank with a predecessor-barycenter
//! sweep to keep edges from crossing where the graph allows it. Ranks grow
//! left to right; rows within a rank are centered against the tallest rank.
//! The placement computes box centers first and translates them to the
//! top-left anchor convention at the end.

use petgraph::Direction;

use crate::topology_graph::graph::{NodeIndex, TopologyGraph, TopologyPetgraph};

use super::{
    center_to_top_left, LayoutEngine, PositionMap, NODE_GAP, NODE_HEIGHT, NODE_WIDTH, RANK_GAP,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RankedLayout;

impl LayoutEngine for RankedLayout {
    fn layout(&self, graph: &TopologyGraph) -> PositionMap {
        let ranks = assign_ranks(&graph.inner);
        let columns = order_within_ranks(&graph.inner, &ranks);
        place(&graph.inner, &columns)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    New,
    OnStack,
    Done,
}

/// Longest-path-from-source rank per node, indexed by node index.
fn assign_ranks(graph: &TopologyPetgraph) -> Vec<usize> {
    let mut marks = vec![Mark::New; graph.node_count()];
    let mut ranks = vec![0usize; graph.node_count()];
    for idx in graph.node_indices() {
        rank_of(graph, idx, &mut marks, &mut ranks);
    }
    ranks
}

fn rank_of(
    graph: &TopologyPetgraph,
    idx: NodeIndex,
    marks: &mut [Mark],
    ranks: &mut [usize],
) -> usize {
    match marks[idx.index()] {
        Mark::Done => return ranks[idx.index()],
        // Back edge from a cycle in malformed input; break it here so the
        // walk terminates.
        Mark::OnStack => return 0,
        Mark::New => {}
    }
    marks[idx.index()] = Mark::OnStack;

    let rank = graph
        .neighbors_directed(idx, Direction::Incoming)
        .map(|pred| rank_of(graph, pred, marks, ranks) + 1)
        .max()
        .unwrap_or(0);

    marks[idx.index()] = Mark::Done;
    ranks[idx.index()] = rank;
    rank
}

/// Groups nodes into rank columns and runs one left-to-right barycenter
/// sweep. Input order seeds each column and breaks ties, which keeps the
/// result deterministic and rows stable across re-layouts of unchanged
/// input.
fn order_within_ranks(graph: &TopologyPetgraph, ranks: &[usize]) -> Vec<Vec<NodeIndex>> {
    let rank_count = ranks.iter().copied().max().map_or(0, |max| max + 1);
    let mut columns: Vec<Vec<NodeIndex>> = vec![Vec::new(); rank_count];
    for idx in graph.node_indices() {
        columns[ranks[idx.index()]].push(idx);
    }

    let mut rows = vec![0usize; graph.node_count()];
    for column in &columns {
        for (row, idx) in column.iter().enumerate() {
            rows[idx.index()] = row;
        }
    }

    for rank in 1..rank_count {
        let mut keyed: Vec<(f64, NodeIndex)> = columns[rank]
            .iter()
            .map(|&idx| {
                let pred_rows: Vec<usize> = graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .map(|pred| rows[pred.index()])
                    .collect();
                let key = if pred_rows.is_empty() {
                    // No predecessors to follow; hold the current row.
                    rows[idx.index()] as f64
                } else {
                    pred_rows.iter().sum::<usize>() as f64 / pred_rows.len() as f64
                };
                (key, idx)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

        columns[rank] = keyed.into_iter().map(|(_, idx)| idx).collect();
        for (row, idx) in columns[rank].iter().enumerate() {
            rows[idx.index()] = row;
        }
    }

    columns
}

fn place(graph: &TopologyPetgraph, columns: &[Vec<NodeIndex>]) -> PositionMap {
    let tallest = columns.iter().map(Vec::len).max().unwrap_or(0);
    let canvas_height = tallest as f64 * (NODE_HEIGHT + NODE_GAP);

    let mut positions = PositionMap::new();
    for (rank, column) in columns.iter().enumerate() {
        let column_height = column.len() as f64 * (NODE_HEIGHT + NODE_GAP);
        let top = (canvas_height - column_height) / 2.0;
        let center_x = rank as f64 * (NODE_WIDTH + RANK_GAP) + NODE_WIDTH / 2.0;

        for (row, &idx) in column.iter().enumerate() {
            let center_y = top + row as f64 * (NODE_HEIGHT + NODE_GAP) + NODE_HEIGHT / 2.0;
            positions.insert(graph[idx].id.clone(), center_to_top_left(center_x, center_y));
        }
    }
    positions
}

#[cfg(test)]
mod tests {
    use crate::{
        resources::{InterfaceRecord, InterfaceType, TopologyInputs},
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

    fn chain_graph() -> TopologyGraph {
        let inputs = TopologyInputs {
            interfaces: vec![
                iface("eth0", InterfaceType::Ethernet, Some("br0")),
                iface("br0", InterfaceType::OvsBridge, None),
            ],
            bridge_mappings: vec![crate::resources::BridgeMapping {
                localnet: "physnet1".into(),
                bridge: "br0".into(),
            }],
            ..Default::default()
        };
        TopologyGraphBuilder::build(&inputs)
    }

    #[test]
    fn test_ranks_grow_along_the_chain() {
        let graph = chain_graph();
        let positions = RankedLayout.layout(&graph);

        let eth0 = positions["eth0"];
        let br0 = positions["br0"];
        let ovn = positions["ovn-physnet1"];
        assert!(eth0.x < br0.x, "child left of its container");
        assert!(br0.x < ovn.x, "bridge left of its mapping");
    }

    #[test]
    fn test_fan_in_members_share_a_rank() {
        let inputs = TopologyInputs {
            interfaces: vec![
                iface("eth0", InterfaceType::Ethernet, Some("bond0")),
                iface("eth1", InterfaceType::Ethernet, Some("bond0")),
                iface("bond0", InterfaceType::Bond, None),
            ],
            ..Default::default()
        };
        let graph = TopologyGraphBuilder::build(&inputs);
        let positions = RankedLayout.layout(&graph);

        assert_eq!(positions["eth0"].x, positions["eth1"].x);
        assert!(positions["eth0"].y < positions["eth1"].y, "input order top to bottom");
        assert!(positions["bond0"].x > positions["eth0"].x);
    }

    #[test]
    fn test_every_node_receives_a_position() {
        let mut inputs = TopologyInputs {
            interfaces: vec![
                iface("eth0", InterfaceType::Ethernet, Some("br0")),
                iface("br0", InterfaceType::OvsBridge, None),
                // No incident edges at all.
                iface("lo-ish0", InterfaceType::Other, None),
            ],
            ..Default::default()
        };
        inputs.bridge_mappings = vec![crate::resources::BridgeMapping {
            localnet: "physnet1".into(),
            bridge: "br-gone".into(),
        }];
        let graph = TopologyGraphBuilder::build(&inputs);
        let positions = RankedLayout.layout(&graph);

        assert_eq!(positions.len(), graph.node_count());
        // Edgeless nodes sit in the source rank.
        assert_eq!(positions["lo-ish0"].x, positions["eth0"].x);
        assert_eq!(positions["ovn-physnet1"].x, positions["eth0"].x);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let graph = chain_graph();
        assert_eq!(RankedLayout.layout(&graph), RankedLayout.layout(&graph));
    }

    #[test]
    fn test_positions_are_top_left_anchored() {
        let graph = chain_graph();
        let positions = RankedLayout.layout(&graph);
        // The first column's center sits at half a node width; its top-left
        // anchor is therefore at x = 0.
        assert_eq!(positions["eth0"].x, 0.0);
    }

    #[test]
    fn test_cycle_in_input_still_lays_out() {
        let inputs = TopologyInputs {
            interfaces: vec![
                iface("a0", InterfaceType::Ethernet, Some("b0")),
                iface("b0", InterfaceType::Ethernet, Some("a0")),
            ],
            ..Default::default()
        };
        let graph = TopologyGraphBuilder::build(&inputs);
        let positions = RankedLayout.layout(&graph);
        assert_eq!(positions.len(), 2);
    }
}
