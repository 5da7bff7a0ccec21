//! Recompute-on-input-change orchestration.
//!
//! The graph and its positions are pure functions of the inputs; this
//! module owns the "when to recompute" decision. [`TopologyView`] holds the
//! last-seen inputs, compares by value, and on change swaps in a fully
//! rebuilt [`TopologyModel`] in a single assignment, so a consumer never
//! observes an old graph paired with new positions. Selection state lives
//! alongside and survives recomputes.

use log::debug;

use crate::{
    layout::{LayoutEngine, Position, PositionMap},
    resources::TopologyInputs,
    selection::Selection,
    topology_graph::{
        builder::TopologyGraphBuilder,
        graph::{EdgeView, TopologyGraph},
        types::TopologyNode,
    },
};

/// One coherent snapshot of the derived state: the graph and the positions
/// computed for exactly that graph.
#[derive(Debug, Clone, Default)]
pub struct TopologyModel {
    pub graph: TopologyGraph,
    pub positions: PositionMap,
}

/// Presentation-ready node description: the node plus its position.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView<'a> {
    pub node: &'a TopologyNode,
    pub position: Position,
}

impl TopologyModel {
    /// Builds the graph and lays it out, as one unit.
    pub fn compute(inputs: &TopologyInputs, engine: &dyn LayoutEngine) -> Self {
        let graph = TopologyGraphBuilder::build(inputs);
        let positions = engine.layout(&graph);
        Self { graph, positions }
    }

    /// Nodes with their positions, in input order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> {
        self.graph.nodes().map(|node| NodeView {
            node,
            position: self.positions.get(&node.id).copied().unwrap_or_default(),
        })
    }

    /// Edges in presentation form.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView> + '_ {
        self.graph.edges()
    }
}

/// Owns the inputs, the derived model, and the selection.
///
/// The core stays synchronous and single-threaded; whoever watches the
/// resource collections calls [`TopologyView::update`] and re-renders from
/// the model afterwards.
pub struct TopologyView {
    inputs: TopologyInputs,
    model: TopologyModel,
    selection: Selection,
    engine: Box<dyn LayoutEngine>,
}

impl TopologyView {
    pub fn new(engine: Box<dyn LayoutEngine>) -> Self {
        let inputs = TopologyInputs::default();
        let model = TopologyModel::compute(&inputs, engine.as_ref());
        Self {
            inputs,
            model,
            selection: Selection::Idle,
            engine,
        }
    }

    /// Replaces the inputs. The model is rebuilt only when the new inputs
    /// differ by value from the last-seen ones, so one observed change
    /// triggers exactly one recompute. Returns whether a recompute happened.
    pub fn update(&mut self, inputs: TopologyInputs) -> bool {
        if inputs == self.inputs {
            return false;
        }
        debug!("Topology inputs changed, recomputing graph and layout");

        let model = TopologyModel::compute(&inputs, self.engine.as_ref());
        self.inputs = inputs;
        self.model = model;

        // The selected node may have vanished with the rebuild; refresh
        // degrades that to an active selection with an empty set.
        self.selection.refresh(&self.model.graph);
        true
    }

    pub fn model(&self) -> &TopologyModel {
        &self.model
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn select(&mut self, node_id: &str) {
        self.selection.select(&self.model.graph, node_id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
