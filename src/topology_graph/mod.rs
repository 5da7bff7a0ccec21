//! # Topology Graph & Builder
//!
//! The purpose of this module is to build the directed graph of a node's
//! network topology out of the raw resource collections: interfaces, OVN
//! bridge mappings, and cluster network definitions.
//!
//! In broad terms, this module is used as follows:
//!
//! 1. Materialize a [`crate::resources::TopologyInputs`] bundle.
//! 2. Call [`builder::TopologyGraphBuilder::build`] with it.
//! 3. The returned [`graph::TopologyGraph`] carries the typed nodes and
//!    directed edges, and answers reachability queries for highlighting.
//!
//! Construction is infallible: a malformed or missing relationship degrades
//! to an omitted node or edge, never to an error. The graph is a pure
//! function of the inputs and is rebuilt wholesale on any change to them.
//!
//! ## Layout
//!
//! ```text
//! src/topology_graph
//! ├── builder.rs --------> # TopologyGraphBuilder & the four construction passes.
//! ├── classify.rs -------> # Role classification of interface records.
//! ├── display.rs --------> # fmt::Display implementations.
//! ├── graph.rs ----------> # TopologyGraph & reachability queries.
//! ├── mod.rs ------------> # This file.
//! ├── types.rs ----------> # Node, edge, role and origin types.
//! └── scenario_tests.rs -> # Whole-pipeline scenario tests.
//! ```

pub mod builder;
pub mod classify;
pub mod display;
pub mod graph;
pub mod types;
