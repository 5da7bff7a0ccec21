//! Core model for rendering a node's network topology as a directed graph.
//!
//! The crate ingests the raw resource collections reported for a node — its
//! interfaces, the OVN bridge mappings configured on it, and the cluster-wide
//! network definitions — and derives a typed graph of nodes and directed
//! edges, a deterministic 2-D layout of that graph, and the reachability set
//! used to highlight the path through a selected node. Data fetching and
//! rendering live outside this crate; it only consumes already-materialized
//! collections and produces plain data for a presentation layer.

pub mod error;
pub mod layout;
pub mod resources;
pub mod selection;
pub mod topology_graph;
pub mod view;

/// Identifier of a node in the topology graph. Interface nodes use the
/// interface name; synthesized nodes use the `ovn-`, `cudn-` and
/// `attachment-` prefixed forms.
pub type NodeId = String;

pub use error::InputError;
pub use resources::TopologyInputs;
pub use selection::Selection;
pub use topology_graph::graph::{HighlightSet, TopologyGraph};
pub use view::{TopologyModel, TopologyView};
