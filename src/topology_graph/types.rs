//! Basic types for the topology graph.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use crate::{
    resources::{BridgeMapping, InterfaceRecord, NetworkDefinition},
    NodeId,
};

/// Topological role of a node in the rendered graph.
///
/// Interface nodes carry the role their record classifies to; synthesized
/// nodes carry one of the `OvnMapping`, `Cudn` or `Attachment` roles.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum NodeRole {
    /// A physical interface.
    Ethernet,

    /// An aggregation of physical interfaces presented as one.
    Bond,

    /// A switching point, Linux or OVS, other interfaces attach to.
    Bridge,

    /// An OVS port with no attached children, or a patch port.
    Logical,

    /// An interface derived from a base interface by VLAN tagging.
    Vlan,

    /// An interface derived from a base interface by MAC address.
    MacVlan,

    /// An OVN localnet-to-bridge binding.
    OvnMapping,

    /// A cluster-wide network definition.
    Cudn,

    /// The namespaces attached to a network definition.
    Attachment,

    /// An interface of an unrecognized type.
    Other,
}

/// Source record a node was derived from. Retained for inspection by the
/// presentation layer, never mutated by the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeOrigin {
    Interface(InterfaceRecord),
    BridgeMapping(BridgeMapping),
    NetworkDefinition(NetworkDefinition),

    /// The sorted namespace list backing an attachment node.
    Namespaces(Vec<String>),
}

/// Node of the topology graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyNode {
    /// Globally unique id: the interface name, or a synthesized
    /// `ovn-<localnet>`, `cudn-<name>` or `attachment-<cudn-name>` id.
    pub id: NodeId,

    pub role: NodeRole,

    /// Display string for the node box.
    pub label: String,

    pub origin: NodeOrigin,
}

/// Edge weight of the topology graph. The edge identity is derived from its
/// endpoint ids, see [`edge_id`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopologyEdge {
    /// Rendered with the animated emphasis treatment. Set only on the
    /// definition→attachment edges.
    pub emphasized: bool,
}

/// Number of namespace names spelled out in an attachment label before the
/// overflow indicator takes over.
const ATTACHMENT_LABEL_MAX: usize = 3;

impl TopologyNode {
    pub(super) fn new_interface(iface: &InterfaceRecord, role: NodeRole) -> Self {
        Self {
            id: iface.name.clone(),
            role,
            label: iface.name.clone(),
            origin: NodeOrigin::Interface(iface.clone()),
        }
    }

    pub(super) fn new_ovn_mapping(mapping: &BridgeMapping) -> Self {
        Self {
            id: ovn_node_id(&mapping.localnet),
            role: NodeRole::OvnMapping,
            label: format!("OVN: {}", mapping.localnet),
            origin: NodeOrigin::BridgeMapping(mapping.clone()),
        }
    }

    pub(super) fn new_cudn(definition: &NetworkDefinition) -> Self {
        Self {
            id: cudn_node_id(definition.name()),
            role: NodeRole::Cudn,
            label: definition.name().to_string(),
            origin: NodeOrigin::NetworkDefinition(definition.clone()),
        }
    }

    /// Creates an attachment node for a definition. `namespaces` must
    /// already be sorted.
    pub(super) fn new_attachment(cudn_name: &str, namespaces: Vec<String>) -> Self {
        Self {
            id: attachment_node_id(cudn_name),
            role: NodeRole::Attachment,
            label: attachment_label(&namespaces),
            origin: NodeOrigin::Namespaces(namespaces),
        }
    }

    /// Returns a user friendly description of the node suitable for logging.
    ///
    /// Output examples:
    ///
    /// - `bridge 'br0'`
    /// - `ovn-mapping 'ovn-physnet1'`
    pub fn describe(&self) -> String {
        format!("{} '{}'", self.role, self.id)
    }
}

/// Id of the node synthesized for a bridge mapping.
pub fn ovn_node_id(localnet: &str) -> NodeId {
    format!("ovn-{localnet}")
}

/// Id of the node synthesized for a network definition.
pub fn cudn_node_id(name: &str) -> NodeId {
    format!("cudn-{name}")
}

/// Id of the node synthesized for a definition's attachment set.
pub fn attachment_node_id(cudn_name: &str) -> NodeId {
    format!("attachment-{cudn_name}")
}

/// Id of the edge between two nodes. Two edges with the same endpoints share
/// the same id and collapse to one.
pub fn edge_id(source: &str, target: &str) -> String {
    format!("{source}-{target}")
}

fn attachment_label(namespaces: &[String]) -> String {
    let shown = namespaces
        .iter()
        .take(ATTACHMENT_LABEL_MAX)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if namespaces.len() > ATTACHMENT_LABEL_MAX {
        format!("{shown}, …")
    } else {
        shown
    }
}
