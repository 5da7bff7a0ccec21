//! Display implementations for the types in the topology_graph module.

use std::fmt::Display;

use super::types::{NodeOrigin, NodeRole};

impl Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ethernet => write!(f, "ethernet"),
            Self::Bond => write!(f, "bond"),
            Self::Bridge => write!(f, "bridge"),
            Self::Logical => write!(f, "logical"),
            Self::Vlan => write!(f, "vlan"),
            Self::MacVlan => write!(f, "mac-vlan"),
            Self::OvnMapping => write!(f, "ovn-mapping"),
            Self::Cudn => write!(f, "cudn"),
            Self::Attachment => write!(f, "attachment"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl Display for NodeOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interface(iface) => write!(f, "interface '{}'", iface.name),
            Self::BridgeMapping(mapping) => write!(f, "bridge mapping '{}'", mapping.localnet),
            Self::NetworkDefinition(definition) => {
                write!(f, "network definition '{}'", definition.name())
            }
            Self::Namespaces(namespaces) => write!(f, "{} namespace(s)", namespaces.len()),
        }
    }
}
