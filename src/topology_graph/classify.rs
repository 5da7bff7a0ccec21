//! Role classification of interface records.

use crate::resources::{InterfaceRecord, InterfaceType};

use super::types::NodeRole;

/// Decides the topological role of an interface.
///
/// The full interface collection is needed because an ovs-interface only
/// counts as a bridge when some other interface attaches to it. The decision
/// is pure and deterministic; unrecognized types fall through to
/// [`NodeRole::Other`] instead of failing.
pub fn classify(iface: &InterfaceRecord, all_interfaces: &[InterfaceRecord]) -> NodeRole {
    match iface.iface_type {
        InterfaceType::LinuxBridge | InterfaceType::OvsBridge => NodeRole::Bridge,

        // An ovs-interface acts as a bridge when other interfaces attach to
        // it, unless it is a patch port.
        InterfaceType::OvsInterface => {
            if has_children(iface, all_interfaces) && !iface.is_patch() {
                NodeRole::Bridge
            } else {
                NodeRole::Logical
            }
        }

        InterfaceType::Ethernet => NodeRole::Ethernet,
        InterfaceType::Bond => NodeRole::Bond,
        InterfaceType::Vlan => NodeRole::Vlan,
        InterfaceType::MacVlan => NodeRole::MacVlan,
        InterfaceType::Other => NodeRole::Other,
    }
}

fn has_children(iface: &InterfaceRecord, all_interfaces: &[InterfaceRecord]) -> bool {
    all_interfaces
        .iter()
        .any(|other| other.name != iface.name && other.controller() == Some(iface.name.as_str()))
}
