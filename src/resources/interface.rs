use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Type tag of an interface, as reported by the node network state.
///
/// Reporters are free to emit tags this crate does not know about; those
/// deserialize to [`InterfaceType::Other`] instead of failing.
#[derive(Serialize, Deserialize, Display, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InterfaceType {
    Ethernet,
    Bond,
    LinuxBridge,
    OvsBridge,
    OvsInterface,
    Vlan,
    MacVlan,
    #[default]
    #[serde(other)]
    Other,
}

/// Administrative state of an interface.
#[derive(Serialize, Deserialize, Display, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InterfaceState {
    Up,
    Down,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A single entry of a node's interface report.
///
/// Names are unique within one node's interface set. Only the fields the
/// topology needs are modeled; everything else in the report is ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceRecord {
    pub name: String,

    #[serde(rename = "type", default)]
    pub iface_type: InterfaceType,

    #[serde(default)]
    pub state: InterfaceState,

    /// Name of the containing interface, when this one is enslaved to a bond
    /// or attached to a bridge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,

    /// Older reporters emit `master` instead of `controller`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<String>,

    /// Present when this ovs-interface is a patch port. Only the presence of
    /// the field matters to classification; the payload is not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<PatchConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan: Option<VlanConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_vlan: Option<MacVlanConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4Config>,
}

/// Patch port configuration of an ovs-interface.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct PatchConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer: Option<String>,
}

/// VLAN configuration of a derived interface.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct VlanConfig {
    /// The interface this VLAN is derived from.
    pub base_iface: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u16>,
}

/// MAC-VLAN configuration of a derived interface.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct MacVlanConfig {
    /// The interface this MAC-VLAN is derived from.
    pub base_iface: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// IPv4 addressing of an interface.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Ipv4Config {
    #[serde(default)]
    pub address: Vec<AddressEntry>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct AddressEntry {
    pub ip: String,
    pub prefix_length: u8,
}

impl InterfaceRecord {
    /// Name of the containing interface, regardless of which field the
    /// reporter used. Empty strings count as absent.
    pub fn controller(&self) -> Option<&str> {
        self.controller
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.master.as_deref().filter(|name| !name.is_empty()))
    }

    /// The interface this one is derived from, for VLAN and MAC-VLAN types.
    pub fn base_iface(&self) -> Option<&str> {
        self.vlan
            .as_ref()
            .map(|vlan| vlan.base_iface.as_str())
            .or_else(|| self.mac_vlan.as_ref().map(|mv| mv.base_iface.as_str()))
    }

    /// Whether this ovs-interface is a patch port.
    pub fn is_patch(&self) -> bool {
        self.patch.is_some()
    }
}
