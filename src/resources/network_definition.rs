use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Condition type reported once a definition's network has been created on
/// the cluster.
const NETWORK_CREATED: &str = "NetworkCreated";

/// A cluster-wide user-defined network definition.
///
/// Only the metadata, the physical network binding, and the status
/// conditions are modeled; the rest of the object is ignored.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDefinition {
    #[serde(default)]
    pub metadata: Metadata,

    #[serde(default)]
    pub spec: NetworkDefinitionSpec,

    #[serde(default)]
    pub status: NetworkDefinitionStatus,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDefinitionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkSpec>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Declared topology of the network, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_net: Option<LocalNetSpec>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalNetSpec {
    /// Names a bridge mapping's localnet when the network is bound to a
    /// physical network on the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_network_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDefinitionStatus {
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// A single status condition of a network definition.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type", default)]
    pub condition_type: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub message: String,
}

impl NetworkDefinition {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// The physical network this definition is bound to, when any.
    pub fn physical_network_name(&self) -> Option<&str> {
        self.spec
            .network
            .as_ref()?
            .local_net
            .as_ref()?
            .physical_network_name
            .as_deref()
    }

    /// Declared topology of the network, for display.
    pub fn topology(&self) -> Option<&str> {
        self.spec.network.as_ref()?.topology.as_deref()
    }

    /// Namespaces currently attached to this network, sorted
    /// lexicographically.
    ///
    /// Derived from the `NetworkCreated`/`True` condition by extracting the
    /// bracket-delimited, comma-separated list from its message. Returns
    /// `None` when the condition is missing or its message carries no
    /// parseable list.
    pub fn created_namespaces(&self) -> Option<Vec<String>> {
        let condition = self
            .status
            .conditions
            .iter()
            .find(|c| c.condition_type == NETWORK_CREATED && c.status == "True")?;
        parse_namespace_list(&condition.message)
    }
}

lazy_static! {
    static ref NAMESPACE_LIST: Regex = Regex::new(r"\[([^\]]*)\]").unwrap();
}

fn parse_namespace_list(message: &str) -> Option<Vec<String>> {
    let captured = NAMESPACE_LIST.captures(message)?;
    let mut namespaces: Vec<String> = captured[1]
        .split(',')
        .map(|ns| ns.trim().to_string())
        .filter(|ns| !ns.is_empty())
        .collect();
    if namespaces.is_empty() {
        return None;
    }
    namespaces.sort();
    Some(namespaces)
}
