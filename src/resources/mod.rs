//! Typed models of the resource collections the topology is derived from.
//!
//! The records arrive from external reporters as loosely-structured YAML or
//! JSON documents. Each kind gets an explicit tagged model here, with every
//! optional field modeled as an `Option` so that downstream code takes an
//! explicit "absent" branch instead of poking at untyped maps. Unknown
//! fields are ignored on purpose: real reports carry far more than the
//! topology needs.

pub mod bridge_mapping;
pub mod interface;
pub mod network_definition;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

pub use bridge_mapping::BridgeMapping;
pub use interface::{InterfaceRecord, InterfaceState, InterfaceType};
pub use network_definition::{Condition, NetworkDefinition};

/// The three resource collections the topology graph is a pure function of.
///
/// Collection order is meaningful: it defines the tie-break order of nodes
/// within a layout rank. `PartialEq` lets callers detect value-level change
/// and trigger a recompute exactly once per observed change.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct TopologyInputs {
    #[serde(default)]
    pub interfaces: Vec<InterfaceRecord>,

    #[serde(default)]
    pub bridge_mappings: Vec<BridgeMapping>,

    #[serde(default)]
    pub network_definitions: Vec<NetworkDefinition>,
}

impl TopologyInputs {
    /// Parses a full input bundle from a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, InputError> {
        serde_yaml::from_str(text).map_err(|source| InputError::ParseYaml {
            collection: "topology inputs",
            source,
        })
    }

    /// Parses a full input bundle from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(|source| InputError::ParseJson {
            collection: "topology inputs",
            source,
        })
    }

    /// Parses an interface collection on its own, as reported by the node
    /// network state.
    pub fn interfaces_from_yaml(text: &str) -> Result<Vec<InterfaceRecord>, InputError> {
        serde_yaml::from_str(text).map_err(|source| InputError::ParseYaml {
            collection: "interfaces",
            source,
        })
    }

    /// Parses a network definition collection from the JSON form the cluster
    /// API serves.
    pub fn network_definitions_from_json(
        text: &str,
    ) -> Result<Vec<NetworkDefinition>, InputError> {
        serde_json::from_str(text).map_err(|source| InputError::ParseJson {
            collection: "network definitions",
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[test]
    fn test_parse_input_bundle() {
        let inputs = TopologyInputs::from_yaml(indoc! {r#"
            interfaces:
              - name: eth0
                type: ethernet
                state: up
            bridge-mappings:
              - localnet: physnet1
                bridge: br0
            network-definitions:
              - metadata:
                  name: net-a
        "#})
        .unwrap();

        assert_eq!(inputs.interfaces.len(), 1);
        assert_eq!(inputs.bridge_mappings.len(), 1);
        assert_eq!(inputs.network_definitions.len(), 1);
        assert_eq!(inputs.network_definitions[0].name(), "net-a");
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let inputs = TopologyInputs::from_yaml("interfaces: []").unwrap();
        assert!(inputs.interfaces.is_empty());
        assert!(inputs.bridge_mappings.is_empty());
        assert!(inputs.network_definitions.is_empty());
    }

    #[test]
    fn test_parse_failure_names_the_collection() {
        let err = TopologyInputs::from_yaml("interfaces: 7").unwrap_err();
        assert!(err.to_string().contains("topology inputs"));
    }
}
