use serde::{Deserialize, Serialize};

/// OVN bridge mapping entry binding a logical "localnet" network name to a
/// physical bridge on the node.
///
/// The `bridge` field names an interface expected to exist in the node's
/// interface set, but nothing enforces that; a dangling name simply produces
/// a mapping node with no incoming edge.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BridgeMapping {
    pub localnet: String,
    pub bridge: String,
}
