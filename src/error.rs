use thiserror::Error;

/// Failures loading the input collections.
///
/// This is the only fallible surface of the crate. Graph construction itself
/// never fails: a malformed or missing relationship degrades to an omitted
/// node or edge.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to parse {collection} from YAML")]
    ParseYaml {
        collection: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse {collection} from JSON")]
    ParseJson {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
