//! YAML rendering using serde-saphyr.
//!
//! Documents are written back through their structural model, so the output is the
//! canonical form of the document rather than a copy of the source text: comments are
//! dropped, quoting and flow styles are normalized, key order is kept.
//!
//! # Example
//!
//! ```rust
//! use kubesplit_core::{Node, ToYaml, parse_documents};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let documents = parse_documents(b"kind: Namespace\nmetadata: {name: demo}\n")?;
//! let yaml = documents.iter().map(Node::to_yaml).collect::<Result<Vec<_>, _>>()?;
//!
//! assert!(yaml.iter().all(|text| text.contains("kind: Namespace")));
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

/// Error type for YAML serialization operations.
pub type YamlError = serde_saphyr::ser_error::Error;

/// Extension trait for serializing types to YAML.
///
/// This trait is implemented for all types that implement [`Serialize`],
/// [`Node`](crate::Node) included.
pub trait ToYaml: Serialize + Sized {
    /// Serializes this value to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a [`YamlError`] if serialization fails.
    fn to_yaml(&self) -> Result<String, YamlError> {
        serde_saphyr::to_string(self)
    }
}

impl<T: Serialize + Sized> ToYaml for T {}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::{Mapping, Node};

    #[test]
    fn should_serialize_resource_to_yaml() {
        let metadata: Mapping = [("name", "web"), ("namespace", "default")]
            .into_iter()
            .collect();
        let mut root = Mapping::new();
        root.insert("apiVersion".into(), "apps/v1".into());
        root.insert("kind".into(), "Deployment".into());
        root.insert("metadata".into(), metadata.into());
        let node = Node::Mapping(root);

        let yaml = node.to_yaml().expect("should serialize to YAML");

        assert_snapshot!(yaml, @r"
        apiVersion: apps/v1
        kind: Deployment
        metadata:
          name: web
          namespace: default
        ");
    }

    #[test]
    fn should_serialize_back_to_the_same_node() {
        let source = "kind: ConfigMap\ndata:\n  port: '8080'\n  enabled: 'true'\n  items: [1, 2]\n";
        let node: Node = serde_saphyr::from_str(source).expect("valid YAML");

        let yaml = node.to_yaml().expect("should serialize to YAML");
        let reparsed: Node = serde_saphyr::from_str(&yaml).expect("rendered YAML is valid");

        assert_eq!(reparsed, node);
    }
}
