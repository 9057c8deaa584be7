//! Resource identity of a manifest document.

use crate::error::MetadataError;
use crate::node::{Node, NodeError};

/// The four fields naming a resource: `apiVersion`, `kind`, `metadata.namespace`
/// and `metadata.name`.
///
/// `namespace` and `name` are empty when the document does not set them
/// (cluster-scoped resources, generated names, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResourceIdentity {
    /// `apiVersion`, e.g. `apps/v1`. Empty when absent.
    pub api_version: String,
    /// `kind`, e.g. `Deployment`. Never empty.
    pub kind: String,
    /// `metadata.namespace`. Empty when absent.
    pub namespace: String,
    /// `metadata.name`. Empty when absent.
    pub name: String,
}

impl ResourceIdentity {
    /// Extracts the identity of a resource document.
    ///
    /// # Errors
    ///
    /// Returns a [`MetadataError`] when the document is not a mapping, has no `kind`,
    /// or holds a non-scalar value in one of the identity fields.
    pub fn from_node(node: &Node) -> Result<Self, MetadataError> {
        if node.as_mapping().is_none() {
            return Err(MetadataError::NotAMapping {
                found: node.kind_name(),
            });
        }

        let kind = optional_field(node, "kind", &["kind"])?;
        if kind.is_empty() {
            return Err(MetadataError::MissingKind);
        }

        Ok(Self {
            api_version: optional_field(node, "apiVersion", &["apiVersion"])?,
            kind,
            namespace: optional_field(node, "metadata.namespace", &["metadata", "namespace"])?,
            name: optional_field(node, "metadata.name", &["metadata", "name"])?,
        })
    }
}

fn optional_field(
    node: &Node,
    field: &'static str,
    path: &[&str],
) -> Result<String, MetadataError> {
    match node.get_string(path) {
        Ok(value) => Ok(value),
        Err(NodeError::NotFound { .. }) => Ok(String::new()),
        Err(source) => Err(MetadataError::InvalidField { field, source }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::parse_documents;

    fn single(yaml: &str) -> Node {
        let mut documents = parse_documents(yaml.as_bytes()).expect("valid YAML");
        assert_eq!(documents.len(), 1);
        documents.remove(0)
    }

    #[test]
    fn should_extract_full_identity() {
        let node = single(
            "apiVersion: apps/v1\nkind: Deployment\nmetadata: {namespace: default, name: web}\n",
        );

        let identity = ResourceIdentity::from_node(&node).expect("should extract");

        assert_eq!(
            identity,
            ResourceIdentity {
                api_version: String::from("apps/v1"),
                kind: String::from("Deployment"),
                namespace: String::from("default"),
                name: String::from("web"),
            }
        );
    }

    #[test]
    fn should_default_missing_optional_fields() {
        let node = single("kind: Namespace\n");

        let identity = ResourceIdentity::from_node(&node).expect("should extract");

        assert_eq!(identity.kind, "Namespace");
        assert_eq!(identity.api_version, "");
        assert_eq!(identity.namespace, "");
        assert_eq!(identity.name, "");
    }

    #[test]
    fn should_stringify_numeric_name() {
        let node = single("kind: ConfigMap\nmetadata:\n  name: 42\n");

        let identity = ResourceIdentity::from_node(&node).expect("should extract");

        assert_eq!(identity.name, "42");
    }

    #[rstest]
    #[case::no_kind("apiVersion: v1\nmetadata: {name: web}\n")]
    #[case::null_kind("apiVersion: v1\nkind: ~\n")]
    #[case::empty_kind("apiVersion: v1\nkind: ''\n")]
    fn should_fail_without_kind(#[case] yaml: &str) {
        let node = single(yaml);

        let result = ResourceIdentity::from_node(&node);

        assert!(matches!(result, Err(MetadataError::MissingKind)), "got {result:?}");
    }

    #[rstest]
    #[case::sequence("- kind: Pod\n", "sequence")]
    #[case::scalar("just a string\n", "string")]
    fn should_fail_on_non_mapping_document(#[case] yaml: &str, #[case] expected: &str) {
        let node = single(yaml);

        let result = ResourceIdentity::from_node(&node);

        assert!(
            matches!(result, Err(MetadataError::NotAMapping { found }) if found == expected),
            "got {result:?}"
        );
    }

    #[test]
    fn should_fail_on_structured_name() {
        let node = single("kind: Pod\nmetadata:\n  name: {first: a}\n");

        let result = ResourceIdentity::from_node(&node);

        assert!(
            matches!(
                result,
                Err(MetadataError::InvalidField {
                    field: "metadata.name",
                    ..
                })
            ),
            "got {result:?}"
        );
    }

    #[test]
    fn should_fail_on_scalar_metadata() {
        let node = single("kind: Pod\nmetadata: web\n");

        let result = ResourceIdentity::from_node(&node);

        assert!(
            matches!(
                result,
                Err(MetadataError::InvalidField {
                    source: NodeError::NotAMapping { .. },
                    ..
                })
            ),
            "got {result:?}"
        );
    }
}
