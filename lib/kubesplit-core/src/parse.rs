//! Turns a byte buffer into the ordered list of its YAML documents.

use crate::error::ParseError;
use crate::node::Node;

/// Kinds of a document wrapping other resources in its `items`.
const LIST_KINDS: [&str; 2] = ["List", "ResourceList"];

/// Parses every document of a YAML stream, in source order.
///
/// Empty documents (a bare `---`, a document holding only `null` or comments)
/// are dropped: they carry no resource to split. An empty buffer yields an empty list.
///
/// A stream made of a single `List` or `ResourceList` document, as printed by
/// `kubectl get -o yaml`, yields the entries of its `items` instead.
///
/// Plain scalars follow the YAML 1.2 core schema: only `true` and `false` are
/// booleans, so `no`, `yes`, `on` or `y` stay strings.
///
/// # Errors
///
/// Returns a [`ParseError`] when the buffer is not UTF-8 or not well-formed YAML.
/// No document is returned in that case, even the ones before the faulty one.
pub fn parse_documents(bytes: &[u8]) -> Result<Vec<Node>, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let options = serde_saphyr::Options {
        strict_booleans: true,
        ..Default::default()
    };
    let documents: Vec<Node> = serde_saphyr::from_multiple_with_options(text, options)
        .map_err(|err| ParseError::Syntax {
            message: err.to_string(),
        })?;

    let mut documents: Vec<Node> = documents
        .into_iter()
        .filter(|document| !document.is_null())
        .collect();

    if let [document] = documents.as_mut_slice()
        && let Some(items) = take_list_items(document)
    {
        return Ok(items.into_iter().filter(|item| !item.is_null()).collect());
    }
    Ok(documents)
}

/// Takes the `items` out of a list document, `None` when `document` is not one.
fn take_list_items(document: &mut Node) -> Option<Vec<Node>> {
    let kind = document.get("kind").and_then(Node::as_str)?;
    if !LIST_KINDS.contains(&kind) {
        return None;
    }
    let Node::Mapping(mapping) = document else {
        return None;
    };
    match mapping.get("items") {
        None | Some(Node::Null) => Some(Vec::new()),
        Some(Node::Sequence(_)) => match mapping.remove("items") {
            Some(Node::Sequence(items)) => Some(items),
            _ => None,
        },
        Some(_) => None,
    }
}
