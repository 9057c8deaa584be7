//! Typed document model.
//!
//! A [`Node`] is the structural representation of one YAML document as handed back
//! by the YAML engine. It keeps mapping keys in source order so that a document can
//! be rendered back to text in a stable, deterministic way.
//!
//! Fields are read through fallible accessors ([`Node::lookup`], [`Node::get_string`])
//! that report *why* a lookup failed instead of returning a bare `None`.

use std::fmt::{self, Display};

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A parsed YAML value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// `null`, `~` or an empty value.
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(Number),
    /// A string scalar.
    String(String),
    /// A block or flow sequence.
    Sequence(Vec<Node>),
    /// A block or flow mapping.
    Mapping(Mapping),
}

/// A numeric scalar, as resolved by the YAML engine.
///
/// Only the value is kept, not its spelling: a plain `1.10` is the float `1.1` and is
/// rendered back as `1.1`. Quote a scalar to keep it verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A non-negative integer.
    PosInt(u64),
    /// A negative integer.
    NegInt(i64),
    /// A floating point number.
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PosInt(value) => write!(f, "{value}"),
            Self::NegInt(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_nan() => write!(f, ".nan"),
            Self::Float(value) if value.is_infinite() && value.is_sign_positive() => {
                write!(f, ".inf")
            }
            Self::Float(value) if value.is_infinite() => write!(f, "-.inf"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// An insertion-ordered YAML mapping.
///
/// Keys can be any [`Node`], though resource manifests only ever use strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(Node, Node)>,
}

impl Mapping {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing the value in place when the key already exists.
    ///
    /// Returns the previous value for that key, if any.
    pub fn insert(&mut self, key: Node, value: Node) -> Option<Node> {
        let existing = self
            .entries
            .iter_mut()
            .find(|(candidate, _)| *candidate == key);
        if let Some((_, previous)) = existing {
            return Some(std::mem::replace(previous, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Looks up a value by string key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(candidate, _)| matches!(candidate, Node::String(name) if name == key))
            .map(|(_, value)| value)
    }

    /// Removes the entry with the given string key and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        let position = self
            .entries
            .iter()
            .position(|(candidate, _)| matches!(candidate, Node::String(name) if name == key))?;
        Some(self.entries.remove(position).1)
    }

    /// Iterates over the entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<Node>,
    V: Into<Node>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key.into(), value.into());
        }
        mapping
    }
}

/// Failure of a typed field lookup on a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum NodeError {
    /// The field is absent or explicitly `null`.
    #[display("field `{path}` not found")]
    NotFound {
        /// Dotted path of the missing field.
        path: String,
    },

    /// A node on the way to the field is not a mapping.
    #[display("expected a mapping at `{path}`, found a {found}")]
    NotAMapping {
        /// Dotted path of the offending node.
        path: String,
        /// Kind of the node actually found.
        found: &'static str,
    },

    /// The field exists but holds a sequence or a mapping.
    #[display("expected a scalar at `{path}`, found a {found}")]
    NotAScalar {
        /// Dotted path of the offending node.
        path: String,
        /// Kind of the node actually found.
        found: &'static str,
    },
}

impl Node {
    /// Short name of the node variant, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Returns `true` for [`Node::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the inner mapping, if this node is one.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the inner string, if this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Looks up a direct child by string key. `None` when this is not a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Walks nested mappings following `path`.
    ///
    /// A `null` value is reported as [`NodeError::NotFound`], like an absent key.
    ///
    /// # Errors
    ///
    /// Returns [`NodeError::NotFound`] when a segment is missing and
    /// [`NodeError::NotAMapping`] when an intermediate node cannot be descended into.
    pub fn lookup(&self, path: &[&str]) -> Result<&Node, NodeError> {
        let mut current = self;
        for (depth, segment) in path.iter().enumerate() {
            let Some(mapping) = current.as_mapping() else {
                return Err(NodeError::NotAMapping {
                    path: join_path(path.get(..depth).unwrap_or_default()),
                    found: current.kind_name(),
                });
            };
            current = match mapping.get(segment) {
                Some(node) if !node.is_null() => node,
                _ => {
                    return Err(NodeError::NotFound {
                        path: join_path(path.get(..=depth).unwrap_or_default()),
                    });
                }
            };
        }
        Ok(current)
    }

    /// Reads the scalar at `path` as text.
    ///
    /// Strings are returned verbatim, numbers and booleans in their YAML spelling.
    ///
    /// # Errors
    ///
    /// Same as [`Node::lookup`], plus [`NodeError::NotAScalar`] for sequences and mappings.
    pub fn get_string(&self, path: &[&str]) -> Result<String, NodeError> {
        match self.lookup(path)? {
            Self::String(value) => Ok(value.clone()),
            Self::Number(number) => Ok(number.to_string()),
            Self::Bool(value) => Ok(value.to_string()),
            other @ (Self::Null | Self::Sequence(_) | Self::Mapping(_)) => {
                Err(NodeError::NotAScalar {
                    path: join_path(path),
                    found: other.kind_name(),
                })
            }
        }
    }
}

fn join_path(path: &[&str]) -> String {
    if path.is_empty() {
        return String::from("<root>");
    }
    path.join(".")
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Self::Number(Number::PosInt(value))
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Self {
        Self::Sequence(value)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(Number::PosInt(value)) => serializer.serialize_u64(*value),
            Self::Number(Number::NegInt(value)) => serializer.serialize_i64(*value),
            Self::Number(Number::Float(value)) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(mapping.len()))?;
                for (key, value) in mapping.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any YAML value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Node, E> {
        Ok(Node::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Node, E> {
        let number = match u64::try_from(value) {
            Ok(positive) => Number::PosInt(positive),
            Err(_) => Number::NegInt(value),
        };
        Ok(Node::Number(number))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Node, E> {
        Ok(Node::Number(Number::PosInt(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Node, E> {
        Ok(Node::Number(Number::Float(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Node, E> {
        Ok(Node::String(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Node, E> {
        Ok(Node::String(value))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Node, D::Error> {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Node, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut mapping = Mapping::new();
        while let Some((key, value)) = map.next_entry::<Node, Node>()? {
            mapping.insert(key, value);
        }
        Ok(Node::Mapping(mapping))
    }
}
