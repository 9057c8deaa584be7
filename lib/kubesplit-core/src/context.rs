//! Structured log context.
//!
//! A [`LogContext`] accumulates the fields that locate the unit of work being processed
//! (source, then document, then resource identity). It is passed explicitly down the
//! pipeline; every `with_*` call returns a new context and leaves the receiver untouched.
//! Records are emitted with `tracing`, so the subscriber installed by the binary decides
//! the format and the sink.

use std::fmt::Display;

use tracing::{debug, error};

use crate::identity::ResourceIdentity;
use crate::source::Source;

/// Fields attached to every record emitted while processing one unit of work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    source_index: Option<usize>,
    source: Option<String>,
    document_index: Option<usize>,
    identity: Option<ResourceIdentity>,
    filename: Option<String>,
}

impl LogContext {
    /// An empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context of the `index`-th source argument.
    #[must_use]
    pub fn with_source(&self, index: usize, source: &Source) -> Self {
        Self {
            source_index: Some(index),
            source: Some(source.to_string()),
            ..self.clone()
        }
    }

    /// Context of the `index`-th document of the current source.
    #[must_use]
    pub fn with_document(&self, index: usize) -> Self {
        Self {
            document_index: Some(index),
            ..self.clone()
        }
    }

    /// Context once the resource identity and its filename are known.
    #[must_use]
    pub fn with_resource(&self, identity: &ResourceIdentity, filename: &str) -> Self {
        Self {
            identity: Some(identity.clone()),
            filename: Some(filename.to_owned()),
            ..self.clone()
        }
    }

    /// Index of the current source argument, if any.
    #[must_use]
    pub fn source_index(&self) -> Option<usize> {
        self.source_index
    }

    /// Index of the current document, if any.
    #[must_use]
    pub fn document_index(&self) -> Option<usize> {
        self.document_index
    }

    /// Derived filename of the current document, if known.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    fn identity_field(&self, field: fn(&ResourceIdentity) -> &str) -> Option<&str> {
        self.identity.as_ref().map(field)
    }

    /// Emits an ERROR record for a failed `step`.
    pub fn error(&self, step: &str, err: &dyn Display) {
        error!(
            source_index = self.source_index,
            source = self.source.as_deref(),
            document_index = self.document_index,
            api_version = self.identity_field(|id| id.api_version.as_str()),
            kind = self.identity_field(|id| id.kind.as_str()),
            namespace = self.identity_field(|id| id.namespace.as_str()),
            resource_name = self.identity_field(|id| id.name.as_str()),
            filename = self.filename.as_deref(),
            error = %err,
            "{step}"
        );
    }

    /// Emits a DEBUG record for a successful `step`.
    pub fn debug(&self, step: &str) {
        debug!(
            source_index = self.source_index,
            source = self.source.as_deref(),
            document_index = self.document_index,
            api_version = self.identity_field(|id| id.api_version.as_str()),
            kind = self.identity_field(|id| id.kind.as_str()),
            namespace = self.identity_field(|id| id.namespace.as_str()),
            resource_name = self.identity_field(|id| id.name.as_str()),
            filename = self.filename.as_deref(),
            "{step}"
        );
    }
}
