//! Error types of the split pipeline.
//!
//! Errors are split by scope:
//!
//! - [`SourceError`] aborts one input source (open, read or parse failure),
//!   the batch continues with the next source.
//! - [`DocumentError`] skips one document, the source continues with the next document.
//!
//! Neither scope is fatal to a run, see [`SplitReport`](crate::SplitReport).

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use crate::node::NodeError;
use crate::yaml::YamlError;

/// The input bytes could not be turned into documents.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ParseError {
    /// The input is not valid UTF-8.
    #[display("input is not valid UTF-8: {_0}")]
    Encoding(Utf8Error),

    /// The input is not well-formed YAML.
    #[display("invalid YAML: {message}")]
    #[from(skip)]
    Syntax {
        /// Message reported by the YAML engine, with its location.
        message: String,
    },
}

/// A document cannot be interpreted as a resource.
#[derive(Debug, derive_more::Error, derive_more::Display)]
pub enum MetadataError {
    /// The document root is a scalar or a sequence.
    #[display("document is not a mapping but a {found}")]
    NotAMapping {
        /// Kind of the document root.
        found: &'static str,
    },

    /// The document has no `kind`, or an empty one.
    #[display("missing resource `kind`")]
    MissingKind,

    /// An identity field is present with an unexpected shape.
    #[display("invalid `{field}` field: {source}")]
    InvalidField {
        /// Dotted name of the identity field.
        field: &'static str,
        /// The underlying lookup failure.
        source: NodeError,
    },
}

/// A document could not be persisted.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum WriteError {
    /// The document could not be rendered as YAML.
    #[display("fail to render document as YAML: {_0}")]
    Render(YamlError),

    /// The file could not be created or written.
    #[display("fail to write '{}': {source}", path.display())]
    #[from(skip)]
    Io {
        /// Target file.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

/// Failure scoped to one input source.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum SourceError {
    /// The source could not be opened.
    #[display("fail to open source: {source}")]
    #[from(skip)]
    Open {
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The source could not be read to its end.
    #[display("fail to read source: {source}")]
    #[from(skip)]
    Read {
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The source content is not a valid YAML stream.
    #[display("fail to parse source: {_0}")]
    Parse(ParseError),
}

impl SourceError {
    /// Short label of the failing step, used as the log message.
    #[must_use]
    pub fn step(&self) -> &'static str {
        match self {
            Self::Open { .. } => "open",
            Self::Read { .. } => "read",
            Self::Parse(_) => "parse yaml",
        }
    }
}

/// Failure scoped to one document.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum DocumentError {
    /// The resource identity could not be extracted.
    #[display("fail to get resource metadata: {_0}")]
    Metadata(MetadataError),

    /// The document could not be written.
    #[display("{_0}")]
    Write(WriteError),

    /// Another document of the same run already produced this file.
    ///
    /// Only reported with [`CollisionPolicy::Strict`](crate::CollisionPolicy::Strict).
    #[display("'{}' was already written by a previous document", path.display())]
    #[from(skip)]
    Collision {
        /// The colliding target file.
        path: PathBuf,
    },
}

impl DocumentError {
    /// Short label of the failing step, used as the log message.
    #[must_use]
    pub fn step(&self) -> &'static str {
        match self {
            Self::Metadata(_) => "get meta",
            Self::Write(_) => "write file",
            Self::Collision { .. } => "filename collision",
        }
    }
}
