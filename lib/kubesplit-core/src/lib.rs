//! # Kubesplit Core
//!
//! Split a multi-document YAML stream, typically a bundle of Kubernetes manifests, into
//! one file per document. Each file is named after the resource it holds:
//!
//! ```text
//! <apiVersion>__<kind>__<namespace>__<name>.yaml
//! ```
//!
//! where the `apiVersion` has its `/` and `.` replaced by `_`, and both `apiVersion`
//! and `kind` are lowercased.
//!
//! ## Quick Start
//!
//! ```rust
//! use kubesplit_core::{SplitOptions, Source, Splitter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let out = tempfile::tempdir()?;
//! let bundle = "\
//! apiVersion: apps/v1
//! kind: Deployment
//! metadata: {namespace: default, name: web}
//! ---
//! apiVersion: v1
//! kind: Service
//! metadata: {name: web-svc}
//! ";
//!
//! let splitter = Splitter::new(SplitOptions::default().with_output_dir(out.path()));
//! let report = splitter.run_with_stdin(&[Source::Stdin], bundle.as_bytes());
//!
//! assert!(report.is_clean());
//! assert!(out.path().join("apps_v1__deployment__default__web.yaml").exists());
//! assert!(out.path().join("v1__service____web-svc.yaml").exists());
//! # Ok(())
//! # }
//! ```
//!
//! ## Building Blocks
//!
//! The pipeline steps are usable on their own:
//!
//! - [`parse_documents`] - bytes to ordered [`Node`]s
//! - [`ResourceIdentity::from_node`] - the four naming fields of a document
//! - [`derive_filename`] - the filename of an identity
//! - [`write_document`] - canonical YAML written to a file
//!
//! ## Error Handling
//!
//! - [`SourceError`] - open, read or parse failure, aborts one source
//! - [`DocumentError`] - metadata, write or collision failure, skips one document
//!
//! A [`Splitter`] never stops on those; it logs them through `tracing` with a
//! [`LogContext`] and counts them in its [`SplitReport`].

mod context;
mod error;
mod filename;
mod identity;
mod node;
mod parse;
mod source;
pub mod split;
mod writer;
mod yaml;

pub use self::context::LogContext;
pub use self::error::{DocumentError, MetadataError, ParseError, SourceError, WriteError};
pub use self::filename::{derive_filename, normalize_api_version};
pub use self::identity::ResourceIdentity;
pub use self::node::{Mapping, Node, NodeError, Number};
pub use self::parse::parse_documents;
pub use self::source::{STDIN_ARG, Source};
pub use self::split::{CollisionPolicy, SplitOptions, SplitReport, Splitter, WrittenFile};
pub use self::writer::write_document;
pub use self::yaml::{ToYaml, YamlError};
