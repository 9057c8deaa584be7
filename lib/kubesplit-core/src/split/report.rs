//! Outcome of a split run.

use std::path::PathBuf;

use crate::identity::ResourceIdentity;

/// A document successfully written to its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path of the written file (output directory joined with the derived filename).
    pub path: PathBuf,

    /// Identity of the resource the file holds.
    pub identity: ResourceIdentity,
}

/// Counters and written files of a [`Splitter`](super::Splitter) run.
///
/// Failures never stop a run; they are counted here and logged. A caller that needs a
/// failure signal checks [`SplitReport::failure_count`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Number of source arguments attempted.
    pub sources: usize,

    /// Sources aborted on an open, read or parse failure.
    pub failed_sources: usize,

    /// Documents found in the successfully parsed sources.
    pub documents: usize,

    /// Documents skipped on a metadata, write or collision failure.
    pub failed_documents: usize,

    /// Written files, in write order.
    ///
    /// When two documents derive the same path, both writes are listed.
    pub written: Vec<WrittenFile>,
}

impl SplitReport {
    /// Total number of failures, source- and document-level.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failed_sources + self.failed_documents
    }

    /// Returns `true` if nothing failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    /// Number of successful writes.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.written.len()
    }
}
