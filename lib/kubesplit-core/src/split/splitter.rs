//! The batch driver.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::PathBuf;

use super::{CollisionPolicy, SplitOptions, SplitReport, WrittenFile};
use crate::context::LogContext;
use crate::error::{DocumentError, SourceError};
use crate::filename::derive_filename;
use crate::identity::ResourceIdentity;
use crate::node::Node;
use crate::parse::parse_documents;
use crate::source::Source;
use crate::writer::write_document;

/// Splits YAML streams into one file per document.
///
/// Processing is sequential and non-fatal: a source that cannot be opened, read or
/// parsed is skipped, a document that cannot be named or written is skipped, and the
/// run always goes on to the next unit of work. Every failure is logged with its
/// context and counted in the returned [`SplitReport`].
///
/// The standard input is read once per run; a second `-` source fails with
/// [`SourceError::Read`].
#[derive(Debug, Clone, Default)]
pub struct Splitter {
    options: SplitOptions,
}

/// Mutable state of one run.
#[derive(Debug, Default)]
struct Run {
    report: SplitReport,
    written_paths: HashSet<PathBuf>,
    stdin_read: bool,
}

impl Splitter {
    /// Creates a splitter with the given options.
    #[must_use]
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// The options of this splitter.
    #[must_use]
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Processes command line arguments in order, `-` reading the process standard input.
    pub fn run<I>(&self, args: I) -> SplitReport
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let sources: Vec<Source> = args.into_iter().map(Source::from_arg).collect();
        self.run_with_stdin(&sources, io::stdin().lock())
    }

    /// Processes `sources` in order, reading [`Source::Stdin`] from `stdin`.
    pub fn run_with_stdin(&self, sources: &[Source], mut stdin: impl Read) -> SplitReport {
        let root = LogContext::new();
        let mut run = Run::default();

        for (index, source) in sources.iter().enumerate() {
            let ctx = root.with_source(index, source);
            run.report.sources += 1;
            if let Err(err) = self.split_source(&ctx, source, &mut stdin, &mut run) {
                ctx.error(err.step(), &err);
                run.report.failed_sources += 1;
            }
        }

        run.report
    }

    fn split_source(
        &self,
        ctx: &LogContext,
        source: &Source,
        stdin: &mut dyn Read,
        run: &mut Run,
    ) -> Result<(), SourceError> {
        if matches!(source, Source::Stdin) {
            if run.stdin_read {
                return Err(SourceError::Read {
                    source: io::Error::other("standard input already read by a previous source"),
                });
            }
            run.stdin_read = true;
        }
        let bytes = source.read_all(stdin)?;
        let documents = parse_documents(&bytes)?;

        for (index, document) in documents.into_iter().enumerate() {
            let ctx = ctx.with_document(index);
            run.report.documents += 1;

            let identity = match ResourceIdentity::from_node(&document) {
                Ok(identity) => identity,
                Err(err) => {
                    let err = DocumentError::from(err);
                    ctx.error(err.step(), &err);
                    run.report.failed_documents += 1;
                    continue;
                }
            };

            let filename = derive_filename(&identity);
            let ctx = ctx.with_resource(&identity, &filename);

            match self.persist(&document, &filename, &mut run.written_paths) {
                Ok(path) => {
                    ctx.debug("write file");
                    run.report.written.push(WrittenFile { path, identity });
                }
                Err(err) => {
                    ctx.error(err.step(), &err);
                    run.report.failed_documents += 1;
                }
            }
        }

        Ok(())
    }

    fn persist(
        &self,
        document: &Node,
        filename: &str,
        written_paths: &mut HashSet<PathBuf>,
    ) -> Result<PathBuf, DocumentError> {
        let path = self.options.target_path(filename);
        if self.options.collision_policy() == CollisionPolicy::Strict
            && written_paths.contains(&path)
        {
            return Err(DocumentError::Collision { path });
        }

        write_document(document, &path)?;
        written_paths.insert(path.clone());
        Ok(path)
    }
}
