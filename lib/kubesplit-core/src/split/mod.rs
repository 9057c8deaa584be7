//! Splitting YAML streams into one file per resource.
//!
//! A [`Splitter`] takes its input sources in order. For each source it reads the whole
//! stream, parses it into documents, and for each document extracts the
//! [`ResourceIdentity`](crate::ResourceIdentity), derives the filename and writes the
//! document there:
//!
//! ```text
//! source:    Opened -> Read -> Parsed -> { Extracted -> Named -> Written }*
//! ```
//!
//! A failure before `Parsed` aborts the source, a failure after it skips the document.
//! Nothing is retried and nothing stops the run; the [`SplitReport`] tells what happened.
//!
//! # Example
//!
//! ```rust,no_run
//! use kubesplit_core::{SplitOptions, Splitter};
//!
//! let splitter = Splitter::new(SplitOptions::default().with_output_dir("out"));
//! let report = splitter.run(["bundle.yaml", "-"]);
//!
//! for file in &report.written {
//!     println!("{}", file.path.display());
//! }
//! if !report.is_clean() {
//!     eprintln!("{} failure(s), see logs", report.failure_count());
//! }
//! ```

mod options;
mod report;
mod splitter;

pub use options::{CollisionPolicy, SplitOptions};
pub use report::{SplitReport, WrittenFile};
pub use splitter::Splitter;
