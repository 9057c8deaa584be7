//! Run configuration.

use std::path::{Path, PathBuf};

/// What to do when two documents of a run derive the same filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The later document silently replaces the earlier one.
    #[default]
    Overwrite,
    /// The later document is skipped and reported as a
    /// [`DocumentError::Collision`](crate::DocumentError::Collision).
    ///
    /// Only files written during the current run are considered, files left by a
    /// previous run are still overwritten.
    Strict,
}

/// Options of a [`Splitter`](super::Splitter).
///
/// # Example
///
/// ```rust
/// use kubesplit_core::{CollisionPolicy, SplitOptions};
///
/// let options = SplitOptions::default()
///     .with_output_dir("manifests")
///     .with_collision_policy(CollisionPolicy::Strict);
///
/// assert_eq!(options.output_dir(), std::path::Path::new("manifests"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitOptions {
    output_dir: PathBuf,
    collision_policy: CollisionPolicy,
}

impl SplitOptions {
    /// Sets the directory receiving the generated files.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the [`CollisionPolicy`]. Defaults to [`CollisionPolicy::Overwrite`].
    #[must_use]
    pub fn with_collision_policy(mut self, collision_policy: CollisionPolicy) -> Self {
        self.collision_policy = collision_policy;
        self
    }

    /// The directory receiving the generated files; empty means the current directory.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// The configured [`CollisionPolicy`].
    #[must_use]
    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collision_policy
    }

    pub(super) fn target_path(&self, filename: &str) -> PathBuf {
        self.output_dir.join(filename)
    }
}
