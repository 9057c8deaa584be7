//! Input sources: standard input or a file.

use std::ffi::OsStr;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::error::SourceError;

/// Argument value designating the standard input.
pub const STDIN_ARG: &str = "-";

/// Where the bytes of a stream come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The process standard input, written `-` on the command line.
    Stdin,
    /// A file to open for reading.
    File(PathBuf),
}

impl Source {
    /// Resolves a command line argument: `-` is the standard input, anything else a path.
    pub fn from_arg(arg: impl AsRef<OsStr>) -> Self {
        let arg = arg.as_ref();
        if arg == STDIN_ARG {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Reads the whole source into memory.
    ///
    /// `stdin` is only consumed for [`Source::Stdin`], up to its end: reading it again
    /// yields nothing, so a [`Splitter`](crate::Splitter) run reads it at most once.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Open`] when the file cannot be opened, and
    /// [`SourceError::Read`] when reading stops before the end.
    pub fn read_all(&self, stdin: &mut dyn Read) -> Result<Vec<u8>, SourceError> {
        let mut buffer = Vec::new();
        match self {
            Self::Stdin => {
                stdin
                    .read_to_end(&mut buffer)
                    .map_err(|source| SourceError::Read { source })?;
            }
            Self::File(path) => {
                let mut file = File::open(path).map_err(|source| SourceError::Open { source })?;
                file.read_to_end(&mut buffer)
                    .map_err(|source| SourceError::Read { source })?;
            }
        }
        Ok(buffer)
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_ARG),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn should_resolve_dash_as_stdin() {
        assert_eq!(Source::from_arg("-"), Source::Stdin);
        assert_eq!(Source::from_arg("--"), Source::File(PathBuf::from("--")));
        assert_eq!(
            Source::from_arg("manifests/all.yaml"),
            Source::File(PathBuf::from("manifests/all.yaml"))
        );
    }

    #[test]
    fn should_display_like_the_argument() {
        assert_eq!(Source::Stdin.to_string(), "-");
        assert_eq!(Source::from_arg("a/b.yaml").to_string(), "a/b.yaml");
    }

    #[test]
    fn should_read_stdin() {
        let mut stdin = io::Cursor::new(b"kind: Pod\n".to_vec());

        let bytes = Source::Stdin.read_all(&mut stdin).expect("should read");

        assert_eq!(bytes, b"kind: Pod\n");
    }

    #[test]
    fn should_read_file_without_touching_stdin() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("input.yaml");
        std::fs::write(&path, "kind: Pod\n").expect("seed input");
        let mut stdin = io::Cursor::new(b"ignored".to_vec());

        let bytes = Source::File(path).read_all(&mut stdin).expect("should read");

        assert_eq!(bytes, b"kind: Pod\n");
        assert_eq!(stdin.position(), 0);
    }

    #[test]
    fn should_report_open_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = Source::File(dir.path().join("missing.yaml"));

        let result = source.read_all(&mut io::empty());

        assert!(matches!(result, Err(SourceError::Open { .. })), "got {result:?}");
    }

    #[test]
    fn should_report_read_failure() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }
        }

        let result = Source::Stdin.read_all(&mut Broken);

        assert!(matches!(result, Err(SourceError::Read { .. })), "got {result:?}");
    }

    #[cfg(unix)]
    #[test]
    fn should_report_directory_as_read_failure() {
        let dir = tempfile::tempdir().expect("temp dir");

        let result = Source::File(dir.path().to_path_buf()).read_all(&mut io::empty());

        assert!(matches!(result, Err(SourceError::Read { .. })), "got {result:?}");
    }
}
