//! Persists one document to its own file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::WriteError;
use crate::node::Node;
use crate::yaml::ToYaml;

/// Permissions of created files: owner read/write, group and other read.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Renders `node` as canonical YAML and writes it to `path`.
///
/// The file is created when absent and truncated when present, with no locking and
/// no atomic rename: the last write wins.
///
/// # Errors
///
/// Returns [`WriteError::Render`] if the node cannot be rendered, and
/// [`WriteError::Io`] on any file system failure.
pub fn write_document(node: &Node, path: &Path) -> Result<(), WriteError> {
    let content = node.to_yaml()?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let io_error = |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = options.open(path).map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)?;
    file.flush().map_err(io_error)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::parse_documents;

    fn document(yaml: &str) -> Node {
        parse_documents(yaml.as_bytes())
            .expect("valid YAML")
            .into_iter()
            .next()
            .expect("one document")
    }

    #[test]
    fn should_write_canonical_yaml() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("v1__configmap__default__settings.yaml");
        let node = document("kind:   ConfigMap   # a comment\nmetadata: {name: settings}\n");

        write_document(&node, &path).expect("should write");

        let content = fs::read_to_string(&path).expect("file written");
        insta::assert_snapshot!(content, @r"
        kind: ConfigMap
        metadata:
          name: settings
        ");
    }

    #[test]
    fn should_truncate_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.yaml");
        fs::write(&path, "x".repeat(4096)).expect("seed file");

        write_document(&document("kind: Namespace\n"), &path).expect("should write");

        let content = fs::read_to_string(&path).expect("file written");
        assert_eq!(content.trim_end(), "kind: Namespace");
    }

    #[cfg(unix)]
    #[test]
    fn should_create_file_readable_by_everyone() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out.yaml");

        write_document(&document("kind: Namespace\n"), &path).expect("should write");

        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o644, 0o644);
        assert_eq!(mode & 0o111, 0);
    }

    #[test]
    fn should_fail_when_directory_is_missing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("team/a").join("out.yaml");

        let result = write_document(&document("kind: Namespace\n"), &path);

        assert!(
            matches!(&result, Err(WriteError::Io { path: failed, .. }) if *failed == path),
            "got {result:?}"
        );
    }
}
