use std::fs;
use std::path::{Path, PathBuf};

use rstest::fixture;
use tempfile::TempDir;
use tracing::info;

use kubesplit_core::{SplitOptions, Splitter};

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// A scratch output directory with a splitter writing into it.
pub struct Workspace {
    pub dir: TempDir,
    pub splitter: Splitter,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes an input file next to the outputs, in an `input` sub-directory.
    pub fn input(&self, name: &str, content: &str) -> PathBuf {
        let dir = self.path().join("input");
        fs::create_dir_all(&dir).expect("create input dir");
        let path = dir.join(name);
        fs::write(&path, content).expect("write input file");
        path
    }

    /// Names of the generated files, sorted.
    pub fn outputs(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(self.path())
            .expect("read output dir")
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name)).expect("read output file")
    }
}

#[fixture]
pub fn workspace() -> Workspace {
    init_tracing();
    let dir = tempfile::tempdir().expect("create temp dir");
    let splitter = Splitter::new(SplitOptions::default().with_output_dir(dir.path()));
    Workspace { dir, splitter }
}
