//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch tree with a `build` directory holding libraries and an empty `bin` destination
pub struct Workspace {
    pub temp_dir: TempDir,
    pub build: PathBuf,
    pub bin: PathBuf,
}

/// Create a temporary build tree
pub fn create_workspace() -> Workspace {
    let temp_dir = TempDir::new().unwrap();
    let build = temp_dir.path().join("build");
    let bin = temp_dir.path().join("bin");
    fs::create_dir(&build).unwrap();
    fs::create_dir(&bin).unwrap();
    Workspace {
        temp_dir,
        build,
        bin,
    }
}

impl Workspace {
    /// Write `<stem>.lib` and `<stem>.dll` into the build directory, returning the `.lib` path
    pub fn add_library(&self, stem: &str, dll_contents: &[u8]) -> PathBuf {
        let lib = self.build.join(format!("{}.lib", stem));
        fs::write(&lib, b"import library").unwrap();
        fs::write(self.build.join(format!("{}.dll", stem)), dll_contents).unwrap();
        lib
    }

    /// Write only `<stem>.lib`, returning its path
    pub fn add_lib_only(&self, stem: &str) -> PathBuf {
        let lib = self.build.join(format!("{}.lib", stem));
        fs::write(&lib, b"import library").unwrap();
        lib
    }

    pub fn installed(&self, name: &str) -> PathBuf {
        self.bin.join(name)
    }
}

/// Names of the entries in a directory, sorted
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
