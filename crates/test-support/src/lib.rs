//! Shared fixtures for tests that need ACL files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Filename written by [`AclTree::write_acl`].
pub const DEFAULT_ACL_NAME: &str = ".www_acl";

/// A temporary document tree that is removed when dropped.
#[derive(Debug)]
pub struct AclTree {
    root: TempDir,
}

impl AclTree {
    /// Creates an empty tree.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temporary document tree"),
        }
    }

    /// Returns the tree's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Writes `contents` as the default ACL file of `dir` (relative to the
    /// root, `""` for the root itself) and returns the file path.
    pub fn write_acl(&self, dir: &str, contents: &str) -> PathBuf {
        self.write_named(dir, DEFAULT_ACL_NAME, contents)
    }

    /// Writes `contents` to `dir/name`, creating `dir` as needed.
    ///
    /// # Panics
    ///
    /// Panics when the directory or file cannot be written.
    pub fn write_named(&self, dir: &str, name: &str, contents: &str) -> PathBuf {
        let directory = self.root().join(dir);
        fs::create_dir_all(&directory).expect("create fixture directory");
        let path = directory.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Returns the `/`-separated path of `relative` inside the tree, suitable
    /// as a resource path.
    #[must_use]
    pub fn resource(&self, relative: &str) -> String {
        format!("{}/{}", self.root().display(), relative.trim_start_matches('/'))
    }
}

impl Default for AclTree {
    fn default() -> Self {
        Self::new()
    }
}
