use crate::compare::entry_set::EntrySet;
use crate::error::CompareError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Separator used in entry paths on every platform. Directory entries keep
/// it as a trailing marker, which is what distinguishes them from files.
pub const ENTRY_SEPARATOR: &str = "/";

/// A validated handle on one comparison root.
///
/// Opening a `Tree` checks the root up front so that a bad argument fails
/// as an input error instead of surfacing halfway through a traversal.
#[derive(Debug)]
pub struct Tree {
    root: Box<Path>,
}

impl Tree {
    pub fn open(root: &Path) -> Result<Self, CompareError> {
        let metadata = std::fs::metadata(root).map_err(|source| CompareError::InvalidInput {
            path: root.to_path_buf(),
            reason: source.to_string(),
        })?;

        if !metadata.is_dir() {
            return Err(CompareError::InvalidInput {
                path: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        // Probe readability now, while failing is still cheap
        if let Err(source) = std::fs::read_dir(root) {
            return Err(CompareError::InvalidInput {
                path: root.to_path_buf(),
                reason: source.to_string(),
            });
        }

        Ok(Tree {
            root: root.to_path_buf().into_boxed_path(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of an entry path inside this tree. Directory
    /// markers lose their trailing separator before joining.
    pub fn join(&self, entry: &str) -> PathBuf {
        self.root.join(entry.trim_end_matches(ENTRY_SEPARATOR))
    }

    /// Lists every file and directory beneath the root as relative entry
    /// paths.
    ///
    /// Directories are recorded with a trailing separator in addition to
    /// whatever they contain, so a subtree present on one side only shows
    /// up as such and not merely through the files inside it. Entries that
    /// are neither regular files nor directories (sockets, devices,
    /// dangling symlinks) are invisible to the comparison and reported with
    /// a warning. Symlinks are not followed.
    ///
    /// Traversal composes paths from the root; the process working
    /// directory is never read or changed.
    pub fn list(&self) -> Result<EntrySet, CompareError> {
        let mut entries = EntrySet::new();

        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|source| self.walk_failure(source))?;
            let relative = self.relative_entry_path(entry.path());
            let file_type = entry.file_type();

            if file_type.is_dir() {
                entries.insert(format!("{relative}{ENTRY_SEPARATOR}"));
            } else if file_type.is_file() {
                entries.insert(relative);
            } else {
                warn!("skipping unsupported entry type at {:?}", entry.path());
            }
        }

        debug!("listed {} entries under {:?}", entries.len(), self.root);

        Ok(entries)
    }

    fn relative_entry_path(&self, path: &Path) -> String {
        path.strip_prefix(self.root.as_ref())
            .unwrap_or(path)
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join(ENTRY_SEPARATOR)
    }

    fn walk_failure(&self, source: walkdir::Error) -> CompareError {
        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.to_path_buf());

        match source.into_io_error() {
            Some(source) => CompareError::Io { path, source },
            None => CompareError::Io {
                path,
                source: std::io::Error::other("traversal interrupted"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lists_nested_files_and_directory_markers() {
        let dir = TempDir::new().unwrap();
        dir.child("c.txt").write_str("top").unwrap();
        dir.child("a").child("b.txt").write_str("nested").unwrap();

        let tree = Tree::open(dir.path()).unwrap();
        let entries = tree.list().unwrap();

        let expected = EntrySet::from(["a/".to_string(), "a/b.txt".to_string(), "c.txt".to_string()]);
        assert_eq!(entries, expected);
    }

    #[test]
    fn deep_subtrees_are_marked_at_every_level() {
        let dir = TempDir::new().unwrap();
        dir.child("sub")
            .child("deep")
            .child("file.txt")
            .write_str("x")
            .unwrap();

        let tree = Tree::open(dir.path()).unwrap();
        let entries = tree.list().unwrap();

        assert!(entries.contains("sub/"));
        assert!(entries.contains("sub/deep/"));
        assert!(entries.contains("sub/deep/file.txt"));
    }

    #[test]
    fn empty_root_lists_no_entries() {
        let dir = TempDir::new().unwrap();

        let tree = Tree::open(dir.path()).unwrap();

        assert!(tree.list().unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_input_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let error = Tree::open(&missing).unwrap_err();

        assert!(matches!(error, CompareError::InvalidInput { path, .. } if path == missing));
    }

    #[test]
    fn file_root_is_an_input_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("plain.txt");
        file.write_str("not a directory").unwrap();

        let error = Tree::open(file.path()).unwrap_err();

        assert!(
            matches!(error, CompareError::InvalidInput { reason, .. } if reason == "not a directory")
        );
    }

    #[test]
    fn join_strips_the_directory_marker() {
        let dir = TempDir::new().unwrap();
        let tree = Tree::open(dir.path()).unwrap();

        assert_eq!(tree.join("sub/"), dir.path().join("sub"));
        assert_eq!(tree.join("sub/file.txt"), dir.path().join("sub/file.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn unsupported_entry_types_are_invisible() {
        use std::os::unix::net::UnixListener;

        let dir = TempDir::new().unwrap();
        dir.child("kept.txt").write_str("file").unwrap();
        let _socket = UnixListener::bind(dir.path().join("ignored.sock")).unwrap();

        let tree = Tree::open(dir.path()).unwrap();
        let entries = tree.list().unwrap();

        let expected = EntrySet::from(["kept.txt".to_string()]);
        assert_eq!(entries, expected);
    }
}
