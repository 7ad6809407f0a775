//! In-memory filesystem fake for testing without touching disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::outcome::{Failure, FailureKind, OpResult};
use crate::ports::filesystem::FileSystem;

#[derive(Debug, Clone)]
enum Node {
    File(String),
    Dir,
}

/// In-memory `FileSystem` implementation with the same sentinel contract
/// as the live adapter.
///
/// Paths are stored as given and treated as already canonical, so
/// `absolute` and `canonical_unc` return existing paths unchanged. The
/// root directory `/` is pre-seeded.
pub struct MemoryFileSystem {
    nodes: Mutex<HashMap<PathBuf, Node>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem containing only the root directory.
    #[must_use]
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);
        Self { nodes: Mutex::new(nodes) }
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn parent_exists(nodes: &HashMap<PathBuf, Node>, path: &Path) -> bool {
    match path.parent() {
        None => true,
        Some(parent) if parent.as_os_str().is_empty() => true,
        Some(parent) => matches!(nodes.get(parent), Some(Node::Dir)),
    }
}

fn lock_poisoned() -> Failure {
    Failure::new(FailureKind::Io, "filesystem state lock poisoned")
}

impl FileSystem for MemoryFileSystem {
    fn read(&self, path: &Path) -> OpResult<String> {
        let Ok(nodes) = self.nodes.lock() else {
            return OpResult::absorbed(String::new(), lock_poisoned());
        };
        match nodes.get(path) {
            Some(Node::File(contents)) => OpResult::succeeded(contents.clone()),
            Some(Node::Dir) => OpResult::absorbed(
                String::new(),
                Failure::new(FailureKind::Io, format!("{} is a directory", path.display())),
            ),
            None => OpResult::absorbed(
                String::new(),
                Failure::new(FailureKind::NotFound, format!("{} not found", path.display())),
            ),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> OpResult<bool> {
        let Ok(mut nodes) = self.nodes.lock() else {
            return OpResult::absorbed(false, lock_poisoned());
        };
        if matches!(nodes.get(path), Some(Node::Dir)) {
            return OpResult::absorbed(
                false,
                Failure::new(FailureKind::Io, format!("{} is a directory", path.display())),
            );
        }
        if !parent_exists(&nodes, path) {
            return OpResult::absorbed(
                false,
                Failure::new(
                    FailureKind::NotFound,
                    format!("parent of {} not found", path.display()),
                ),
            );
        }
        nodes.insert(path.to_path_buf(), Node::File(format!("{contents}\n")));
        OpResult::succeeded(true)
    }

    fn change_directory(&self, path: &Path) -> OpResult<bool> {
        // The fake has no working directory; success tracks existence.
        if *self.directory_exists(path).value() {
            OpResult::succeeded(true)
        } else {
            OpResult::absorbed(
                false,
                Failure::new(FailureKind::NotFound, format!("{} not found", path.display())),
            )
        }
    }

    fn directory_exists(&self, path: &Path) -> OpResult<bool> {
        let Ok(nodes) = self.nodes.lock() else {
            return OpResult::absorbed(false, lock_poisoned());
        };
        OpResult::succeeded(matches!(nodes.get(path), Some(Node::Dir)))
    }

    fn file_exists(&self, path: &Path) -> OpResult<bool> {
        let Ok(nodes) = self.nodes.lock() else {
            return OpResult::absorbed(false, lock_poisoned());
        };
        OpResult::succeeded(matches!(nodes.get(path), Some(Node::File(_))))
    }

    fn create_directory(&self, path: &Path) -> OpResult<bool> {
        let Ok(mut nodes) = self.nodes.lock() else {
            return OpResult::absorbed(false, lock_poisoned());
        };
        match nodes.get(path) {
            Some(Node::Dir) => OpResult::succeeded(true),
            Some(Node::File(_)) => OpResult::absorbed(
                false,
                Failure::new(FailureKind::Io, format!("{} exists as a file", path.display())),
            ),
            None => {
                if !parent_exists(&nodes, path) {
                    return OpResult::absorbed(
                        false,
                        Failure::new(
                            FailureKind::NotFound,
                            format!("parent of {} not found", path.display()),
                        ),
                    );
                }
                nodes.insert(path.to_path_buf(), Node::Dir);
                OpResult::succeeded(true)
            }
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> OpResult<bool> {
        let Ok(mut nodes) = self.nodes.lock() else {
            return OpResult::absorbed(false, lock_poisoned());
        };
        if matches!(nodes.get(to), Some(Node::Dir)) {
            return OpResult::absorbed(
                false,
                Failure::new(FailureKind::Rename, format!("{} is a directory", to.display())),
            );
        }
        if !nodes.contains_key(from) {
            return OpResult::absorbed(
                false,
                Failure::new(FailureKind::Rename, format!("{} not found", from.display())),
            );
        }
        if !parent_exists(&nodes, to) {
            return OpResult::absorbed(
                false,
                Failure::new(FailureKind::Rename, format!("parent of {} not found", to.display())),
            );
        }
        // A directory cannot replace an existing file.
        if matches!(nodes.get(from), Some(Node::Dir)) && nodes.contains_key(to) {
            return OpResult::absorbed(
                false,
                Failure::new(FailureKind::Rename, format!("{} is not a directory", to.display())),
            );
        }

        // Move the node and, for directories, everything beneath it.
        let moved: Vec<PathBuf> =
            nodes.keys().filter(|key| key.starts_with(from)).cloned().collect();
        for old_key in moved {
            let node = nodes.remove(&old_key);
            let suffix = old_key.strip_prefix(from).unwrap_or(&old_key).to_path_buf();
            let new_key = if suffix.as_os_str().is_empty() { to.to_path_buf() } else { to.join(suffix) };
            if let Some(node) = node {
                nodes.insert(new_key, node);
            }
        }
        OpResult::succeeded(true)
    }

    fn remove(&self, path: &Path) -> OpResult<bool> {
        let Ok(mut nodes) = self.nodes.lock() else {
            return OpResult::absorbed(false, lock_poisoned());
        };
        match nodes.get(path) {
            None => OpResult::succeeded(true),
            Some(Node::Dir) => {
                let has_children = nodes.keys().any(|key| key.parent() == Some(path));
                if has_children {
                    return OpResult::absorbed(
                        false,
                        Failure::new(
                            FailureKind::Io,
                            format!("{} is not empty", path.display()),
                        ),
                    );
                }
                nodes.remove(path);
                OpResult::succeeded(true)
            }
            Some(Node::File(_)) => {
                nodes.remove(path);
                OpResult::succeeded(true)
            }
        }
    }

    fn absolute(&self, path: &Path) -> OpResult<PathBuf> {
        let Ok(nodes) = self.nodes.lock() else {
            return OpResult::absorbed(path.to_path_buf(), lock_poisoned());
        };
        if nodes.contains_key(path) {
            OpResult::succeeded(path.to_path_buf())
        } else {
            OpResult::absorbed(
                path.to_path_buf(),
                Failure::new(FailureKind::NotFound, format!("{} not found", path.display())),
            )
        }
    }

    fn canonical_unc(&self, path: &Path) -> OpResult<PathBuf> {
        // No handle-based facility in memory.
        self.absolute(path)
    }

    fn directories(&self, path: &Path) -> OpResult<Vec<PathBuf>> {
        let Ok(nodes) = self.nodes.lock() else {
            return OpResult::absorbed(Vec::new(), lock_poisoned());
        };
        let mut children: Vec<PathBuf> = nodes
            .iter()
            .filter(|(key, node)| key.parent() == Some(path) && matches!(node, Node::Dir))
            .map(|(key, _)| key.clone())
            .collect();
        children.sort();
        OpResult::succeeded(children)
    }

    fn files(&self, path: &Path) -> OpResult<Vec<PathBuf>> {
        let Ok(nodes) = self.nodes.lock() else {
            return OpResult::absorbed(Vec::new(), lock_poisoned());
        };
        let mut children: Vec<PathBuf> = nodes
            .iter()
            .filter(|(key, node)| key.parent() == Some(path) && matches!(node, Node::File(_)))
            .map(|(key, _)| key.clone())
            .collect();
        children.sort();
        OpResult::succeeded(children)
    }
}
