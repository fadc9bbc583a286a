// ABOUTME: Session pointer resolution: reads the one-line file naming the active log file.
// ABOUTME: A missing, empty, or unreadable pointer means no session is active.

use std::path::{Path, PathBuf};

/// Pointer location relative to the workspace directory.
pub const DEFAULT_POINTER_FILE: &str = "debugging/current_log_file.txt";

/// The sentinel file whose trimmed content is the active log path.
#[derive(Debug, Clone)]
pub struct SessionPointer {
    workspace_dir: PathBuf,
    pointer_path: PathBuf,
}

impl SessionPointer {
    /// Pointer at `pointer_file` inside `workspace_dir` (absolute `pointer_file` wins).
    pub fn new(workspace_dir: &Path, pointer_file: &Path) -> Self {
        Self {
            workspace_dir: workspace_dir.to_path_buf(),
            pointer_path: workspace_dir.join(pointer_file),
        }
    }

    /// Pointer at the default location inside `workspace_dir`.
    pub fn in_workspace(workspace_dir: &Path) -> Self {
        Self::new(workspace_dir, Path::new(DEFAULT_POINTER_FILE))
    }

    /// Path of the pointer file itself.
    pub fn path(&self) -> &Path {
        &self.pointer_path
    }

    /// The active log file, or `None` when no session is active.
    ///
    /// A relative log path resolves against the workspace directory. Read failures
    /// other than a missing file are reported as warnings and treated as no session.
    pub fn resolve(&self) -> Option<PathBuf> {
        if !self.pointer_path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&self.pointer_path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    pointer = %self.pointer_path.display(),
                    "failed to read session pointer: {}",
                    e
                );
                return None;
            }
        };

        let log_path = content.trim();
        if log_path.is_empty() {
            return None;
        }

        Some(self.workspace_dir.join(log_path))
    }
}
