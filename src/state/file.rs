//! File-based state persistence.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HostState, StateError, StateStore};

/// JSON file holding the last-notified [`HostState`].
///
/// The file is opened and closed on every access. Writes go to `{path}.tmp`
/// and are renamed over the target, so a reader never sees a half-written
/// file and prior content is always fully replaced.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the state file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> StateError + '_ {
        move |source| StateError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Writes `state` to `path` through a temporary sibling file.
    fn write_blocking(path: &Path, state: &HostState) -> Result<(), StateError> {
        let content = serde_json::to_string(state).map_err(StateError::Serialize)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(Self::write_err(path))?;
            }
        }

        // state.json -> state.json.tmp, not state.tmp
        let temp_path = PathBuf::from(format!("{}.tmp", path.display()));
        std::fs::write(&temp_path, content).map_err(Self::write_err(path))?;
        std::fs::rename(&temp_path, path).map_err(Self::write_err(path))?;

        Ok(())
    }

    fn read(&self) -> Result<String, std::io::Error> {
        std::fs::read_to_string(&self.path)
    }
}

impl StateStore for FileStateStore {
    fn load(&self) -> Result<HostState, StateError> {
        let content = match self.read() {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No state file at {}, initialising an empty one",
                    self.path.display()
                );
                Self::write_blocking(&self.path, &HostState::default())?;
                self.read().map_err(|source| StateError::Read {
                    path: self.path.clone(),
                    source,
                })?
            }
            Err(source) => {
                return Err(StateError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StateError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, state: &HostState) -> Result<(), StateError> {
        let path = self.path.clone();
        let state = state.clone();

        tokio::task::spawn_blocking(move || Self::write_blocking(&path, &state))
            .await
            .map_err(|e| StateError::Write {
                path: self.path.clone(),
                source: std::io::Error::other(e),
            })?
    }
}
