use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ContinuationState, SessionStore};

/// File-backed session store: one pretty-printed JSON blob per session
/// under a base directory. A missing or unreadable blob loads as empty
/// defaults, so a corrupt file costs a session its history, never a
/// crash.
pub struct JsonFileSessionStore {
    base_dir: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store under the platform config dir (`<config>/tunescout/sessions`).
    pub fn in_config_dir() -> Self {
        let base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tunescout")
            .join("sessions");
        Self::new(base)
    }

    fn blob_path(&self, session_id: &str) -> PathBuf {
        // Session ids come from the hosting layer; keep only a filename-
        // safe projection so an odd id cannot escape the base dir.
        let safe: String = session_id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{}.json", safe))
    }

    fn read_state(path: &Path) -> Option<ContinuationState> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!(
                    "session blob {} is corrupt ({}); starting fresh",
                    path.display(),
                    e
                );
                None
            }
        }
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load(&self, session_id: &str) -> ContinuationState {
        let path = self.blob_path(session_id);
        if !path.exists() {
            return ContinuationState::default();
        }
        Self::read_state(&path).unwrap_or_default()
    }

    async fn save(&self, session_id: &str, state: &ContinuationState) {
        let path = self.blob_path(session_id);

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("could not create session dir {}: {}", parent.display(), e);
                return;
            }
        }

        match serde_json::to_string_pretty(state) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    log::warn!("could not persist session {}: {}", path.display(), e);
                }
            }
            Err(e) => log::warn!("could not serialize session state: {}", e),
        }
    }
}
