use crate::domain::model::Session;
use crate::domain::ports::SessionStore;
use crate::utils::error::{ClientError, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const DEFAULT_SESSION_FILE: &str = ".hbnb_session.toml";

/// 以 TOML 檔保存 token，跨次執行保留登入狀態
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<Session> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Cannot read session file {}: {}", self.path.display(), e);
                return None;
            }
        };

        match toml::from_str::<Session>(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Ignoring malformed session file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get_token(&self) -> Option<String> {
        let session = self.load()?;
        if let Some(age) = session.age(Utc::now()) {
            tracing::debug!(
                "Session from {} is {} minutes old",
                self.path.display(),
                age.num_minutes()
            );
        }
        session.token().map(str::to_string)
    }

    fn set_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content =
            toml::to_string(&Session::new(token)).map_err(|e| ClientError::ConfigError {
                message: format!("Cannot encode session: {}", e),
            })?;
        fs::write(&self.path, content)?;

        tracing::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Session file {} removed", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 行程內的 token 存放，不落地
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            session: Mutex::new(Session::new(token)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_token(&self) -> Option<String> {
        let session = self.session.lock().ok()?;
        session.token().map(str::to_string)
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut session = self.session.lock().map_err(|_| ClientError::ConfigError {
            message: "Session lock poisoned".to_string(),
        })?;
        *session = Session::new(token);
        Ok(())
    }

    fn clear_token(&self) -> Result<()> {
        let mut session = self.session.lock().map_err(|_| ClientError::ConfigError {
            message: "Session lock poisoned".to_string(),
        })?;
        *session = Session::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip_and_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nested/session.toml"));

        assert_eq!(store.get_token(), None);

        store.set_token("abc.def").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("abc.def"));

        // 另一個實例讀同一個檔案，模擬換頁後仍保有登入狀態
        let reopened = FileSessionStore::new(store.path().to_path_buf());
        assert_eq!(reopened.get_token().as_deref(), Some("abc.def"));

        store.clear_token().unwrap();
        assert_eq!(reopened.get_token(), None);
        // 重複登出不算錯誤
        store.clear_token().unwrap();
    }

    #[test]
    fn test_file_store_ignores_malformed_or_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        fs::write(&path, "this is = = not toml").unwrap();
        assert_eq!(FileSessionStore::new(&path).get_token(), None);

        fs::write(&path, "token = \"\"\n").unwrap();
        assert_eq!(FileSessionStore::new(&path).get_token(), None);
    }

    #[test]
    fn test_file_store_writes_token_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        FileSessionStore::new(&path).set_token("xyz").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("token = \"xyz\""));
        assert!(content.contains("saved_at"));

        let saved: Session = toml::from_str(&content).unwrap();
        let age = saved.age(Utc::now()).unwrap();
        assert!(age.num_seconds() >= 0 && age.num_minutes() < 5);
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get_token(), None);

        store.set_token("t1").unwrap();
        assert_eq!(store.get_token().as_deref(), Some("t1"));

        store.clear_token().unwrap();
        assert_eq!(store.get_token(), None);

        assert_eq!(
            MemorySessionStore::with_token("t2").get_token().as_deref(),
            Some("t2")
        );
    }
}
