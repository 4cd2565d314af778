//! Storage for the authentication token attached to outgoing requests.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use serde_json::{Map, Value};

/// Key under which the token is persisted.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Source of the bearer token. Read on every request; cleared when the server answers 401.
pub trait CredentialStore: Send + Sync {
    /// The current token, if any.
    fn token(&self) -> Option<String>;
    /// Stores a new token.
    fn set_token(&self, token: &str);
    /// Forgets the token.
    fn clear(&self);
}

/// A store that never holds a token.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCredentials;

impl CredentialStore for NoCredentials {
    fn token(&self) -> Option<String> {
        None
    }
    fn set_token(&self, _token: &str) {}
    fn clear(&self) {}
}

/// Process-local token storage.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(token),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

/// Token storage persisted as a JSON object in a file, under [`AUTH_TOKEN_KEY`].
///
/// The file is read on every lookup, so changes made by other processes are picked up.
/// Other keys in the file are preserved on write.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<Map<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Ok(Map::new()),
            Err(e) => Err(io::Error::new(io::ErrorKind::InvalidData, e)),
        }
    }

    fn update(&self, f: impl FnOnce(&mut Map<String, Value>)) -> io::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| io::Error::other("credential store lock poisoned"))?;
        let mut map = self.load()?;
        f(&mut map);
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}

impl CredentialStore for FileCredentialStore {
    fn token(&self) -> Option<String> {
        match self.load() {
            Ok(map) => map
                .get(AUTH_TOKEN_KEY)
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable credential file");
                None
            }
        }
    }

    fn set_token(&self, token: &str) {
        let token = token.to_string();
        if let Err(e) = self.update(|map| {
            map.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token));
        }) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to store token");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.update(|map| {
            map.remove(AUTH_TOKEN_KEY);
        }) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to clear token");
        }
    }
}
