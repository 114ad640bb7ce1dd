//! Session persistence
//!
//! The session lives behind an explicit [`SessionStore`] injected into the
//! client at construction; there is no process-wide singleton. Two keys are
//! persisted, `auth_token` and `user_data`, and the store maintains the
//! invariant that both are present or neither is.

use nmp_domain::User;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An authenticated session: bearer token plus the cached user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token
    pub token: String,
    /// Cached user record from login
    pub user: User,
}

/// Durable storage for the current session
pub trait SessionStore: std::fmt::Debug + Send + Sync {
    /// Load the current session, if one is stored
    fn load(&self) -> io::Result<Option<Session>>;

    /// Persist `session`, replacing any previous one
    fn store(&self, session: &Session) -> io::Result<()>;

    /// Remove any stored session
    fn clear(&self) -> io::Result<()>;
}

const TOKEN_FILE: &str = "auth_token";
const USER_FILE: &str = "user_data.json";

/// File-backed session store
///
/// Persists the token and user record as two files under a directory. A
/// half-present pair (one file without the other) is treated as logged out
/// and cleaned up on load.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Store sessions under `dir` (created on first write)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> io::Result<Option<Session>> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(token) => token,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                // Enforce both-or-neither: drop a stray user record.
                remove_if_present(&self.user_path())?;
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        let user = match fs::read_to_string(self.user_path()) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                remove_if_present(&self.token_path())?;
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        Ok(Some(Session {
            token: token.trim().to_string(),
            user,
        }))
    }

    fn store(&self, session: &Session) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), &session.token)?;
        let raw = serde_json::to_string(&session.user)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(self.user_path(), raw)
    }

    fn clear(&self) -> io::Result<()> {
        remove_if_present(&self.token_path())?;
        remove_if_present(&self.user_path())
    }
}

/// In-memory session store for tests and short-lived tools
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> io::Result<Option<Session>> {
        Ok(self.inner.lock().clone())
    }

    fn store(&self, session: &Session) -> io::Result<()> {
        *self.inner.lock() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.inner.lock() = None;
        Ok(())
    }
}
