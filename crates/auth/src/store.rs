use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Durable slot for the request token issued at the start of a login
/// attempt. Written by the login screen, read back when the authorization
/// screen initializes after the user returns from the grant page.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Result<Option<String>>;
    fn set(&self, token: &str) -> Result<()>;
}

/// File-backed store in the platform data directory. The slot is a single
/// file named `token` holding the raw token string.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "pocket-tui", "pocket-tui")
            .ok_or_else(|| anyhow!("Could not determine project directories"))?;
        let data_dir = proj_dirs.data_dir();
        fs::create_dir_all(data_dir)?;
        Ok(Self {
            path: data_dir.join("token"),
        })
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn write_secure_file(path: &PathBuf, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(bytes)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = file.metadata()?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let token = fs::read_to_string(&self.path)?;
        Ok(Some(token))
    }

    fn set(&self, token: &str) -> Result<()> {
        Self::write_secure_file(&self.path, token.as_bytes())
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>> {
        let slot = self.slot.lock().map_err(|_| anyhow!("token slot poisoned"))?;
        Ok(slot.clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|_| anyhow!("token slot poisoned"))?;
        *slot = Some(token.to_string());
        Ok(())
    }
}
