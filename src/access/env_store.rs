use std::collections::BTreeSet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::sync::Mutex;

use crate::error::StoreError;

pub const ALLOWED_USERS_KEY: &str = "ALLOWED_USERS";

/// `KEY=value` environment file holding the persisted allow-list.
///
/// Writes go to a temp file in the same directory that is then renamed over
/// the existing file, so a crash never leaves a half-written file behind.
/// The file keeps its permissions across rewrites.
pub struct EnvStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl EnvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Rewrite the `ALLOWED_USERS` entry, keeping every other line as-is.
    ///
    /// File I/O runs on the blocking pool; writes are serialized.
    pub async fn save_allowed_users(&self, users: BTreeSet<u64>) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let path = self.path.clone();
        let count = users.len();
        tokio::task::spawn_blocking(move || write_atomic(&path, &users)).await??;

        tracing::debug!(path = %self.path.display(), count, "Allow-list persisted");
        Ok(())
    }
}

fn write_atomic(path: &Path, users: &BTreeSet<u64>) -> Result<(), StoreError> {
    let (existing, permissions) = match fs::read_to_string(path) {
        Ok(contents) => (contents, Some(fs::metadata(path)?.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => (String::new(), None),
        Err(e) => return Err(e.into()),
    };
    let rendered = render_with_allowed_users(&existing, users);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(rendered.as_bytes())?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions)?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

/// Format ids the way `ALLOWED_USERS` expects them
pub fn format_user_list(users: &BTreeSet<u64>) -> String {
    users
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn is_allowed_users_line(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(ALLOWED_USERS_KEY)
        .map(|rest| rest.trim_start().starts_with('='))
        .unwrap_or(false)
}

fn render_with_allowed_users(existing: &str, users: &BTreeSet<u64>) -> String {
    let entry = (!users.is_empty())
        .then(|| format!("{}={}", ALLOWED_USERS_KEY, format_user_list(users)));

    let mut lines = Vec::new();
    let mut placed = false;
    for line in existing.lines() {
        if is_allowed_users_line(line) {
            if !placed {
                placed = true;
                if let Some(entry) = &entry {
                    lines.push(entry.clone());
                }
            }
            continue;
        }
        lines.push(line.to_string());
    }

    if !placed {
        if let Some(entry) = entry {
            // no blank line between the old tail and the new entry
            while lines.last().map(|l| l.trim().is_empty()).unwrap_or(false) {
                lines.pop();
            }
            lines.push(entry);
        }
    }

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
