pub mod allowlist;
pub mod env_store;

pub use allowlist::AllowList;
pub use env_store::EnvStore;

use tokio::sync::Mutex;

use crate::error::AccessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(u64),
    AlreadyPresent(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(u64),
    NotPresent(u64),
}

/// Owner-gated management of the allow-list.
///
/// Changes are applied in memory first and then persisted. A failed write
/// is reported to the caller but not rolled back.
///
/// `changes` is held from the in-memory update until the write finishes, so
/// the file always reflects the latest mutation.
pub struct AccessControl {
    owner_id: u64,
    allowed: AllowList,
    store: EnvStore,
    changes: Mutex<()>,
}

impl AccessControl {
    pub fn new(owner_id: u64, allowed: impl IntoIterator<Item = u64>, store: EnvStore) -> Self {
        Self {
            owner_id,
            allowed: AllowList::new(allowed),
            store,
            changes: Mutex::new(()),
        }
    }

    /// Owner id 0 means no owner was configured
    pub fn has_owner(&self) -> bool {
        self.owner_id != 0
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        self.has_owner() && user_id == self.owner_id
    }

    pub async fn is_allowed(&self, user_id: u64) -> bool {
        self.allowed.contains(user_id).await
    }

    pub async fn allowed_count(&self) -> usize {
        self.allowed.len().await
    }

    pub async fn add(&self, caller: u64, arg: &str) -> Result<AddOutcome, AccessError> {
        self.ensure_owner(caller)?;
        let user_id = parse_user_id(arg)?;

        let _change = self.changes.lock().await;
        match self.allowed.insert(user_id).await {
            Some(users) => {
                self.store.save_allowed_users(users).await?;
                Ok(AddOutcome::Added(user_id))
            }
            None => Ok(AddOutcome::AlreadyPresent(user_id)),
        }
    }

    pub async fn remove(&self, caller: u64, arg: &str) -> Result<RemoveOutcome, AccessError> {
        self.ensure_owner(caller)?;
        let user_id = parse_user_id(arg)?;

        let _change = self.changes.lock().await;
        match self.allowed.remove(user_id).await {
            Some(users) => {
                self.store.save_allowed_users(users).await?;
                Ok(RemoveOutcome::Removed(user_id))
            }
            None => Ok(RemoveOutcome::NotPresent(user_id)),
        }
    }

    fn ensure_owner(&self, caller: u64) -> Result<(), AccessError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(AccessError::NotOwner(caller))
        }
    }
}

/// First whitespace-separated token as a Telegram user id
pub fn parse_user_id(arg: &str) -> Result<u64, AccessError> {
    let token = arg
        .split_whitespace()
        .next()
        .ok_or(AccessError::MissingArgument)?;
    token
        .parse()
        .map_err(|_| AccessError::InvalidUserId(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const OWNER: u64 = 1000;

    fn control(dir: &tempfile::TempDir, initial: &[u64]) -> AccessControl {
        let path = dir.path().join(".env");
        fs::write(&path, "BOT_TOKEN=t\nOWNER_ID=1000\n").unwrap();
        AccessControl::new(OWNER, initial.iter().copied(), EnvStore::new(path))
    }

    fn env_contents(dir: &tempfile::TempDir) -> String {
        fs::read_to_string(dir.path().join(".env")).unwrap()
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let access = control(&dir, &[]);

        assert_eq!(access.add(OWNER, "42").await.unwrap(), AddOutcome::Added(42));
        assert_eq!(
            access.add(OWNER, "42").await.unwrap(),
            AddOutcome::AlreadyPresent(42)
        );
        assert_eq!(access.allowed_count().await, 1);
        assert!(env_contents(&dir).contains("ALLOWED_USERS=42\n"));
    }

    #[tokio::test]
    async fn test_remove_absent_leaves_list_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let access = control(&dir, &[1, 2]);

        assert_eq!(
            access.remove(OWNER, "3").await.unwrap(),
            RemoveOutcome::NotPresent(3)
        );
        assert_eq!(access.allowed_count().await, 2);
        // nothing was written
        assert!(!env_contents(&dir).contains("ALLOWED_USERS"));
    }

    #[tokio::test]
    async fn test_remove_present_persists() {
        let dir = tempfile::tempdir().unwrap();
        let access = control(&dir, &[1, 2]);

        assert_eq!(
            access.remove(OWNER, "1").await.unwrap(),
            RemoveOutcome::Removed(1)
        );
        assert!(!access.is_allowed(1).await);
        assert!(env_contents(&dir).contains("ALLOWED_USERS=2\n"));
    }

    #[tokio::test]
    async fn test_non_owner_cannot_change_list() {
        let dir = tempfile::tempdir().unwrap();
        let access = control(&dir, &[1]);

        assert!(matches!(
            access.add(7, "42").await,
            Err(AccessError::NotOwner(7))
        ));
        assert!(matches!(
            access.remove(7, "1").await,
            Err(AccessError::NotOwner(7))
        ));
        assert!(access.is_allowed(1).await);
        assert!(!access.is_allowed(42).await);
    }

    #[tokio::test]
    async fn test_zero_owner_disables_commands() {
        let dir = tempfile::tempdir().unwrap();
        let access = AccessControl::new(0, Vec::<u64>::new(), EnvStore::new(dir.path().join(".env")));

        assert!(!access.has_owner());
        assert!(matches!(
            access.add(0, "42").await,
            Err(AccessError::NotOwner(0))
        ));
    }

    #[tokio::test]
    async fn test_persist_failure_keeps_memory_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = EnvStore::new(dir.path().join("missing").join(".env"));
        let access = AccessControl::new(OWNER, Vec::<u64>::new(), store);

        assert!(matches!(
            access.add(OWNER, "42").await,
            Err(AccessError::Store(_))
        ));
        assert!(access.is_allowed(42).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_adds_all_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let access = std::sync::Arc::new(control(&dir, &[]));

        let handles: Vec<_> = (1..=16u64)
            .map(|id| {
                let access = access.clone();
                tokio::spawn(async move { access.add(OWNER, &id.to_string()).await })
            })
            .collect();
        for handle in handles {
            assert!(matches!(handle.await.unwrap(), Ok(AddOutcome::Added(_))));
        }

        let expected: Vec<String> = (1..=16u64).map(|id| id.to_string()).collect();
        assert_eq!(access.allowed_count().await, 16);
        assert!(env_contents(&dir).contains(&format!("ALLOWED_USERS={}\n", expected.join(","))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_interleaved_add_remove_matches_memory() {
        let dir = tempfile::tempdir().unwrap();
        let access = std::sync::Arc::new(control(&dir, &[100, 200, 300]));

        let mut handles = Vec::new();
        for id in 1..=8u64 {
            let access = access.clone();
            handles.push(tokio::spawn(async move {
                access.add(OWNER, &id.to_string()).await.map(|_| ())
            }));
        }
        for id in [100u64, 200, 300] {
            let access = access.clone();
            handles.push(tokio::spawn(async move {
                access.remove(OWNER, &id.to_string()).await.map(|_| ())
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let persisted = crate::utils::config::parse_user_list(
            &dotenvy::from_path_iter(dir.path().join(".env"))
                .unwrap()
                .map(|item| item.unwrap())
                .find(|(key, _)| key == "ALLOWED_USERS")
                .map(|(_, value)| value)
                .unwrap_or_default(),
        )
        .unwrap();
        assert_eq!(persisted, (1..=8u64).collect());
        for id in 1..=8u64 {
            assert!(access.is_allowed(id).await);
        }
    }

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id(" 123 extra").unwrap(), 123);
        assert!(matches!(parse_user_id("   "), Err(AccessError::MissingArgument)));
        assert!(matches!(
            parse_user_id("abc"),
            Err(AccessError::InvalidUserId(t)) if t == "abc"
        ));
        assert!(matches!(
            parse_user_id("-5"),
            Err(AccessError::InvalidUserId(_))
        ));
    }
}
