use std::collections::BTreeSet;
use tokio::sync::RwLock;

/// Ids with premium access
pub struct AllowList {
    users: RwLock<BTreeSet<u64>>,
}

impl AllowList {
    pub fn new(users: impl IntoIterator<Item = u64>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    pub async fn contains(&self, user_id: u64) -> bool {
        self.users.read().await.contains(&user_id)
    }

    /// Insert and return the resulting set when the id was new
    pub async fn insert(&self, user_id: u64) -> Option<BTreeSet<u64>> {
        let mut users = self.users.write().await;
        users.insert(user_id).then(|| users.clone())
    }

    /// Remove and return the resulting set when the id was present
    pub async fn remove(&self, user_id: u64) -> Option<BTreeSet<u64>> {
        let mut users = self.users.write().await;
        users.remove(&user_id).then(|| users.clone())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    #[cfg(test)]
    pub async fn snapshot(&self) -> BTreeSet<u64> {
        self.users.read().await.clone()
    }
}
