use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Bangla,
}

/// Per-user language choice, kept for the life of the process
#[derive(Default)]
pub struct LanguagePrefs {
    choices: RwLock<HashMap<u64, Language>>,
}

impl LanguagePrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: u64) -> Language {
        self.choices
            .read()
            .await
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    pub async fn set(&self, user_id: u64, language: Language) {
        self.choices.write().await.insert(user_id, language);
    }
}
