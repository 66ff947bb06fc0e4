//! Bilingual message bodies. All text is Telegram HTML.

pub mod bangla;
pub mod english;
pub mod language;
pub mod owner;
pub mod plans;

pub use language::{Language, LanguagePrefs};

use crate::prediction::Prediction;

/// Access tier derived from allow-list membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Free,
    Premium,
}

/// Message catalog for one language
pub trait Phrasebook: Send + Sync {
    fn uid_line(&self, user_id: u64) -> String;
    fn welcome_free(&self) -> &'static str;
    fn welcome_premium(&self) -> &'static str;
    fn help(&self) -> &'static str;
    fn buy(&self, user_id: u64) -> String;
    fn subscription_required(&self) -> &'static str;
    fn loading(&self) -> &'static str;
    fn calculating(&self) -> &'static str;
    fn prediction(&self, prediction: &Prediction, seconds_left: u32) -> String;

    fn start(&self, user_id: u64, tier: Tier) -> String {
        match tier {
            Tier::Free => format!("{}{}", self.uid_line(user_id), self.welcome_free()),
            Tier::Premium => self.welcome_premium().to_string(),
        }
    }

    fn generate_locked(&self, user_id: u64) -> String {
        format!(
            "{}{}",
            self.uid_line(user_id),
            self.subscription_required()
        )
    }
}

pub fn phrasebook(language: Language) -> &'static dyn Phrasebook {
    match language {
        Language::English => &english::English,
        Language::Bangla => &bangla::Bangla,
    }
}
