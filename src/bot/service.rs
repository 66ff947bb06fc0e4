use std::sync::Arc;
use std::time::Duration;

use teloxide::types::{ChatId, MessageId, UserId};
use tracing::{debug, error, info, warn};

use super::intent::Intent;
use super::keyboard::{Keyboard, Translatable};
use super::transport::ChatTransport;
use crate::access::{AccessControl, AddOutcome, RemoveOutcome};
use crate::error::AccessError;
use crate::prediction::PredictionCache;
use crate::round::{RoundSchedule, RoundSnapshot};
use crate::templates::plans;
use crate::templates::{owner, phrasebook, Language, LanguagePrefs, Tier};
use crate::utils::Metrics;

/// An inbound text message
#[derive(Debug, Clone)]
pub struct Inbound {
    pub chat: ChatId,
    pub user: UserId,
    pub text: String,
}

/// An inline-button press
#[derive(Debug, Clone)]
pub struct CallbackEvent {
    pub id: String,
    pub user: UserId,
    pub data: String,
    /// Chat and message carrying the pressed button, if still accessible
    pub origin: Option<(ChatId, MessageId)>,
}

/// Point-in-time view for the admin status endpoint
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    pub allowed_users: usize,
    pub cached_predictions: usize,
    pub owner_configured: bool,
    pub round: RoundSnapshot,
}

/// Owns all bot state and answers every update.
pub struct BotService {
    transport: Arc<dyn ChatTransport>,
    bot_username: String,
    rounds: RoundSchedule,
    predictions: PredictionCache,
    access: AccessControl,
    languages: LanguagePrefs,
    metrics: Arc<Metrics>,
    loading_step: Duration,
}

impl BotService {
    pub fn new(
        transport: Arc<dyn ChatTransport>,
        bot_username: impl Into<String>,
        rounds: RoundSchedule,
        access: AccessControl,
        metrics: Arc<Metrics>,
        loading_step: Duration,
    ) -> Self {
        Self {
            transport,
            bot_username: bot_username.into(),
            rounds,
            predictions: PredictionCache::new(),
            access,
            languages: LanguagePrefs::new(),
            metrics,
            loading_step,
        }
    }

    /// Swap the prediction cache, e.g. for a seeded one
    pub fn with_prediction_cache(mut self, predictions: PredictionCache) -> Self {
        self.predictions = predictions;
        self
    }

    pub async fn status(&self) -> ServiceStatus {
        ServiceStatus {
            allowed_users: self.access.allowed_count().await,
            cached_predictions: self.predictions.len().await,
            owner_configured: self.access.has_owner(),
            round: self.rounds.snapshot(),
        }
    }

    pub async fn handle_message(&self, inbound: Inbound) -> anyhow::Result<()> {
        let Some(intent) = Intent::parse(&inbound.text, &self.bot_username) else {
            debug!(user = inbound.user.0, "Ignoring unrecognized message");
            return Ok(());
        };

        self.metrics
            .updates_total
            .with_label_values(&[intent.name()])
            .inc();
        let language = self.languages.get(inbound.user.0).await;
        self.dispatch(inbound.chat, inbound.user, intent, language)
            .await
    }

    /// Handle the "translate to Bangla" button
    pub async fn handle_callback(&self, callback: CallbackEvent) -> anyhow::Result<()> {
        let result = match Translatable::from_callback_data(&callback.data) {
            Some(command) => {
                self.metrics
                    .updates_total
                    .with_label_values(&["translate"])
                    .inc();
                self.translate(&callback, command).await
            }
            None => {
                debug!(data = %callback.data, "Ignoring unknown callback");
                Ok(())
            }
        };

        if let Err(e) = self.transport.answer_callback(callback.id.clone()).await {
            self.metrics.transport_errors.inc();
            warn!("Failed to answer callback {}: {}", callback.id, e);
        }
        result
    }

    async fn translate(&self, callback: &CallbackEvent, command: Translatable) -> anyhow::Result<()> {
        let user = callback.user;
        self.languages.set(user.0, Language::Bangla).await;
        info!(user = user.0, command = command.as_str(), "Switched user to Bangla");

        let Some((chat, message)) = callback.origin else {
            warn!(user = user.0, "Callback message no longer accessible");
            return Ok(());
        };

        if let Err(e) = self.transport.clear_keyboard(chat, message).await {
            self.metrics.transport_errors.inc();
            warn!("Failed to remove translate button: {}", e);
        }

        let intent = match command {
            Translatable::Start => Intent::Start,
            Translatable::Help => Intent::Help,
            Translatable::Buy => Intent::Buy,
            Translatable::Generate => Intent::Generate,
        };
        self.dispatch(chat, user, intent, Language::Bangla).await
    }

    async fn dispatch(
        &self,
        chat: ChatId,
        user: UserId,
        intent: Intent,
        language: Language,
    ) -> anyhow::Result<()> {
        match intent {
            Intent::Start => {
                let tier = self.tier(user).await;
                let text = phrasebook(language).start(user.0, tier);
                self.reply(chat, text, localized(language, Translatable::Start))
                    .await
            }
            Intent::Help => {
                let text = phrasebook(language).help().to_string();
                self.reply(chat, text, localized(language, Translatable::Help))
                    .await
            }
            Intent::Buy => {
                let text = phrasebook(language).buy(user.0);
                self.reply(chat, text, localized(language, Translatable::Buy))
                    .await
            }
            Intent::Generate => self.generate(chat, user, language).await,
            Intent::AddUser(arg) => self.add_user(chat, user, &arg).await,
            Intent::RemoveUser(arg) => self.remove_user(chat, user, &arg).await,
            Intent::Plans => {
                self.reply(chat, plans::plans_menu().to_string(), Keyboard::Plans)
                    .await
            }
            Intent::MainMenu => {
                self.reply(chat, plans::back_to_main().to_string(), Keyboard::Main)
                    .await
            }
            Intent::PlansMenu => {
                self.reply(chat, plans::back_to_plans().to_string(), Keyboard::Plans)
                    .await
            }
            Intent::PlanMenu(tier) => {
                self.reply(chat, plans::tier_menu(tier), Keyboard::PlanTier(tier))
                    .await
            }
            Intent::PlanOption(tier, steps) => {
                self.reply(
                    chat,
                    plans::plan_card(tier, steps),
                    Keyboard::PlanTier(tier),
                )
                .await
            }
        }
    }

    async fn tier(&self, user: UserId) -> Tier {
        if self.access.is_allowed(user.0).await {
            Tier::Premium
        } else {
            Tier::Free
        }
    }

    async fn reply(&self, chat: ChatId, text: String, keyboard: Keyboard) -> anyhow::Result<()> {
        self.transport.send(chat, text, keyboard).await?;
        Ok(())
    }

    async fn generate(&self, chat: ChatId, user: UserId, language: Language) -> anyhow::Result<()> {
        let book = phrasebook(language);
        let keyboard = localized(language, Translatable::Generate);

        if self.tier(user).await == Tier::Free {
            return self
                .reply(chat, book.generate_locked(user.0), keyboard)
                .await;
        }

        self.play_loading_animation(chat, language).await;

        let snapshot = self.rounds.snapshot();
        let lookup = self
            .predictions
            .get_or_create(user.0, &snapshot.round_id)
            .await;
        let source = if lookup.fresh { "fresh" } else { "cached" };
        self.metrics
            .predictions_total
            .with_label_values(&[source])
            .inc();
        self.metrics
            .cached_predictions
            .set(self.predictions.len().await as i64);

        info!(
            user = user.0,
            round = %snapshot.round_id,
            size = %lookup.prediction.size,
            color = %lookup.prediction.color,
            source,
            "Prediction served"
        );

        let text = book.prediction(&lookup.prediction, snapshot.seconds_left);
        self.reply(chat, text, keyboard).await
    }

    /// Send, edit, then delete a placeholder. Failures only get logged.
    async fn play_loading_animation(&self, chat: ChatId, language: Language) {
        let book = phrasebook(language);

        let message = match self
            .transport
            .send(chat, book.loading().to_string(), Keyboard::None)
            .await
        {
            Ok(message) => message,
            Err(e) => {
                self.metrics.transport_errors.inc();
                warn!("Failed to send loading message: {}", e);
                return;
            }
        };

        tokio::time::sleep(self.loading_step).await;
        if let Err(e) = self
            .transport
            .edit_text(chat, message, book.calculating().to_string())
            .await
        {
            self.metrics.transport_errors.inc();
            warn!("Failed to update loading message: {}", e);
        }

        tokio::time::sleep(self.loading_step).await;
        if let Err(e) = self.transport.delete(chat, message).await {
            self.metrics.transport_errors.inc();
            warn!("Failed to delete loading message: {}", e);
        }
    }

    async fn add_user(&self, chat: ChatId, caller: UserId, arg: &str) -> anyhow::Result<()> {
        let result = self.access.add(caller.0, arg).await;
        let reply = match result {
            Ok(AddOutcome::Added(id)) => {
                info!("Added new user: {}", id);
                self.record_owner_command("adduser", "added").await;
                owner::user_added(id)
            }
            Ok(AddOutcome::AlreadyPresent(id)) => {
                self.record_owner_command("adduser", "already_present").await;
                owner::already_allowed(id)
            }
            Err(e) => match self.owner_error_reply("adduser", caller, e).await {
                Some(reply) => reply,
                None => return Ok(()),
            },
        };
        self.reply(chat, reply, Keyboard::None).await
    }

    async fn remove_user(&self, chat: ChatId, caller: UserId, arg: &str) -> anyhow::Result<()> {
        let result = self.access.remove(caller.0, arg).await;
        let removed = match result {
            Ok(RemoveOutcome::Removed(id)) => {
                info!("Removed user: {}", id);
                self.record_owner_command("removeuser", "removed").await;
                id
            }
            Ok(RemoveOutcome::NotPresent(id)) => {
                self.record_owner_command("removeuser", "not_present").await;
                return self.reply(chat, owner::not_allowed(id), Keyboard::None).await;
            }
            Err(e) => {
                return match self.owner_error_reply("removeuser", caller, e).await {
                    Some(reply) => self.reply(chat, reply, Keyboard::None).await,
                    None => Ok(()),
                };
            }
        };

        self.reply(chat, owner::user_removed(removed), Keyboard::None)
            .await?;

        // best effort, the removal already happened
        let notice = owner::subscription_ended().to_string();
        if let Err(e) = self
            .transport
            .send(ChatId(removed as i64), notice, Keyboard::None)
            .await
        {
            self.metrics.notify_failures.inc();
            error!("Could not notify user {}: {}", removed, e);
        }
        Ok(())
    }

    /// Map a failed owner command to its reply; `None` means stay silent
    async fn owner_error_reply(
        &self,
        command: &'static str,
        caller: UserId,
        error: AccessError,
    ) -> Option<String> {
        match error {
            AccessError::NotOwner(_) => {
                warn!("Unauthorized {} attempt by {}", command, caller.0);
                self.record_owner_command(command, "unauthorized").await;
                None
            }
            AccessError::MissingArgument => {
                self.record_owner_command(command, "usage").await;
                Some(owner::usage(command))
            }
            AccessError::InvalidUserId(raw) => {
                debug!("Rejected {} argument {:?}", command, raw);
                self.record_owner_command(command, "invalid").await;
                Some(owner::invalid_format(command))
            }
            AccessError::Store(e) => {
                error!("{} error: {}", command, e);
                self.record_owner_command(command, "error").await;
                Some(owner::error(&e.to_string()))
            }
        }
    }

    async fn record_owner_command(&self, command: &str, result: &str) {
        self.metrics
            .owner_commands_total
            .with_label_values(&[command, result])
            .inc();
        self.metrics
            .allowlist_size
            .set(self.access.allowed_count().await as i64);
    }
}

/// English replies offer the translate button, Bangla ones the main keyboard
fn localized(language: Language, command: Translatable) -> Keyboard {
    match language {
        Language::English => Keyboard::Translate(command),
        Language::Bangla => Keyboard::Main,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::EnvStore;
    use crate::bot::transport::MockChatTransport;
    use crate::error::TransportError;
    use crate::round::{ManualClock, RoundSettings};
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    const OWNER: u64 = 1000;

    fn service(transport: MockChatTransport, dir: &tempfile::TempDir, allowed: &[u64]) -> BotService {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 5).unwrap(),
        ));
        let rounds = RoundSchedule::new(clock, RoundSettings::default()).unwrap();
        let access = AccessControl::new(
            OWNER,
            allowed.iter().copied(),
            EnvStore::new(dir.path().join(".env")),
        );
        BotService::new(
            Arc::new(transport),
            "wingo_bot",
            rounds,
            access,
            Arc::new(Metrics::new().unwrap()),
            Duration::ZERO,
        )
    }

    fn message(user: u64, text: &str) -> Inbound {
        Inbound {
            chat: ChatId(user as i64),
            user: UserId(user),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_help_in_english_offers_translation() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockChatTransport::new();
        transport
            .expect_send()
            .withf(|chat, text, keyboard| {
                *chat == ChatId(5)
                    && text.contains("WinGo Prediction Bot Guide")
                    && *keyboard == Keyboard::Translate(Translatable::Help)
            })
            .times(1)
            .returning(|_, _, _| Ok(MessageId(1)));

        let service = service(transport, &dir, &[]);
        service.handle_message(message(5, "/help")).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_owner_add_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockChatTransport::new();
        transport.expect_send().never();

        let service = service(transport, &dir, &[]);
        service
            .handle_message(message(5, "/adduser 42"))
            .await
            .unwrap();
        assert!(!service.access.is_allowed(42).await);
    }

    #[tokio::test]
    async fn test_remove_notification_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockChatTransport::new();
        transport
            .expect_send()
            .with(eq(ChatId(OWNER as i64)), mockall::predicate::always(), eq(Keyboard::None))
            .times(1)
            .returning(|_, _, _| Ok(MessageId(10)));
        transport
            .expect_send()
            .with(eq(ChatId(42)), mockall::predicate::always(), eq(Keyboard::None))
            .times(1)
            .returning(|_, _, _| Err(TransportError::Rejected("bot was blocked by the user".into())));

        let service = service(transport, &dir, &[42]);
        service
            .handle_message(message(OWNER, "/removeuser 42"))
            .await
            .unwrap();

        assert!(!service.access.is_allowed(42).await);
        assert_eq!(service.metrics.notify_failures.get(), 1);
    }

    #[tokio::test]
    async fn test_loading_failure_still_delivers_prediction() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockChatTransport::new();
        transport
            .expect_send()
            .withf(|_, _, keyboard| *keyboard == Keyboard::None)
            .times(1)
            .returning(|_, _, _| Err(TransportError::Rejected("flood".into())));
        transport
            .expect_send()
            .withf(|_, text, _| text.contains("Next draw in: 21 seconds"))
            .times(1)
            .returning(|_, _, _| Ok(MessageId(2)));

        let service = service(transport, &dir, &[5]);
        service
            .handle_message(message(5, "✨ Generate Prediction"))
            .await
            .unwrap();
        assert_eq!(service.metrics.transport_errors.get(), 1);
    }

    #[tokio::test]
    async fn test_unknown_callback_only_answered() {
        let dir = tempfile::tempdir().unwrap();
        let mut transport = MockChatTransport::new();
        transport
            .expect_answer_callback()
            .with(eq("cb-1".to_string()))
            .times(1)
            .returning(|_| Ok(()));
        transport.expect_send().never();
        transport.expect_clear_keyboard().never();

        let service = service(transport, &dir, &[]);
        service
            .handle_callback(CallbackEvent {
                id: "cb-1".to_string(),
                user: UserId(5),
                data: "noop".to_string(),
                origin: Some((ChatId(5), MessageId(3))),
            })
            .await
            .unwrap();
        assert_eq!(service.languages.get(5).await, Language::English);
    }
}
