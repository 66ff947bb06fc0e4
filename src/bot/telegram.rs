use async_trait::async_trait;
use teloxide::payloads::{EditMessageTextSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, MessageId,
    ParseMode, ReplyMarkup,
};

use super::keyboard::{Keyboard, TRANSLATE_BUTTON};
use super::transport::ChatTransport;
use crate::error::TransportError;

/// Telegram Bot API transport
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn to_markup(keyboard: Keyboard) -> Option<ReplyMarkup> {
    if let Keyboard::Translate(command) = keyboard {
        let button = InlineKeyboardButton::callback(TRANSLATE_BUTTON, command.callback_data());
        return Some(ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(vec![
            vec![button],
        ])));
    }

    keyboard.reply_rows().map(|rows| {
        let buttons = rows
            .into_iter()
            .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        ReplyMarkup::Keyboard(KeyboardMarkup::new(buttons).resize_keyboard())
    })
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send(
        &self,
        chat: ChatId,
        text: String,
        keyboard: Keyboard,
    ) -> Result<MessageId, TransportError> {
        let request = self.bot.send_message(chat, text).parse_mode(ParseMode::Html);
        let sent = match to_markup(keyboard) {
            Some(markup) => request.reply_markup(markup).await?,
            None => request.await?,
        };
        Ok(sent.id)
    }

    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: String,
    ) -> Result<(), TransportError> {
        self.bot
            .edit_message_text(chat, message, text)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn delete(&self, chat: ChatId, message: MessageId) -> Result<(), TransportError> {
        self.bot.delete_message(chat, message).await?;
        Ok(())
    }

    async fn clear_keyboard(&self, chat: ChatId, message: MessageId) -> Result<(), TransportError> {
        // no reply_markup means "remove it"
        self.bot.edit_message_reply_markup(chat, message).await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: String) -> Result<(), TransportError> {
        self.bot.answer_callback_query(callback_id).await?;
        Ok(())
    }
}
