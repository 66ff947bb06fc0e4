use async_trait::async_trait;
use teloxide::types::{ChatId, MessageId};

use super::keyboard::Keyboard;
use crate::error::TransportError;

/// Outbound side of the chat platform
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(
        &self,
        chat: ChatId,
        text: String,
        keyboard: Keyboard,
    ) -> Result<MessageId, TransportError>;

    async fn edit_text(
        &self,
        chat: ChatId,
        message: MessageId,
        text: String,
    ) -> Result<(), TransportError>;

    async fn delete(&self, chat: ChatId, message: MessageId) -> Result<(), TransportError>;

    /// Drop the inline keyboard from an earlier message
    async fn clear_keyboard(&self, chat: ChatId, message: MessageId) -> Result<(), TransportError>;

    async fn answer_callback(&self, callback_id: String) -> Result<(), TransportError>;
}
