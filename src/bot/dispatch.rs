use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::{debug, info};

use super::service::{BotService, CallbackEvent, Inbound};

/// Routing tree: text messages and callback queries go to the service
pub fn schema() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(
            |service: Arc<BotService>, msg: Message| async move {
                let Some(inbound) = inbound_from(&msg) else {
                    debug!(chat = msg.chat.id.0, "Skipping message without text or sender");
                    return Ok(());
                };
                service.handle_message(inbound).await
            },
        ))
        .branch(Update::filter_callback_query().endpoint(
            |service: Arc<BotService>, q: CallbackQuery| async move {
                service.handle_callback(callback_from(q)).await
            },
        ))
}

fn inbound_from(msg: &Message) -> Option<Inbound> {
    let user = msg.from.as_ref()?;
    let text = msg.text()?;
    Some(Inbound {
        chat: msg.chat.id,
        user: user.id,
        text: text.to_string(),
    })
}

fn callback_from(q: CallbackQuery) -> CallbackEvent {
    let origin = q.message.as_ref().map(|m| (m.chat().id, m.id()));
    CallbackEvent {
        id: q.id,
        user: q.from.id,
        data: q.data.unwrap_or_default(),
        origin,
    }
}

/// Long-poll until Ctrl-C
pub async fn run(bot: Bot, service: Arc<BotService>) {
    info!("Starting long polling");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![service])
        .default_handler(|upd| async move {
            debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("Update handler failed"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
}
