pub mod dispatch;
pub mod intent;
pub mod keyboard;
pub mod service;
pub mod telegram;
pub mod transport;

pub use intent::{Command, Intent};
pub use keyboard::{Keyboard, Translatable};
pub use service::{BotService, CallbackEvent, Inbound, ServiceStatus};
pub use telegram::TelegramTransport;
pub use transport::ChatTransport;
