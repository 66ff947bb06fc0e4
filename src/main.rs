mod access;
mod api;
mod bot;
mod error;
mod prediction;
mod round;
mod templates;
mod utils;


use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::access::{AccessControl, EnvStore};
use crate::bot::{BotService, Command, TelegramTransport};
use crate::round::{RoundSchedule, SystemClock};
use crate::utils::{Config, LogFormat, Metrics};

#[derive(Parser, Debug)]
#[command(name = "wingo-bot", version, about = "WinGo 30s prediction bot for Telegram")]
struct Cli {
    /// Env file read at startup and rewritten on allow-list changes
    #[arg(long, env = "ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    #[arg(long, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let env_file_found = utils::load_env_file(&cli.env_file)?;
    let _log_guard = utils::init_logging(cli.log_format);

    if env_file_found {
        tracing::info!(path = %cli.env_file.display(), "Loaded env file");
    } else {
        tracing::warn!(path = %cli.env_file.display(), "Env file not found, using process environment");
    }

    let config = Config::load(&cli.env_file)?;
    let metrics = Arc::new(Metrics::new()?);
    metrics.allowlist_size.set(config.allowed_users.len() as i64);

    tracing::info!(
        owner_configured = config.owner_id != 0,
        allowed_users = config.allowed_users.len(),
        env_file = %config.env_file.display(),
        "Starting WinGo prediction bot v{}",
        env!("CARGO_PKG_VERSION")
    );
    if config.owner_id == 0 {
        tracing::warn!("OWNER_ID is not set, owner commands are disabled");
    }

    let bot = Bot::new(config.bot_token.clone());
    let me = bot.get_me().await?;
    let username = me.username().to_string();
    tracing::info!("Authorized as @{}", username);

    let rounds = RoundSchedule::new(Arc::new(SystemClock), config.round)?;
    let access = AccessControl::new(
        config.owner_id,
        config.allowed_users.iter().copied(),
        EnvStore::new(config.env_file.clone()),
    );
    let service = Arc::new(BotService::new(
        Arc::new(TelegramTransport::new(bot.clone())),
        username,
        rounds,
        access,
        metrics.clone(),
        config.loading_step,
    ));

    if let Some(port) = config.admin_port {
        let state = Arc::new(api::AdminState::new(service.clone(), metrics.clone()));
        tokio::spawn(async move {
            if let Err(e) = api::serve(port, state).await {
                tracing::error!("Admin API stopped: {}", e);
            }
        });
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to register command list: {}", e);
    }

    bot::dispatch::run(bot, service).await;
    Ok(())
}
