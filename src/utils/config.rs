use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::round::RoundSettings;

/// Runtime configuration, read from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    /// 0 disables the owner-only commands
    pub owner_id: u64,
    pub allowed_users: BTreeSet<u64>,
    /// File that receives allow-list changes
    pub env_file: PathBuf,
    pub admin_port: Option<u16>,
    pub loading_step: Duration,
    pub round: RoundSettings,
}

/// Merge `env_file` into the process environment without overriding
/// variables that are already set. Returns false when the file is absent.
///
/// Runs before logging starts so that `RUST_LOG` from the file applies.
pub fn load_env_file(env_file: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(env_file) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::Invalid {
            key: "ENV_FILE",
            value: env_file.display().to_string(),
            reason: e.to_string(),
        }),
    }
}

impl Config {
    /// Read the process environment; `env_file` is where changes get saved
    pub fn load(env_file: &Path) -> Result<Self, ConfigError> {
        Self::from_source(env_file, |key| std::env::var(key).ok())
    }

    /// Build from any key lookup
    pub fn from_source<F>(env_file: &Path, get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = get("BOT_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let defaults = RoundSettings::default();
        let round = RoundSettings {
            utc_offset_hours: parse_or(&get, "ROUND_UTC_OFFSET_HOURS", defaults.utc_offset_hours)?,
            length_secs: parse_or(&get, "ROUND_LENGTH_SECS", defaults.length_secs)?,
            countdown_lead_secs: parse_or(&get, "COUNTDOWN_LEAD_SECS", defaults.countdown_lead_secs)?,
            round_lead_secs: parse_or(&get, "ROUND_LEAD_SECS", defaults.round_lead_secs)?,
        };
        round.validate()?;

        Ok(Self {
            bot_token,
            owner_id: parse_or(&get, "OWNER_ID", 0)?,
            allowed_users: parse_user_list(get("ALLOWED_USERS").as_deref().unwrap_or(""))?,
            env_file: env_file.to_path_buf(),
            admin_port: parse_optional(&get, "ADMIN_PORT")?,
            loading_step: Duration::from_millis(parse_or(&get, "LOADING_STEP_MS", 1000)?),
            round,
        })
    }
}

fn parse_optional<F, T>(get: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value: raw.clone(),
                reason: e.to_string(),
            }),
        _ => Ok(None),
    }
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional(get, key)?.unwrap_or(default))
}

/// Comma-separated ids; blank entries are skipped
pub fn parse_user_list(raw: &str) -> Result<BTreeSet<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                key: "ALLOWED_USERS",
                value: s.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
