use std::str::FromStr;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://inactivity.db?mode=rwc";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_INACTIVE_ROLE_NAME: &str = "💤 Tín Đồ Ngủ Đông";
pub const DEFAULT_INACTIVE_DAYS: i64 = 30;
pub const DEFAULT_CHECK_INTERVAL_HOURS: u64 = 24;
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

const SECONDS_PER_HOUR: u64 = 60 * 60;

#[derive(Clone)]
pub struct Config {
    pub discord_token: String,
    pub database_url: String,
    pub port: u16,

    pub inactive_role_name: String,
    pub inactive_days: i64,
    pub check_interval_hours: u64,
    pub command_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset. Only `TOKEN` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let inactive_days = parse_var(&lookup, "INACTIVE_DAYS", DEFAULT_INACTIVE_DAYS)?;
        if inactive_days < 0 {
            return Err(invalid("INACTIVE_DAYS", inactive_days).into());
        }

        let check_interval_hours =
            parse_var(&lookup, "CHECK_INTERVAL_HOURS", DEFAULT_CHECK_INTERVAL_HOURS)?;
        if check_interval_hours == 0
            || check_interval_hours.checked_mul(SECONDS_PER_HOUR).is_none()
        {
            return Err(invalid("CHECK_INTERVAL_HOURS", check_interval_hours).into());
        }

        Ok(Self {
            discord_token: lookup("TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("TOKEN".to_string()))?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            inactive_role_name: lookup("INACTIVE_ROLE_NAME")
                .unwrap_or_else(|| DEFAULT_INACTIVE_ROLE_NAME.to_string()),
            inactive_days,
            check_interval_hours,
            command_prefix: lookup("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
        })
    }

    /// Time between two inactivity passes.
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_hours * SECONDS_PER_HOUR)
    }
}

fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn invalid(name: &str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}
