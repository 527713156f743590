//! Discord bot integration.
//!
//! The bot keeps the Serenity cache populated with guilds, members and presences,
//! answers text commands, and starts the inactivity scheduler once the cache is
//! ready.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and role data
//! - `GUILD_MEMBERS` - Full member lists (privileged intent)
//! - `GUILD_PRESENCES` - Online status and activities (privileged intent)
//! - `GUILD_MESSAGES` / `MESSAGE_CONTENT` - Text commands (`MESSAGE_CONTENT` is privileged)
//!
//! Privileged intents must be enabled in the Discord Developer Portal for the bot
//! application.

pub mod command;
pub mod gateway;
pub mod handler;
pub mod start;
