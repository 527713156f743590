//! Business logic of the bot.
//!
//! - `presence` - Records offline sightings (Presence Tracker)
//! - `enforcement` - Grants the marker role after the inactivity threshold (Role Enforcer)
//! - `inactivity` - Runs one complete pass over every guild
//! - `command` - Text command handlers

pub mod command;
pub mod enforcement;
pub mod inactivity;
pub mod presence;

#[cfg(test)]
pub(crate) mod test;
