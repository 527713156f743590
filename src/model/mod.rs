//! Domain models shared by the service and data layers.
//!
//! - `discord` - Owned snapshots of gateway state (guilds, roles, members, presence)
//! - `inactivity` - Inactivity records and pass summaries

pub mod discord;
pub mod inactivity;
