//! SeaORM entities for the inactivity bot.

pub mod prelude;

pub mod inactivity;
