//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `crate::model` so the service layer never depends on database structures.

pub mod inactivity;

pub use inactivity::InactivityRepository;

#[cfg(test)]
mod test;
