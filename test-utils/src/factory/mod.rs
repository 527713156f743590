//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let record = factory::create_inactivity(&db).await?;
//!
//! // Customize through the builder
//! let record = factory::inactivity::InactivityFactory::new(&db)
//!     .member_id("987654321")
//!     .days_since_seen(31)
//!     .role_added(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod inactivity;

pub use inactivity::create_inactivity;
