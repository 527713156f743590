//! Inactivity Bot Test Utils
//!
//! Provides shared testing utilities for the inactivity bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for
//! inserting inactivity records, and factories for Serenity API objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Inactivity;
//!
//! #[tokio::test]
//! async fn test_inactivity_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Inactivity)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
