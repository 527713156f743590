//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return, so gateway snapshot code can be tested without a live
//! connection.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_member, create_test_role};
//!
//! let mut guild = create_test_guild(123456789, "Test Guild", 100000000000000000);
//! let role = create_test_role(111111111, "Sleeper", 0x5865F2, 3);
//! guild.roles.insert(role.id, role);
//!
//! let member = create_test_member(123456789, 222222222, "alice", false, &[111111111]);
//! guild.members.insert(member.user.id, member);
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod guild;
pub mod member;
pub mod role;

pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::{create_test_role, create_test_role_with_permissions};
