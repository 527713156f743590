use crate::data::inactivity::InactivityRepository;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod clear_role_added;
mod find_by_member_id;
mod get_flagged_by_guild;
mod mark_role_added;
mod migrated_schema;
mod upsert_last_seen;

/// Asserts two timestamps are within a second of each other.
///
/// SQLite stores timestamps as text, so sub-second precision is not guaranteed to
/// survive a round trip.
fn assert_close(actual: Option<DateTime<Utc>>, expected: DateTime<Utc>) {
    let actual = actual.expect("timestamp should be set");
    let diff = (actual - expected).num_milliseconds().abs();
    assert!(diff < 1000, "expected {} to be close to {}", actual, expected);
}
