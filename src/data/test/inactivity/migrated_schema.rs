use super::*;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

/// Tests the repository against the schema created by the migrations.
///
/// Verifies the sighting, flag and repeated sighting cycle on the production
/// table: the flag and original guild survive a later sighting.
///
/// Expected: Ok with role_added true and guild_id unchanged
#[tokio::test]
async fn upsert_keeps_flag_on_migrated_table() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let repo = InactivityRepository::new(&db);
    let first_seen = Utc::now() - Duration::days(40);

    repo.upsert_last_seen(123, 456, first_seen).await?;
    assert_eq!(repo.mark_role_added(123).await?, 1);

    let seen_at = Utc::now();
    let record = repo.upsert_last_seen(123, 789, seen_at).await?;

    assert_eq!(record.guild_id, 456);
    assert!(record.role_added);
    assert_close(record.last_seen, seen_at);

    let flagged = repo.get_flagged_by_guild(456).await?;
    assert_eq!(flagged.len(), 1);

    Ok(())
}

/// Tests that a fresh row on the migrated table defaults the flag to false.
///
/// Expected: Ok with role_added false
#[tokio::test]
async fn new_row_defaults_flag_on_migrated_table() -> Result<(), DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;

    let record = InactivityRepository::new(&db)
        .upsert_last_seen(123, 456, Utc::now())
        .await?;

    assert!(!record.role_added);
    assert_eq!(entity::prelude::Inactivity::find().count(&db).await?, 1);

    Ok(())
}
