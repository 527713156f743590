use super::*;

/// Tests the first offline sighting of a member.
///
/// Verifies a single record is created with `role_added = false` and `last_seen`
/// equal to the sighting time.
///
/// Expected: Ok with record created
#[tokio::test]
async fn creates_record_on_first_sighting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seen_at = Utc::now();
    let repo = InactivityRepository::new(db);
    let record = repo.upsert_last_seen(123, 456, seen_at).await?;

    assert_eq!(record.member_id, 123);
    assert_eq!(record.guild_id, 456);
    assert!(!record.role_added);
    assert_close(record.last_seen, seen_at);

    let count = entity::prelude::Inactivity::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests a repeated sighting of a tracked member.
///
/// Verifies that only `last_seen` changes and no duplicate row is created.
///
/// Expected: Ok with record updated
#[tokio::test]
async fn updates_last_seen_of_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("123")
        .guild_id("456")
        .days_since_seen(10)
        .build()
        .await?;

    let seen_at = Utc::now();
    let repo = InactivityRepository::new(db);
    let record = repo.upsert_last_seen(123, 456, seen_at).await?;

    assert_close(record.last_seen, seen_at);

    let count = entity::prelude::Inactivity::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an upsert never resets the role flag.
///
/// Expected: Ok with role_added still true
#[tokio::test]
async fn preserves_role_added_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("123")
        .days_since_seen(40)
        .role_added(true)
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    let record = repo.upsert_last_seen(123, 1, Utc::now()).await?;

    assert!(record.role_added);

    let stored = repo.find_by_member_id(123).await?.unwrap();
    assert!(stored.role_added);

    Ok(())
}

/// Tests that the guild of the first sighting is kept.
///
/// Expected: Ok with original guild_id
#[tokio::test]
async fn keeps_original_guild_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityRepository::new(db);
    repo.upsert_last_seen(123, 111, Utc::now() - Duration::days(1))
        .await?;
    let record = repo.upsert_last_seen(123, 222, Utc::now()).await?;

    assert_eq!(record.guild_id, 111);

    Ok(())
}

/// Tests upserting several members.
///
/// Expected: Ok with one row per member
#[tokio::test]
async fn tracks_members_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityRepository::new(db);
    let now = Utc::now();
    repo.upsert_last_seen(1, 9, now).await?;
    repo.upsert_last_seen(2, 9, now).await?;
    repo.upsert_last_seen(3, 9, now).await?;
    repo.upsert_last_seen(1, 9, now).await?;

    let count = entity::prelude::Inactivity::find().count(db).await?;
    assert_eq!(count, 3);

    Ok(())
}
