use super::*;

/// Tests finding an existing record.
///
/// Expected: Ok(Some) with IDs parsed back to u64
#[tokio::test]
async fn finds_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("123456789")
        .guild_id("987654321")
        .role_added(true)
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    let record = repo.find_by_member_id(123456789).await?.unwrap();

    assert_eq!(record.member_id, 123456789);
    assert_eq!(record.guild_id, 987654321);
    assert!(record.role_added);

    Ok(())
}

/// Tests finding a member that was never tracked.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_untracked_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_inactivity(db).await?;

    let repo = InactivityRepository::new(db);
    let record = repo.find_by_member_id(555).await?;

    assert!(record.is_none());

    Ok(())
}

/// Tests that a corrupted ID surfaces as an error instead of a panic.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unparseable_guild_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("42")
        .guild_id("not-a-guild")
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    let result = repo.find_by_member_id(42).await;

    assert!(result.is_err());

    Ok(())
}
