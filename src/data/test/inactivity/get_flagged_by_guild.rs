use super::*;

/// Tests listing flagged members of a guild.
///
/// Verifies that unflagged records and records of other guilds are excluded.
///
/// Expected: Ok with only flagged records of the guild
#[tokio::test]
async fn returns_flagged_records_of_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("1")
        .guild_id("100")
        .role_added(true)
        .build()
        .await?;
    factory::inactivity::InactivityFactory::new(db)
        .member_id("2")
        .guild_id("100")
        .build()
        .await?;
    factory::inactivity::InactivityFactory::new(db)
        .member_id("3")
        .guild_id("200")
        .role_added(true)
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    let flagged = repo.get_flagged_by_guild(100).await?;

    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].member_id, 1);

    Ok(())
}

/// Tests listing flagged members of a guild without any.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_none_flagged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_inactivity(db).await?;

    let repo = InactivityRepository::new(db);
    let flagged = repo.get_flagged_by_guild(1).await?;

    assert!(flagged.is_empty());

    Ok(())
}
