use super::*;

/// Tests setting the role flag of a tracked member.
///
/// Expected: Ok(1) with role_added true and last_seen unchanged
#[tokio::test]
async fn sets_flag_on_tracked_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::inactivity::InactivityFactory::new(db)
        .member_id("123")
        .days_since_seen(31)
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    let updated = repo.mark_role_added(123).await?;

    assert_eq!(updated, 1);

    let record = repo.find_by_member_id(123).await?.unwrap();
    assert!(record.role_added);
    assert_close(record.last_seen, created.last_seen.unwrap());

    Ok(())
}

/// Tests that only the targeted member is flagged.
///
/// Expected: Ok with other records untouched
#[tokio::test]
async fn leaves_other_members_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("1")
        .build()
        .await?;
    factory::inactivity::InactivityFactory::new(db)
        .member_id("2")
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    repo.mark_role_added(1).await?;

    assert!(repo.find_by_member_id(1).await?.unwrap().role_added);
    assert!(!repo.find_by_member_id(2).await?.unwrap().role_added);

    Ok(())
}

/// Tests flagging a member without a record.
///
/// Expected: Ok(0) and no row created
#[tokio::test]
async fn is_noop_for_untracked_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityRepository::new(db);
    let updated = repo.mark_role_added(123).await?;

    assert_eq!(updated, 0);
    assert!(repo.find_by_member_id(123).await?.is_none());

    Ok(())
}
