use super::*;

/// Tests clearing the flag of a flagged member.
///
/// Expected: Ok(1) with role_added false
#[tokio::test]
async fn clears_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("123")
        .role_added(true)
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    let updated = repo.clear_role_added(123).await?;

    assert_eq!(updated, 1);
    assert!(!repo.find_by_member_id(123).await?.unwrap().role_added);

    Ok(())
}

/// Tests clearing a flag that is already false.
///
/// Expected: Ok with role_added still false
#[tokio::test]
async fn clearing_unflagged_member_keeps_it_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::inactivity::InactivityFactory::new(db)
        .member_id("123")
        .build()
        .await?;

    let repo = InactivityRepository::new(db);
    repo.clear_role_added(123).await?;

    assert!(!repo.find_by_member_id(123).await?.unwrap().role_added);

    Ok(())
}

/// Tests clearing the flag of a member without a record.
///
/// Expected: Ok(0)
#[tokio::test]
async fn is_noop_for_untracked_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_inactivity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InactivityRepository::new(db);

    assert_eq!(repo.clear_role_added(123).await?, 0);

    Ok(())
}
