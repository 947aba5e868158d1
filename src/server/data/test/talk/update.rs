use super::*;

/// Tests updating a talk with its current row version.
///
/// Expected: Ok(Some) with new values and a changed row version
#[tokio::test]
async fn updates_talk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = TalkRepository::new(db);
    let mut talk = repo.get_by_id(created.id).await?.unwrap();
    let old_version = talk.row_version.clone();
    talk.room = Some("Room 101".to_string());
    talk.level = Some("300".to_string());

    let updated = repo.update(&talk).await?.unwrap();

    assert_eq!(updated.room.as_deref(), Some("Room 101"));
    assert_eq!(updated.level.as_deref(), Some("300"));
    assert_ne!(updated.row_version, old_version);
    assert_ne!(updated.row_version.tag(), old_version.tag());

    Ok(())
}

/// Tests that two writers holding the same version cannot both succeed.
///
/// Expected: first update Ok(Some), second Ok(None)
#[tokio::test]
async fn second_writer_with_same_version_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = TalkRepository::new(db);
    let mut first = repo.get_by_id(created.id).await?.unwrap();
    let mut second = first.clone();
    first.title = "First Writer".to_string();
    second.title = "Second Writer".to_string();

    assert!(repo.update(&first).await?.is_some());
    assert!(repo.update(&second).await?.is_none());

    let stored = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(stored.title, "First Writer");

    Ok(())
}

/// Tests that the returned talk carries the row version that was stored.
///
/// Expected: stored row and returned talk share the new row version
#[tokio::test]
async fn returned_version_matches_stored_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = TalkRepository::new(db);
    let mut talk = repo.get_by_id(created.id).await?.unwrap();
    talk.title = "Fearless Concurrency".to_string();

    let updated = repo.update(&talk).await?.unwrap();
    let stored = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(stored.row_version, updated.row_version);
    assert_eq!(stored.title, "Fearless Concurrency");
    assert_eq!(updated.camp_moniker, talk.camp_moniker);

    Ok(())
}
