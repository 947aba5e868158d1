use super::*;

/// Tests deleting a talk with its current row version.
///
/// Expected: Ok(true) with the talk removed
#[tokio::test]
async fn deletes_talk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = TalkRepository::new(db);
    let talk = repo.get_by_id(created.id).await?.unwrap();

    assert!(repo.delete(&talk).await?);
    assert_eq!(entity::prelude::Talk::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a stale row version keeps the talk.
///
/// Expected: Ok(false) with the talk intact
#[tokio::test]
async fn stale_row_version_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, created) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = TalkRepository::new(db);
    let mut talk = repo.get_by_id(created.id).await?.unwrap();
    talk.row_version = RowVersion::generate();

    assert!(!repo.delete(&talk).await?);
    assert_eq!(entity::prelude::Talk::find().count(db).await?, 1);

    Ok(())
}
