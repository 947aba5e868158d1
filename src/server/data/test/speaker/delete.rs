use super::*;

/// Tests deleting a speaker together with its talks.
///
/// Expected: Ok(Some) with the talk's id and no speakers or talks left
#[tokio::test]
async fn deletes_speaker_and_talks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SpeakerRepository::new(db);
    let speaker = repo.get_by_id(created.id, false).await?.unwrap();

    assert_eq!(repo.delete(&speaker).await?, Some(vec![talk.id]));

    assert_eq!(entity::prelude::Speaker::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Talk::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a stale row version keeps the speaker and its talks.
///
/// Expected: Ok(None) with the speaker and talk intact
#[tokio::test]
async fn stale_row_version_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created, _) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SpeakerRepository::new(db);
    let mut speaker = repo.get_by_id(created.id, false).await?.unwrap();
    speaker.row_version = RowVersion::generate();

    assert_eq!(repo.delete(&speaker).await?, None);

    assert_eq!(entity::prelude::Speaker::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Talk::find().count(db).await?, 1);

    Ok(())
}
