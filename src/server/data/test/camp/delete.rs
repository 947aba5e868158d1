use super::*;
use crate::server::model::row_version::RowVersion;

/// Tests deleting a camp removes its speakers, talks and location.
///
/// Expected: Ok(Some) with the talk's id and no dependent rows left
#[tokio::test]
async fn deletes_camp_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::CampFactory::new(db)
        .with_location("Raleigh", "USA")
        .build()
        .await?;
    let speaker = factory::speaker::create_speaker(db, created.id).await?;
    let talk = factory::talk::create_talk(db, speaker.id).await?;

    let repo = CampRepository::new(db);
    let camp = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(repo.delete(&camp).await?, Some(vec![talk.id]));

    assert_eq!(entity::prelude::Camp::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Speaker::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Talk::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Location::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting one camp leaves other camps' speakers alone.
///
/// Expected: Ok(Some) with the other camp's speaker still present
#[tokio::test]
async fn keeps_other_camps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::camp::create_camp(db).await?;
    let kept = factory::camp::create_camp(db).await?;
    factory::speaker::create_speaker(db, doomed.id).await?;
    factory::speaker::create_speaker(db, kept.id).await?;

    let repo = CampRepository::new(db);
    let camp = repo.find_by_id(doomed.id).await?.unwrap();

    assert_eq!(repo.delete(&camp).await?, Some(vec![]));

    let remaining = entity::prelude::Speaker::find()
        .filter(entity::speaker::Column::CampId.eq(kept.id))
        .count(db)
        .await?;
    assert_eq!(remaining, 1);

    Ok(())
}

/// Tests that a stale row version deletes nothing.
///
/// Expected: Ok(None) with camp and speakers intact
#[tokio::test]
async fn stale_row_version_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::create_camp(db).await?;
    factory::speaker::create_speaker(db, created.id).await?;

    let repo = CampRepository::new(db);
    let mut camp = repo.find_by_id(created.id).await?.unwrap();
    camp.row_version = RowVersion::generate();

    assert_eq!(repo.delete(&camp).await?, None);

    assert_eq!(entity::prelude::Camp::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Speaker::find().count(db).await?, 1);

    Ok(())
}
