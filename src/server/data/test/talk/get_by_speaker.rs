use super::*;

/// Tests that a speaker's talks are ordered by title.
///
/// Expected: Ok with talks sorted by title and tagged with the camp moniker
#[tokio::test]
async fn orders_talks_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let speaker = factory::speaker::create_speaker(db, camp.id).await?;
    factory::talk::TalkFactory::new(db, speaker.id)
        .title("Writing Macros")
        .build()
        .await?;
    factory::talk::TalkFactory::new(db, speaker.id)
        .title("Async Basics")
        .build()
        .await?;

    let repo = TalkRepository::new(db);
    let talks = repo.get_by_speaker(speaker.id, &camp.moniker).await?;

    let titles: Vec<&str> = talks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Async Basics", "Writing Macros"]);
    assert!(talks.iter().all(|t| t.camp_moniker == camp.moniker));

    Ok(())
}

/// Tests a speaker without talks.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_speaker_without_talks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let speaker = factory::speaker::create_speaker(db, camp.id).await?;
    let other = factory::speaker::create_speaker(db, camp.id).await?;
    factory::talk::create_talk(db, other.id).await?;

    let repo = TalkRepository::new(db);
    let talks = repo.get_by_speaker(speaker.id, &camp.moniker).await?;

    assert!(talks.is_empty());

    Ok(())
}
