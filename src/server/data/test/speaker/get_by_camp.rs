use super::*;

/// Tests that a camp's speakers are ordered by name.
///
/// Expected: Ok with speakers sorted alphabetically
#[tokio::test]
async fn orders_speakers_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    factory::speaker::SpeakerFactory::new(db, camp.id)
        .name("Zoe Zimmerman")
        .build()
        .await?;
    factory::speaker::SpeakerFactory::new(db, camp.id)
        .name("Adam Archer")
        .build()
        .await?;

    let repo = SpeakerRepository::new(db);
    let speakers = repo.get_by_camp(camp.id, &camp.moniker, false).await?;

    let names: Vec<&str> = speakers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Adam Archer", "Zoe Zimmerman"]);
    assert!(speakers.iter().all(|s| s.talks.is_none()));

    Ok(())
}

/// Tests that only speakers of the requested camp are returned.
///
/// Expected: Ok with one speaker from the requested camp
#[tokio::test]
async fn excludes_other_camps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let other = factory::camp::create_camp(db).await?;
    let speaker = factory::speaker::create_speaker(db, camp.id).await?;
    factory::speaker::create_speaker(db, other.id).await?;

    let repo = SpeakerRepository::new(db);
    let speakers = repo.get_by_camp(camp.id, &camp.moniker, false).await?;

    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0].id, speaker.id);
    assert_eq!(speakers[0].camp_moniker, camp.moniker);

    Ok(())
}

/// Tests loading talks together with speakers.
///
/// Verifies that speakers without talks get an empty list rather than none.
///
/// Expected: Ok with talks attached per speaker
#[tokio::test]
async fn attaches_talks_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let busy = factory::speaker::SpeakerFactory::new(db, camp.id)
        .name("Adam Archer")
        .build()
        .await?;
    factory::speaker::SpeakerFactory::new(db, camp.id)
        .name("Zoe Zimmerman")
        .build()
        .await?;
    factory::talk::create_talk(db, busy.id).await?;
    factory::talk::create_talk(db, busy.id).await?;

    let repo = SpeakerRepository::new(db);
    let speakers = repo.get_by_camp(camp.id, &camp.moniker, true).await?;

    assert_eq!(speakers[0].talks.as_ref().map(Vec::len), Some(2));
    assert_eq!(speakers[1].talks.as_ref().map(Vec::len), Some(0));

    Ok(())
}
