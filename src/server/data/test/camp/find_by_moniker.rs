use super::*;

/// Tests that moniker lookups ignore case.
///
/// Verifies that upper and lower case spellings of the same moniker resolve
/// to the same camp.
///
/// Expected: Ok with the same camp for both spellings
#[tokio::test]
async fn ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::CampFactory::new(db)
        .moniker("ncdl2024")
        .build()
        .await?;

    let repo = CampRepository::new(db);
    let upper = repo.find_by_moniker("NCDL2024", false).await?;
    let lower = repo.find_by_moniker("ncdl2024", false).await?;

    assert_eq!(upper.map(|c| c.id), Some(camp.id));
    assert_eq!(lower.map(|c| c.id), Some(camp.id));

    Ok(())
}

/// Tests looking up a moniker that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::camp::create_camp(db).await?;

    let repo = CampRepository::new(db);
    let result = repo.find_by_moniker("missing", false).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests eager loading of speakers and their talks.
///
/// Verifies that speakers are attached only when requested and that each
/// speaker carries its talks.
///
/// Expected: Ok with speakers and talks present when requested
#[tokio::test]
async fn includes_speakers_with_talks_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = CampRepository::new(db);
    let without = repo.find_by_moniker(&camp.moniker, false).await?.unwrap();
    let with = repo.find_by_moniker(&camp.moniker, true).await?.unwrap();

    assert!(without.speakers.is_none());

    let speakers = with.speakers.unwrap();
    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0].id, speaker.id);

    let talks = speakers[0].talks.as_ref().unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0].id, talk.id);
    assert_eq!(talks[0].camp_moniker, camp.moniker);

    Ok(())
}
