use super::*;

/// Tests that a talk is returned with its camp moniker.
///
/// Expected: Ok(Some) with talk fields and camp moniker
#[tokio::test]
async fn returns_talk_with_camp_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = TalkRepository::new(db);
    let found = repo.get_by_id(talk.id).await?.unwrap();

    assert_eq!(found.speaker_id, speaker.id);
    assert_eq!(found.camp_moniker, camp.moniker);
    assert_eq!(found.category, fixture::talk::DEFAULT_CATEGORY);
    assert_eq!(found.starting_time, fixture::talk::default_starting_time());

    Ok(())
}

/// Tests looking up a talk that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_talk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TalkRepository::new(db);

    assert!(repo.get_by_id(404).await?.is_none());

    Ok(())
}
