use super::*;

/// Tests that a speaker is returned with its owner's user name and camp moniker.
///
/// Expected: Ok(Some) with owner and camp moniker populated
#[tokio::test]
async fn returns_speaker_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .user_name(fixture::user::DEFAULT_USER_NAME)
        .build()
        .await?;
    let (camp, speaker) = factory::helpers::create_speaker_for_user(db, &user).await?;

    let repo = SpeakerRepository::new(db);
    let found = repo.get_by_id(speaker.id, false).await?.unwrap();

    assert_eq!(found.camp_moniker, camp.moniker);
    assert_eq!(found.owner.as_deref(), Some(fixture::user::DEFAULT_USER_NAME));
    assert!(found.is_owned_by(fixture::user::DEFAULT_USER_NAME));
    assert!(found.talks.is_none());

    Ok(())
}

/// Tests that an unowned speaker has no owner.
///
/// Expected: Ok(Some) with no owner
#[tokio::test]
async fn unowned_speaker_has_no_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let speaker = factory::speaker::create_speaker(db, camp.id).await?;

    let repo = SpeakerRepository::new(db);
    let found = repo.get_by_id(speaker.id, false).await?.unwrap();

    assert!(found.owner.is_none());
    assert!(!found.is_owned_by(fixture::user::DEFAULT_USER_NAME));

    Ok(())
}

/// Tests including talks on a single speaker.
///
/// Expected: Ok(Some) with talks carrying the camp moniker
#[tokio::test]
async fn includes_talks_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(db).await?;

    let repo = SpeakerRepository::new(db);
    let found = repo.get_by_id(speaker.id, true).await?.unwrap();

    let talks = found.talks.unwrap();
    assert_eq!(talks.len(), 1);
    assert_eq!(talks[0].id, talk.id);
    assert_eq!(talks[0].camp_moniker, camp.moniker);

    Ok(())
}

/// Tests looking up a speaker that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_speaker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpeakerRepository::new(db);
    let found = repo.get_by_id(404, false).await?;

    assert!(found.is_none());

    Ok(())
}
