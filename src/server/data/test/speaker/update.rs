use super::*;

/// Tests updating a speaker's profile with the current row version.
///
/// Expected: Ok(Some) with new values and a changed row version
#[tokio::test]
async fn updates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let created = factory::speaker::create_speaker(db, camp.id).await?;

    let repo = SpeakerRepository::new(db);
    let mut speaker = repo.get_by_id(created.id, false).await?.unwrap();
    let old_version = speaker.row_version.clone();
    speaker.company_name = Some("Acme Consulting".to_string());
    speaker.github_name = Some("acme".to_string());

    let updated = repo.update(&speaker).await?.unwrap();

    assert_eq!(updated.company_name.as_deref(), Some("Acme Consulting"));
    assert_eq!(updated.github_name.as_deref(), Some("acme"));
    assert_ne!(updated.row_version, old_version);

    Ok(())
}

/// Tests updating with a stale row version.
///
/// Expected: Ok(None) and stored profile unchanged
#[tokio::test]
async fn returns_none_for_stale_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let created = factory::speaker::create_speaker(db, camp.id).await?;

    let repo = SpeakerRepository::new(db);
    let mut speaker = repo.get_by_id(created.id, false).await?.unwrap();
    speaker.row_version = RowVersion::generate();
    speaker.name = "Lost Update".to_string();

    assert!(repo.update(&speaker).await?.is_none());

    let stored = repo.get_by_id(created.id, false).await?.unwrap();
    assert_eq!(stored.name, created.name);

    Ok(())
}
