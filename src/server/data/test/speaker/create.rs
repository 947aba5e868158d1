use super::*;

/// Tests creating a speaker linked to the creating user.
///
/// Expected: Ok with the user as owner and a fresh row version
#[tokio::test]
async fn creates_speaker_owned_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let camp = factory::camp::create_camp(db).await?;

    let repo = SpeakerRepository::new(db);
    let speaker = repo
        .create(CreateSpeakerParams {
            camp_id: camp.id,
            user_id: user.id,
            name: fixture::speaker::DEFAULT_NAME.to_string(),
            company_name: Some("Wilder Minds".to_string()),
            phone_number: None,
            website_url: None,
            twitter_name: Some("shawnwildermuth".to_string()),
            github_name: None,
            bio: fixture::speaker::DEFAULT_BIO.to_string(),
            head_shot_url: None,
        })
        .await?;

    assert_eq!(speaker.camp_id, camp.id);
    assert_eq!(speaker.camp_moniker, camp.moniker);
    assert_eq!(speaker.user_id, Some(user.id));
    assert_eq!(speaker.owner.as_deref(), Some(user.user_name.as_str()));
    assert_eq!(speaker.twitter_name.as_deref(), Some("shawnwildermuth"));
    assert!(!speaker.row_version.as_bytes().is_empty());

    Ok(())
}
