use super::*;

/// Tests creating a talk for a speaker.
///
/// Expected: Ok with stored fields and a row version
#[tokio::test]
async fn creates_talk() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::create_camp(db).await?;
    let speaker = factory::speaker::create_speaker(db, camp.id).await?;
    let starting_time = Utc.with_ymd_and_hms(2024, 5, 2, 13, 30, 0).unwrap();

    let repo = TalkRepository::new(db);
    let talk = repo
        .create(
            CreateTalkParams {
                speaker_id: speaker.id,
                title: "Ownership in Practice".to_string(),
                abstract_text: "Borrowing without tears".to_string(),
                category: "Languages".to_string(),
                level: Some("200".to_string()),
                prerequisites: None,
                starting_time,
                room: Some("Ballroom A".to_string()),
            },
            &camp.moniker,
        )
        .await?;

    assert_eq!(talk.speaker_id, speaker.id);
    assert_eq!(talk.camp_moniker, camp.moniker);
    assert_eq!(talk.starting_time, starting_time);
    assert_eq!(talk.room.as_deref(), Some("Ballroom A"));
    assert!(!talk.row_version.as_bytes().is_empty());

    let stored = repo.get_by_id(talk.id).await?.unwrap();
    assert_eq!(stored.title, "Ownership in Practice");

    Ok(())
}
