use super::*;

/// Tests listing camps in event date order.
///
/// Verifies that camps come back ordered by their start date regardless of
/// insertion order.
///
/// Expected: Ok with camps sorted by event date
#[tokio::test]
async fn orders_camps_by_event_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::camp::CampFactory::new(db)
        .moniker("late")
        .event_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        .build()
        .await?;
    factory::camp::CampFactory::new(db)
        .moniker("early")
        .event_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .build()
        .await?;

    let repo = CampRepository::new(db);
    let camps = repo.get_all().await?;

    let monikers: Vec<&str> = camps.iter().map(|c| c.moniker.as_str()).collect();
    assert_eq!(monikers, vec!["early", "late"]);

    Ok(())
}

/// Tests that listed camps carry their location.
///
/// Expected: Ok with location fields populated from the location row
#[tokio::test]
async fn includes_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::camp::CampFactory::new(db)
        .with_location("Raleigh", "USA")
        .build()
        .await?;

    let repo = CampRepository::new(db);
    let camps = repo.get_all().await?;

    assert_eq!(camps.len(), 1);
    assert_eq!(camps[0].location.city_town.as_deref(), Some("Raleigh"));
    assert!(camps[0].speakers.is_none());

    Ok(())
}

/// Tests listing with no camps.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_camps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    let camps = repo.get_all().await?;

    assert!(camps.is_empty());

    Ok(())
}
