use super::*;

fn params(moniker: &str, location: Location) -> CampParams {
    CampParams {
        moniker: moniker.to_string(),
        name: "Atlanta Code Camp".to_string(),
        event_date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
        length: 2,
        description: "The yearly gathering of Atlanta developers".to_string(),
        location,
    }
}

/// Tests creating a camp with a location.
///
/// Verifies that the location row is inserted and linked, and that the new
/// camp receives a row version.
///
/// Expected: Ok with camp, linked location and non-empty row version
#[tokio::test]
async fn creates_camp_with_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    let camp = repo
        .create(params(
            "atl2026",
            Location {
                city_town: Some("Atlanta".to_string()),
                country: Some("USA".to_string()),
                ..Default::default()
            },
        ))
        .await?;

    assert_eq!(camp.moniker, "atl2026");
    assert_eq!(camp.length, 2);
    assert!(camp.location_id.is_some());
    assert_eq!(camp.location.city_town.as_deref(), Some("Atlanta"));
    assert!(!camp.row_version.as_bytes().is_empty());

    let locations = entity::prelude::Location::find().count(db).await?;
    assert_eq!(locations, 1);

    Ok(())
}

/// Tests creating a camp without any location fields.
///
/// Expected: Ok with no location row inserted
#[tokio::test]
async fn skips_empty_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    let camp = repo.create(params("atl2026", Location::default())).await?;

    assert!(camp.location_id.is_none());
    assert!(camp.location.is_empty());

    let locations = entity::prelude::Location::find().count(db).await?;
    assert_eq!(locations, 0);

    Ok(())
}

/// Tests that the unique moniker constraint is enforced by the store.
///
/// Expected: Err on the second insert with the same moniker
#[tokio::test]
async fn fails_on_duplicate_moniker() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CampRepository::new(db);
    repo.create(params("atl2026", Location::default())).await?;

    let result = repo.create(params("atl2026", Location::default())).await;

    assert!(result.is_err());

    Ok(())
}
