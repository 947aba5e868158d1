use super::*;
use crate::server::model::row_version::RowVersion;

/// Tests updating a camp with its current row version.
///
/// Verifies that fields are written and the row version changes.
///
/// Expected: Ok(Some) with new values and a different row version
#[tokio::test]
async fn updates_fields_and_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::CampFactory::new(db)
        .with_location("Raleigh", "USA")
        .build()
        .await?;

    let repo = CampRepository::new(db);
    let mut camp = repo.find_by_id(created.id).await?.unwrap();
    let old_version = camp.row_version.clone();
    camp.name = "Renamed Code Camp".to_string();
    camp.length = 5;
    camp.location.city_town = Some("Durham".to_string());

    let updated = repo.update(&camp).await?.unwrap();

    assert_eq!(updated.name, "Renamed Code Camp");
    assert_eq!(updated.length, 5);
    assert_eq!(updated.location.city_town.as_deref(), Some("Durham"));
    assert_eq!(updated.location_id, created.location_id);
    assert_ne!(updated.row_version, old_version);

    Ok(())
}

/// Tests updating with a stale row version.
///
/// Verifies that a compare-and-swap miss writes nothing, including the
/// location row.
///
/// Expected: Ok(None) and stored values unchanged
#[tokio::test]
async fn returns_none_for_stale_row_version() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::CampFactory::new(db)
        .with_location("Raleigh", "USA")
        .build()
        .await?;

    let repo = CampRepository::new(db);
    let mut camp = repo.find_by_id(created.id).await?.unwrap();
    camp.row_version = RowVersion::generate();
    camp.name = "Lost Update".to_string();
    camp.location.city_town = Some("Durham".to_string());

    let result = repo.update(&camp).await?;

    assert!(result.is_none());

    let stored = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(stored.name, created.name);
    assert_eq!(stored.location.city_town.as_deref(), Some("Raleigh"));

    Ok(())
}

/// Tests that updating a camp without location inserts one when fields are set.
///
/// Expected: Ok(Some) with a newly linked location
#[tokio::test]
async fn creates_location_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::camp::create_camp(db).await?;

    let repo = CampRepository::new(db);
    let mut camp = repo.find_by_id(created.id).await?.unwrap();
    camp.location.country = Some("Canada".to_string());

    let updated = repo.update(&camp).await?.unwrap();

    assert!(updated.location_id.is_some());
    assert_eq!(updated.location.country.as_deref(), Some("Canada"));

    Ok(())
}
