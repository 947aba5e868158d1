use super::*;

/// Tests duplicate moniker detection ignoring case.
///
/// Expected: Ok(true) for an existing moniker in another case
#[tokio::test]
async fn detects_existing_moniker_in_any_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::camp::CampFactory::new(db)
        .moniker("atl2026")
        .build()
        .await?;

    let repo = CampRepository::new(db);

    assert!(repo.moniker_exists("ATL2026", None).await?);
    assert!(!repo.moniker_exists("sea2026", None).await?);

    Ok(())
}

/// Tests that a camp's own moniker is not reported as a duplicate.
///
/// Expected: Ok(false) when the only match is the excluded camp
#[tokio::test]
async fn excludes_given_camp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camp = factory::camp::CampFactory::new(db)
        .moniker("atl2026")
        .build()
        .await?;

    let repo = CampRepository::new(db);

    assert!(!repo.moniker_exists("atl2026", Some(camp.id)).await?);

    Ok(())
}
