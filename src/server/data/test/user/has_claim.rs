use super::*;

/// Tests a claim granted directly to the user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn finds_direct_claim() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .claim(SUPER_USER_CLAIM, CLAIM_GRANTED)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.has_claim(user.id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?);

    Ok(())
}

/// Tests a claim granted through a role.
///
/// Expected: Ok(true) once the user is a member of the role
#[tokio::test]
async fn finds_claim_through_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let role_id = repo.ensure_role(ADMIN_ROLE).await?;
    repo.add_role_claim(role_id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?;

    assert!(!repo.has_claim(user.id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?);

    repo.add_to_role(user.id, role_id).await?;

    assert!(repo.has_claim(user.id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?);

    Ok(())
}

/// Tests that the claim value must match.
///
/// Expected: Ok(false) for a claim with a different value
#[tokio::test]
async fn requires_matching_value() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .claim(SUPER_USER_CLAIM, "False")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(!repo.has_claim(user.id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?);

    Ok(())
}

/// Tests that one user's claims do not leak to another.
///
/// Expected: Ok(false) for the user without the claim
#[tokio::test]
async fn ignores_other_users_claims() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .claim(SUPER_USER_CLAIM, CLAIM_GRANTED)
        .build()
        .await?;
    let plain = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(!repo.has_claim(plain.id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?);

    Ok(())
}
