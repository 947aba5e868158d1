use super::*;

/// Tests that ensuring a role twice returns the same role.
///
/// Expected: Ok with one role row and equal IDs
#[tokio::test]
async fn ensure_role_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.ensure_role(ADMIN_ROLE).await?;
    let second = repo.ensure_role(ADMIN_ROLE).await?;

    assert_eq!(first, second);
    assert_eq!(entity::prelude::Role::find().count(db).await?, 1);

    Ok(())
}

/// Tests that repeated grants and memberships insert a single row each.
///
/// Expected: Ok with one membership and one claim per kind
#[tokio::test]
async fn grants_are_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let role_id = repo.ensure_role(ADMIN_ROLE).await?;

    for _ in 0..2 {
        repo.add_role_claim(role_id, IS_ADMIN_CLAIM, CLAIM_GRANTED).await?;
        repo.add_to_role(user.id, role_id).await?;
        repo.add_claim(user.id, SUPER_USER_CLAIM, CLAIM_GRANTED).await?;
    }

    assert_eq!(entity::prelude::RoleClaim::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserRole::find().count(db).await?, 1);
    assert_eq!(entity::prelude::UserClaim::find().count(db).await?, 1);
    assert!(repo.has_claim(user.id, IS_ADMIN_CLAIM, CLAIM_GRANTED).await?);

    Ok(())
}
