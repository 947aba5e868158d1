use super::*;

/// Tests loading a user with the stored password hash.
///
/// Expected: Ok(Some) with the hash that was stored
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hash = hash_password("P@ssw0rd!");
    let created = factory::user::UserFactory::new(db)
        .user_name("shawnwildermuth")
        .password_hash(hash.clone())
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, stored_hash) = repo
        .find_with_password_hash("shawnwildermuth")
        .await?
        .unwrap();

    assert_eq!(user.id, created.id);
    assert_eq!(stored_hash, hash);

    Ok(())
}

/// Tests an unknown user name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_with_password_hash("nobody").await?.is_none());
    assert!(repo.find_by_user_name("nobody").await?.is_none());

    Ok(())
}
