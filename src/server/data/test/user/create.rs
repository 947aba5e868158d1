use super::*;

/// Tests inserting a user.
///
/// Expected: Ok with the user retrievable by ID
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            user_name: "shawnwildermuth".to_string(),
            password_hash: hash_password("P@ssw0rd!"),
            email: Some("shawn@example.com".to_string()),
            first_name: Some("Shawn".to_string()),
            last_name: Some("Wildermuth".to_string()),
        })
        .await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(found, user);
    assert_eq!(found.email.as_deref(), Some("shawn@example.com"));

    Ok(())
}
