//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique row version token.
pub fn next_row_version() -> Vec<u8> {
    next_id().to_be_bytes().to_vec()
}

/// Creates a camp, a speaker in it and a talk by that speaker.
///
/// The speaker has no owner. Use the individual factories when the test
/// needs ownership or custom values.
///
/// # Returns
/// - `Ok((camp, speaker, talk))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_talk_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::camp::Model,
        entity::speaker::Model,
        entity::talk::Model,
    ),
    DbErr,
> {
    let camp = crate::factory::camp::create_camp(db).await?;
    let speaker = crate::factory::speaker::create_speaker(db, camp.id).await?;
    let talk = crate::factory::talk::create_talk(db, speaker.id).await?;

    Ok((camp, speaker, talk))
}

/// Creates a camp with a speaker owned by the given user.
///
/// # Returns
/// - `Ok((camp, speaker))` - Created camp and owned speaker
/// - `Err(DbErr)` - Database error during creation
pub async fn create_speaker_for_user(
    db: &DatabaseConnection,
    user: &entity::camp_user::Model,
) -> Result<(entity::camp::Model, entity::speaker::Model), DbErr> {
    let camp = crate::factory::camp::create_camp(db).await?;
    let speaker = crate::factory::speaker::SpeakerFactory::new(db, camp.id)
        .user_id(Some(user.id))
        .build()
        .await?;

    Ok((camp, speaker))
}
