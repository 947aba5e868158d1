//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let camp = factory::camp::create_camp(&db).await?;
//!
//!     // Create a talk together with its speaker and camp
//!     let (camp, speaker, talk) = factory::helpers::create_talk_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let speaker = factory::speaker::SpeakerFactory::new(&db, camp.id)
//!     .user_id(Some(user.id))
//!     .name("Custom Speaker")
//!     .build()
//!     .await?;
//! ```

pub mod camp;
pub mod helpers;
pub mod speaker;
pub mod talk;
pub mod user;

pub use camp::create_camp;
pub use speaker::create_speaker;
pub use talk::create_talk;
pub use user::create_user;
