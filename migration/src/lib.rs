pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_camp_user_table;
mod m20250801_000002_create_role_table;
mod m20250801_000003_create_user_role_table;
mod m20250801_000004_create_user_claim_table;
mod m20250801_000005_create_role_claim_table;
mod m20250801_000006_create_location_table;
mod m20250801_000007_create_camp_table;
mod m20250801_000008_create_speaker_table;
mod m20250801_000009_create_talk_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_camp_user_table::Migration),
            Box::new(m20250801_000002_create_role_table::Migration),
            Box::new(m20250801_000003_create_user_role_table::Migration),
            Box::new(m20250801_000004_create_user_claim_table::Migration),
            Box::new(m20250801_000005_create_role_claim_table::Migration),
            Box::new(m20250801_000006_create_location_table::Migration),
            Box::new(m20250801_000007_create_camp_table::Migration),
            Box::new(m20250801_000008_create_speaker_table::Migration),
            Box::new(m20250801_000009_create_talk_table::Migration),
        ]
    }
}
