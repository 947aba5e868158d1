pub use super::camp::Entity as Camp;
pub use super::camp_user::Entity as CampUser;
pub use super::location::Entity as Location;
pub use super::role::Entity as Role;
pub use super::role_claim::Entity as RoleClaim;
pub use super::speaker::Entity as Speaker;
pub use super::talk::Entity as Talk;
pub use super::user_claim::Entity as UserClaim;
pub use super::user_role::Entity as UserRole;
