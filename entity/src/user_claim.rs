use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_claim")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub claim_type: String,
    pub claim_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::camp_user::Entity",
        from = "Column::UserId",
        to = "super::camp_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CampUser,
}

impl Related<super::camp_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
