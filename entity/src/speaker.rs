use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "speaker")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub camp_id: i32,
    pub user_id: Option<i32>,
    pub name: String,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
    pub website_url: Option<String>,
    pub twitter_name: Option<String>,
    pub github_name: Option<String>,
    pub bio: String,
    pub head_shot_url: Option<String>,
    pub row_version: Vec<u8>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::camp::Entity",
        from = "Column::CampId",
        to = "super::camp::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Camp,
    #[sea_orm(
        belongs_to = "super::camp_user::Entity",
        from = "Column::UserId",
        to = "super::camp_user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CampUser,
    #[sea_orm(has_many = "super::talk::Entity")]
    Talk,
}

impl Related<super::camp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Camp.def()
    }
}

impl Related<super::camp_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampUser.def()
    }
}

impl Related<super::talk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Talk.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
