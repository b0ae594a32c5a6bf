use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub is_private: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bind_channel_category::Entity")]
    BindChannelCategory,
    #[sea_orm(has_many = "super::channel_user::Entity")]
    ChannelUser,
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
    #[sea_orm(has_many = "super::recommendation::Entity")]
    Recommendation,
}

impl Related<super::bind_channel_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BindChannelCategory.def()
    }
}

impl Related<super::channel_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChannelUser.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl Related<super::recommendation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recommendation.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::bind_channel_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::bind_channel_category::Relation::Channel.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
