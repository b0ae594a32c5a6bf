use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bind_channel_category::Entity")]
    BindChannelCategory,
}

impl Related<super::bind_channel_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BindChannelCategory.def()
    }
}

impl Related<super::channel::Entity> for Entity {
    fn to() -> RelationDef {
        super::bind_channel_category::Relation::Channel.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::bind_channel_category::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
