use sea_orm::entity::prelude::*;

/// Season or grouping beneath a catalog item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_series")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub media_contents_id: Uuid,
    pub title: String,
    pub order_index: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_contents::Entity",
        from = "Column::MediaContentsId",
        to = "super::media_contents::Column::Id"
    )]
    MediaContents,
    #[sea_orm(has_many = "super::media::Entity")]
    Media,
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContents.def()
    }
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
