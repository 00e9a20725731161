use sea_orm::entity::prelude::*;

/// A profile's like on a catalog item. Presence of the row is the like.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub profile_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub media_contents_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profiles::Entity",
        from = "Column::ProfileId",
        to = "super::profiles::Column::Id"
    )]
    Profile,
    #[sea_orm(
        belongs_to = "super::media_contents::Entity",
        from = "Column::MediaContentsId",
        to = "super::media_contents::Column::Id"
    )]
    MediaContents,
}

impl Related<super::profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
