use sea_orm::entity::prelude::*;

/// Genre tag attached to catalog items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_contents_genres::Entity")]
    MediaContentsGenres,
}

impl Related<super::media_contents_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContentsGenres.def()
    }
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_contents_genres::Relation::MediaContents.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_contents_genres::Relation::Genre.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
