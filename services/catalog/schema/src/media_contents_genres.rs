use sea_orm::entity::prelude::*;

/// Many-to-many link between catalog items and genres.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_contents_genres")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub media_contents_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub genre_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_contents::Entity",
        from = "Column::MediaContentsId",
        to = "super::media_contents::Column::Id"
    )]
    MediaContents,
    #[sea_orm(
        belongs_to = "super::genres::Entity",
        from = "Column::GenreId",
        to = "super::genres::Column::Id"
    )]
    Genre,
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContents.def()
    }
}

impl Related<super::genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Genre.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
