use sea_orm::entity::prelude::*;

/// Top-level catalog item: a show or a movie container.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_contents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub synopsis: String,
    pub trailer: String,
    pub thumbnail: String,
    /// Required rating label, e.g. `"19+"`.
    pub rate: String,
    pub is_series: bool,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_series::Entity")]
    MediaSeries,
    #[sea_orm(has_many = "super::likes::Entity")]
    Likes,
    #[sea_orm(has_many = "super::media_contents_actors::Entity")]
    MediaContentsActors,
    #[sea_orm(has_many = "super::media_contents_genres::Entity")]
    MediaContentsGenres,
    #[sea_orm(has_many = "super::media_contents_creators::Entity")]
    MediaContentsCreators,
}

impl Related<super::media_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaSeries.def()
    }
}

impl Related<super::likes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl Related<super::actors::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_contents_actors::Relation::Actor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_contents_actors::Relation::MediaContents.def().rev())
    }
}

impl Related<super::genres::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_contents_genres::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_contents_genres::Relation::MediaContents.def().rev())
    }
}

impl Related<super::creators::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_contents_creators::Relation::Creator.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_contents_creators::Relation::MediaContents.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
