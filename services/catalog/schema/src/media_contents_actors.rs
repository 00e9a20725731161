use sea_orm::entity::prelude::*;

/// Many-to-many link between catalog items and actors.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media_contents_actors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub media_contents_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub actor_id: Uuid,
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
        belongs_to = "super::actors::Entity",
        from = "Column::ActorId",
        to = "super::actors::Column::Id"
    )]
    Actor,
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContents.def()
    }
}

impl Related<super::actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Actor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
