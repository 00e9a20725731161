use sea_orm::entity::prelude::*;

/// Performer credited on catalog items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_contents_actors::Entity")]
    MediaContentsActors,
}

impl Related<super::media_contents_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContentsActors.def()
    }
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_contents_actors::Relation::MediaContents.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_contents_actors::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
