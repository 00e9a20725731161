use sea_orm::entity::prelude::*;

/// Director or writer credited on catalog items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "creators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::media_contents_creators::Entity")]
    MediaContentsCreators,
}

impl Related<super::media_contents_creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaContentsCreators.def()
    }
}

impl Related<super::media_contents::Entity> for Entity {
    fn to() -> RelationDef {
        super::media_contents_creators::Relation::MediaContents.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::media_contents_creators::Relation::Creator.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
