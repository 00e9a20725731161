use sea_orm::entity::prelude::*;

/// Single playable unit (an episode, or the only unit of a movie).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub media_series_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub synopsis: String,
    pub order_index: i32,
    pub url: String,
    pub thumbnail: String,
    /// Seconds.
    pub running_time: i32,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media_series::Entity",
        from = "Column::MediaSeriesId",
        to = "super::media_series::Column::Id"
    )]
    MediaSeries,
}

impl Related<super::media_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MediaSeries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
