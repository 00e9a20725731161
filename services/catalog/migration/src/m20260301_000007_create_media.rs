use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Media::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Media::MediaSeriesId).uuid().not_null())
                    .col(ColumnDef::new(Media::Title).string().not_null())
                    .col(ColumnDef::new(Media::Synopsis).text().not_null())
                    .col(ColumnDef::new(Media::OrderIndex).integer().not_null())
                    .col(ColumnDef::new(Media::Url).string().not_null())
                    .col(ColumnDef::new(Media::Thumbnail).string().not_null())
                    .col(
                        ColumnDef::new(Media::RunningTime)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Media::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Media::Table, Media::MediaSeriesId)
                            .to(MediaSeries::Table, MediaSeries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Media::Table)
                    .col(Media::MediaSeriesId)
                    .col(Media::OrderIndex)
                    .name("idx_media_media_series_id_order_index")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    MediaSeriesId,
    Title,
    Synopsis,
    OrderIndex,
    Url,
    Thumbnail,
    RunningTime,
    IsDeleted,
}

#[derive(Iden)]
enum MediaSeries {
    Table,
    Id,
}
