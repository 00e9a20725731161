use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaSeries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaSeries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaSeries::MediaContentsId).uuid().not_null())
                    .col(ColumnDef::new(MediaSeries::Title).string().not_null())
                    .col(ColumnDef::new(MediaSeries::OrderIndex).integer().not_null())
                    .col(
                        ColumnDef::new(MediaSeries::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MediaSeries::Table, MediaSeries::MediaContentsId)
                            .to(MediaContents::Table, MediaContents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(MediaSeries::Table)
                    .col(MediaSeries::MediaContentsId)
                    .col(MediaSeries::OrderIndex)
                    .name("idx_media_series_media_contents_id_order_index")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaSeries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MediaSeries {
    Table,
    Id,
    MediaContentsId,
    Title,
    OrderIndex,
    IsDeleted,
}

#[derive(Iden)]
enum MediaContents {
    Table,
    Id,
}
