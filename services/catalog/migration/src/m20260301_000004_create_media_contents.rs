use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MediaContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MediaContents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MediaContents::Title).string().not_null())
                    .col(ColumnDef::new(MediaContents::Synopsis).text().not_null())
                    .col(ColumnDef::new(MediaContents::Trailer).string().not_null())
                    .col(ColumnDef::new(MediaContents::Thumbnail).string().not_null())
                    .col(ColumnDef::new(MediaContents::Rate).string().not_null())
                    .col(
                        ColumnDef::new(MediaContents::IsSeries)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MediaContents::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaContents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MediaContents {
    Table,
    Id,
    Title,
    Synopsis,
    Trailer,
    Thumbnail,
    Rate,
    IsSeries,
    IsDeleted,
}
