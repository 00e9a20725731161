use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Likes::ProfileId).uuid().not_null())
                    .col(ColumnDef::new(Likes::MediaContentsId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(Likes::ProfileId)
                            .col(Likes::MediaContentsId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Likes::Table, Likes::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Likes::Table, Likes::MediaContentsId)
                            .to(MediaContents::Table, MediaContents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Likes {
    Table,
    ProfileId,
    MediaContentsId,
}

#[derive(Iden)]
enum Profiles {
    Table,
    Id,
}

#[derive(Iden)]
enum MediaContents {
    Table,
    Id,
}
