use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Join table `(media_contents_id, <reference>_id)` with cascading foreign keys on both sides.
fn link_table<L, C, R>(link: L, reference_column: C, reference_table: R) -> TableCreateStatement
where
    L: IntoIden + Clone + 'static,
    C: IntoIden + Clone + 'static,
    R: IntoIden + 'static,
{
    Table::create()
        .table(link.clone())
        .if_not_exists()
        .col(ColumnDef::new(Link::MediaContentsId).uuid().not_null())
        .col(ColumnDef::new(reference_column.clone()).uuid().not_null())
        .primary_key(
            Index::create()
                .col(Link::MediaContentsId)
                .col(reference_column.clone()),
        )
        .foreign_key(
            ForeignKey::create()
                .from(link.clone(), Link::MediaContentsId)
                .to(MediaContents::Table, MediaContents::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(link, reference_column)
                .to(reference_table, Link::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(link_table(
                MediaContentsActors::Table,
                MediaContentsActors::ActorId,
                Actors::Table,
            ))
            .await?;
        manager
            .create_table(link_table(
                MediaContentsGenres::Table,
                MediaContentsGenres::GenreId,
                Genres::Table,
            ))
            .await?;
        manager
            .create_table(link_table(
                MediaContentsCreators::Table,
                MediaContentsCreators::CreatorId,
                Creators::Table,
            ))
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MediaContentsCreators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MediaContentsGenres::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MediaContentsActors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Link {
    MediaContentsId,
    Id,
}

#[derive(Iden)]
enum MediaContents {
    Table,
    Id,
}

#[derive(Clone, Iden)]
enum MediaContentsActors {
    Table,
    ActorId,
}

#[derive(Clone, Iden)]
enum MediaContentsGenres {
    Table,
    GenreId,
}

#[derive(Clone, Iden)]
enum MediaContentsCreators {
    Table,
    CreatorId,
}

#[derive(Iden)]
enum Actors {
    Table,
}

#[derive(Iden)]
enum Genres {
    Table,
}

#[derive(Iden)]
enum Creators {
    Table,
}
