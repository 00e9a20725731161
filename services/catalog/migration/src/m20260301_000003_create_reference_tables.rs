use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Genres, actors and creators share one shape: `(id, name, is_deleted)`.
fn reference_table<T>(table: T) -> TableCreateStatement
where
    T: IntoIden + 'static,
{
    Table::create()
        .table(table)
        .if_not_exists()
        .col(ColumnDef::new(Reference::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(Reference::Name).string().not_null())
        .col(
            ColumnDef::new(Reference::IsDeleted)
                .boolean()
                .not_null()
                .default(false),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(reference_table(Genres::Table)).await?;
        manager.create_table(reference_table(Actors::Table)).await?;
        manager.create_table(reference_table(Creators::Table)).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Creators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Actors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Genres::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reference {
    Id,
    Name,
    IsDeleted,
}

#[derive(Iden)]
enum Genres {
    Table,
}

#[derive(Iden)]
enum Actors {
    Table,
}

#[derive(Iden)]
enum Creators {
    Table,
}
