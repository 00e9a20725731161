use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users;
mod m20260301_000002_create_profiles;
mod m20260301_000003_create_reference_tables;
mod m20260301_000004_create_media_contents;
mod m20260301_000005_create_media_contents_links;
mod m20260301_000006_create_media_series;
mod m20260301_000007_create_media;
mod m20260301_000008_create_likes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users::Migration),
            Box::new(m20260301_000002_create_profiles::Migration),
            Box::new(m20260301_000003_create_reference_tables::Migration),
            Box::new(m20260301_000004_create_media_contents::Migration),
            Box::new(m20260301_000005_create_media_contents_links::Migration),
            Box::new(m20260301_000006_create_media_series::Migration),
            Box::new(m20260301_000007_create_media::Migration),
            Box::new(m20260301_000008_create_likes::Migration),
        ]
    }
}
