use std::marker::PhantomData;

use anyhow::Context as _;
use sea_orm::{
    AccessMode, ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DatabaseTransaction, EntityTrait, IsolationLevel, QueryFilter, QueryOrder,
    TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use kino_catalog_schema::{
    actors, creators, genres, likes, media, media_contents, media_series, profiles,
};
use kino_domain::rating::ContentRating;

use crate::domain::repository::{
    LikeRepository, MediaContentsRepository, MediaRepository, MediaSeriesRepository,
    ProfileRepository, ReferenceRepository,
};
use crate::domain::types::{
    ActorKind, CreatorKind, Fetched, GenreKind, Media, MediaContents, MediaSeries, Profile,
    Reference,
};
use crate::error::CatalogServiceError;

// ── Transactions ─────────────────────────────────────────────────────────────

/// Read-only, repeatable-read transaction: every lookup of one resolution
/// sees the same snapshot.
pub async fn begin_read_snapshot(
    db: &DatabaseConnection,
) -> Result<DatabaseTransaction, CatalogServiceError> {
    let txn = db
        .begin_with_config(
            Some(IsolationLevel::RepeatableRead),
            Some(AccessMode::ReadOnly),
        )
        .await
        .context("begin read snapshot")?;
    Ok(txn)
}

pub async fn begin_write(
    db: &DatabaseConnection,
) -> Result<DatabaseTransaction, CatalogServiceError> {
    let txn = db.begin().await.context("begin write transaction")?;
    Ok(txn)
}

/// Commit on success, roll back on failure, and hand the outcome back.
pub async fn finish<T>(
    txn: DatabaseTransaction,
    outcome: Result<T, CatalogServiceError>,
) -> Result<T, CatalogServiceError> {
    match outcome {
        Ok(value) => {
            txn.commit().await.context("commit transaction")?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = txn.rollback().await {
                tracing::warn!(error = %rollback, "rollback failed");
            }
            Err(e)
        }
    }
}

fn parse_rate(label: &str) -> anyhow::Result<ContentRating> {
    label
        .parse()
        .with_context(|| format!("stored rating {label:?}"))
}

/// Children of a parent loaded in one query. No parent row means the
/// relation could not be resolved.
fn linked_rows<P, T, U>(rows: Vec<(P, Vec<T>)>, map: impl FnMut(T) -> Option<U>) -> Fetched<U> {
    match rows.into_iter().next() {
        Some((_, children)) => Fetched::from_rows(children.into_iter().filter_map(map).collect()),
        None => Fetched::FetchFailed,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

pub struct DbProfileRepository<'a, C> {
    pub db: &'a C,
}

impl<C: ConnectionTrait> ProfileRepository for DbProfileRepository<'_, C> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, CatalogServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find profile by id")?;
        Ok(model.map(profile_from_model).transpose()?)
    }
}

fn profile_from_model(model: profiles::Model) -> anyhow::Result<Profile> {
    Ok(Profile {
        rate: parse_rate(&model.rate)?,
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        image: model.image,
        is_deleted: model.is_deleted,
    })
}

// ── Media contents repository ────────────────────────────────────────────────

pub struct DbMediaContentsRepository<'a, C> {
    pub db: &'a C,
}

impl<C: ConnectionTrait> MediaContentsRepository for DbMediaContentsRepository<'_, C> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaContents>, CatalogServiceError> {
        let Some(model) = media_contents::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find media contents by id")?
        else {
            return Ok(None);
        };

        let actors = media_contents::Entity::find_by_id(id)
            .find_with_related(actors::Entity)
            .all(self.db)
            .await
            .context("load media contents actors")?;
        let genres = media_contents::Entity::find_by_id(id)
            .find_with_related(genres::Entity)
            .all(self.db)
            .await
            .context("load media contents genres")?;
        let creators = media_contents::Entity::find_by_id(id)
            .find_with_related(creators::Entity)
            .all(self.db)
            .await
            .context("load media contents creators")?;

        Ok(Some(MediaContents {
            rate: parse_rate(&model.rate)?,
            id: model.id,
            title: model.title,
            synopsis: model.synopsis,
            trailer: model.trailer,
            thumbnail: model.thumbnail,
            is_series: model.is_series,
            is_deleted: model.is_deleted,
            actors: linked_rows(actors, |m| {
                (!m.is_deleted).then(|| Reference::new(m.id, m.name, m.is_deleted))
            }),
            genres: linked_rows(genres, |m| {
                (!m.is_deleted).then(|| Reference::new(m.id, m.name, m.is_deleted))
            }),
            creators: linked_rows(creators, |m| {
                (!m.is_deleted).then(|| Reference::new(m.id, m.name, m.is_deleted))
            }),
        }))
    }
}

// ── Media series repository ──────────────────────────────────────────────────

pub struct DbMediaSeriesRepository<'a, C> {
    pub db: &'a C,
}

impl<C: ConnectionTrait> MediaSeriesRepository for DbMediaSeriesRepository<'_, C> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaSeries>, CatalogServiceError> {
        let model = media_series::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find media series by id")?;
        Ok(model.map(media_series_from_model))
    }

    async fn find_by_media_contents_id(
        &self,
        media_contents_id: Uuid,
    ) -> Result<Fetched<MediaSeries>, CatalogServiceError> {
        let rows = media_contents::Entity::find_by_id(media_contents_id)
            .find_with_related(media_series::Entity)
            .all(self.db)
            .await
            .context("list media series by media contents id")?;
        let mut fetched = linked_rows(rows, |m| Some(media_series_from_model(m)));
        if let Fetched::Found(series) = &mut fetched {
            series.sort_by_key(|s| s.order_index);
        }
        Ok(fetched)
    }
}

fn media_series_from_model(model: media_series::Model) -> MediaSeries {
    MediaSeries {
        id: model.id,
        media_contents_id: model.media_contents_id,
        title: model.title,
        order_index: model.order_index,
        is_deleted: model.is_deleted,
    }
}

// ── Media repository ─────────────────────────────────────────────────────────

pub struct DbMediaRepository<'a, C> {
    pub db: &'a C,
}

impl<C: ConnectionTrait> MediaRepository for DbMediaRepository<'_, C> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Media>, CatalogServiceError> {
        let model = media::Entity::find_by_id(id)
            .one(self.db)
            .await
            .context("find media by id")?;
        Ok(model.map(media_from_model))
    }

    async fn find_by_media_series_id(
        &self,
        media_series_id: Uuid,
    ) -> Result<Fetched<Media>, CatalogServiceError> {
        let rows = media_series::Entity::find_by_id(media_series_id)
            .find_with_related(media::Entity)
            .all(self.db)
            .await
            .context("list media by media series id")?;
        let mut fetched = linked_rows(rows, |m| Some(media_from_model(m)));
        if let Fetched::Found(media) = &mut fetched {
            media.sort_by_key(|m| m.order_index);
        }
        Ok(fetched)
    }

    async fn update(&self, id: Uuid, entity: &Media) -> Result<Option<Media>, CatalogServiceError> {
        let result = media::Entity::update_many()
            .col_expr(media::Column::Title, Expr::value(entity.title.clone()))
            .col_expr(media::Column::Synopsis, Expr::value(entity.synopsis.clone()))
            .col_expr(media::Column::OrderIndex, Expr::value(entity.order_index))
            .col_expr(media::Column::Url, Expr::value(entity.url.clone()))
            .col_expr(media::Column::Thumbnail, Expr::value(entity.thumbnail.clone()))
            .col_expr(media::Column::RunningTime, Expr::value(entity.running_time))
            .filter(media::Column::Id.eq(id))
            .filter(media::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await
            .context("update media")?;
        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }
}

fn media_from_model(model: media::Model) -> Media {
    Media {
        id: model.id,
        media_series_id: model.media_series_id,
        title: model.title,
        synopsis: model.synopsis,
        order_index: model.order_index,
        url: model.url,
        thumbnail: model.thumbnail,
        running_time: model.running_time,
        is_deleted: model.is_deleted,
    }
}

// ── Like repository ──────────────────────────────────────────────────────────

pub struct DbLikeRepository<'a, C> {
    pub db: &'a C,
}

impl<C: ConnectionTrait> LikeRepository for DbLikeRepository<'_, C> {
    async fn is_exist(&self, profile_id: Uuid, media_contents_id: Uuid) -> bool {
        match likes::Entity::find_by_id((profile_id, media_contents_id))
            .one(self.db)
            .await
        {
            Ok(row) => row.is_some(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    %profile_id,
                    %media_contents_id,
                    "like lookup failed, reporting not liked"
                );
                false
            }
        }
    }
}

// ── Reference repositories (genre / actor / creator) ─────────────────────────

pub struct DbReferenceRepository<'a, C, K> {
    pub db: &'a C,
    kind: PhantomData<fn() -> K>,
}

impl<'a, C, K> DbReferenceRepository<'a, C, K> {
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            kind: PhantomData,
        }
    }
}

// The three tables share one shape, so one body serves all of them.
macro_rules! impl_reference_repository {
    ($kind:ty, $table:ident) => {
        impl<C: ConnectionTrait> ReferenceRepository<$kind>
            for DbReferenceRepository<'_, C, $kind>
        {
            async fn find_by_id(
                &self,
                id: Uuid,
            ) -> Result<Option<Reference<$kind>>, CatalogServiceError> {
                let model = $table::Entity::find_by_id(id)
                    .one(self.db)
                    .await
                    .context(concat!("find ", stringify!($table), " by id"))?;
                Ok(model.map(|m| Reference::new(m.id, m.name, m.is_deleted)))
            }

            async fn find_all(&self) -> Result<Fetched<Reference<$kind>>, CatalogServiceError> {
                let models = $table::Entity::find()
                    .filter($table::Column::IsDeleted.eq(false))
                    .order_by_asc($table::Column::Name)
                    .all(self.db)
                    .await
                    .context(concat!("list ", stringify!($table)))?;
                Ok(Fetched::from_rows(
                    models
                        .into_iter()
                        .map(|m| Reference::new(m.id, m.name, m.is_deleted))
                        .collect(),
                ))
            }

            async fn save(
                &self,
                entity: &Reference<$kind>,
            ) -> Result<Reference<$kind>, CatalogServiceError> {
                let model = $table::ActiveModel {
                    id: Set(entity.id),
                    name: Set(entity.name.clone()),
                    is_deleted: Set(entity.is_deleted),
                }
                .insert(self.db)
                .await
                .context(concat!("create ", stringify!($table)))?;
                Ok(Reference::new(model.id, model.name, model.is_deleted))
            }

            async fn update(
                &self,
                id: Uuid,
                entity: &Reference<$kind>,
            ) -> Result<Option<Reference<$kind>>, CatalogServiceError> {
                let result = $table::Entity::update_many()
                    .col_expr($table::Column::Name, Expr::value(entity.name.clone()))
                    .filter($table::Column::Id.eq(id))
                    .filter($table::Column::IsDeleted.eq(false))
                    .exec(self.db)
                    .await
                    .context(concat!("update ", stringify!($table)))?;
                if result.rows_affected == 0 {
                    return Ok(None);
                }
                self.find_by_id(id).await
            }

            async fn delete(
                &self,
                id: Uuid,
            ) -> Result<Option<Reference<$kind>>, CatalogServiceError> {
                let result = $table::Entity::update_many()
                    .col_expr($table::Column::IsDeleted, Expr::value(true))
                    .filter($table::Column::Id.eq(id))
                    .filter($table::Column::IsDeleted.eq(false))
                    .exec(self.db)
                    .await
                    .context(concat!("soft-delete ", stringify!($table)))?;
                if result.rows_affected == 0 {
                    return Ok(None);
                }
                self.find_by_id(id).await
            }
        }
    };
}

impl_reference_repository!(GenreKind, genres);
impl_reference_repository!(ActorKind, actors);
impl_reference_repository!(CreatorKind, creators);
