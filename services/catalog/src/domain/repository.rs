#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Fetched, Media, MediaContents, MediaSeries, Profile, Reference};
use crate::error::CatalogServiceError;

/// Repository for viewing profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, CatalogServiceError>;
}

/// Repository for top-level catalog items, loaded with their reference sets.
pub trait MediaContentsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaContents>, CatalogServiceError>;
}

/// Repository for series under a catalog item.
pub trait MediaSeriesRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaSeries>, CatalogServiceError>;

    /// Series whose parent is `media_contents_id`, ordered by `order_index`.
    async fn find_by_media_contents_id(
        &self,
        media_contents_id: Uuid,
    ) -> Result<Fetched<MediaSeries>, CatalogServiceError>;
}

/// Repository for playable media under a series.
pub trait MediaRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Media>, CatalogServiceError>;

    /// Media whose parent is `media_series_id`, ordered by `order_index`.
    async fn find_by_media_series_id(
        &self,
        media_series_id: Uuid,
    ) -> Result<Fetched<Media>, CatalogServiceError>;

    /// Write back the editable fields of a live `entity`. `None` if no row
    /// was updated.
    async fn update(&self, id: Uuid, entity: &Media) -> Result<Option<Media>, CatalogServiceError>;
}

/// Like records between profiles and catalog items.
pub trait LikeRepository: Send + Sync {
    /// Whether the profile liked the item. Infallible: a missing record, or a
    /// lookup that could not complete, reads as "not liked".
    async fn is_exist(&self, profile_id: Uuid, media_contents_id: Uuid) -> bool;
}

/// Repository for genres, actors or creators.
pub trait ReferenceRepository<K>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Reference<K>>, CatalogServiceError>;

    /// Every live entity of this kind.
    async fn find_all(&self) -> Result<Fetched<Reference<K>>, CatalogServiceError>;

    async fn save(&self, entity: &Reference<K>) -> Result<Reference<K>, CatalogServiceError>;

    /// Write back `entity`. `None` if no row was updated.
    async fn update(
        &self,
        id: Uuid,
        entity: &Reference<K>,
    ) -> Result<Option<Reference<K>>, CatalogServiceError>;

    /// Soft-delete. `None` if no row was updated.
    async fn delete(&self, id: Uuid) -> Result<Option<Reference<K>>, CatalogServiceError>;
}
