use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;

use kino_auth_types::identity::IdentityHeaders;
use kino_domain::rating::ContentRating;

use crate::domain::types::{
    Media, MediaContentsDetail, MediaSeries, MediaSeriesDetail, Reference, ReferenceKind,
};
use crate::error::CatalogServiceError;
use crate::infra::db::{
    DbLikeRepository, DbMediaContentsRepository, DbMediaRepository, DbMediaSeriesRepository,
    DbProfileRepository, begin_read_snapshot, finish,
};
use crate::state::AppState;
use crate::usecase::media_contents::{GetMediaContentsUseCase, GetMediaSeriesUseCase};

#[derive(Serialize)]
pub struct ReferenceResponse {
    pub id: String,
    pub name: String,
}

impl<K: ReferenceKind> From<Reference<K>> for ReferenceResponse {
    fn from(r: Reference<K>) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name,
        }
    }
}

// ── GET /profiles/{profile_id}/contents/{media_contents_id} ──────────────────

#[derive(Serialize)]
pub struct MediaResponse {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub order_index: i32,
    pub url: String,
    pub thumbnail: String,
    pub running_time: i32,
}

impl From<Media> for MediaResponse {
    fn from(m: Media) -> Self {
        Self {
            id: m.id.to_string(),
            title: m.title,
            synopsis: m.synopsis,
            order_index: m.order_index,
            url: m.url,
            thumbnail: m.thumbnail,
            running_time: m.running_time,
        }
    }
}

#[derive(Serialize)]
pub struct MediaSeriesDetailResponse {
    pub id: String,
    pub title: String,
    pub order_index: i32,
    pub media: Vec<MediaResponse>,
}

impl From<MediaSeriesDetail> for MediaSeriesDetailResponse {
    fn from(s: MediaSeriesDetail) -> Self {
        Self {
            id: s.id.to_string(),
            title: s.title,
            order_index: s.order_index,
            media: s.media.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct MediaContentsResponse {
    pub id: String,
    pub title: String,
    pub synopsis: String,
    pub trailer: String,
    pub thumbnail: String,
    pub rate: ContentRating,
    pub is_series: bool,
    pub actors: Vec<ReferenceResponse>,
    pub genres: Vec<ReferenceResponse>,
    pub creators: Vec<ReferenceResponse>,
    pub series: Vec<MediaSeriesDetailResponse>,
    pub is_like: bool,
}

impl From<MediaContentsDetail> for MediaContentsResponse {
    fn from(d: MediaContentsDetail) -> Self {
        Self {
            id: d.id.to_string(),
            title: d.title,
            synopsis: d.synopsis,
            trailer: d.trailer,
            thumbnail: d.thumbnail,
            rate: d.rate,
            is_series: d.is_series,
            actors: d.actors.into_iter().map(Into::into).collect(),
            genres: d.genres.into_iter().map(Into::into).collect(),
            creators: d.creators.into_iter().map(Into::into).collect(),
            series: d.series.into_iter().map(Into::into).collect(),
            is_like: d.is_like,
        }
    }
}

pub async fn get_media_contents(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((profile_id, media_contents_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MediaContentsResponse>, CatalogServiceError> {
    let txn = begin_read_snapshot(&state.db).await?;
    let usecase = GetMediaContentsUseCase {
        profiles: DbProfileRepository { db: &txn },
        contents: DbMediaContentsRepository { db: &txn },
        series: DbMediaSeriesRepository { db: &txn },
        media: DbMediaRepository { db: &txn },
        likes: DbLikeRepository { db: &txn },
    };
    let outcome = usecase
        .execute(identity.user_id, profile_id, media_contents_id)
        .await;
    let detail = finish(txn, outcome).await?;
    Ok(Json(detail.into()))
}

// ── GET /profiles/{profile_id}/series/{media_series_id} ──────────────────────

#[derive(Serialize)]
pub struct MediaSeriesResponse {
    pub id: String,
    pub media_contents_id: String,
    pub title: String,
    pub order_index: i32,
}

impl From<MediaSeries> for MediaSeriesResponse {
    fn from(s: MediaSeries) -> Self {
        Self {
            id: s.id.to_string(),
            media_contents_id: s.media_contents_id.to_string(),
            title: s.title,
            order_index: s.order_index,
        }
    }
}

pub async fn get_media_series(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path((profile_id, media_series_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MediaSeriesResponse>, CatalogServiceError> {
    let txn = begin_read_snapshot(&state.db).await?;
    let usecase = GetMediaSeriesUseCase {
        series: DbMediaSeriesRepository { db: &txn },
        profiles: DbProfileRepository { db: &txn },
    };
    let outcome = usecase
        .execute(identity.user_id, profile_id, media_series_id)
        .await;
    let series = finish(txn, outcome).await?;
    Ok(Json(series.into()))
}
