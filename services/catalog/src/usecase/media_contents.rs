use uuid::Uuid;

use crate::domain::repository::{
    LikeRepository, MediaContentsRepository, MediaRepository, MediaSeriesRepository,
    ProfileRepository,
};
use crate::domain::types::{
    Fetched, Media, MediaContents, MediaContentsDetail, MediaSeries, MediaSeriesDetail, Profile,
};
use crate::domain::validator::{IsDeletedValidator, RateValidator, Validator, ValidatorChain};
use crate::error::CatalogServiceError;

// ── GetMediaSeries ───────────────────────────────────────────────────────────

pub struct GetMediaSeriesUseCase<S: MediaSeriesRepository, P: ProfileRepository> {
    pub series: S,
    pub profiles: P,
}

impl<S: MediaSeriesRepository, P: ProfileRepository> GetMediaSeriesUseCase<S, P> {
    /// Shallow lookup: existence only, no deletion or rating gate.
    pub async fn execute(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        media_series_id: Uuid,
    ) -> Result<MediaSeries, CatalogServiceError> {
        let series = self
            .series
            .find_by_id(media_series_id)
            .await?
            .ok_or_else(|| CatalogServiceError::not_found(MediaSeries::DOMAIN, media_series_id))?;

        self.profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| CatalogServiceError::not_found(Profile::DOMAIN, profile_id))?;

        tracing::debug!(%user_id, %profile_id, %media_series_id, "media series resolved");
        Ok(series)
    }
}

// ── GetMediaContents ─────────────────────────────────────────────────────────

pub struct GetMediaContentsUseCase<P, C, S, M, L>
where
    P: ProfileRepository,
    C: MediaContentsRepository,
    S: MediaSeriesRepository,
    M: MediaRepository,
    L: LikeRepository,
{
    pub profiles: P,
    pub contents: C,
    pub series: S,
    pub media: M,
    pub likes: L,
}

impl<P, C, S, M, L> GetMediaContentsUseCase<P, C, S, M, L>
where
    P: ProfileRepository,
    C: MediaContentsRepository,
    S: MediaSeriesRepository,
    M: MediaRepository,
    L: LikeRepository,
{
    /// Resolve a catalog item with its series and media for one profile.
    ///
    /// Profile existence and deletion are checked before any content lookup,
    /// and the rating before the hierarchy walk. A soft-deleted item is
    /// rejected right after the rating check.
    pub async fn execute(
        &self,
        user_id: Uuid,
        profile_id: Uuid,
        media_contents_id: Uuid,
    ) -> Result<MediaContentsDetail, CatalogServiceError> {
        let profile = self
            .profiles
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| CatalogServiceError::not_found(Profile::DOMAIN, profile_id))?;

        IsDeletedValidator::new(profile.is_deleted, Profile::DOMAIN).validate()?;

        let contents = self
            .contents
            .find_by_id(media_contents_id)
            .await?
            .ok_or_else(|| {
                CatalogServiceError::not_found(MediaContents::DOMAIN, media_contents_id)
            })?;

        ValidatorChain::new()
            .then(RateValidator::new(
                profile.rate,
                contents.rate,
                MediaContents::DOMAIN,
            ))
            .then(IsDeletedValidator::new(
                contents.is_deleted,
                MediaContents::DOMAIN,
            ))
            .validate()?;

        let MediaContents {
            id,
            title,
            synopsis,
            trailer,
            thumbnail,
            rate,
            is_series,
            is_deleted: _,
            actors,
            genres,
            creators,
        } = contents;

        let actors = relation_rows(actors, "ACTOR LIST", id)?;
        let genres = relation_rows(genres, "GENRE LIST", id)?;
        let creators = relation_rows(creators, "CREATOR LIST", id)?;

        let all_series = relation_rows(
            self.series.find_by_media_contents_id(id).await?,
            MediaSeries::DOMAIN,
            id,
        )?;

        let mut series = Vec::with_capacity(all_series.len());
        for s in all_series.into_iter().filter(|s| !s.is_deleted) {
            let media = relation_rows(
                self.media.find_by_media_series_id(s.id).await?,
                Media::DOMAIN,
                s.id,
            )?;
            series.push(MediaSeriesDetail {
                id: s.id,
                title: s.title,
                order_index: s.order_index,
                media: media.into_iter().filter(|m| !m.is_deleted).collect(),
            });
        }

        let is_like = self.likes.is_exist(profile_id, id).await;

        tracing::debug!(
            %user_id,
            %profile_id,
            media_contents_id = %id,
            series = series.len(),
            is_like,
            "media contents resolved"
        );

        Ok(MediaContentsDetail {
            id,
            title,
            synopsis,
            trailer,
            thumbnail,
            rate,
            is_series,
            actors,
            genres,
            creators,
            series,
            is_like,
        })
    }
}

/// A failed relation fetch surfaces as a missing row of `domain` under `parent`.
fn relation_rows<T>(
    fetched: Fetched<T>,
    domain: &'static str,
    parent: Uuid,
) -> Result<Vec<T>, CatalogServiceError> {
    fetched.into_rows().ok_or_else(|| {
        tracing::warn!(%parent, domain, "relation fetch failed");
        CatalogServiceError::not_found(domain, parent)
    })
}
