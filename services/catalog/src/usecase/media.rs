use uuid::Uuid;

use crate::domain::repository::MediaRepository;
use crate::domain::types::{Media, MediaChanges};
use crate::domain::validator::{IsDeletedValidator, Validator};
use crate::error::CatalogServiceError;

fn checked_changes(mut changes: MediaChanges) -> Result<MediaChanges, CatalogServiceError> {
    changes.title = changes.title.trim().to_owned();
    if changes.title.is_empty() {
        return Err(CatalogServiceError::InvalidRequest(
            "title must not be empty".to_owned(),
        ));
    }
    if changes.order_index < 0 {
        return Err(CatalogServiceError::InvalidRequest(
            "order_index must not be negative".to_owned(),
        ));
    }
    if changes.running_time < 0 {
        return Err(CatalogServiceError::InvalidRequest(
            "running_time must not be negative".to_owned(),
        ));
    }
    Ok(changes)
}

// ── UpdateMedia ──────────────────────────────────────────────────────────────

pub struct UpdateMediaUseCase<M: MediaRepository> {
    pub repo: M,
}

impl<M: MediaRepository> UpdateMediaUseCase<M> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: MediaChanges,
    ) -> Result<Media, CatalogServiceError> {
        let changes = checked_changes(changes)?;

        let mut media = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogServiceError::not_found(Media::DOMAIN, id))?;

        IsDeletedValidator::new(media.is_deleted, Media::DOMAIN).validate()?;

        media.apply(changes);

        self.repo.update(id, &media).await?.ok_or_else(|| {
            CatalogServiceError::InvariantViolated(format!(
                "{} IS CHECKED, BUT UPDATE RETURNED NOTHING",
                Media::DOMAIN
            ))
        })
    }
}
