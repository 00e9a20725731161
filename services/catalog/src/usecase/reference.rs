use std::marker::PhantomData;

use uuid::Uuid;

use crate::domain::repository::ReferenceRepository;
use crate::domain::types::{Reference, ReferenceKind};
use crate::domain::validator::{IsDeletedValidator, Validator};
use crate::error::CatalogServiceError;

fn checked_name(name: &str) -> Result<&str, CatalogServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogServiceError::InvalidRequest(
            "name must not be empty".to_owned(),
        ));
    }
    Ok(name)
}

/// Load a live entity or fail with `ROW_DOES_NOT_EXIST` / `ROW_ALREADY_DELETED`.
async fn load_live<K, R>(repo: &R, id: Uuid) -> Result<Reference<K>, CatalogServiceError>
where
    K: ReferenceKind,
    R: ReferenceRepository<K>,
{
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| CatalogServiceError::not_found(K::DOMAIN, id))?;
    IsDeletedValidator::new(entity.is_deleted, K::DOMAIN).validate()?;
    Ok(entity)
}

// ── CreateReference ──────────────────────────────────────────────────────────

pub struct CreateReferenceUseCase<K, R: ReferenceRepository<K>> {
    pub repo: R,
    pub kind: PhantomData<fn() -> K>,
}

impl<K: ReferenceKind, R: ReferenceRepository<K>> CreateReferenceUseCase<K, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            kind: PhantomData,
        }
    }

    pub async fn execute(&self, name: &str) -> Result<Reference<K>, CatalogServiceError> {
        let entity = Reference::of(checked_name(name)?);
        self.repo.save(&entity).await
    }
}

// ── UpdateReference ──────────────────────────────────────────────────────────

pub struct UpdateReferenceUseCase<K, R: ReferenceRepository<K>> {
    pub repo: R,
    pub kind: PhantomData<fn() -> K>,
}

impl<K: ReferenceKind, R: ReferenceRepository<K>> UpdateReferenceUseCase<K, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            kind: PhantomData,
        }
    }

    pub async fn execute(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<Reference<K>, CatalogServiceError> {
        let name = checked_name(name)?;
        let mut entity = load_live(&self.repo, id).await?;
        entity.rename(name);

        self.repo.update(id, &entity).await?.ok_or_else(|| {
            CatalogServiceError::InvariantViolated(format!(
                "{} IS CHECKED, BUT UPDATE RETURNED NOTHING",
                K::DOMAIN
            ))
        })
    }
}

// ── DeleteReference ──────────────────────────────────────────────────────────

pub struct DeleteReferenceUseCase<K, R: ReferenceRepository<K>> {
    pub repo: R,
    pub kind: PhantomData<fn() -> K>,
}

impl<K: ReferenceKind, R: ReferenceRepository<K>> DeleteReferenceUseCase<K, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            kind: PhantomData,
        }
    }

    pub async fn execute(&self, id: Uuid) -> Result<Reference<K>, CatalogServiceError> {
        load_live(&self.repo, id).await?;
        self.repo
            .delete(id)
            .await?
            .ok_or_else(|| CatalogServiceError::not_found(K::DOMAIN, id))
    }
}

// ── ListReferences ───────────────────────────────────────────────────────────

pub struct ListReferencesUseCase<K, R: ReferenceRepository<K>> {
    pub repo: R,
    pub kind: PhantomData<fn() -> K>,
}

impl<K: ReferenceKind, R: ReferenceRepository<K>> ListReferencesUseCase<K, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            kind: PhantomData,
        }
    }

    pub async fn execute(&self) -> Result<Vec<Reference<K>>, CatalogServiceError> {
        self.repo
            .find_all()
            .await?
            .into_rows()
            .ok_or_else(|| CatalogServiceError::not_found(K::DOMAIN, "LIST"))
    }
}
