//! CRUD for genres, actors and creators. One generic handler set serves all
//! three; the router instantiates it per kind.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use sea_orm::DatabaseTransaction;
use serde::Deserialize;
use uuid::Uuid;

use kino_auth_types::identity::IdentityHeaders;

use crate::domain::repository::ReferenceRepository;
use crate::domain::types::ReferenceKind;
use crate::error::CatalogServiceError;
use crate::handlers::media_contents::ReferenceResponse;
use crate::infra::db::{DbReferenceRepository, begin_read_snapshot, begin_write, finish};
use crate::state::AppState;
use crate::usecase::reference::{
    CreateReferenceUseCase, DeleteReferenceUseCase, ListReferencesUseCase, UpdateReferenceUseCase,
};

#[derive(Deserialize)]
pub struct ReferenceRequest {
    pub name: String,
}

fn require_admin(identity: &IdentityHeaders) -> Result<(), CatalogServiceError> {
    if !identity.is_admin() {
        return Err(CatalogServiceError::Forbidden);
    }
    Ok(())
}

// ── GET /{kind} ──────────────────────────────────────────────────────────────

pub async fn list_references<K>(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<ReferenceResponse>>, CatalogServiceError>
where
    K: ReferenceKind,
    for<'a> DbReferenceRepository<'a, DatabaseTransaction, K>: ReferenceRepository<K>,
{
    let txn = begin_read_snapshot(&state.db).await?;
    let usecase = ListReferencesUseCase::<K, _>::new(DbReferenceRepository::new(&txn));
    let outcome = usecase.execute().await;
    let entities = finish(txn, outcome).await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

// ── POST /{kind} ─────────────────────────────────────────────────────────────

pub async fn create_reference<K>(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<ReferenceRequest>,
) -> Result<(StatusCode, Json<ReferenceResponse>), CatalogServiceError>
where
    K: ReferenceKind,
    for<'a> DbReferenceRepository<'a, DatabaseTransaction, K>: ReferenceRepository<K>,
{
    require_admin(&identity)?;
    let txn = begin_write(&state.db).await?;
    let usecase = CreateReferenceUseCase::<K, _>::new(DbReferenceRepository::new(&txn));
    let outcome = usecase.execute(&body.name).await;
    let entity = finish(txn, outcome).await?;
    tracing::info!(domain = K::DOMAIN, id = %entity.id, "reference created");
    Ok((StatusCode::CREATED, Json(entity.into())))
}

// ── PATCH /{kind}/{id} ───────────────────────────────────────────────────────

pub async fn update_reference<K>(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ReferenceRequest>,
) -> Result<Json<ReferenceResponse>, CatalogServiceError>
where
    K: ReferenceKind,
    for<'a> DbReferenceRepository<'a, DatabaseTransaction, K>: ReferenceRepository<K>,
{
    require_admin(&identity)?;
    let txn = begin_write(&state.db).await?;
    let usecase = UpdateReferenceUseCase::<K, _>::new(DbReferenceRepository::new(&txn));
    let outcome = usecase.execute(id, &body.name).await;
    let entity = finish(txn, outcome).await?;
    Ok(Json(entity.into()))
}

// ── DELETE /{kind}/{id} ──────────────────────────────────────────────────────

pub async fn delete_reference<K>(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CatalogServiceError>
where
    K: ReferenceKind,
    for<'a> DbReferenceRepository<'a, DatabaseTransaction, K>: ReferenceRepository<K>,
{
    require_admin(&identity)?;
    let txn = begin_write(&state.db).await?;
    let usecase = DeleteReferenceUseCase::<K, _>::new(DbReferenceRepository::new(&txn));
    let outcome = usecase.execute(id).await;
    finish(txn, outcome).await?;
    tracing::info!(domain = K::DOMAIN, %id, "reference deleted");
    Ok(StatusCode::NO_CONTENT)
}
