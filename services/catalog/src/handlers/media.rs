use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use kino_auth_types::identity::IdentityHeaders;

use crate::domain::types::MediaChanges;
use crate::error::CatalogServiceError;
use crate::handlers::media_contents::MediaResponse;
use crate::infra::db::{DbMediaRepository, begin_write, finish};
use crate::state::AppState;
use crate::usecase::media::UpdateMediaUseCase;

// ── PATCH /media/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateMediaRequest {
    pub title: String,
    pub synopsis: String,
    pub order_index: i32,
    pub url: String,
    pub thumbnail: String,
    pub running_time: i32,
}

pub async fn update_media(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateMediaRequest>,
) -> Result<Json<MediaResponse>, CatalogServiceError> {
    if !identity.is_admin() {
        return Err(CatalogServiceError::Forbidden);
    }
    let txn = begin_write(&state.db).await?;
    let usecase = UpdateMediaUseCase {
        repo: DbMediaRepository { db: &txn },
    };
    let outcome = usecase
        .execute(
            id,
            MediaChanges {
                title: body.title,
                synopsis: body.synopsis,
                order_index: body.order_index,
                url: body.url,
                thumbnail: body.thumbnail,
                running_time: body.running_time,
            },
        )
        .await;
    let media = finish(txn, outcome).await?;
    tracing::info!(%id, "media updated");
    Ok(Json(media.into()))
}
