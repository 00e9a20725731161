use axum::{
    Router,
    routing::{get, patch},
};

use kino_core::health::{healthz, readyz};
use kino_core::middleware::{request_id_layer, trace_layer};

use crate::domain::types::{ActorKind, CreatorKind, GenreKind};
use crate::handlers::{
    media::update_media,
    media_contents::{get_media_contents, get_media_series},
    reference::{create_reference, delete_reference, list_references, update_reference},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Resolution
        .route(
            "/profiles/{profile_id}/contents/{media_contents_id}",
            get(get_media_contents),
        )
        .route(
            "/profiles/{profile_id}/series/{media_series_id}",
            get(get_media_series),
        )
        // Media
        .route("/media/{id}", patch(update_media))
        // Genres
        .route(
            "/genres",
            get(list_references::<GenreKind>).post(create_reference::<GenreKind>),
        )
        .route(
            "/genres/{id}",
            patch(update_reference::<GenreKind>).delete(delete_reference::<GenreKind>),
        )
        // Actors
        .route(
            "/actors",
            get(list_references::<ActorKind>).post(create_reference::<ActorKind>),
        )
        .route(
            "/actors/{id}",
            patch(update_reference::<ActorKind>).delete(delete_reference::<ActorKind>),
        )
        // Creators
        .route(
            "/creators",
            get(list_references::<CreatorKind>).post(create_reference::<CreatorKind>),
        )
        .route(
            "/creators/{id}",
            patch(update_reference::<CreatorKind>).delete(delete_reference::<CreatorKind>),
        )
        .layer(trace_layer())
        .layer(request_id_layer())
        .with_state(state)
}
