use uuid::Uuid;

use kino_catalog::domain::types::MediaChanges;
use kino_catalog::error::{CatalogServiceError, ErrorCode};
use kino_catalog::usecase::media::UpdateMediaUseCase;

use crate::helpers::{MockMediaRepo, test_media};

fn director_cut() -> MediaChanges {
    MediaChanges {
        title: "  Pilot (Director's Cut)  ".to_owned(),
        synopsis: "The long version.".to_owned(),
        order_index: 1,
        url: "https://cdn.example.com/pilot-dc.m3u8".to_owned(),
        thumbnail: "https://img.example.com/pilot-dc.png".to_owned(),
        running_time: 3_300,
    }
}

// ── UpdateMediaUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_update_every_editable_field() {
    let media = test_media(Uuid::new_v4(), 1);
    let repo = MockMediaRepo::new(vec![media.clone()]);
    let rows = repo.media_handle();
    let usecase = UpdateMediaUseCase { repo };

    let updated = usecase.execute(media.id, director_cut()).await.unwrap();

    assert_eq!(updated.id, media.id);
    assert_eq!(updated.media_series_id, media.media_series_id);
    assert_eq!(updated.title, "Pilot (Director's Cut)");
    assert_eq!(updated.synopsis, "The long version.");
    assert_eq!(updated.url, "https://cdn.example.com/pilot-dc.m3u8");
    assert_eq!(updated.running_time, 3_300);
    assert_eq!(rows.lock().unwrap()[0], updated);
}

#[tokio::test]
async fn should_fail_media_update_when_media_missing() {
    let usecase = UpdateMediaUseCase {
        repo: MockMediaRepo::empty(),
    };

    let result = usecase.execute(Uuid::new_v4(), director_cut()).await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist { domain: "MEDIA", .. })
        ),
        "expected RowDoesNotExist(MEDIA), got {result:?}"
    );
}

#[tokio::test]
async fn should_refuse_update_of_deleted_media() {
    let mut media = test_media(Uuid::new_v4(), 1);
    media.is_deleted = true;
    let repo = MockMediaRepo::new(vec![media.clone()]);
    let rows = repo.media_handle();
    let usecase = UpdateMediaUseCase { repo };

    let result = usecase.execute(media.id, director_cut()).await;

    assert_eq!(
        result.as_ref().err().map(CatalogServiceError::code),
        Some(ErrorCode::RowAlreadyDeleted)
    );
    assert_eq!(result.unwrap_err().to_string(), "MEDIA IS ALREADY DELETED");
    assert_eq!(rows.lock().unwrap()[0], media);
}

#[tokio::test]
async fn should_flag_invariant_when_validated_media_write_is_lost() {
    let media = test_media(Uuid::new_v4(), 1);
    let usecase = UpdateMediaUseCase {
        repo: MockMediaRepo::new(vec![media.clone()]).losing_writes(),
    };

    let result = usecase.execute(media.id, director_cut()).await;

    assert!(
        matches!(result, Err(CatalogServiceError::InvariantViolated(_))),
        "expected InvariantViolated, got {result:?}"
    );
    assert_eq!(result.unwrap_err().code(), ErrorCode::InternalServer);
}

#[tokio::test]
async fn should_reject_blank_media_title() {
    let media = test_media(Uuid::new_v4(), 1);
    let usecase = UpdateMediaUseCase {
        repo: MockMediaRepo::new(vec![media.clone()]),
    };

    let result = usecase
        .execute(
            media.id,
            MediaChanges {
                title: "   ".to_owned(),
                ..director_cut()
            },
        )
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::InvalidRequest(_))),
        "expected InvalidRequest, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_negative_running_time() {
    let media = test_media(Uuid::new_v4(), 1);
    let usecase = UpdateMediaUseCase {
        repo: MockMediaRepo::new(vec![media.clone()]),
    };

    let result = usecase
        .execute(
            media.id,
            MediaChanges {
                running_time: -1,
                ..director_cut()
            },
        )
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::InvalidRequest(_))),
        "expected InvalidRequest, got {result:?}"
    );
}
