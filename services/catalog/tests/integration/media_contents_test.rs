use uuid::Uuid;

use kino_catalog::domain::types::{Fetched, MediaContentsDetail};
use kino_catalog::error::{CatalogServiceError, ErrorCode};
use kino_catalog::usecase::media_contents::{GetMediaContentsUseCase, GetMediaSeriesUseCase};
use kino_domain::rating::ContentRating;

use crate::helpers::{
    MockLikeRepo, MockMediaContentsRepo, MockMediaRepo, MockMediaSeriesRepo, MockProfileRepo,
    test_contents, test_media, test_profile, test_series, test_user_id,
};

type Resolver = GetMediaContentsUseCase<
    MockProfileRepo,
    MockMediaContentsRepo,
    MockMediaSeriesRepo,
    MockMediaRepo,
    MockLikeRepo,
>;

fn resolver(
    profiles: MockProfileRepo,
    contents: MockMediaContentsRepo,
    series: MockMediaSeriesRepo,
    media: MockMediaRepo,
) -> Resolver {
    GetMediaContentsUseCase {
        profiles,
        contents,
        series,
        media,
        likes: MockLikeRepo::empty(),
    }
}

fn code_of(result: &Result<MediaContentsDetail, CatalogServiceError>) -> Option<ErrorCode> {
    result.as_ref().err().map(CatalogServiceError::code)
}

// ── Profile gate ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fail_when_profile_missing() {
    let contents = MockMediaContentsRepo::new(vec![test_contents(ContentRating::All)]);
    let lookups = contents.lookups_handle();
    let usecase = resolver(
        MockProfileRepo::empty(),
        contents,
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), Uuid::new_v4(), test_contents(ContentRating::All).id)
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist {
                domain: "PROFILE",
                ..
            })
        ),
        "expected RowDoesNotExist(PROFILE), got {result:?}"
    );
    assert_eq!(*lookups.lock().unwrap(), 0);
}

#[tokio::test]
async fn should_reject_deleted_profile_before_touching_contents() {
    let mut profile = test_profile(ContentRating::Nineteen);
    profile.is_deleted = true;
    let contents = MockMediaContentsRepo::new(vec![test_contents(ContentRating::All)]);
    let lookups = contents.lookups_handle();
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        contents,
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, test_contents(ContentRating::All).id)
        .await;

    assert_eq!(code_of(&result), Some(ErrorCode::RowAlreadyDeleted));
    assert_eq!(
        result.unwrap_err().to_string(),
        "PROFILE IS ALREADY DELETED"
    );
    assert_eq!(*lookups.lock().unwrap(), 0);
}

#[tokio::test]
async fn should_reject_deleted_profile_even_when_contents_missing() {
    let mut profile = test_profile(ContentRating::Nineteen);
    profile.is_deleted = true;
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::empty(),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, Uuid::new_v4())
        .await;

    assert_eq!(code_of(&result), Some(ErrorCode::RowAlreadyDeleted));
}

// ── Contents gate ────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_fail_when_contents_missing() {
    let profile = test_profile(ContentRating::Nineteen);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::empty(),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, Uuid::new_v4())
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist {
                domain: "MEDIA CONTENTS",
                ..
            })
        ),
        "expected RowDoesNotExist(MEDIA CONTENTS), got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_profile_cleared_below_contents_rating() {
    let profile = test_profile(ContentRating::Fifteen);
    let contents = test_contents(ContentRating::Nineteen);
    let series = MockMediaSeriesRepo::new(vec![test_series(contents.id, 1)]);
    let list_calls = series.list_calls_handle();
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        series,
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await;

    assert_eq!(code_of(&result), Some(ErrorCode::RateNotMatched));
    assert_eq!(*list_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn should_reject_every_rating_below_required() {
    for (i, &cleared) in ContentRating::LEVELS.iter().enumerate() {
        for &required in &ContentRating::LEVELS[i + 1..] {
            let profile = test_profile(cleared);
            let contents = test_contents(required);
            let usecase = resolver(
                MockProfileRepo::new(vec![profile.clone()]),
                MockMediaContentsRepo::new(vec![contents.clone()]),
                MockMediaSeriesRepo::empty(),
                MockMediaRepo::empty(),
            );

            let result = usecase
                .execute(test_user_id(), profile.id, contents.id)
                .await;

            assert_eq!(
                code_of(&result),
                Some(ErrorCode::RateNotMatched),
                "{cleared} viewing {required}"
            );
        }
    }
}

#[tokio::test]
async fn should_allow_profile_cleared_above_contents_rating() {
    let profile = test_profile(ContentRating::Twelve);
    let contents = test_contents(ContentRating::All);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();

    assert_eq!(detail.rate, ContentRating::All);
}

#[tokio::test]
async fn should_reject_deleted_contents_after_rating_check() {
    let profile = test_profile(ContentRating::Nineteen);
    let mut contents = test_contents(ContentRating::Fifteen);
    contents.is_deleted = true;
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await;

    assert_eq!(code_of(&result), Some(ErrorCode::RowAlreadyDeleted));
}

#[tokio::test]
async fn should_report_rating_before_deletion_of_contents() {
    let profile = test_profile(ContentRating::All);
    let mut contents = test_contents(ContentRating::Nineteen);
    contents.is_deleted = true;
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await;

    assert_eq!(code_of(&result), Some(ErrorCode::RateNotMatched));
}

// ── Hierarchy walk ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_contents_when_profile_cleared_for_rating() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::Nineteen);
    let season = test_series(contents.id, 1);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::new(vec![season.clone()]),
        MockMediaRepo::new(vec![test_media(season.id, 1)]),
    );

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();

    assert_eq!(detail.id, contents.id);
    assert_eq!(detail.title, contents.title);
    assert_eq!(detail.actors.len(), 1);
    assert_eq!(detail.genres.len(), 2);
    assert!(detail.creators.is_empty());
    assert_eq!(detail.series.len(), 1);
    assert_eq!(detail.series[0].media.len(), 1);
    assert!(!detail.is_like);
}

#[tokio::test]
async fn should_count_only_live_series() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let first = test_series(contents.id, 1);
    let third = test_series(contents.id, 3);
    let mut retired = test_series(contents.id, 2);
    retired.is_deleted = true;
    let other_parent = test_series(Uuid::new_v4(), 1);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::new(vec![
            third.clone(),
            retired.clone(),
            first.clone(),
            other_parent,
        ]),
        MockMediaRepo::empty(),
    );

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();

    assert_eq!(detail.series.len(), 2);
    let ids: Vec<Uuid> = detail.series.iter().map(|s| s.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&third.id));
    assert!(!ids.contains(&retired.id));
    assert!(detail.series.iter().all(|s| s.media.is_empty()));
}

#[tokio::test]
async fn should_accept_contents_without_series() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();

    assert!(detail.series.is_empty());
}

#[tokio::test]
async fn should_fail_when_series_fetch_fails() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::empty().failing_for(contents.id),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist {
                domain: "MEDIA SERIES",
                ..
            })
        ),
        "expected RowDoesNotExist(MEDIA SERIES), got {result:?}"
    );
}

#[tokio::test]
async fn should_fail_when_media_fetch_fails() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let season = test_series(contents.id, 1);
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::new(vec![season.clone()]),
        MockMediaRepo::empty().failing_for(season.id),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist { domain: "MEDIA", .. })
        ),
        "expected RowDoesNotExist(MEDIA), got {result:?}"
    );
}

#[tokio::test]
async fn should_skip_media_of_deleted_series() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let mut retired = test_series(contents.id, 1);
    retired.is_deleted = true;
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::new(vec![retired.clone()]),
        // A failing lookup would surface if the deleted series were walked.
        MockMediaRepo::empty().failing_for(retired.id),
    );

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();

    assert!(detail.series.is_empty());
}

#[tokio::test]
async fn should_drop_deleted_media() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let season = test_series(contents.id, 1);
    let mut pulled = test_media(season.id, 2);
    pulled.is_deleted = true;
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::new(vec![season.clone()]),
        MockMediaRepo::new(vec![
            test_media(season.id, 3),
            pulled.clone(),
            test_media(season.id, 1),
        ]),
    );

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();

    let media = &detail.series[0].media;
    assert_eq!(media.len(), 2);
    assert!(media.iter().all(|m| m.id != pulled.id && !m.is_deleted));
}

#[tokio::test]
async fn should_fail_when_reference_set_fetch_fails() {
    let profile = test_profile(ContentRating::Nineteen);
    let mut contents = test_contents(ContentRating::All);
    contents.genres = Fetched::FetchFailed;
    let usecase = resolver(
        MockProfileRepo::new(vec![profile.clone()]),
        MockMediaContentsRepo::new(vec![contents.clone()]),
        MockMediaSeriesRepo::empty(),
        MockMediaRepo::empty(),
    );

    let result = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist {
                domain: "GENRE LIST",
                ..
            })
        ),
        "expected RowDoesNotExist(GENRE LIST), got {result:?}"
    );
}

// ── Like flag ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_report_like_for_exact_pair_only() {
    let profile = test_profile(ContentRating::Nineteen);
    let contents = test_contents(ContentRating::All);
    let usecase = GetMediaContentsUseCase {
        profiles: MockProfileRepo::new(vec![profile.clone()]),
        contents: MockMediaContentsRepo::new(vec![contents.clone()]),
        series: MockMediaSeriesRepo::empty(),
        media: MockMediaRepo::empty(),
        likes: MockLikeRepo::new(vec![(profile.id, contents.id)]),
    };

    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();
    assert!(detail.is_like);

    let usecase = GetMediaContentsUseCase {
        likes: MockLikeRepo::new(vec![(Uuid::new_v4(), contents.id)]),
        ..usecase
    };
    let detail = usecase
        .execute(test_user_id(), profile.id, contents.id)
        .await
        .unwrap();
    assert!(!detail.is_like);
}

// ── GetMediaSeriesUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_fail_media_series_lookup_when_series_missing() {
    let profile = test_profile(ContentRating::Nineteen);
    let usecase = GetMediaSeriesUseCase {
        series: MockMediaSeriesRepo::empty(),
        profiles: MockProfileRepo::new(vec![profile.clone()]),
    };

    let result = usecase
        .execute(test_user_id(), profile.id, Uuid::new_v4())
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist {
                domain: "MEDIA SERIES",
                ..
            })
        ),
        "expected RowDoesNotExist(MEDIA SERIES), got {result:?}"
    );
}

#[tokio::test]
async fn should_fail_media_series_lookup_when_profile_missing() {
    let season = test_series(Uuid::new_v4(), 1);
    let usecase = GetMediaSeriesUseCase {
        series: MockMediaSeriesRepo::new(vec![season.clone()]),
        profiles: MockProfileRepo::empty(),
    };

    let result = usecase
        .execute(test_user_id(), Uuid::new_v4(), season.id)
        .await;

    assert!(
        matches!(
            result,
            Err(CatalogServiceError::RowDoesNotExist {
                domain: "PROFILE",
                ..
            })
        ),
        "expected RowDoesNotExist(PROFILE), got {result:?}"
    );
}

#[tokio::test]
async fn should_return_series_without_deletion_gate() {
    let profile = test_profile(ContentRating::All);
    let mut season = test_series(Uuid::new_v4(), 4);
    season.is_deleted = true;
    let usecase = GetMediaSeriesUseCase {
        series: MockMediaSeriesRepo::new(vec![season.clone()]),
        profiles: MockProfileRepo::new(vec![profile.clone()]),
    };

    let found = usecase
        .execute(test_user_id(), profile.id, season.id)
        .await
        .unwrap();

    assert_eq!(found, season);
}
