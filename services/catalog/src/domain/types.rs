use std::marker::PhantomData;

use uuid::Uuid;

use kino_domain::rating::ContentRating;

/// Result of loading the rows on one side of a relation.
///
/// `FetchFailed` means the relation itself could not be resolved (for
/// example the parent row vanished); it is not the same as "no rows".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    Found(Vec<T>),
    FoundEmpty,
    FetchFailed,
}

impl<T> Fetched<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Self::FoundEmpty
        } else {
            Self::Found(rows)
        }
    }

    /// Rows of a resolved relation; `None` only for `FetchFailed`.
    pub fn into_rows(self) -> Option<Vec<T>> {
        match self {
            Self::Found(rows) => Some(rows),
            Self::FoundEmpty => Some(Vec::new()),
            Self::FetchFailed => None,
        }
    }
}

/// Viewing identity under a user account.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub rate: ContentRating,
    pub image: String,
    pub is_deleted: bool,
}

impl Profile {
    pub const DOMAIN: &'static str = "PROFILE";
}

// ── Reference entities ───────────────────────────────────────────────────────

/// Marker for one flavour of flat reference entity.
pub trait ReferenceKind: Send + Sync + 'static {
    /// Label used in error messages.
    const DOMAIN: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreKind {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatorKind {}

impl ReferenceKind for GenreKind {
    const DOMAIN: &'static str = "GENRE";
}

impl ReferenceKind for ActorKind {
    const DOMAIN: &'static str = "ACTOR";
}

impl ReferenceKind for CreatorKind {
    const DOMAIN: &'static str = "CREATOR";
}

/// Flat `{id, name, is_deleted}` entity linked to catalog items.
#[derive(Debug)]
pub struct Reference<K> {
    pub id: Uuid,
    pub name: String,
    pub is_deleted: bool,
    kind: PhantomData<fn() -> K>,
}

pub type Genre = Reference<GenreKind>;
pub type Actor = Reference<ActorKind>;
pub type Creator = Reference<CreatorKind>;

impl<K: ReferenceKind> Reference<K> {
    pub const DOMAIN: &'static str = K::DOMAIN;

    pub fn new(id: Uuid, name: impl Into<String>, is_deleted: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_deleted,
            kind: PhantomData,
        }
    }

    /// A fresh, live entity with a time-ordered id.
    pub fn of(name: impl Into<String>) -> Self {
        Self::new(Uuid::now_v7(), name, false)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl<K> Clone for Reference<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            is_deleted: self.is_deleted,
            kind: PhantomData,
        }
    }
}

impl<K> PartialEq for Reference<K> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.is_deleted == other.is_deleted
    }
}

// ── Catalog hierarchy ────────────────────────────────────────────────────────

/// Top-level catalog item with its reference sets.
#[derive(Debug, Clone)]
pub struct MediaContents {
    pub id: Uuid,
    pub title: String,
    pub synopsis: String,
    pub trailer: String,
    pub thumbnail: String,
    pub rate: ContentRating,
    pub is_series: bool,
    pub is_deleted: bool,
    pub actors: Fetched<Actor>,
    pub genres: Fetched<Genre>,
    pub creators: Fetched<Creator>,
}

impl MediaContents {
    pub const DOMAIN: &'static str = "MEDIA CONTENTS";
}

/// A season or grouping under one catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSeries {
    pub id: Uuid,
    pub media_contents_id: Uuid,
    pub title: String,
    pub order_index: i32,
    pub is_deleted: bool,
}

impl MediaSeries {
    pub const DOMAIN: &'static str = "MEDIA SERIES";
}

/// A single playable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: Uuid,
    pub media_series_id: Uuid,
    pub title: String,
    pub synopsis: String,
    pub order_index: i32,
    pub url: String,
    pub thumbnail: String,
    /// Seconds.
    pub running_time: i32,
    pub is_deleted: bool,
}

impl Media {
    pub const DOMAIN: &'static str = "MEDIA";

    pub fn apply(&mut self, changes: MediaChanges) {
        let MediaChanges {
            title,
            synopsis,
            order_index,
            url,
            thumbnail,
            running_time,
        } = changes;
        self.title = title;
        self.synopsis = synopsis;
        self.order_index = order_index;
        self.url = url;
        self.thumbnail = thumbnail;
        self.running_time = running_time;
    }
}

/// Editable fields of a [`Media`]. Parent series and deletion state are not
/// editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaChanges {
    pub title: String,
    pub synopsis: String,
    pub order_index: i32,
    pub url: String,
    pub thumbnail: String,
    pub running_time: i32,
}

/// Fully resolved catalog item as seen by one profile.
#[derive(Debug, Clone)]
pub struct MediaContentsDetail {
    pub id: Uuid,
    pub title: String,
    pub synopsis: String,
    pub trailer: String,
    pub thumbnail: String,
    pub rate: ContentRating,
    pub is_series: bool,
    pub actors: Vec<Actor>,
    pub genres: Vec<Genre>,
    pub creators: Vec<Creator>,
    pub series: Vec<MediaSeriesDetail>,
    pub is_like: bool,
}

/// A live series with its live media, in play order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSeriesDetail {
    pub id: Uuid,
    pub title: String,
    pub order_index: i32,
    pub media: Vec<Media>,
}
