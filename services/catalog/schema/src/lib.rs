//! sea-orm entities for the catalog database.

pub mod actors;
pub mod creators;
pub mod genres;
pub mod likes;
pub mod media;
pub mod media_contents;
pub mod media_contents_actors;
pub mod media_contents_creators;
pub mod media_contents_genres;
pub mod media_series;
pub mod profiles;
pub mod users;
