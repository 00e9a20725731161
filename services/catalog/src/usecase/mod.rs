pub mod media;
pub mod media_contents;
pub mod reference;
