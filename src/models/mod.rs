pub mod media;

pub use media::{MediaItem, MediaType};
