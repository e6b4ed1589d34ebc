pub mod genre_directory;
pub mod media_service;

pub use genre_directory::{GenreDirectory, GenreState, GenreStatus, GenreTables};
pub use media_service::{MediaService, TRENDING_LIMIT};
