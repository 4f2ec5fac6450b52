pub mod comic_repo;

pub use comic_repo::ComicRepo;
