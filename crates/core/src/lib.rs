//! Domain layer for the comic store.
//!
//! Holds the `Comic` entity, the repository port the storage adapters
//! implement, field validation, and the image store. Nothing in here
//! knows about HTTP or SQL.

pub mod comic;
pub mod error;
pub mod images;
pub mod repository;
pub mod types;
pub mod validation;
