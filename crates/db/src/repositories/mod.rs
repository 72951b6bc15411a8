//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod film_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use film_repo::FilmRepo;
pub use user_repo::UserRepo;
