pub mod profile_repository;
pub mod user_repository;
