pub mod owner_locks;
pub mod profile_store;
