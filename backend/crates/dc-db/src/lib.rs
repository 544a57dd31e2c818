pub mod connection;
pub mod error;
pub mod repositories;
pub mod store;

pub use connection::database::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;
pub use store::owner_locks::OwnerLocks;
pub use store::profile_store::ProfileStore;
