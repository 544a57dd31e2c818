use dc_core::User;
use dc_db::UserRepository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    dc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Inserts a user so profiles can reference it
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> User {
    let user = User::new(
        name.to_string(),
        &format!("{}@example.com", name.to_lowercase()),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    );

    UserRepository::create(pool, &user)
        .await
        .expect("Failed to create test user");

    user
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    // Use sqlx::query (not query!) so the table name can vary
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
