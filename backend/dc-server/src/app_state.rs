use crate::GithubClient;

use dc_auth::TokenCodec;
use dc_db::ProfileStore;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub profiles: ProfileStore,
    pub tokens: Arc<TokenCodec>,
    pub github: Arc<GithubClient>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenCodec, github: GithubClient) -> Self {
        Self {
            profiles: ProfileStore::new(pool.clone()),
            pool,
            tokens: Arc::new(tokens),
            github: Arc::new(github),
        }
    }
}
