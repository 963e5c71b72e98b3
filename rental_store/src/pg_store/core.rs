use crate::DbPool;

/// Rental store backed by a PostgreSQL pool
///
/// Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct PgRentalStore {
    pub(crate) db_pool: DbPool,
}

impl std::fmt::Debug for PgRentalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgRentalStore")
            .field("pool_size", &self.db_pool.size())
            .field("idle_connections", &self.db_pool.num_idle())
            .finish()
    }
}

impl PgRentalStore {
    pub fn new(db_pool: DbPool) -> Self {
        Self { db_pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }
}
