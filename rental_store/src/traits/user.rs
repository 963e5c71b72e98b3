use crate::errors::StoreError;
use crate::models::{NewUser, User};
use async_trait::async_trait;

/// Account lookups and registration
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a single user by email, `None` when no account uses it
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get a single user by id
    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError>;

    /// Insert a user and return the stored row
    async fn add_user(&self, user: NewUser) -> Result<User, StoreError>;
}
