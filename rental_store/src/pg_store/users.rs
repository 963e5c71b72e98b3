use super::core::PgRentalStore;
use crate::errors::StoreError;
use crate::models::{NewUser, User};
use crate::query_builder::statements::{INSERT_USER, USER_BY_EMAIL, USER_BY_ID};
use crate::traits::UserStore;
use async_trait::async_trait;

#[async_trait]
impl UserStore for PgRentalStore {
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation("get_user_with_email", e))
    }

    async fn get_user_with_id(&self, id: i32) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(USER_BY_ID)
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation("get_user_with_id", e))
    }

    async fn add_user(&self, user: NewUser) -> Result<User, StoreError> {
        let NewUser {
            name,
            email,
            password,
        } = user;

        let created = sqlx::query_as::<_, User>(INSERT_USER)
            .bind(name)
            .bind(email)
            .bind(password)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation("add_user", e))?;

        crate::debug_log!("[ADD_USER] created user {}", created.id);
        Ok(created)
    }
}
