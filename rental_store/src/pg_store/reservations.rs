use super::core::PgRentalStore;
use crate::errors::StoreError;
use crate::models::ReservationSummary;
use crate::query_builder::statements::RESERVATIONS_FOR_GUEST;
use crate::traits::ReservationStore;
use async_trait::async_trait;

#[async_trait]
impl ReservationStore for PgRentalStore {
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationSummary>, StoreError> {
        sqlx::query_as::<_, ReservationSummary>(RESERVATIONS_FOR_GUEST)
            .bind(guest_id)
            .bind(limit)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation("get_all_reservations", e))
    }
}
