use crate::errors::StoreError;
use crate::models::ReservationSummary;
use async_trait::async_trait;

#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Completed reservations of a guest, earliest first, at most `limit` rows
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> Result<Vec<ReservationSummary>, StoreError>;
}
