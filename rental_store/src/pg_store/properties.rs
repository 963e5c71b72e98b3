use super::binding::bind_params;
use super::core::PgRentalStore;
use crate::errors::StoreError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::query_builder::statements::INSERT_PROPERTY;
use crate::query_builder::PropertySearchQuery;
use crate::traits::PropertyStore;
use async_trait::async_trait;

#[async_trait]
impl PropertyStore for PgRentalStore {
    async fn search_properties(
        &self,
        query: PropertySearchQuery,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        let statement = query.build();

        let sqlx_query = sqlx::query_as::<_, PropertyListing>(&statement.text);
        let results = bind_params(sqlx_query, statement.params)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation("get_all_properties", e))?;

        crate::debug_log!("[PROPERTY_SEARCH] {} rows", results.len());
        Ok(results)
    }

    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError> {
        let NewProperty {
            owner_id,
            title,
            description,
            thumbnail_photo_url,
            cover_photo_url,
            cost_per_night,
            street,
            city,
            province,
            post_code,
            country,
            parking_spaces,
            number_of_bathrooms,
            number_of_bedrooms,
        } = property;

        sqlx::query_as::<_, Property>(INSERT_PROPERTY)
            .bind(owner_id)
            .bind(title)
            .bind(description)
            .bind(thumbnail_photo_url)
            .bind(cover_photo_url)
            .bind(cost_per_night)
            .bind(street)
            .bind(city)
            .bind(province)
            .bind(post_code)
            .bind(country)
            .bind(parking_spaces)
            .bind(number_of_bathrooms)
            .bind(number_of_bedrooms)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation("add_property", e))
    }
}
