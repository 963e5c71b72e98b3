use crate::errors::StoreError;
use crate::models::{NewProperty, Property, PropertyListing};
use crate::query_builder::{FilterOptions, PropertySearchQuery};
use async_trait::async_trait;

/// Property search and listing
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Run a prepared property search
    async fn search_properties(
        &self,
        query: PropertySearchQuery,
    ) -> Result<Vec<PropertyListing>, StoreError>;

    /// Properties matching `options`, cheapest first, at most `limit` rows
    async fn get_all_properties(
        &self,
        options: FilterOptions,
        limit: i64,
    ) -> Result<Vec<PropertyListing>, StoreError> {
        self.search_properties(PropertySearchQuery::new(options).limit(limit))
            .await
    }

    /// Insert a property and return the stored row
    async fn add_property(&self, property: NewProperty) -> Result<Property, StoreError>;
}
