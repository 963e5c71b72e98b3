//! Query builder utilities
//!
//! This module provides SQL query construction for the rental store: the
//! dynamic property search and the fixed-shape statements.

pub mod builder;
pub mod clause;
pub mod filter;
pub mod params;
pub mod statements;


pub use builder::{ParameterizedQuery, PropertySearchQuery};
pub use clause::ClauseSet;
pub use filter::{FilterKey, FilterOptions, SearchFilter};
pub use params::QueryParams;
