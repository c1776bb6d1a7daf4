//! Client for the subscriptions service.
//!
//! - `types` - wire types for the per-view subscription response and the
//!   category mutation request bodies
//! - `client` - thin reqwest wrapper over the HTTP endpoints
//! - `cache` - keyed in-memory query cache with explicit invalidation

pub mod cache;
pub mod client;
pub mod types;

pub use cache::{QueryCache, QueryKey};
pub use client::{ApiClient, ApiError};
pub use types::{FeedMembership, FeedMetadata, SubscriptionCategory, SubscriptionResponse};
