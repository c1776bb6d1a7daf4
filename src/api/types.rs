use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Subscription response (GET /subscriptions?view=N)
// ============================================================================

/// Per-view subscription listing: aggregate unread plus categorized feeds.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubscriptionResponse {
    /// Total unread across the view, trusted verbatim from the service.
    pub unread: u64,
    pub list: Vec<SubscriptionCategory>,
}

/// A named grouping of feeds. An empty name denotes the default bucket
/// (uncategorized feeds); names are unique within a view's response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubscriptionCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unread: u64,
    pub list: Vec<FeedMembership>,
}

impl SubscriptionCategory {
    /// The ordered feed identifiers of this category.
    pub fn feed_id_list(&self) -> Vec<String> {
        self.list.iter().map(|f| f.feed_id.clone()).collect()
    }
}

/// One subscribed feed inside a category.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMembership {
    pub feed_id: String,
    #[serde(default)]
    pub unread: u64,
    #[serde(default)]
    pub is_private: bool,
    pub feeds: FeedMetadata,
}

/// Feed-level metadata carried alongside the membership record.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub site_url: String,
    /// Non-null when the feed has been failing since that instant.
    #[serde(default)]
    pub error_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Category mutation requests
// ============================================================================

/// Body for `DELETE /categories`.
///
/// `delete_subscriptions` is always false from this client: only the
/// grouping is removed, the feeds themselves are retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDeleteRequest {
    pub feed_id_list: Vec<String>,
    pub delete_subscriptions: bool,
}

/// Body for `PATCH /categories` (rename).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRenameRequest {
    pub feed_id_list: Vec<String>,
    pub category: String,
}
