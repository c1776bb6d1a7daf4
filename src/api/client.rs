use crate::api::types::{CategoryDeleteRequest, CategoryRenameRequest, SubscriptionResponse};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors from the subscriptions service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS, body read).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned {status} for {endpoint}")]
    Status {
        status: StatusCode,
        endpoint: &'static str,
    },

    /// A path segment could not be joined onto the base URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Thin HTTP client for the subscriptions service.
///
/// Cheap to clone; the underlying reqwest client shares its connection pool
/// across clones, so spawned tasks can each take their own copy.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Build a client against `base` (e.g. `https://api.example.com/`).
    pub fn new(base: Url) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    /// Fetch the subscription listing for a view: `GET /subscriptions?view=N`.
    pub async fn subscriptions(&self, view: usize) -> Result<SubscriptionResponse, ApiError> {
        let url = self.endpoint("subscriptions")?;
        let resp = self
            .http
            .get(url)
            .query(&[("view", view)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                endpoint: "subscriptions",
            });
        }

        let body = resp.json::<SubscriptionResponse>().await?;
        tracing::debug!(
            view,
            unread = body.unread,
            categories = body.list.len(),
            "Fetched subscriptions"
        );
        Ok(body)
    }

    /// Delete a category grouping: `DELETE /categories`.
    ///
    /// The subscriptions inside the category are retained
    /// (`deleteSubscriptions: false` on the wire).
    pub async fn delete_category(&self, feed_id_list: Vec<String>) -> Result<(), ApiError> {
        let url = self.endpoint("categories")?;
        let body = CategoryDeleteRequest {
            feed_id_list,
            delete_subscriptions: false,
        };
        let resp = self.http.delete(url).json(&body).send().await?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                endpoint: "categories",
            });
        }
        tracing::info!(feeds = body.feed_id_list.len(), "Deleted category grouping");
        Ok(())
    }

    /// Rename a category: `PATCH /categories`.
    pub async fn rename_category(
        &self,
        feed_id_list: Vec<String>,
        new_name: &str,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("categories")?;
        let body = CategoryRenameRequest {
            feed_id_list,
            category: new_name.to_owned(),
        };
        let resp = self.http.patch(url).json(&body).send().await?;

        if !resp.status().is_success() {
            return Err(ApiError::Status {
                status: resp.status(),
                endpoint: "categories",
            });
        }
        tracing::info!(category = %new_name, "Renamed category");
        Ok(())
    }
}
