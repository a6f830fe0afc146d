//! Media server catalog client.
//!
//! Builds authenticated URLs against the configured server, lists items and
//! toggles favorites. Non-success statuses of item listings are classified
//! with [`Error::from_status`]; favorite mutations report them unclassified.

mod query;

pub use query::{Query, QueryValue};

use async_trait::async_trait;
use jellygrid_common::{Error, ItemId, ItemKind, MediaItem, Result, ServerId, UserId};
use reqwest::{Client, Method};
use serde::Deserialize;
use std::error::Error as _;
use tracing::{debug, warn};

use crate::config::Config;

/// Result-count ceiling for item listings.
pub const ITEMS_LIMIT: u32 = 10_000;

const COVER_HEIGHT: &str = "600";
const COVER_WIDTH: &str = "400";
const COVER_QUALITY: &str = "97";

/// Operations the catalog views need from the server.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// List items of the given kinds, optionally inside one collection.
    async fn fetch_items(
        &self,
        kinds: &[ItemKind],
        parent_id: Option<&ItemId>,
    ) -> Result<Vec<MediaItem>>;

    /// Mark (`true`) or unmark (`false`) an item as favorite.
    async fn set_favorite(&self, item_id: &ItemId, favorite: bool) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct ItemsResponse {
    #[serde(rename = "Items")]
    items: Vec<MediaItem>,
}

pub struct CatalogClient {
    client: Client,
    base_url: String,
    user_id: UserId,
    api_key: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build HTTP client: {}", e);
            Client::new()
        });

        Self {
            client,
            base_url: config.server.url.trim().trim_end_matches('/').to_string(),
            user_id: UserId::from(config.server.user_id.trim()),
            api_key: config.server.api_key.trim().to_string(),
        }
    }

    /// Build a URL below the server base.
    ///
    /// Without a query the URL carries exactly one parameter, `ApiKey`.
    pub fn build_url(&self, paths: &[&str], query: Option<Query>) -> String {
        let query = query.unwrap_or_else(|| Query::new().param("ApiKey", self.api_key.as_str()));
        format!("{}/{}?{}", self.base_url, paths.join("/"), query.encode())
    }

    /// URL listing items of `kinds`, sorted by name.
    pub fn items_url(&self, kinds: &[ItemKind], parent_id: Option<&ItemId>) -> String {
        let query = Query::new()
            .param("SortBy", "SortName")
            .param("SortOrder", "Ascending")
            .param("IncludeItemTypes", ItemKind::join(kinds))
            .param("Recursive", "true")
            .param("ImageTypeLimit", "1")
            .param("EnableImageTypes", "Primary")
            .param("Limit", ITEMS_LIMIT.to_string())
            .param("ParentId", parent_id.map(ItemId::as_str).unwrap_or(""))
            .param("ApiKey", self.api_key.as_str());
        self.build_url(&["Users", self.user_id.as_str(), "Items"], Some(query))
    }

    pub fn favorite_url(&self, item_id: &ItemId) -> String {
        self.build_url(
            &["Users", self.user_id.as_str(), "FavoriteItems", item_id.as_str()],
            None,
        )
    }

    /// Cover image of an item, sized for a 3:4 grid tile.
    pub fn cover_url(&self, item_id: &ItemId, image_tag: &str) -> String {
        let query = Query::new()
            .param("fillHeight", COVER_HEIGHT)
            .param("fillWidth", COVER_WIDTH)
            .param("quality", COVER_QUALITY)
            .param("tag", image_tag);
        self.build_url(&["Items", item_id.as_str(), "Images", "Primary"], Some(query))
    }

    /// Direct stream / download link.
    pub fn stream_url(&self, item_id: &ItemId) -> String {
        let query = Query::new().param("ApiKey", self.api_key.as_str());
        self.build_url(&["Items", item_id.as_str(), "Download"], Some(query))
    }

    /// Details page of an item in the server's web client.
    pub fn details_url(&self, item_id: &ItemId, server_id: &ServerId) -> String {
        let query = Query::new()
            .param("id", item_id.as_str())
            .param("serverId", server_id.as_str());
        self.build_url(&["web", "index.html#!", "details"], Some(query))
    }

    /// Issue one request; `on_status` turns a non-success status into the error.
    async fn send(
        &self,
        method: Method,
        url: &str,
        on_status: fn(u16) -> Error,
    ) -> Result<reqwest::Response> {
        let response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Media server returned an error");
            return Err(on_status(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_items(
        &self,
        kinds: &[ItemKind],
        parent_id: Option<&ItemId>,
    ) -> Result<Vec<MediaItem>> {
        debug!(
            kinds = %ItemKind::join(kinds),
            parent = parent_id.map(ItemId::as_str).unwrap_or(""),
            "Fetching items"
        );

        let url = self.items_url(kinds, parent_id);
        let response = self.send(Method::GET, &url, Error::from_status).await?;
        let body = response.text().await.map_err(transport_error)?;
        let parsed: ItemsResponse = serde_json::from_str(&body)?;

        debug!(count = parsed.items.len(), "Fetched items");
        Ok(parsed.items)
    }

    async fn set_favorite(&self, item_id: &ItemId, favorite: bool) -> Result<()> {
        let method = if favorite { Method::POST } else { Method::DELETE };
        debug!(item = %item_id, favorite, "Updating favorite");

        let url = self.favorite_url(item_id);
        self.send(method, &url, |status| Error::Status { status }).await?;
        Ok(())
    }
}

/// Flatten a reqwest error and its causes into one message.
///
/// The request URL is dropped because it carries the API key.
fn transport_error(e: reqwest::Error) -> Error {
    let e = e.without_url();
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    Error::transport(message)
}
