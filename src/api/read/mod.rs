//
//  brightcove-mapi
//  api/read/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Read Facade
//!
//! [`ReadApi`] queries videos and playlists with URL-encoded GET requests. Every
//! operation takes the account's read token first.
//!
//! ## Not-Found Results
//!
//! The service answers the literal `null` when nothing matches. Single-item finds
//! return `Ok(None)` for it and list finds return an empty [`ItemCollection`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brightcove_mapi::api::read::{FieldSelection, PageRequest, ReadApi};
//! use brightcove_mapi::api::catalog::{SortBy, SortOrder, VideoField};
//! use brightcove_mapi::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let api = ReadApi::from_config(&Config::load()?)?;
//!
//! let page = PageRequest::new()
//!     .size(25)
//!     .sort(SortBy::PublishDate, SortOrder::Desc);
//! let fields = FieldSelection::new().video_fields([VideoField::Id, VideoField::Name]);
//!
//! let videos = api.find_all_videos("read-token", &page, &fields).await?;
//! for video in videos.items {
//!     println!("{:?} {:?}", video.id, video.name);
//! }
//! # Ok(())
//! # }
//! ```

mod playlists;
mod videos;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::catalog::{decode, ItemCollection, PlaylistField, SortBy, SortOrder, VideoField};
use super::client::MediaApiClient;
use super::retry::RetryHandler;
use super::common::{check_page_size, OperationRequest, PagedItems, ParamBuilder, Result};
use crate::config::Config;

/// Paging and ordering for list queries.
///
/// Unset values are not sent; the service applies its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    /// Items per page, at most 100
    pub page_size: Option<u32>,
    /// Zero-based page index
    pub page_number: Option<u32>,
    /// Sort key
    pub sort_by: Option<SortBy>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
}

impl PageRequest {
    /// An empty request: service defaults for everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the page index.
    pub fn number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    /// Sets the sort key and direction.
    pub fn sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = Some(sort_order);
        self
    }

    /// Adds paging, ordering, and `get_item_count`.
    fn apply(&self, builder: ParamBuilder, items: PagedItems) -> Result<ParamBuilder> {
        Ok(self
            .apply_unsorted(builder, items)?
            .optional("sort_by", self.sort_by)
            .optional("sort_order", self.sort_order))
    }

    /// Adds paging and `get_item_count`, for commands that take no ordering.
    fn apply_unsorted(&self, builder: ParamBuilder, items: PagedItems) -> Result<ParamBuilder> {
        check_page_size(self.page_size, items)?;
        Ok(builder
            .optional("page_size", self.page_size)
            .optional("page_number", self.page_number)
            .param("get_item_count", true))
    }

    /// Adds paging with the combined `FIELD:ORDER` sort used by `search_videos`.
    fn apply_search(&self, builder: ParamBuilder) -> Result<ParamBuilder> {
        let sort = self
            .sort_by
            .map(|by| format!("{}:{}", by, self.sort_order.unwrap_or_default()));
        Ok(self
            .apply_unsorted(builder, PagedItems::Videos)?
            .optional("sort_by", sort))
    }
}

/// Which properties the service should populate.
///
/// Empty selections are not sent, so the service returns its default field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    /// Video properties to populate
    pub video_fields: Vec<VideoField>,
    /// Custom metadata fields to populate
    pub custom_fields: Vec<String>,
    /// Playlist properties to populate, for playlist queries
    pub playlist_fields: Vec<PlaylistField>,
}

impl FieldSelection {
    /// Selects the service's default fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects video properties.
    pub fn video_fields(mut self, fields: impl IntoIterator<Item = VideoField>) -> Self {
        self.video_fields.extend(fields);
        self
    }

    /// Selects custom metadata fields.
    pub fn custom_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.custom_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Selects playlist properties.
    pub fn playlist_fields(mut self, fields: impl IntoIterator<Item = PlaylistField>) -> Self {
        self.playlist_fields.extend(fields);
        self
    }

    fn apply_video(&self, builder: ParamBuilder) -> ParamBuilder {
        builder
            .joined("video_fields", self.video_fields.iter())
            .joined("custom_fields", self.custom_fields.iter())
    }

    fn apply_playlist(&self, builder: ParamBuilder) -> ParamBuilder {
        self.apply_video(builder)
            .joined("playlist_fields", self.playlist_fields.iter())
    }
}

/// Terms for `search_videos`.
///
/// Each term is a `field:value` pair or a bare value. `all` terms must all match,
/// at least one `any` term must match, and no `none` term may match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Terms that must all match
    pub all: Vec<String>,
    /// Terms of which at least one must match
    pub any: Vec<String>,
    /// Terms that must not match
    pub none: Vec<String>,
    /// Match terms exactly instead of by prefix
    pub exact: Option<bool>,
}

/// Read-side Media API facade.
///
/// Immutable once built; share it freely between tasks.
#[derive(Debug, Clone)]
pub struct ReadApi {
    client: MediaApiClient,
    enable_uds: bool,
}

impl ReadApi {
    /// Wraps a client already pointed at the read endpoint.
    pub fn new(client: MediaApiClient) -> Self {
        Self {
            client,
            enable_uds: false,
        }
    }

    /// Builds a facade from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut client =
            MediaApiClient::new(config.read_endpoint())?.with_charset(config.charset.clone());
        if let Some(timeout) = config.timeout() {
            client = client.with_timeout(timeout);
        }
        Ok(Self::new(client).with_uds(config.enable_uds))
    }

    /// Consults `handler` before retrying a failed call.
    pub fn with_retry_handler(mut self, handler: Arc<dyn RetryHandler>) -> Self {
        self.client = self.client.with_retry_handler(handler);
        self
    }

    /// Requests HTTP (UDS) delivery URLs instead of streaming URLs.
    pub fn with_uds(mut self, enable_uds: bool) -> Self {
        self.enable_uds = enable_uds;
        self
    }

    /// Whether UDS delivery is requested.
    pub fn uds_enabled(&self) -> bool {
        self.enable_uds
    }

    /// The underlying client.
    pub fn client(&self) -> &MediaApiClient {
        &self.client
    }

    /// Starts a request with the command and token.
    fn command(&self, command: &str, token: &str) -> ParamBuilder {
        ParamBuilder::new(command).param("token", token)
    }

    /// Finishes a request, adding the delivery mode when UDS is enabled.
    fn finish(&self, builder: ParamBuilder) -> OperationRequest {
        if self.enable_uds {
            builder.param("media_delivery", "http").build()
        } else {
            builder.build()
        }
    }

    /// Runs a read with retries. `map` turns the envelope, or `None` for `null`, into
    /// the result inside each attempt, so decoding failures reach the retry handler.
    async fn fetch<T, F, M>(&self, operation: &str, build: F, map: M) -> Result<T>
    where
        F: Fn() -> Result<OperationRequest> + Sync,
        M: Fn(Option<Value>) -> Result<T> + Sync,
    {
        let build = &build;
        let map = &map;
        let client = &self.client;
        client
            .with_retry(operation, move || async move {
                let request = build()?;
                map(client.execute_read(&request).await.into_result()?)
            })
            .await
    }

    /// Runs a single-item read.
    async fn find_one<T, F>(&self, operation: &str, build: F) -> Result<Option<T>>
    where
        T: DeserializeOwned,
        F: Fn() -> Result<OperationRequest> + Sync,
    {
        self.fetch(operation, build, |envelope| {
            envelope.map(|e| decode(e, operation)).transpose()
        })
        .await
    }

    /// Runs a list read.
    async fn find_page<T, F>(&self, operation: &str, build: F) -> Result<ItemCollection<T>>
    where
        T: DeserializeOwned,
        F: Fn() -> Result<OperationRequest> + Sync,
    {
        self.fetch(operation, build, |envelope| match envelope {
            Some(envelope) => decode(envelope, operation),
            None => Ok(ItemCollection::default()),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{MediaApiError, UserErrorKind};

    #[test]
    fn test_page_request_parameters() {
        let page = PageRequest::new()
            .size(20)
            .number(3)
            .sort(SortBy::PlaysTotal, SortOrder::Desc);
        let request = page
            .apply(ParamBuilder::new("find_all_videos"), PagedItems::Videos)
            .unwrap()
            .build();

        assert_eq!(request.get("page_size"), Some("20"));
        assert_eq!(request.get("page_number"), Some("3"));
        assert_eq!(request.get("sort_by"), Some("PLAYS_TOTAL"));
        assert_eq!(request.get("sort_order"), Some("DESC"));
        assert_eq!(request.get("get_item_count"), Some("true"));
    }

    #[test]
    fn test_default_page_sends_only_item_count() {
        let request = PageRequest::new()
            .apply(ParamBuilder::new("find_all_playlists"), PagedItems::Playlists)
            .unwrap()
            .build();
        assert_eq!(request.params().len(), 1);
        assert_eq!(request.get("get_item_count"), Some("true"));
    }

    #[test]
    fn test_oversized_page_fails_by_item_kind() {
        let page = PageRequest::new().size(101);
        let error = page
            .apply(ParamBuilder::new("find_all_playlists"), PagedItems::Playlists)
            .unwrap_err();
        assert!(matches!(
            error,
            MediaApiError::User {
                kind: UserErrorKind::TooManyPlaylistsPerPage,
                ..
            }
        ));
    }

    #[test]
    fn test_search_sort_is_combined() {
        let page = PageRequest::new().sort(SortBy::DisplayName, SortOrder::Asc);
        let request = page
            .apply_search(ParamBuilder::new("search_videos"))
            .unwrap()
            .build();
        assert_eq!(request.get("sort_by"), Some("DISPLAY_NAME:ASC"));
        assert_eq!(request.get("sort_order"), None);
    }

    #[test]
    fn test_field_selection() {
        let fields = FieldSelection::new()
            .video_fields([VideoField::Id, VideoField::ReferenceId])
            .custom_fields(["genre", "rating"])
            .playlist_fields([PlaylistField::VideoIds]);

        let video = fields.apply_video(ParamBuilder::new("x")).build();
        assert_eq!(video.get("video_fields"), Some("id,referenceId"));
        assert_eq!(video.get("custom_fields"), Some("genre,rating"));
        assert_eq!(video.get("playlist_fields"), None);

        let playlist = fields.apply_playlist(ParamBuilder::new("x")).build();
        assert_eq!(playlist.get("playlist_fields"), Some("videoIds"));

        let empty = FieldSelection::new().apply_playlist(ParamBuilder::new("x")).build();
        assert!(empty.params().is_empty());
    }
}
