//
//  brightcove-mapi
//  api/catalog/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Media Catalog Types
//!
//! Typed records for the objects the Media API reads and writes, plus the helpers
//! that turn successful envelopes into those records.
//!
//! ## Overview
//!
//! - [`Video`], [`Rendition`], [`CuePoint`] - Video metadata
//! - [`Playlist`] - Explicit and smart playlists
//! - [`Image`] - Thumbnails and stills
//! - [`ItemCollection`] - One page of a list query
//! - [`fields`] - Enumerations sent as request parameters
//!
//! ## Dates
//!
//! The service sends dates as epoch milliseconds, usually as JSON strings. They are
//! exposed as `chrono::DateTime<Utc>` and written back as millisecond strings.

pub mod fields;
pub mod image;
pub mod playlist;
pub mod video;

pub use fields::*;
pub use image::*;
pub use playlist::*;
pub use video::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{MappingErrorKind, MediaApiError, Result};

/// One page of results from a list query.
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::api::catalog::{ItemCollection, Video};
///
/// let page: ItemCollection<Video> = serde_json::from_str(r#"{
///     "items": [{"id": 1}, {"id": 2}],
///     "page_number": 0,
///     "page_size": 2,
///     "total_count": 10
/// }"#).unwrap();
///
/// assert_eq!(page.items.len(), 2);
/// assert_eq!(page.total_count, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCollection<T> {
    /// The items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Zero-based page index
    #[serde(default)]
    pub page_number: Option<u32>,

    /// Requested page size
    #[serde(default)]
    pub page_size: Option<u32>,

    /// Total matching items; `-1` or absent when not counted
    #[serde(default)]
    pub total_count: Option<i64>,
}

impl<T> Default for ItemCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page_number: None,
            page_size: None,
            total_count: None,
        }
    }
}

impl<T> ItemCollection<T> {
    /// Returns `true` when the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Deserializes a record from an envelope, attributing failures to `operation`.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, operation: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        MediaApiError::mapping(MappingErrorKind::Unparsable, operation, e.to_string())
    })
}

/// Extracts the `result` member of a write response.
///
/// Some write methods return their record JSON-encoded inside a string; those are
/// decoded. A missing or `null` result is a [`MappingErrorKind::NullResult`].
pub(crate) fn result_member(envelope: &Value, operation: &str) -> Result<Value> {
    match envelope.get("result") {
        None | Some(Value::Null) => Err(MediaApiError::mapping(
            MappingErrorKind::NullResult,
            operation,
            "response has no result",
        )),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(parsed @ (Value::Object(_) | Value::Array(_))) => Ok(parsed),
            _ => Ok(Value::String(text.clone())),
        },
        Some(other) => Ok(other.clone()),
    }
}

/// Serde adapter for optional dates sent as epoch milliseconds.
///
/// Accepts numbers and numeric strings; writes strings.
pub(crate) mod epoch_millis {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::util::{datetime_to_millis, millis_to_datetime};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&datetime_to_millis(*date).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = match Option::<Raw>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(Raw::Number(millis)) => millis,
            Some(Raw::Text(text)) if text.trim().is_empty() => return Ok(None),
            Some(Raw::Text(text)) => text
                .trim()
                .parse::<i64>()
                .map_err(|e| D::Error::custom(format!("invalid epoch millis '{}': {}", text, e)))?,
        };
        millis_to_datetime(millis)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("epoch millis {} out of range", millis)))
    }
}
