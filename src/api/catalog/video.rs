//
//  brightcove-mapi
//  api/catalog/video.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Video records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::epoch_millis;
use super::fields::VideoField;

/// Whether a video carries advertising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Economics {
    Free,
    AdSupported,
}

/// Lifecycle state of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemState {
    Active,
    Inactive,
    Deleted,
}

/// One encoded rendition of a video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_rate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
}

/// A marker at a point in a video's timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuePoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<i64>,
    /// Offset in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
    /// `AD`, `CODE`, or `CHAPTER`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub cue_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// A video as returned by, or sent to, the Media API.
///
/// Every property is optional: reads populate only the selected fields, and writes
/// send only the fields that are set.
///
/// # Example
///
/// ```rust
/// use brightcove_mapi::api::catalog::Video;
///
/// let video: Video = serde_json::from_str(r#"{
///     "id": 1234,
///     "name": "Launch",
///     "creationDate": "1262304000000",
///     "tags": ["news"]
/// }"#).unwrap();
///
/// assert_eq!(video.id, Some(1234));
/// assert_eq!(video.creation_date.unwrap().to_rfc3339(), "2010-01-01T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    #[serde(default, with = "epoch_millis", skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_millis", skip_serializing_if = "Option::is_none")]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_millis", skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_millis", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "epoch_millis", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(rename = "linkURL", skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "videoStillURL", skip_serializing_if = "Option::is_none")]
    pub video_still_url: Option<String>,
    #[serde(rename = "thumbnailURL", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "FLVURL", skip_serializing_if = "Option::is_none")]
    pub flv_url: Option<String>,

    /// Duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economics: Option<Economics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_state: Option<ItemState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays_total: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays_trailing_week: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_keys: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renditions: Option<Vec<Rendition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_full_length: Option<Rendition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cue_points: Option<Vec<CuePoint>>,
}

impl Video {
    /// Serializes the video for a write call.
    ///
    /// With `include_null_fields`, every known property that is unset is sent as an
    /// explicit `null`, which tells `update_video` to clear it.
    pub fn to_json(&self, include_null_fields: bool) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(self)?;
        if include_null_fields {
            if let Value::Object(object) = &mut value {
                for field in VideoField::all() {
                    object.entry(field.as_str()).or_insert(Value::Null);
                }
            }
        }
        Ok(value)
    }

    /// Names of the set properties the service computes itself and ignores on write.
    pub fn read_only_fields_set(&self) -> Vec<&'static str> {
        let checks = [
            (self.creation_date.is_some(), VideoField::CreationDate),
            (self.flv_url.is_some(), VideoField::FlvUrl),
            (self.last_modified_date.is_some(), VideoField::LastModifiedDate),
            (self.length.is_some(), VideoField::Length),
            (self.plays_total.is_some(), VideoField::PlaysTotal),
            (self.plays_trailing_week.is_some(), VideoField::PlaysTrailingWeek),
            (self.published_date.is_some(), VideoField::PublishedDate),
            (self.thumbnail_url.is_some(), VideoField::ThumbnailUrl),
            (self.video_still_url.is_some(), VideoField::VideoStillUrl),
        ];
        checks
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, field)| field.as_str())
            .collect()
    }

    /// Describes the first property that cannot be sent to `create_video`.
    pub fn create_violation(&self) -> Option<&'static str> {
        if self.cue_points.is_some() {
            Some("video contains cue points, which cannot be written by create_video")
        } else if self.id.is_some() {
            Some("video has its id set; ids are assigned by create_video")
        } else if self.video_full_length.is_some() {
            Some("video has videoFullLength set, which cannot be written by create_video")
        } else if self.renditions.is_some() {
            Some("video contains renditions, which cannot be written by create_video")
        } else {
            None
        }
    }
}
