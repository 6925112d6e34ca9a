//
//  brightcove-mapi
//  api/catalog/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Enumerations sent as request parameters
//!
//! Every enum here has a fixed wire spelling, exposed through `as_str()` and
//! `Display`, and parses back from that spelling (case-insensitively) through
//! `FromStr`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Looks `value` up in a table of `(variant, wire name)` pairs, ignoring case.
fn parse_wire<T: Copy>(table: &[(T, &str)], value: &str, what: &str) -> Result<T, String> {
    table
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(value))
        .map(|(variant, _)| *variant)
        .ok_or_else(|| {
            let names: Vec<&str> = table.iter().map(|(_, name)| *name).collect();
            format!("unknown {} '{}'; expected one of: {}", what, value, names.join(", "))
        })
}

/// Video properties that can be selected with `video_fields`.
///
/// Wire names are the JSON property names of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VideoField {
    Id,
    Name,
    ShortDescription,
    LongDescription,
    CreationDate,
    PublishedDate,
    LastModifiedDate,
    StartDate,
    EndDate,
    LinkUrl,
    LinkText,
    Tags,
    VideoStillUrl,
    ThumbnailUrl,
    ReferenceId,
    Length,
    Economics,
    ItemState,
    PlaysTotal,
    PlaysTrailingWeek,
    FlvUrl,
    Renditions,
    VideoFullLength,
    CuePoints,
    AccountId,
    CustomFields,
    AdKeys,
}

const VIDEO_FIELDS: &[(VideoField, &str)] = &[
    (VideoField::Id, "id"),
    (VideoField::Name, "name"),
    (VideoField::ShortDescription, "shortDescription"),
    (VideoField::LongDescription, "longDescription"),
    (VideoField::CreationDate, "creationDate"),
    (VideoField::PublishedDate, "publishedDate"),
    (VideoField::LastModifiedDate, "lastModifiedDate"),
    (VideoField::StartDate, "startDate"),
    (VideoField::EndDate, "endDate"),
    (VideoField::LinkUrl, "linkURL"),
    (VideoField::LinkText, "linkText"),
    (VideoField::Tags, "tags"),
    (VideoField::VideoStillUrl, "videoStillURL"),
    (VideoField::ThumbnailUrl, "thumbnailURL"),
    (VideoField::ReferenceId, "referenceId"),
    (VideoField::Length, "length"),
    (VideoField::Economics, "economics"),
    (VideoField::ItemState, "itemState"),
    (VideoField::PlaysTotal, "playsTotal"),
    (VideoField::PlaysTrailingWeek, "playsTrailingWeek"),
    (VideoField::FlvUrl, "FLVURL"),
    (VideoField::Renditions, "renditions"),
    (VideoField::VideoFullLength, "videoFullLength"),
    (VideoField::CuePoints, "cuePoints"),
    (VideoField::AccountId, "accountId"),
    (VideoField::CustomFields, "customFields"),
    (VideoField::AdKeys, "adKeys"),
];

impl VideoField {
    /// Every field, in wire order.
    pub fn all() -> impl Iterator<Item = VideoField> {
        VIDEO_FIELDS.iter().map(|(field, _)| *field)
    }

    /// The wire name.
    pub fn as_str(self) -> &'static str {
        VIDEO_FIELDS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for VideoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(VIDEO_FIELDS, s, "video field")
    }
}

/// Playlist properties that can be selected with `playlist_fields`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlaylistField {
    Id,
    ReferenceId,
    Name,
    ShortDescription,
    VideoIds,
    Videos,
    ThumbnailUrl,
    FilterTags,
    PlaylistType,
    AccountId,
}

const PLAYLIST_FIELDS: &[(PlaylistField, &str)] = &[
    (PlaylistField::Id, "id"),
    (PlaylistField::ReferenceId, "referenceId"),
    (PlaylistField::Name, "name"),
    (PlaylistField::ShortDescription, "shortDescription"),
    (PlaylistField::VideoIds, "videoIds"),
    (PlaylistField::Videos, "videos"),
    (PlaylistField::ThumbnailUrl, "thumbnailURL"),
    (PlaylistField::FilterTags, "filterTags"),
    (PlaylistField::PlaylistType, "playlistType"),
    (PlaylistField::AccountId, "accountId"),
];

impl PlaylistField {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        PLAYLIST_FIELDS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for PlaylistField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaylistField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(PLAYLIST_FIELDS, s, "playlist field")
    }
}

/// Sort keys for paged video and playlist queries.
///
/// `DisplayName`, `ReferenceId`, and `StartDate` are only meaningful for
/// `search_videos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    CreationDate,
    PublishDate,
    ModifiedDate,
    PlaysTotal,
    PlaysTrailingWeek,
    DisplayName,
    ReferenceId,
    StartDate,
}

const SORT_BY: &[(SortBy, &str)] = &[
    (SortBy::CreationDate, "CREATION_DATE"),
    (SortBy::PublishDate, "PUBLISH_DATE"),
    (SortBy::ModifiedDate, "MODIFIED_DATE"),
    (SortBy::PlaysTotal, "PLAYS_TOTAL"),
    (SortBy::PlaysTrailingWeek, "PLAYS_TRAILING_WEEK"),
    (SortBy::DisplayName, "DISPLAY_NAME"),
    (SortBy::ReferenceId, "REFERENCE_ID"),
    (SortBy::StartDate, "START_DATE"),
];

impl SortBy {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        SORT_BY
            .iter()
            .find(|(sort, _)| *sort == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(SORT_BY, s, "sort key")
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&[(Self::Asc, "ASC"), (Self::Desc, "DESC")], s, "sort order")
    }
}

/// Video states accepted by the `filter` of `find_modified_videos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoStateFilter {
    Playable,
    Unscheduled,
    Inactive,
    Deleted,
}

const STATE_FILTERS: &[(VideoStateFilter, &str)] = &[
    (VideoStateFilter::Playable, "PLAYABLE"),
    (VideoStateFilter::Unscheduled, "UNSCHEDULED"),
    (VideoStateFilter::Inactive, "INACTIVE"),
    (VideoStateFilter::Deleted, "DELETED"),
];

impl VideoStateFilter {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        STATE_FILTERS
            .iter()
            .find(|(state, _)| *state == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }
}

impl fmt::Display for VideoStateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoStateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(STATE_FILTERS, s, "video state")
    }
}

/// Target format when transcoding an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EncodeTo {
    Mp4,
    Flv,
}

impl EncodeTo {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mp4 => "MP4",
            Self::Flv => "FLV",
        }
    }
}

impl fmt::Display for EncodeTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodeTo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&[(Self::Mp4, "MP4"), (Self::Flv, "FLV")], s, "encoding")
    }
}

/// Processing state of an uploaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UploadStatus {
    Uploading,
    Processing,
    Complete,
    Error,
}

impl UploadStatus {
    /// The wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uploading => "UPLOADING",
            Self::Processing => "PROCESSING",
            Self::Complete => "COMPLETE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UploadStatus {
    type Err = String;

    /// Exact match only; the service always sends upper case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPLOADING" => Ok(Self::Uploading),
            "PROCESSING" => Ok(Self::Processing),
            "COMPLETE" => Ok(Self::Complete),
            "ERROR" => Ok(Self::Error),
            other => Err(format!("unknown upload status '{}'", other)),
        }
    }
}

/// Identifies a video by its id or by its reference id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoRef {
    /// Service-assigned id
    Id(i64),
    /// Publisher-assigned reference id
    ReferenceId(String),
}

/// Identifies a playlist by its id or by its reference id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistRef {
    /// Service-assigned id
    Id(i64),
    /// Publisher-assigned reference id
    ReferenceId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_field_wire_names() {
        assert_eq!(VideoField::LinkUrl.as_str(), "linkURL");
        assert_eq!(VideoField::FlvUrl.to_string(), "FLVURL");
        assert_eq!("referenceid".parse::<VideoField>().unwrap(), VideoField::ReferenceId);
        assert_eq!(VideoField::all().count(), VIDEO_FIELDS.len());
    }

    #[test]
    fn test_every_variant_has_a_name() {
        for field in VideoField::all() {
            assert!(!field.as_str().is_empty());
        }
        assert_eq!(PlaylistField::VideoIds.as_str(), "videoIds");
        assert_eq!(SortBy::PlaysTrailingWeek.as_str(), "PLAYS_TRAILING_WEEK");
        assert_eq!(VideoStateFilter::Unscheduled.as_str(), "UNSCHEDULED");
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("publish_date".parse::<SortBy>().unwrap(), SortBy::PublishDate);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        let error = "sideways".parse::<SortOrder>().unwrap_err();
        assert!(error.contains("ASC, DESC"));
    }

    #[test]
    fn test_upload_status_is_exact() {
        assert_eq!("COMPLETE".parse::<UploadStatus>().unwrap(), UploadStatus::Complete);
        assert!("complete".parse::<UploadStatus>().is_err());
        assert!("QUEUED".parse::<UploadStatus>().is_err());
    }
}
