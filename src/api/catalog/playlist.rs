//
//  brightcove-mapi
//  api/catalog/playlist.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playlist records

use serde::{Deserialize, Serialize};

use super::fields::PlaylistField;
use super::video::Video;

/// How a playlist chooses and orders its videos.
///
/// `Explicit` playlists hold a fixed list of video ids; the others are smart
/// playlists built from `filter_tags`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaylistType {
    Explicit,
    OldestToNewest,
    NewestToOldest,
    Alphabetical,
    ReverseAlphabetical,
    PlaysTotal,
    PlaysTrailingWeek,
}

/// A playlist as returned by, or sent to, the Media API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_type: Option<PlaylistType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<Video>>,
    #[serde(rename = "thumbnailURL", skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Playlist {
    /// Names of the set properties the service ignores on `create_playlist`.
    pub fn read_only_fields_on_create(&self) -> Vec<&'static str> {
        let mut fields = self.read_only_fields_on_update();
        if self.id.is_some() {
            fields.push(PlaylistField::Id.as_str());
        }
        if self.video_ids.is_some() {
            fields.push(PlaylistField::VideoIds.as_str());
        }
        fields
    }

    /// Names of the set properties the service ignores on `update_playlist`.
    ///
    /// The id is not listed: it selects the playlist to update.
    pub fn read_only_fields_on_update(&self) -> Vec<&'static str> {
        let checks = [
            (self.account_id.is_some(), PlaylistField::AccountId),
            (self.thumbnail_url.is_some(), PlaylistField::ThumbnailUrl),
            (self.videos.is_some(), PlaylistField::Videos),
        ];
        checks
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, field)| field.as_str())
            .collect()
    }
}
