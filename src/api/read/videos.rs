//
//  brightcove-mapi
//  api/read/videos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Video read operations

use chrono::{DateTime, Utc};

use super::{FieldSelection, PageRequest, ReadApi, SearchQuery};
use crate::api::catalog::{ItemCollection, Video, VideoRef, VideoStateFilter};
use crate::api::common::{PagedItems, Result};
use crate::util::minutes_since_epoch;

impl ReadApi {
    /// Finds one video by id. Only playable videos are returned.
    pub async fn find_video_by_id(
        &self,
        token: &str,
        video_id: i64,
        fields: &FieldSelection,
    ) -> Result<Option<Video>> {
        self.find_video(token, "find_video_by_id", "video_id", &video_id.to_string(), fields)
            .await
    }

    /// Finds one video by id, whatever its state.
    pub async fn find_video_by_id_unfiltered(
        &self,
        token: &str,
        video_id: i64,
        fields: &FieldSelection,
    ) -> Result<Option<Video>> {
        self.find_video(
            token,
            "find_video_by_id_unfiltered",
            "video_id",
            &video_id.to_string(),
            fields,
        )
        .await
    }

    /// Finds one video by reference id. Only playable videos are returned.
    pub async fn find_video_by_reference_id(
        &self,
        token: &str,
        reference_id: &str,
        fields: &FieldSelection,
    ) -> Result<Option<Video>> {
        self.find_video(
            token,
            "find_video_by_reference_id",
            "reference_id",
            reference_id,
            fields,
        )
        .await
    }

    /// Finds one video by reference id, whatever its state.
    pub async fn find_video_by_reference_id_unfiltered(
        &self,
        token: &str,
        reference_id: &str,
        fields: &FieldSelection,
    ) -> Result<Option<Video>> {
        self.find_video(
            token,
            "find_video_by_reference_id_unfiltered",
            "reference_id",
            reference_id,
            fields,
        )
        .await
    }

    async fn find_video(
        &self,
        token: &str,
        command: &str,
        key: &str,
        value: &str,
        fields: &FieldSelection,
    ) -> Result<Option<Video>> {
        self.find_one(command, || {
            let builder = self.command(command, token).param(key, value);
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Finds the playable videos among `video_ids`.
    pub async fn find_videos_by_ids(
        &self,
        token: &str,
        video_ids: &[i64],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        self.find_videos_by_id_set(token, "find_videos_by_ids", video_ids, fields)
            .await
    }

    /// Finds the videos among `video_ids`, whatever their state.
    pub async fn find_videos_by_ids_unfiltered(
        &self,
        token: &str,
        video_ids: &[i64],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        self.find_videos_by_id_set(token, "find_videos_by_ids_unfiltered", video_ids, fields)
            .await
    }

    async fn find_videos_by_id_set(
        &self,
        token: &str,
        command: &str,
        video_ids: &[i64],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        self.find_page(command, || {
            let builder = self.command(command, token).joined("video_ids", video_ids);
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Finds the playable videos among `reference_ids`.
    ///
    /// # Errors
    ///
    /// Fails before sending anything if a reference id contains a comma.
    pub async fn find_videos_by_reference_ids<S: AsRef<str> + Sync>(
        &self,
        token: &str,
        reference_ids: &[S],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        self.find_videos_by_reference_id_set(
            token,
            "find_videos_by_reference_ids",
            reference_ids,
            fields,
        )
        .await
    }

    /// Finds the videos among `reference_ids`, whatever their state.
    pub async fn find_videos_by_reference_ids_unfiltered<S: AsRef<str> + Sync>(
        &self,
        token: &str,
        reference_ids: &[S],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        self.find_videos_by_reference_id_set(
            token,
            "find_videos_by_reference_ids_unfiltered",
            reference_ids,
            fields,
        )
        .await
    }

    async fn find_videos_by_reference_id_set<S: AsRef<str> + Sync>(
        &self,
        token: &str,
        command: &str,
        reference_ids: &[S],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        self.find_page(command, || {
            let builder = self
                .command(command, token)
                .reference_ids("reference_ids", reference_ids)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists every playable video in the account.
    pub async fn find_all_videos(
        &self,
        token: &str,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_all_videos";
        self.find_page(command, || {
            let builder = page.apply(self.command(command, token), PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists the videos uploaded by a user.
    pub async fn find_videos_by_user_id(
        &self,
        token: &str,
        user_id: &str,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_videos_by_user_id";
        self.find_page(command, || {
            let builder = self.command(command, token).param("user_id", user_id);
            let builder = page.apply(builder, PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists the videos associated with an ad campaign.
    pub async fn find_videos_by_campaign_id(
        &self,
        token: &str,
        campaign_id: &str,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_videos_by_campaign_id";
        self.find_page(command, || {
            let builder = self
                .command(command, token)
                .param("campaign_id", campaign_id);
            let builder = page.apply(builder, PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists videos carrying all of `and_tags` and at least one of `or_tags`.
    ///
    /// An empty tag set is not sent.
    pub async fn find_videos_by_tags<S: AsRef<str> + Sync>(
        &self,
        token: &str,
        and_tags: &[S],
        or_tags: &[S],
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_videos_by_tags";
        self.find_page(command, || {
            let builder = self
                .command(command, token)
                .joined("and_tags", and_tags.iter().map(|t| t.as_ref()))
                .joined("or_tags", or_tags.iter().map(|t| t.as_ref()));
            let builder = page.apply(builder, PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists videos whose name or descriptions contain `text`.
    pub async fn find_videos_by_text(
        &self,
        token: &str,
        text: &str,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_videos_by_text";
        self.find_page(command, || {
            let builder = self.command(command, token).param("text", text);
            let builder = page.apply_unsorted(builder, PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists videos related to the given one.
    pub async fn find_related_videos(
        &self,
        token: &str,
        video: &VideoRef,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_related_videos";
        self.find_page(command, || {
            let builder = match video {
                VideoRef::Id(id) => self.command(command, token).param("video_id", id),
                VideoRef::ReferenceId(reference_id) => self
                    .command(command, token)
                    .param("reference_id", reference_id),
            };
            let builder = page.apply_unsorted(builder, PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Lists videos modified since `from_date`, optionally limited to some states.
    ///
    /// The date is sent as whole minutes since the epoch.
    pub async fn find_modified_videos(
        &self,
        token: &str,
        from_date: DateTime<Utc>,
        filters: &[VideoStateFilter],
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "find_modified_videos";
        let from_minutes = minutes_since_epoch(from_date);
        self.find_page(command, || {
            let builder = self
                .command(command, token)
                .param("from_date", from_minutes)
                .joined("filter", filters);
            let builder = page.apply(builder, PagedItems::Videos)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }

    /// Searches videos by field terms.
    ///
    /// `all`, `any`, and `none` terms are sent as repeated parameters in order. Sorting
    /// is sent as a single `FIELD:ORDER` value.
    pub async fn search_videos(
        &self,
        token: &str,
        query: &SearchQuery,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Video>> {
        let command = "search_videos";
        self.find_page(command, || {
            let builder = self
                .command(command, token)
                .repeated("all", &query.all)
                .repeated("any", &query.any)
                .repeated("none", &query.none)
                .optional("exact", query.exact);
            let builder = page.apply_search(builder)?;
            Ok(self.finish(fields.apply_video(builder)))
        })
        .await
    }
}
