//
//  brightcove-mapi
//  api/write/videos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Video write operations

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::{result_id, to_json, WriteApi};
use crate::api::catalog::{decode, result_member, EncodeTo, UploadStatus, Video, VideoRef};
use crate::api::common::{
    MappingErrorKind, MediaApiError, Result, UploadFile, UserErrorKind, WriteRequestBuilder,
};

/// Transcoding options for `create_video`.
///
/// Unset options are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateVideoOptions {
    /// Transcode the upload to this format
    pub encode_to: Option<EncodeTo>,
    /// Produce multiple bitrate renditions
    pub create_multiple_renditions: Option<bool>,
    /// Keep the uploaded file as a rendition
    pub preserve_source_rendition: Option<bool>,
    /// Use an H.264 upload as-is, without transcoding
    pub h264_no_processing: Option<bool>,
}

impl CreateVideoOptions {
    fn apply(&self, builder: WriteRequestBuilder) -> WriteRequestBuilder {
        builder
            .optional("encode_to", self.encode_to.map(|e| e.as_str()))
            .optional("create_multiple_renditions", self.create_multiple_renditions)
            .optional("preserve_source_rendition", self.preserve_source_rendition)
            .optional("H264NoProcessing", self.h264_no_processing)
    }
}

/// Adds `video_id` or `reference_id` for the target video.
fn with_video_ref(builder: WriteRequestBuilder, video: &VideoRef) -> WriteRequestBuilder {
    match video {
        VideoRef::Id(id) => builder.param("video_id", id.to_string()),
        VideoRef::ReferenceId(reference_id) => builder.param("reference_id", reference_id.as_str()),
    }
}

impl WriteApi {
    /// Creates a video, optionally uploading its media file, and returns its id.
    ///
    /// Read-only properties that are set are logged and passed through; the service
    /// ignores them.
    ///
    /// # Errors
    ///
    /// Fails before sending anything if the video has an id, cue points, renditions,
    /// or a full-length rendition, or if the file cannot be read.
    pub async fn create_video(
        &self,
        token: &str,
        video: &Video,
        file: Option<&Path>,
        options: &CreateVideoOptions,
    ) -> Result<i64> {
        let operation = "create_video";
        for field in video.read_only_fields_set() {
            warn!(
                field,
                "field is set on the video but cannot be set by the Media API; it will be ignored"
            );
        }

        self.call(
            operation,
            || {
                if let Some(violation) = video.create_violation() {
                    return Err(MediaApiError::user(
                        UserErrorKind::IncorrectParameters,
                        violation,
                    ));
                }

                let mut builder = self
                    .method(operation, token)
                    .param("video", to_json(video.to_json(false), operation)?);
                if let Some(path) = file {
                    builder = builder.file(UploadFile::from_path(path)?);
                }
                Ok(options.apply(builder).build())
            },
            |envelope| result_id(&result_member(&envelope, operation)?, operation),
        )
        .await
    }

    /// Reports the processing state of an uploaded video.
    ///
    /// # Errors
    ///
    /// Fails with [`MappingErrorKind::UnknownStatus`] when the service reports a
    /// state this client does not know.
    pub async fn get_upload_status(&self, token: &str, video: &VideoRef) -> Result<UploadStatus> {
        let operation = "get_upload_status";
        self.call(
            operation,
            || Ok(with_video_ref(self.method(operation, token), video).build()),
            |envelope| match result_member(&envelope, operation)? {
                Value::String(status) => status.parse().map_err(|detail: String| {
                    MediaApiError::mapping(MappingErrorKind::UnknownStatus, operation, detail)
                }),
                other => Err(MediaApiError::mapping(
                    MappingErrorKind::UnknownStatus,
                    operation,
                    format!("unexpected upload status {}", other),
                )),
            },
        )
        .await
    }

    /// Deletes a video and returns the service's envelope.
    ///
    /// With `cascade`, the video is also removed from playlists first. With
    /// `delete_shares`, copies shared to other accounts are deleted too.
    pub async fn delete_video(
        &self,
        token: &str,
        video: &VideoRef,
        cascade: Option<bool>,
        delete_shares: Option<bool>,
    ) -> Result<Value> {
        let operation = "delete_video";
        self.call(
            operation,
            || {
                Ok(with_video_ref(self.method(operation, token), video)
                    .optional("cascade", cascade)
                    .optional("delete_shares", delete_shares)
                    .build())
            },
            Ok,
        )
        .await
    }

    /// Shares a video with other accounts and returns the ids of the shared copies.
    pub async fn share_video(
        &self,
        token: &str,
        video_id: i64,
        auto_accept: Option<bool>,
        sharee_account_ids: &[i64],
        force_reshare: Option<bool>,
    ) -> Result<Vec<i64>> {
        let operation = "share_video";
        self.call(
            operation,
            || {
                Ok(self
                    .method(operation, token)
                    .param("video_id", video_id)
                    .optional("auto_accept", auto_accept)
                    .optional("force_reshare", force_reshare)
                    .param("sharee_account_ids", sharee_account_ids)
                    .build())
            },
            |envelope| decode(result_member(&envelope, operation)?, operation),
        )
        .await
    }

    /// Updates a video and returns it as stored.
    ///
    /// With `include_null_fields`, unset properties are sent as `null` and cleared on
    /// the service.
    pub async fn update_video(
        &self,
        token: &str,
        video: &Video,
        include_null_fields: bool,
    ) -> Result<Video> {
        let operation = "update_video";
        self.call(
            operation,
            || {
                Ok(self
                    .method(operation, token)
                    .param("video", to_json(video.to_json(include_null_fields), operation)?)
                    .build())
            },
            |envelope| decode(result_member(&envelope, operation)?, operation),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_only_send_set_values() {
        let options = CreateVideoOptions {
            encode_to: Some(EncodeTo::Mp4),
            h264_no_processing: Some(true),
            ..Default::default()
        };
        let request = options.apply(WriteRequestBuilder::new("create_video")).build();

        assert_eq!(request.params()["encode_to"], "MP4");
        assert_eq!(request.params()["H264NoProcessing"], true);
        assert!(!request.params().contains_key("create_multiple_renditions"));
    }

    #[test]
    fn test_video_ref_keys() {
        let by_id = with_video_ref(WriteRequestBuilder::new("delete_video"), &VideoRef::Id(5)).build();
        assert_eq!(by_id.params()["video_id"], "5");

        let by_ref = with_video_ref(
            WriteRequestBuilder::new("delete_video"),
            &VideoRef::ReferenceId("clip".to_string()),
        )
        .build();
        assert_eq!(by_ref.params()["reference_id"], "clip");
        assert!(!by_ref.params().contains_key("video_reference_id"));
    }
}
