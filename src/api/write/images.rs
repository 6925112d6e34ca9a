//
//  brightcove-mapi
//  api/write/images.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use std::path::Path;

use super::{to_json, WriteApi};
use crate::api::catalog::{decode, result_member, Image, VideoRef};
use crate::api::common::{Result, UploadFile};

impl WriteApi {
    /// Attaches an image to a video and returns it as stored.
    ///
    /// Pass `file` to upload the image, or set `remote_url` on the image to reference
    /// one hosted elsewhere. With `resize` set to `false` the image keeps its size
    /// instead of being scaled to the default for its type.
    pub async fn add_image(
        &self,
        token: &str,
        image: &Image,
        file: Option<&Path>,
        video: &VideoRef,
        resize: Option<bool>,
    ) -> Result<Image> {
        let operation = "add_image";
        self.call(
            operation,
            || {
                let mut builder = self
                    .method(operation, token)
                    .param("image", to_json(serde_json::to_value(image), operation)?);
                if let Some(path) = file {
                    builder = builder.file(UploadFile::from_path(path)?);
                }
                builder = match video {
                    VideoRef::Id(id) => builder.param("video_id", id.to_string()),
                    VideoRef::ReferenceId(reference_id) => {
                        builder.param("video_reference_id", reference_id.as_str())
                    }
                };
                Ok(builder.optional("resize", resize).build())
            },
            |envelope| decode(result_member(&envelope, operation)?, operation),
        )
        .await
    }
}
