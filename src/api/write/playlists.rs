//
//  brightcove-mapi
//  api/write/playlists.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playlist write operations

use serde_json::Value;
use tracing::warn;

use super::{result_id, to_json, WriteApi};
use crate::api::catalog::{decode, result_member, Playlist, PlaylistRef};
use crate::api::common::Result;

fn warn_read_only(fields: Vec<&'static str>, operation: &str) {
    for field in fields {
        warn!(
            field,
            operation, "field is set on the playlist but is read-only; it will be ignored"
        );
    }
}

impl WriteApi {
    /// Creates a playlist and returns its id.
    ///
    /// Set read-only properties are logged and passed through.
    pub async fn create_playlist(&self, token: &str, playlist: &Playlist) -> Result<i64> {
        let operation = "create_playlist";
        warn_read_only(playlist.read_only_fields_on_create(), operation);

        self.call(
            operation,
            || {
                Ok(self
                    .method(operation, token)
                    .param("playlist", to_json(serde_json::to_value(playlist), operation)?)
                    .build())
            },
            |envelope| result_id(&result_member(&envelope, operation)?, operation),
        )
        .await
    }

    /// Updates a playlist and returns it as stored.
    pub async fn update_playlist(&self, token: &str, playlist: &Playlist) -> Result<Playlist> {
        let operation = "update_playlist";
        warn_read_only(playlist.read_only_fields_on_update(), operation);

        self.call(
            operation,
            || {
                Ok(self
                    .method(operation, token)
                    .param("playlist", to_json(serde_json::to_value(playlist), operation)?)
                    .build())
            },
            |envelope| decode(result_member(&envelope, operation)?, operation),
        )
        .await
    }

    /// Deletes a playlist and returns the service's envelope.
    ///
    /// With `cascade`, the playlist is deleted even if players still use it.
    pub async fn delete_playlist(
        &self,
        token: &str,
        playlist: &PlaylistRef,
        cascade: Option<bool>,
    ) -> Result<Value> {
        let operation = "delete_playlist";
        self.call(
            operation,
            || {
                let builder = self.method(operation, token);
                let builder = match playlist {
                    PlaylistRef::Id(id) => builder.param("playlist_id", *id),
                    PlaylistRef::ReferenceId(reference_id) => {
                        builder.param("reference_id", reference_id.as_str())
                    }
                };
                Ok(builder.optional("cascade", cascade).build())
            },
            Ok,
        )
        .await
    }
}
