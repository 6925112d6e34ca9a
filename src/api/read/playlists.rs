//
//  brightcove-mapi
//  api/read/playlists.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playlist read operations

use super::{FieldSelection, PageRequest, ReadApi};
use crate::api::catalog::{ItemCollection, Playlist};
use crate::api::common::{PagedItems, Result};

impl ReadApi {
    /// Lists every playlist in the account.
    pub async fn find_all_playlists(
        &self,
        token: &str,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Playlist>> {
        let command = "find_all_playlists";
        self.find_page(command, || {
            let builder = page.apply(self.command(command, token), PagedItems::Playlists)?;
            Ok(self.finish(fields.apply_playlist(builder)))
        })
        .await
    }

    /// Finds one playlist by id.
    pub async fn find_playlist_by_id(
        &self,
        token: &str,
        playlist_id: i64,
        fields: &FieldSelection,
    ) -> Result<Option<Playlist>> {
        let command = "find_playlist_by_id";
        self.find_one(command, || {
            let builder = self
                .command(command, token)
                .param("playlist_id", playlist_id);
            Ok(self.finish(fields.apply_playlist(builder)))
        })
        .await
    }

    /// Finds one playlist by reference id.
    pub async fn find_playlist_by_reference_id(
        &self,
        token: &str,
        reference_id: &str,
        fields: &FieldSelection,
    ) -> Result<Option<Playlist>> {
        let command = "find_playlist_by_reference_id";
        self.find_one(command, || {
            let builder = self
                .command(command, token)
                .param("reference_id", reference_id);
            Ok(self.finish(fields.apply_playlist(builder)))
        })
        .await
    }

    /// Finds the playlists among `playlist_ids`.
    pub async fn find_playlists_by_ids(
        &self,
        token: &str,
        playlist_ids: &[i64],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Playlist>> {
        let command = "find_playlists_by_ids";
        self.find_page(command, || {
            let builder = fields
                .apply_playlist(self.command(command, token))
                .joined("playlist_ids", playlist_ids);
            Ok(self.finish(builder))
        })
        .await
    }

    /// Finds the playlists among `reference_ids`.
    ///
    /// # Errors
    ///
    /// Fails before sending anything if a reference id contains a comma.
    pub async fn find_playlists_by_reference_ids<S: AsRef<str> + Sync>(
        &self,
        token: &str,
        reference_ids: &[S],
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Playlist>> {
        let command = "find_playlists_by_reference_ids";
        self.find_page(command, || {
            let builder = fields
                .apply_playlist(self.command(command, token))
                .reference_ids("reference_ids", reference_ids)?;
            Ok(self.finish(builder))
        })
        .await
    }

    /// Lists the playlists assigned to a player.
    pub async fn find_playlists_for_player_id(
        &self,
        token: &str,
        player_id: &str,
        page: &PageRequest,
        fields: &FieldSelection,
    ) -> Result<ItemCollection<Playlist>> {
        let command = "find_playlists_for_player_id";
        self.find_page(command, || {
            let builder = page.apply_unsorted(self.command(command, token), PagedItems::Playlists)?;
            let builder = builder.param("player_id", player_id);
            Ok(self.finish(fields.apply_playlist(builder)))
        })
        .await
    }
}
