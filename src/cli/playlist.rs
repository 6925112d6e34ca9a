//
//  brightcove-mapi
//  cli/playlist.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Playlist commands

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::catalog::{Playlist, PlaylistRef, PlaylistType};

use super::{parse_wire_name, print_json, read_json_file, FieldArgs, GlobalOptions, PageArgs};

/// Read and manage playlists
#[derive(Args, Debug)]
pub struct PlaylistCommand {
    #[command(subcommand)]
    pub command: PlaylistSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PlaylistSubcommand {
    /// Show one playlist
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// List playlists in the account, or those assigned to a player
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Create a playlist
    Create(CreateArgs),

    /// Update a playlist from a JSON file
    Update(UpdateArgs),

    /// Delete a playlist
    Delete(DeleteArgs),
}

/// Selects a playlist by id or reference id
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Playlist id
    pub id: Option<i64>,

    /// Playlist reference id
    #[arg(long)]
    pub reference_id: Option<String>,
}

impl TargetArgs {
    fn playlist_ref(&self) -> Result<PlaylistRef> {
        match (self.id, &self.reference_id) {
            (Some(id), _) => Ok(PlaylistRef::Id(id)),
            (None, Some(reference_id)) => Ok(PlaylistRef::ReferenceId(reference_id.clone())),
            (None, None) => bail!("Pass a playlist id or --reference-id"),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only playlists assigned to this player
    #[arg(long)]
    pub player: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Playlist name
    #[arg(long)]
    pub name: String,

    /// Ordering, e.g. EXPLICIT or NEWEST_TO_OLDEST
    #[arg(long = "type", value_parser = parse_wire_name::<PlaylistType>, default_value = "EXPLICIT")]
    pub playlist_type: PlaylistType,

    /// Videos in an explicit playlist
    #[arg(long, value_delimiter = ',')]
    pub video_ids: Vec<i64>,

    /// Tags that select videos for a smart playlist
    #[arg(long, value_delimiter = ',')]
    pub filter_tags: Vec<String>,

    /// Publisher reference id
    #[arg(long)]
    pub reference_id: Option<String>,

    /// Short description
    #[arg(long)]
    pub short_description: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// JSON file holding the playlist, or - for stdin
    pub json: PathBuf,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Delete even if players still use the playlist
    #[arg(long)]
    pub cascade: bool,
}

impl PlaylistCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            PlaylistSubcommand::Get(args) => self.get(args, global).await,
            PlaylistSubcommand::List(args) => self.list(args, global).await,
            PlaylistSubcommand::Create(args) => self.create(args, global).await,
            PlaylistSubcommand::Update(args) => self.update(args, global).await,
            PlaylistSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let fields = args.fields.to_selection();
        let playlist = match args.target.playlist_ref()? {
            PlaylistRef::Id(id) => api.find_playlist_by_id(&token, id, &fields).await?,
            PlaylistRef::ReferenceId(r) => {
                api.find_playlist_by_reference_id(&token, &r, &fields).await?
            }
        };

        match playlist {
            Some(playlist) => print_json(&playlist),
            None => bail!("Playlist not found"),
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let page = args.page.to_request();
        let fields = args.fields.to_selection();

        let playlists = match &args.player {
            Some(player) => {
                api.find_playlists_for_player_id(&token, player, &page, &fields)
                    .await?
            }
            None => api.find_all_playlists(&token, &page, &fields).await?,
        };
        print_json(&playlists)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let playlist = Playlist {
            name: Some(args.name.clone()),
            playlist_type: Some(args.playlist_type),
            reference_id: args.reference_id.clone(),
            short_description: args.short_description.clone(),
            video_ids: (!args.video_ids.is_empty()).then(|| args.video_ids.clone()),
            filter_tags: (!args.filter_tags.is_empty()).then(|| args.filter_tags.clone()),
            ..Default::default()
        };

        let (api, token) = global.write_api()?;
        let id = api.create_playlist(&token, &playlist).await?;
        print_json(&json!({ "id": id }))
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let playlist: Playlist = read_json_file(&args.json)?;
        let (api, token) = global.write_api()?;
        let updated = api.update_playlist(&token, &playlist).await?;
        print_json(&updated)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.write_api()?;
        let cascade = args.cascade.then_some(true);
        let response = api
            .delete_playlist(&token, &args.target.playlist_ref()?, cascade)
            .await?;
        print_json(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(subcommand)]
        command: PlaylistSubcommand,
    }

    #[test]
    fn test_create_defaults_to_explicit() {
        let parsed =
            Harness::try_parse_from(["mapi", "create", "--name", "Picks", "--video-ids", "1,2"])
                .unwrap();
        match parsed.command {
            PlaylistSubcommand::Create(args) => {
                assert_eq!(args.playlist_type, PlaylistType::Explicit);
                assert_eq!(args.video_ids, vec![1, 2]);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn test_delete_by_reference_id() {
        let parsed =
            Harness::try_parse_from(["mapi", "delete", "--reference-id", "picks", "--cascade"])
                .unwrap();
        match parsed.command {
            PlaylistSubcommand::Delete(args) => {
                assert_eq!(
                    args.target.playlist_ref().unwrap(),
                    PlaylistRef::ReferenceId("picks".to_string())
                );
                assert!(args.cascade);
            }
            _ => panic!("expected delete"),
        }
    }
}
