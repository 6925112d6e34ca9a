//
//  brightcove-mapi
//  cli/video.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Video commands

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::catalog::{EncodeTo, Image, ImageType, Video, VideoRef, VideoStateFilter};
use crate::api::read::SearchQuery;
use crate::api::write::CreateVideoOptions;

use super::{parse_wire_name, print_json, read_json_file, FieldArgs, GlobalOptions, PageArgs};

/// Read and manage videos
#[derive(Args, Debug)]
pub struct VideoCommand {
    #[command(subcommand)]
    pub command: VideoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum VideoSubcommand {
    /// Show one video
    #[command(visible_alias = "view")]
    Get(GetArgs),

    /// List videos in the account
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Search videos by field terms
    Search(SearchArgs),

    /// List videos modified since a date
    Modified(ModifiedArgs),

    /// List videos related to another video
    Related(RelatedArgs),

    /// Upload a new video
    Create(CreateArgs),

    /// Update a video from a JSON file
    Update(UpdateArgs),

    /// Delete a video
    Delete(DeleteArgs),

    /// Show the processing state of an upload
    Status(TargetArgs),

    /// Share a video with other accounts
    Share(ShareArgs),

    /// Attach an image to a video
    AddImage(AddImageArgs),
}

/// Selects a video by id or reference id
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Video id
    pub id: Option<i64>,

    /// Video reference id
    #[arg(long)]
    pub reference_id: Option<String>,
}

impl TargetArgs {
    fn video_ref(&self) -> Result<VideoRef> {
        match (self.id, &self.reference_id) {
            (Some(id), _) => Ok(VideoRef::Id(id)),
            (None, Some(reference_id)) => Ok(VideoRef::ReferenceId(reference_id.clone())),
            (None, None) => bail!("Pass a video id or --reference-id"),
        }
    }
}

#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Include videos that are inactive or not yet playable
    #[arg(long)]
    pub unfiltered: bool,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only videos with all of these tags
    #[arg(long, value_delimiter = ',')]
    pub and_tags: Vec<String>,

    /// Only videos with at least one of these tags
    #[arg(long, value_delimiter = ',')]
    pub or_tags: Vec<String>,

    /// Only videos uploaded by this user
    #[arg(long, conflicts_with_all = ["and_tags", "or_tags", "campaign", "text"])]
    pub user: Option<String>,

    /// Only videos in this ad campaign
    #[arg(long, conflicts_with_all = ["and_tags", "or_tags", "text"])]
    pub campaign: Option<String>,

    /// Only videos whose name or descriptions contain this text
    #[arg(long, conflicts_with_all = ["and_tags", "or_tags"])]
    pub text: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Terms that must all match, as field:value
    #[arg(long)]
    pub all: Vec<String>,

    /// Terms of which at least one must match
    #[arg(long)]
    pub any: Vec<String>,

    /// Terms that must not match
    #[arg(long)]
    pub none: Vec<String>,

    /// Match terms exactly
    #[arg(long)]
    pub exact: bool,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct ModifiedArgs {
    /// RFC 3339 timestamp, e.g. 2024-05-01T00:00:00Z
    #[arg(long)]
    pub since: DateTime<Utc>,

    /// Video states to include, e.g. PLAYABLE,DELETED
    #[arg(long, value_delimiter = ',')]
    pub filter: Vec<VideoStateFilter>,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct RelatedArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    #[command(flatten)]
    pub page: PageArgs,

    #[command(flatten)]
    pub fields: FieldArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Video title
    #[arg(long)]
    pub name: String,

    /// Short description
    #[arg(long)]
    pub short_description: String,

    /// Publisher reference id
    #[arg(long)]
    pub reference_id: Option<String>,

    /// Tags
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Media file to upload
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Transcode to MP4 or FLV
    #[arg(long)]
    pub encode_to: Option<EncodeTo>,

    /// Create multiple bitrate renditions
    #[arg(long)]
    pub multiple_renditions: bool,

    /// Keep the source file as a rendition
    #[arg(long)]
    pub preserve_source: bool,

    /// Do not transcode an H.264 upload
    #[arg(long, conflicts_with = "multiple_renditions")]
    pub h264_no_processing: bool,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// JSON file holding the video, or - for stdin
    pub json: PathBuf,

    /// Send unset properties as null, clearing them
    #[arg(long)]
    pub include_nulls: bool,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Remove the video from playlists first
    #[arg(long)]
    pub cascade: bool,

    /// Also delete copies shared to other accounts
    #[arg(long)]
    pub delete_shares: bool,
}

#[derive(Args, Debug)]
pub struct ShareArgs {
    /// Video id
    pub id: i64,

    /// Accounts to share with
    #[arg(long = "to", required = true, value_delimiter = ',')]
    pub accounts: Vec<i64>,

    /// Accept the share on the other accounts' behalf
    #[arg(long)]
    pub auto_accept: bool,

    /// Share again even if already shared
    #[arg(long)]
    pub force_reshare: bool,
}

#[derive(Args, Debug)]
pub struct AddImageArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Image role, e.g. THUMBNAIL or VIDEO_STILL
    #[arg(long = "type", value_parser = parse_wire_name::<ImageType>)]
    pub image_type: ImageType,

    /// Image file to upload
    #[arg(long, short = 'f', required_unless_present = "remote_url")]
    pub file: Option<PathBuf>,

    /// URL of an externally hosted image
    #[arg(long, conflicts_with = "file")]
    pub remote_url: Option<String>,

    /// Display name
    #[arg(long)]
    pub display_name: Option<String>,

    /// Keep the image's size instead of resizing it for its type
    #[arg(long)]
    pub no_resize: bool,
}

/// Maps a boolean flag to an optional parameter: unset flags are not sent.
fn flag(set: bool) -> Option<bool> {
    set.then_some(true)
}

impl VideoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            VideoSubcommand::Get(args) => self.get(args, global).await,
            VideoSubcommand::List(args) => self.list(args, global).await,
            VideoSubcommand::Search(args) => self.search(args, global).await,
            VideoSubcommand::Modified(args) => self.modified(args, global).await,
            VideoSubcommand::Related(args) => self.related(args, global).await,
            VideoSubcommand::Create(args) => self.create(args, global).await,
            VideoSubcommand::Update(args) => self.update(args, global).await,
            VideoSubcommand::Delete(args) => self.delete(args, global).await,
            VideoSubcommand::Status(args) => self.status(args, global).await,
            VideoSubcommand::Share(args) => self.share(args, global).await,
            VideoSubcommand::AddImage(args) => self.add_image(args, global).await,
        }
    }

    async fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let fields = args.fields.to_selection();
        let video = match (args.target.video_ref()?, args.unfiltered) {
            (VideoRef::Id(id), false) => api.find_video_by_id(&token, id, &fields).await?,
            (VideoRef::Id(id), true) => {
                api.find_video_by_id_unfiltered(&token, id, &fields).await?
            }
            (VideoRef::ReferenceId(r), false) => {
                api.find_video_by_reference_id(&token, &r, &fields).await?
            }
            (VideoRef::ReferenceId(r), true) => {
                api.find_video_by_reference_id_unfiltered(&token, &r, &fields)
                    .await?
            }
        };

        match video {
            Some(video) => print_json(&video),
            None => bail!("Video not found"),
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let page = args.page.to_request();
        let fields = args.fields.to_selection();

        let videos = if let Some(user) = &args.user {
            api.find_videos_by_user_id(&token, user, &page, &fields).await?
        } else if let Some(campaign) = &args.campaign {
            api.find_videos_by_campaign_id(&token, campaign, &page, &fields)
                .await?
        } else if let Some(text) = &args.text {
            api.find_videos_by_text(&token, text, &page, &fields).await?
        } else if !args.and_tags.is_empty() || !args.or_tags.is_empty() {
            api.find_videos_by_tags(&token, &args.and_tags, &args.or_tags, &page, &fields)
                .await?
        } else {
            api.find_all_videos(&token, &page, &fields).await?
        };

        print_json(&videos)
    }

    async fn search(&self, args: &SearchArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let query = SearchQuery {
            all: args.all.clone(),
            any: args.any.clone(),
            none: args.none.clone(),
            exact: flag(args.exact),
        };
        let videos = api
            .search_videos(&token, &query, &args.page.to_request(), &args.fields.to_selection())
            .await?;
        print_json(&videos)
    }

    async fn modified(&self, args: &ModifiedArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let videos = api
            .find_modified_videos(
                &token,
                args.since,
                &args.filter,
                &args.page.to_request(),
                &args.fields.to_selection(),
            )
            .await?;
        print_json(&videos)
    }

    async fn related(&self, args: &RelatedArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.read_api()?;
        let videos = api
            .find_related_videos(
                &token,
                &args.target.video_ref()?,
                &args.page.to_request(),
                &args.fields.to_selection(),
            )
            .await?;
        print_json(&videos)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.write_api()?;
        let video = Video {
            name: Some(args.name.clone()),
            short_description: Some(args.short_description.clone()),
            reference_id: args.reference_id.clone(),
            tags: (!args.tags.is_empty()).then(|| args.tags.clone()),
            ..Default::default()
        };
        let options = CreateVideoOptions {
            encode_to: args.encode_to,
            create_multiple_renditions: flag(args.multiple_renditions),
            preserve_source_rendition: flag(args.preserve_source),
            h264_no_processing: flag(args.h264_no_processing),
        };

        let id = api
            .create_video(&token, &video, args.file.as_deref(), &options)
            .await?;
        print_json(&json!({ "id": id }))
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let video: Video = read_json_file(&args.json)?;
        if video.id.is_none() && video.reference_id.is_none() {
            bail!("The video in {} needs an id or referenceId", args.json.display());
        }
        let (api, token) = global.write_api()?;
        let updated = api.update_video(&token, &video, args.include_nulls).await?;
        print_json(&updated)
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.write_api()?;
        let response = api
            .delete_video(
                &token,
                &args.target.video_ref()?,
                flag(args.cascade),
                flag(args.delete_shares),
            )
            .await?;
        print_json(&response)
    }

    async fn status(&self, args: &TargetArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.write_api()?;
        let status = api.get_upload_status(&token, &args.video_ref()?).await?;
        print_json(&json!({ "status": status }))
    }

    async fn share(&self, args: &ShareArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.write_api()?;
        let shared = api
            .share_video(
                &token,
                args.id,
                flag(args.auto_accept),
                &args.accounts,
                flag(args.force_reshare),
            )
            .await?;
        print_json(&shared)
    }

    async fn add_image(&self, args: &AddImageArgs, global: &GlobalOptions) -> Result<()> {
        let (api, token) = global.write_api()?;
        let image = Image {
            image_type: Some(args.image_type),
            remote_url: args.remote_url.clone(),
            display_name: args.display_name.clone(),
            ..Default::default()
        };
        let resize = args.no_resize.then_some(false);

        let added = api
            .add_image(
                &token,
                &image,
                args.file.as_deref(),
                &args.target.video_ref()?,
                resize,
            )
            .await
            .context("Failed to add image")?;
        print_json(&added)
    }
}
