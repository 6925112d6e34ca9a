//
//  brightcove-mapi
//  tests/read_api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Read facade against a mock HTTP server.

mod common;

use chrono::{TimeZone, Utc};
use mockito::Matcher;

use brightcove_mapi::api::catalog::{SortBy, SortOrder, VideoField, VideoRef, VideoStateFilter};
use brightcove_mapi::api::common::{MediaApiError, TransportErrorKind};
use brightcove_mapi::api::read::{FieldSelection, PageRequest, ReadApi, SearchQuery};
use brightcove_mapi::MediaApiClient;

use common::endpoint_for;

const LIBRARY: &str = "/services/library";

fn read_api(server: &mockito::ServerGuard) -> ReadApi {
    let client = MediaApiClient::new(endpoint_for(server, LIBRARY)).unwrap();
    ReadApi::new(client)
}

fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(key, value)| Matcher::UrlEncoded(key.to_string(), value.to_string()))
            .collect(),
    )
}

#[tokio::test]
async fn test_find_video_by_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_video_by_id"),
            ("token", "read-token"),
            ("video_id", "42"),
            ("video_fields", "id,name,tags"),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 42, "name": "Launch", "tags": ["news"], "creationDate": "1700000000000"}"#)
        .create_async()
        .await;

    let fields =
        FieldSelection::new().video_fields([VideoField::Id, VideoField::Name, VideoField::Tags]);
    let video = read_api(&server)
        .find_video_by_id("read-token", 42, &fields)
        .await
        .unwrap()
        .unwrap();

    mock.assert_async().await;
    assert_eq!(video.id, Some(42));
    assert_eq!(video.name.as_deref(), Some("Launch"));
    assert_eq!(video.tags, Some(vec!["news".to_string()]));
    assert_eq!(
        video.creation_date.map(|d| d.timestamp_millis()),
        Some(1_700_000_000_000)
    );
}

#[tokio::test]
async fn test_null_response_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(Matcher::UrlEncoded(
            "command".into(),
            "find_video_by_reference_id".into(),
        ))
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let api = read_api(&server);
    let video = api
        .find_video_by_reference_id("read-token", "missing", &FieldSelection::new())
        .await
        .unwrap();
    assert!(video.is_none());
}

#[tokio::test]
async fn test_null_list_is_empty_collection() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(Matcher::UrlEncoded("command".into(), "find_all_playlists".into()))
        .with_status(200)
        .with_body("null")
        .create_async()
        .await;

    let playlists = read_api(&server)
        .find_all_playlists("read-token", &PageRequest::new(), &FieldSelection::new())
        .await
        .unwrap();
    assert!(playlists.is_empty());
    assert_eq!(playlists.total_count, None);
}

#[tokio::test]
async fn test_find_all_videos_pages_and_sorts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_all_videos"),
            ("page_size", "2"),
            ("page_number", "1"),
            ("sort_by", "PLAYS_TOTAL"),
            ("sort_order", "DESC"),
            ("get_item_count", "true"),
        ]))
        .with_status(200)
        .with_body(
            r#"{"items": [{"id": 3}, {"id": 4}], "page_number": 1, "page_size": 2, "total_count": 5}"#,
        )
        .create_async()
        .await;

    let page = PageRequest::new()
        .size(2)
        .number(1)
        .sort(SortBy::PlaysTotal, SortOrder::Desc);
    let videos = read_api(&server)
        .find_all_videos("read-token", &page, &FieldSelection::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(videos.len(), 2);
    assert_eq!(videos.items[1].id, Some(4));
    assert_eq!(videos.page_number, Some(1));
    assert_eq!(videos.total_count, Some(5));
}

#[tokio::test]
async fn test_oversized_page_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = read_api(&server)
        .find_all_videos("read-token", &PageRequest::new().size(101), &FieldSelection::new())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(error.code(), 500);
    assert!(error.to_string().contains("requested 101 videos per page"));
}

#[tokio::test]
async fn test_reference_id_with_comma_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let error = read_api(&server)
        .find_videos_by_reference_ids("read-token", &["ok", "a,b"], &FieldSelection::new())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert_eq!(error.code(), 501);
    assert!(error.to_string().contains("a,b"));
}

#[tokio::test]
async fn test_reference_ids_are_joined() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_playlists_by_reference_ids"),
            ("reference_ids", "summer,winter"),
        ]))
        .with_status(200)
        .with_body(
            r#"{"items": [{"id": 7, "referenceId": "summer", "playlistType": "EXPLICIT", "videoIds": [1, 2]}, {"id": 8, "referenceId": "winter"}]}"#,
        )
        .create_async()
        .await;

    let playlists = read_api(&server)
        .find_playlists_by_reference_ids("read-token", &["summer", "winter"], &FieldSelection::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists.items[0].video_ids, Some(vec![1, 2]));
    assert_eq!(playlists.items[1].reference_id.as_deref(), Some("winter"));
}

#[tokio::test]
async fn test_malformed_record_is_mapping_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .with_status(200)
        .with_body(r#"{"id": "not-a-number"}"#)
        .create_async()
        .await;

    let error = read_api(&server)
        .find_playlist_by_id("read-token", 7, &FieldSelection::new())
        .await
        .unwrap_err();

    assert!(matches!(error, MediaApiError::Mapping { ref operation, .. } if operation == "find_playlist_by_id"));
    assert_eq!(error.code(), 301);
}

#[tokio::test]
async fn test_uds_adds_media_delivery() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_videos_by_ids"),
            ("video_ids", "1,2"),
            ("media_delivery", "http"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 1}, {"id": 2}]}"#)
        .create_async()
        .await;

    let api = read_api(&server).with_uds(true);
    let videos = api
        .find_videos_by_ids("read-token", &[1, 2], &FieldSelection::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(videos.len(), 2);
}

#[tokio::test]
async fn test_find_modified_videos_sends_minutes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_modified_videos"),
            ("from_date", "28575360"),
            ("filter", "PLAYABLE,DELETED"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let since = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let videos = read_api(&server)
        .find_modified_videos(
            "read-token",
            since,
            &[VideoStateFilter::Playable, VideoStateFilter::Deleted],
            &PageRequest::new(),
            &FieldSelection::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_search_videos_repeats_terms() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(Matcher::AllOf(vec![
            query(&[
                ("command", "search_videos"),
                ("none", "tag:draft"),
                ("exact", "true"),
                ("sort_by", "DISPLAY_NAME:ASC"),
            ]),
            Matcher::Regex("all=tag%3Anews&all=name%3Alaunch\\+day".to_string()),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 9}], "total_count": 1}"#)
        .create_async()
        .await;

    let search = SearchQuery {
        all: vec!["tag:news".to_string(), "name:launch day".to_string()],
        none: vec!["tag:draft".to_string()],
        exact: Some(true),
        ..Default::default()
    };
    let page = PageRequest::new().sort(SortBy::DisplayName, SortOrder::Asc);
    let videos = read_api(&server)
        .search_videos("read-token", &search, &page, &FieldSelection::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(videos.items[0].id, Some(9));
}

#[tokio::test]
async fn test_related_videos_by_reference_id() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_related_videos"),
            ("reference_id", "clip-1"),
            ("page_size", "5"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 11}]}"#)
        .create_async()
        .await;

    let videos = read_api(&server)
        .find_related_videos(
            "read-token",
            &VideoRef::ReferenceId("clip-1".to_string()),
            &PageRequest::new().size(5),
            &FieldSelection::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(videos.len(), 1);
}

#[tokio::test]
async fn test_application_error_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .with_status(200)
        .with_body(
            r#"{"error": {"name": "InvalidTokenError", "message": "invalid token", "code": 210}, "result": null, "id": null}"#,
        )
        .create_async()
        .await;

    let error = read_api(&server)
        .find_video_by_id("bad-token", 1, &FieldSelection::new())
        .await
        .unwrap_err();

    match error {
        MediaApiError::Application { code, message, .. } => {
            assert_eq!(code, 210);
            assert_eq!(message.as_deref(), Some("invalid token"));
        }
        other => panic!("expected application error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let error = read_api(&server)
        .find_video_by_id("read-token", 1, &FieldSelection::new())
        .await
        .unwrap_err();

    assert!(error.is_transient());
    assert!(matches!(
        error,
        MediaApiError::Transport(ref failure)
            if failure.kind == TransportErrorKind::HttpErrorStatus { status: 503 }
    ));
}

#[tokio::test]
async fn test_non_json_body_is_unparsable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let error = read_api(&server)
        .find_video_by_id("read-token", 1, &FieldSelection::new())
        .await
        .unwrap_err();
    assert_eq!(error.code(), 300);
}

#[tokio::test]
async fn test_find_videos_by_ids_unfiltered() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_videos_by_ids_unfiltered"),
            ("video_ids", "1,2,3"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 1}, {"id": 3}], "total_count": -1}"#)
        .create_async()
        .await;

    let videos = read_api(&server)
        .find_videos_by_ids_unfiltered("read-token", &[1, 2, 3], &FieldSelection::new())
        .await
        .unwrap();

    mock.assert_async().await;
    let ids: Vec<_> = videos.items.iter().filter_map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_find_videos_by_tags() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_videos_by_tags"),
            ("and_tags", "news,sport"),
            ("or_tags", "live"),
            ("page_size", "10"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 5, "tags": ["news", "sport", "live"]}]}"#)
        .create_async()
        .await;

    let videos = read_api(&server)
        .find_videos_by_tags(
            "read-token",
            &["news", "sport"],
            &["live"],
            &PageRequest::new().size(10),
            &FieldSelection::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(videos.items.len(), 1);
}

#[tokio::test]
async fn test_find_videos_by_user_and_text() {
    let mut server = mockito::Server::new_async().await;
    let by_user = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_videos_by_user_id"),
            ("user_id", "u-17"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 8}]}"#)
        .create_async()
        .await;
    let by_text = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_videos_by_text"),
            ("text", "launch day"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let api = read_api(&server);
    let page = PageRequest::new();
    let fields = FieldSelection::new();

    let videos = api
        .find_videos_by_user_id("read-token", "u-17", &page, &fields)
        .await
        .unwrap();
    assert_eq!(videos.items[0].id, Some(8));

    let videos = api
        .find_videos_by_text("read-token", "launch day", &page, &fields)
        .await
        .unwrap();
    assert!(videos.is_empty());

    by_user.assert_async().await;
    by_text.assert_async().await;
}

#[tokio::test]
async fn test_find_playlists_for_player() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Regex(format!("^{}", LIBRARY)))
        .match_query(query(&[
            ("command", "find_playlists_for_player_id"),
            ("player_id", "9001"),
            ("page_number", "1"),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 300, "name": "Picks", "playlistType": "EXPLICIT"}]}"#)
        .create_async()
        .await;

    let playlists = read_api(&server)
        .find_playlists_for_player_id(
            "read-token",
            "9001",
            &PageRequest::new().number(1),
            &FieldSelection::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(playlists.items[0].name.as_deref(), Some("Picks"));
}
