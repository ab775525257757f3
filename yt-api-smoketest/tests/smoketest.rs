use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yt_api_smoketest::youtube_api::RequestFailed;
use yt_api_smoketest::{ChannelSelector, ClientConfig, RunOptions, YouTubeClient, run};

fn client_for(server: &MockServer) -> YouTubeClient {
    let mut config = ClientConfig::new("test-key");
    config.base_url = server.uri();
    config.page_delay = Duration::ZERO;
    YouTubeClient::new(config).unwrap()
}

async fn mount_json(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{endpoint}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts everything up to (not including) `commentThreads`.
async fn mount_channel_with_uploads(server: &MockServer) {
    mount_json(
        server,
        "search",
        json!({"items": [{"snippet": {"channelId": "UC1"}}]}),
    )
    .await;
    mount_json(
        server,
        "channels",
        json!({"items": [{
            "id": "UC1",
            "snippet": {"title": "Channel One", "publishedAt": "2012-01-01T00:00:00Z"},
            "contentDetails": {"relatedPlaylists": {"uploads": "UU1"}},
            "statistics": {"viewCount": "1000", "subscriberCount": "10", "videoCount": "2"}
        }]}),
    )
    .await;
    mount_json(
        server,
        "playlistItems",
        json!({"items": [
            {"contentDetails": {"videoId": "v1"}},
            {"contentDetails": {"videoId": "v2"}}
        ]}),
    )
    .await;
    mount_json(
        server,
        "videoCategories",
        json!({"items": [{"id": "27", "snippet": {"title": "Education"}}]}),
    )
    .await;
    mount_json(
        server,
        "videos",
        json!({"items": [
            {"id": "v1", "snippet": {"title": "First", "categoryId": "27"},
             "contentDetails": {"duration": "PT12M1S"}},
            {"id": "v2", "snippet": {"title": "Second", "categoryId": "1"}}
        ]}),
    )
    .await;
}

async fn run_to_string(
    client: &YouTubeClient,
    options: &RunOptions,
) -> (eyre::Result<()>, String) {
    let mut out = Vec::new();
    let result = run(client, options, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn full_run_prints_every_section() {
    let server = MockServer::start().await;
    mount_channel_with_uploads(&server).await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "v1"))
        .and(query_param("order", "time"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": [
            {"snippet": {"topLevelComment": {"snippet": {
                "authorDisplayName": "@fan",
                "textDisplay": "first!",
                "likeCount": 4,
                "publishedAt": "2024-05-01T10:00:00Z"
            }}}}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let (result, output) = run_to_string(&client_for(&server), &RunOptions::default()).await;
    result.unwrap();

    assert!(output.contains("1) Resolving channel for handle/query: @veritasium\n"));
    assert!(output.contains("   channel_id: UC1\n"));
    assert!(output.contains("   title: Channel One\n"));
    assert!(output.contains("   uploads_playlist_id: UU1\n"));
    assert!(output.contains("   got video_ids: [\"v1\", \"v2\"]\n"));
    assert!(output.contains("3b) Fetching category mapping (US) for categoryId -> name\n"));
    assert!(output.contains("   categories loaded: 1\n"));
    assert!(output.contains("   categoryId: 27 (Education)\n"));
    assert!(output.contains("   categoryId: 1\n"));
    assert!(output.contains("   duration: PT12M1S\n"));
    assert!(output.contains("(order=time)\n"));
    assert!(output.contains("   author: @fan\n"));
    assert!(output.contains("   text: first!\n"));
    assert!(output.ends_with("Full project-coverage smoke test complete.\n"));
}

#[tokio::test]
async fn known_channel_id_skips_search() {
    let server = MockServer::start().await;
    mount_channel_with_uploads(&server).await;
    mount_json(&server, "commentThreads", json!({"items": []})).await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .named("search must not be called")
        .mount(&server)
        .await;

    let options = RunOptions {
        channel: ChannelSelector::Id("UC1".to_string()),
        ..RunOptions::default()
    };
    let (result, output) = run_to_string(&client_for(&server), &options).await;
    result.unwrap();

    assert!(output.contains("   channel_id: UC1\n"));
    assert!(output.contains("   No comments returned (comments may be disabled or empty).\n"));
}

#[tokio::test]
async fn comment_failure_is_reported_and_run_completes() {
    let server = MockServer::start().await;
    mount_channel_with_uploads(&server).await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_string("commentsDisabled"))
        .mount(&server)
        .await;

    let (result, output) = run_to_string(&client_for(&server), &RunOptions::default()).await;
    result.unwrap();

    assert!(output.contains("   Could not fetch comments: "));
    assert!(output.contains("API error 403 Forbidden on commentThreads: commentsDisabled"));
    assert!(output.ends_with("Full project-coverage smoke test complete.\n"));
}

#[tokio::test]
async fn channel_without_uploads_aborts_after_summary() {
    let server = MockServer::start().await;
    mount_json(&server, "search", json!({"items": [{"snippet": {"channelId": "UC1"}}]})).await;
    mount_json(
        &server,
        "channels",
        json!({"items": [{"id": "UC1", "snippet": {"title": "No Uploads"}}]}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let (result, output) = run_to_string(&client_for(&server), &RunOptions::default()).await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Could not find uploads playlist id"));
    assert!(output.contains("   title: No Uploads\n"));
    assert!(!output.contains("3) Listing"));
}

#[tokio::test]
async fn request_failure_aborts_the_run() {
    let server = MockServer::start().await;
    mount_json(&server, "search", json!({"items": [{"snippet": {"channelId": "UC1"}}]})).await;
    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(400).set_body_string("keyInvalid"))
        .mount(&server)
        .await;

    let (result, output) = run_to_string(&client_for(&server), &RunOptions::default()).await;

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "fetch channel details");
    let failed = err
        .chain()
        .find_map(|e| e.downcast_ref::<RequestFailed>())
        .expect("cause should be RequestFailed");
    assert_eq!(failed.endpoint, "channels");
    assert_eq!(failed.status, http::StatusCode::BAD_REQUEST);
    assert!(!output.contains("Full project-coverage smoke test complete."));
}

#[tokio::test]
async fn no_videos_ends_before_comments() {
    let server = MockServer::start().await;
    mount_json(&server, "search", json!({"items": [{"snippet": {"channelId": "UC1"}}]})).await;
    mount_json(
        &server,
        "channels",
        json!({"items": [{"id": "UC1", "contentDetails": {"relatedPlaylists": {"uploads": "UU1"}}}]}),
    )
    .await;
    mount_json(&server, "playlistItems", json!({"items": []})).await;
    mount_json(&server, "videoCategories", json!({"items": []})).await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(0)
        .mount(&server)
        .await;

    let (result, output) = run_to_string(&client_for(&server), &RunOptions::default()).await;
    result.unwrap();

    assert!(output.contains("   got video_ids: []\n"));
    assert!(output.contains("   No videos returned — cannot fetch comments.\n"));
}
