//! Core YouTube API client functionality.

use crate::youtube_api::{
    categories::VideoCategoryListResponse,
    channels::{Channel, ChannelListResponse},
    comments::{Comment, CommentOrder, CommentThreadListResponse},
    playlist_items::PlaylistItemListResponse,
    search::SearchListResponse,
    types::{PagedStream, total_results},
    videos::{Video, VideoListResponse},
};
use eyre::Context;
use http::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;
use tokio_stream::{Stream, StreamExt};
use tracing::instrument;

/// Production endpoint of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// `playlistItems.list` and `videos.list` accept at most this many results/ids per call.
const MAX_PAGE_SIZE: usize = 50;

/// `commentThreads.list` allows larger pages than the other list endpoints.
const MAX_COMMENT_PAGE_SIZE: usize = 100;

/// The only error kind of the client: the API answered with something other than `200 OK`.
#[derive(Debug, thiserror::Error)]
#[error("API error {status} on {endpoint}: {body}")]
pub struct RequestFailed {
    /// API resource that was queried, e.g. `channels`.
    pub endpoint: String,
    pub status: StatusCode,
    /// Raw response body; usually a Google JSON error document.
    pub body: String,
}

/// Configuration for [`YouTubeClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Static API key sent as the `key` query parameter.
    pub api_key: String,
    /// API root, without a trailing `/` (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Per-request timeout (default: 30s).
    pub timeout: Duration,
    /// Pause between consecutive pages or batches of one listing (default: 100ms).
    pub page_delay: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            page_delay: Duration::from_millis(100),
        }
    }
}

/// Client for the public, read-only parts of the YouTube Data API v3.
///
/// Authenticates with a static API key. Every call is a single GET; calls are
/// made one at a time by the caller and nothing is cached or retried.
#[derive(Clone)]
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    page_delay: Duration,
    client: reqwest::Client,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // the api key stays out of logs
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .field("page_delay", &self.page_delay)
            .finish_non_exhaustive()
    }
}

impl YouTubeClient {
    /// Creates a new client from `config`.
    pub fn new(config: ClientConfig) -> eyre::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_delay: config.page_delay,
            client,
        })
    }

    /// Makes a GET request against `endpoint` and returns the successful response.
    ///
    /// The API key is appended to `query_params`. Any status other than `200 OK`
    /// is turned into a [`RequestFailed`] carrying the endpoint, the status and
    /// the response body.
    #[instrument(skip(self), level = tracing::Level::TRACE)]
    pub(crate) async fn make_request(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query_params)
            .send()
            .await
            // the URL contains the API key
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("send request to YouTube API: {endpoint}"))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::debug!(endpoint, %status, "YouTube API request failed");
            return Err(RequestFailed {
                endpoint: endpoint.to_string(),
                status,
                body,
            }
            .into());
        }

        Ok(response)
    }

    /// Like [`Self::make_request`], and parses the response body as `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<T> {
        self.make_request(endpoint, query_params)
            .await?
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("parse YouTube {endpoint} API response as JSON"))
    }

    /// Resolves a channel handle (e.g. `@veritasium`) or free-text query to a channel ID.
    ///
    /// Uses `search.list`, which costs 100 quota units per call. Callers that
    /// already know the channel ID should skip this.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self), ret)]
    pub async fn resolve_channel_id(&self, query: &str) -> eyre::Result<String> {
        let query_params = [
            ("part", "snippet"),
            ("q", query),
            ("type", "channel"),
            ("maxResults", "1"),
        ];
        let results: SearchListResponse = self.get_json("search", &query_params).await?;

        tracing::debug!(
            total_results = ?total_results(results.page_info.as_ref()),
            returned_items = results.items.len(),
            "searched for channel"
        );

        results
            .items
            .into_iter()
            .next()
            .map(|r| r.snippet.channel_id)
            .ok_or_else(|| eyre::eyre!("No channel found for query: {query}"))
    }

    /// Gets a channel with all of its publicly readable parts.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self))]
    pub async fn get_channel_details(&self, channel_id: &str) -> eyre::Result<Channel> {
        let query_params = [
            (
                "part",
                "snippet,contentDetails,statistics,brandingSettings,status,topicDetails",
            ),
            ("id", channel_id),
        ];
        let channels: ChannelListResponse = self.get_json("channels", &query_params).await?;

        tracing::debug!(
            total_results = ?total_results(channels.page_info.as_ref()),
            returned_items = channels.items.len(),
            "fetched channel details"
        );

        channels
            .items
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("No channel details returned for: {channel_id}"))
    }

    /// Returns a paginated stream of the video IDs in a playlist.
    ///
    /// Entries without a video ID (deleted or private videos) are skipped.
    /// `page_size` is clamped to the endpoint's maximum of 50.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    pub fn playlist_video_ids<'a>(
        &'a self,
        playlist_id: &'a str,
        page_size: usize,
    ) -> impl Stream<Item = eyre::Result<String>> + use<'a> {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        PagedStream::new(move |page_token| async move {
            if page_token.is_some() {
                tokio::time::sleep(self.page_delay).await;
            }
            let page_size = page_size.to_string();
            let mut query_params = vec![
                ("part", "contentDetails"),
                ("playlistId", playlist_id),
                ("maxResults", page_size.as_str()),
            ];
            if let Some(ref token) = page_token {
                query_params.push(("pageToken", token.as_str()));
            }

            let page: PlaylistItemListResponse =
                self.get_json("playlistItems", &query_params).await?;

            tracing::debug!(
                total_results = ?total_results(page.page_info.as_ref()),
                returned_items = page.items.len(),
                has_next_page = page.next_page_token.is_some(),
                "fetched playlist items"
            );

            let ids: VecDeque<String> = page
                .items
                .into_iter()
                .filter_map(|item| item.content_details.video_id)
                .collect();
            Ok((ids, page.next_page_token))
        })
    }

    /// Collects up to `max_videos` of the most recent video IDs from an uploads playlist.
    ///
    /// Stops as soon as `max_videos` IDs are collected or the playlist has no
    /// further pages, whichever comes first.
    #[instrument(skip(self))]
    pub async fn list_upload_video_ids(
        &self,
        uploads_playlist_id: &str,
        max_videos: usize,
    ) -> eyre::Result<Vec<String>> {
        let mut video_ids = Vec::new();
        if max_videos == 0 {
            return Ok(video_ids);
        }

        let stream = self.playlist_video_ids(uploads_playlist_id, max_videos);
        let mut stream = std::pin::pin!(stream);
        while video_ids.len() < max_videos {
            match stream.next().await {
                Some(id) => video_ids.push(id.context("list uploads playlist")?),
                None => break,
            }
        }

        tracing::debug!(collected = video_ids.len(), "listed upload video ids");
        Ok(video_ids)
    }

    /// Gets details for a list of videos, 50 IDs per request.
    ///
    /// Results come back in request order; IDs that do not resolve to a
    /// visible video are left out by the API.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self, video_ids), fields(video_count = video_ids.len()))]
    pub async fn get_videos_details(&self, video_ids: &[String]) -> eyre::Result<Vec<Video>> {
        let mut videos = Vec::with_capacity(video_ids.len());

        for (i, batch) in video_ids.chunks(MAX_PAGE_SIZE).enumerate() {
            if i > 0 {
                tokio::time::sleep(self.page_delay).await;
            }
            let ids = batch.join(",");
            let max_results = MAX_PAGE_SIZE.to_string();
            let query_params = [
                ("part", "snippet,statistics,contentDetails,status,topicDetails"),
                ("id", ids.as_str()),
                ("maxResults", max_results.as_str()),
            ];

            let response: VideoListResponse = self.get_json("videos", &query_params).await?;

            tracing::debug!(
                batch = i,
                requested = batch.len(),
                total_results = ?total_results(response.page_info.as_ref()),
                returned_items = response.items.len(),
                "fetched video details"
            );
            videos.extend(response.items);
        }

        Ok(videos)
    }

    /// Maps category IDs to their titles for a region.
    ///
    /// Entries missing either an ID or a title are skipped.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videoCategories/list>
    #[instrument(skip(self))]
    pub async fn get_video_categories(
        &self,
        region_code: &str,
    ) -> eyre::Result<HashMap<String, String>> {
        let query_params = [("part", "snippet"), ("regionCode", region_code)];
        let categories: VideoCategoryListResponse =
            self.get_json("videoCategories", &query_params).await?;

        let mapping: HashMap<String, String> = categories
            .items
            .into_iter()
            .filter_map(|c| Some((c.id?, c.snippet?.title?)))
            .collect();

        tracing::debug!(categories = mapping.len(), "fetched video categories");
        Ok(mapping)
    }

    /// Returns a paginated stream of a video's top-level comments.
    ///
    /// Fails with `403 commentsDisabled` when the video has comments turned off.
    /// `page_size` is clamped to the endpoint's maximum of 100.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/commentThreads/list>
    pub fn top_level_comments<'a>(
        &'a self,
        video_id: &'a str,
        page_size: usize,
        order: CommentOrder,
    ) -> impl Stream<Item = eyre::Result<Comment>> + use<'a> {
        let page_size = page_size.clamp(1, MAX_COMMENT_PAGE_SIZE);
        PagedStream::new(move |page_token| async move {
            if page_token.is_some() {
                tokio::time::sleep(self.page_delay).await;
            }
            let page_size = page_size.to_string();
            let mut query_params = vec![
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", page_size.as_str()),
                ("textFormat", "plainText"),
                ("order", order.as_str()),
            ];
            if let Some(ref token) = page_token {
                query_params.push(("pageToken", token.as_str()));
            }

            let page: CommentThreadListResponse =
                self.get_json("commentThreads", &query_params).await?;

            tracing::debug!(
                total_results = ?total_results(page.page_info.as_ref()),
                returned_items = page.items.len(),
                has_next_page = page.next_page_token.is_some(),
                "fetched comment threads"
            );

            let comments: VecDeque<Comment> = page.items.into_iter().map(Comment::from).collect();
            Ok((comments, page.next_page_token))
        })
    }

    /// Collects up to `max_comments` top-level comments of a video.
    #[instrument(skip(self))]
    pub async fn get_top_level_comments(
        &self,
        video_id: &str,
        max_comments: usize,
        order: CommentOrder,
    ) -> eyre::Result<Vec<Comment>> {
        let mut comments = Vec::new();
        if max_comments == 0 {
            return Ok(comments);
        }

        let stream = self.top_level_comments(video_id, max_comments, order);
        let mut stream = std::pin::pin!(stream);
        while comments.len() < max_comments {
            match stream.next().await {
                Some(comment) => comments.push(comment.context("list comment threads")?),
                None => break,
            }
        }

        tracing::debug!(collected = comments.len(), "listed top-level comments");
        Ok(comments)
    }
}
