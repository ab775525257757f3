//! YouTube Videos API types.

use crate::youtube_api::types::{PageInfo, TopicDetails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videos.list` API call.
///
/// Contains a list of [`Video`] resources that match the request criteria,
/// along with pagination information in [`PageInfo`].
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#videoListResponse`.
    #[serde(default)]
    pub kind: String,
    /// A list of videos that match the request criteria.
    ///
    /// Ids that do not resolve to a (public) video are silently left out.
    #[serde(default)]
    pub items: VecDeque<Video>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `video` resource represents a YouTube video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    #[serde(default)]
    pub snippet: VideoSnippet,
    #[serde(default)]
    pub statistics: VideoStatistics,
    #[serde(default)]
    pub content_details: VideoContentDetails,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default)]
    pub topic_details: TopicDetails,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: String,
    pub published_at: Option<Timestamp>,
    pub channel_id: Option<String>,
    pub channel_title: Option<String>,
    /// Key into the region's `videoCategories` list.
    pub category_id: Option<String>,
    /// Only present when the uploader set tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    ///
    /// Absent when the uploader hid the like count.
    pub like_count: Option<String>,
    /// The number of users who currently have the video marked as a favorite video.
    /// Note: This property is deprecated and always returns 0.
    pub favorite_count: Option<String>,
    /// The number of comments for the video. Absent when comments are disabled.
    pub comment_count: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContentDetails {
    /// ISO 8601 duration, e.g. `PT30M45S`.
    pub duration: Option<String>,
    pub definition: Option<String>,
    /// `"true"` or `"false"`; the API sends it as a string.
    pub caption: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#status>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    pub upload_status: Option<String>,
    pub privacy_status: Option<String>,
    pub embeddable: Option<bool>,
    pub made_for_kids: Option<bool>,
}
