//! YouTube Channels API types.

use crate::youtube_api::types::{PageInfo, TopicDetails};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `channels.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelListResponse {
    /// Identifies the API resource's type.
    ///
    /// The value will be `youtube#channelListResponse`.
    #[serde(default)]
    pub kind: String,
    /// A list of channels that match the request criteria.
    ///
    /// The API omits this field entirely when nothing matched.
    #[serde(default)]
    pub items: VecDeque<Channel>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A `channel` resource contains information about a YouTube channel.
///
/// Every part other than `id` is only present when it was requested through the
/// `part` parameter, and some are withheld for channels that restrict them, so
/// all of them default to empty.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub content_details: ChannelContentDetails,
    #[serde(default)]
    pub statistics: ChannelStatistics,
    #[serde(default)]
    pub branding_settings: ChannelBrandingSettings,
    #[serde(default)]
    pub status: ChannelStatus,
    #[serde(default)]
    pub topic_details: TopicDetails,
}

impl Channel {
    /// The ID of the playlist that contains the channel's uploaded videos.
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.content_details
            .related_playlists
            .as_ref()
            .and_then(|p| p.uploads.as_deref())
    }
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#snippet>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    /// The channel's title.
    #[serde(default)]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The date and time that the channel was created.
    pub published_at: Option<Timestamp>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: Option<RelatedPlaylists>,
}

/// Playlists associated with the channel.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist of the channel's uploaded videos.
    pub uploads: Option<String>,
    pub likes: Option<String>,
}

/// Channel statistics.
///
/// Counts are transmitted as decimal strings by the API and are kept as such.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    pub view_count: Option<String>,
    /// Rounded down to three significant figures, and absent when hidden.
    pub subscriber_count: Option<String>,
    #[serde(default)]
    pub hidden_subscriber_count: bool,
    pub video_count: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChannelBrandingSettings {
    #[serde(default)]
    pub channel: ChannelBranding,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#brandingSettings.channel>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBranding {
    pub default_language: Option<String>,
    pub country: Option<String>,
    /// Space-separated keywords; multi-word keywords are double-quoted.
    pub keywords: Option<String>,
    #[serde(default)]
    pub featured_channels_urls: Vec<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/channels#status>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatus {
    pub privacy_status: Option<String>,
    pub is_linked: Option<bool>,
    pub long_uploads_status: Option<String>,
    pub made_for_kids: Option<bool>,
}
