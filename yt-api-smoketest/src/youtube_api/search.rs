//! YouTube Search API types, used to discover a channel from a handle or free text.

use crate::youtube_api::types::PageInfo;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// The value will be `youtube#searchListResponse`.
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<SearchResult>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A search result points at a video, channel or playlist matching the query.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub snippet: SearchResultSnippet,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    /// The ID of the channel that published the resource, or the channel itself
    /// for `type=channel` searches.
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub title: Option<String>,
}
