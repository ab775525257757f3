//! YouTube VideoCategories API types.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Response structure for the `videoCategories.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videoCategories/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoCategoryListResponse {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<VideoCategory>,
}

/// A category that has been or could be associated with uploaded videos.
///
/// See: <https://developers.google.com/youtube/v3/docs/videoCategories#resource>
#[derive(Debug, Serialize, Deserialize)]
pub struct VideoCategory {
    pub id: Option<String>,
    pub snippet: Option<VideoCategorySnippet>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VideoCategorySnippet {
    pub title: Option<String>,
    #[serde(default)]
    pub assignable: bool,
}
