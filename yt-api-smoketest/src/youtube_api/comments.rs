//! YouTube CommentThreads API types.

use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Response structure for the `commentThreads.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads/list>
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub items: VecDeque<CommentThread>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A thread of a top-level comment and (optionally) its replies.
///
/// See: <https://developers.google.com/youtube/v3/docs/commentThreads#resource>
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    #[serde(default)]
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: Option<TopLevelComment>,
    pub total_reply_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopLevelComment {
    #[serde(default)]
    pub snippet: CommentSnippet,
}

/// See: <https://developers.google.com/youtube/v3/docs/comments#snippet>
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub author_display_name: Option<String>,
    pub text_display: Option<String>,
    pub like_count: Option<u64>,
    pub published_at: Option<Timestamp>,
}

/// A flattened top-level comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: Option<String>,
    pub published_at: Option<Timestamp>,
    pub like_count: Option<u64>,
    pub text: Option<String>,
}

impl From<CommentThread> for Comment {
    fn from(thread: CommentThread) -> Self {
        let snippet = thread
            .snippet
            .top_level_comment
            .map(|c| c.snippet)
            .unwrap_or_default();
        Self {
            author: snippet.author_display_name,
            published_at: snippet.published_at,
            like_count: snippet.like_count,
            text: snippet.text_display,
        }
    }
}

/// Sort order for `commentThreads.list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentOrder {
    #[default]
    Relevance,
    Time,
}

impl CommentOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentOrder::Relevance => "relevance",
            CommentOrder::Time => "time",
        }
    }
}

impl fmt::Display for CommentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown comment order '{0}' (expected 'relevance' or 'time')")]
pub struct UnknownCommentOrder(String);

impl FromStr for CommentOrder {
    type Err = UnknownCommentOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(CommentOrder::Relevance),
            "time" => Ok(CommentOrder::Time),
            other => Err(UnknownCommentOrder(other.to_string())),
        }
    }
}
