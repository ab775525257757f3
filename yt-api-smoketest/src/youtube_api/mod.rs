//! Read-only client for the public YouTube Data API v3.
//!
//! Every resource the smoke test touches has its own module holding the
//! list-response and resource types, deserialized leniently: any part the API
//! may leave out is optional. All HTTP goes through [`YouTubeClient`].
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use yt_api_smoketest::youtube_api::{ClientConfig, CommentOrder, YouTubeClient};
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = YouTubeClient::new(ClientConfig::new("YOUR_API_KEY"))?;
//!
//! let channel_id = client.resolve_channel_id("@veritasium").await?;
//! let channel = client.get_channel_details(&channel_id).await?;
//! if let Some(uploads) = channel.uploads_playlist_id() {
//!     let ids = client.list_upload_video_ids(uploads, 10).await?;
//!     let videos = client.get_videos_details(&ids).await?;
//!     if let Some(video) = videos.first() {
//!         let comments = client
//!             .get_top_level_comments(&video.id, 5, CommentOrder::Time)
//!             .await?;
//!         println!("{}: {} comments", video.snippet.title, comments.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod channels;
pub mod client;
pub mod comments;
pub mod playlist_items;
pub mod search;
pub mod types;
pub mod videos;

pub use client::{ClientConfig, DEFAULT_BASE_URL, RequestFailed, YouTubeClient};
pub use types::{PageInfo, PagedStream, TopicDetails};

pub use channels::{Channel, ChannelSnippet, ChannelStatistics};
pub use comments::{Comment, CommentOrder};
pub use videos::{Video, VideoStatistics};
