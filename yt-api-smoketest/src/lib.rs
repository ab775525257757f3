//! Smoke test of the public YouTube Data API v3.
//!
//! Resolves a channel, then walks its uploads, the region's video categories,
//! video details and the first video's comments, printing a summary of each.

pub mod report;
pub mod smoketest;
pub mod youtube_api;

pub use smoketest::{ChannelSelector, RunOptions, run};
pub use youtube_api::{ClientConfig, YouTubeClient};
