use clap::Parser;
use std::io::IsTerminal;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use yt_api_smoketest::youtube_api::{CommentOrder, DEFAULT_BASE_URL};
use yt_api_smoketest::{ChannelSelector, ClientConfig, RunOptions, YouTubeClient};

/// Smoke test of the YouTube Data API v3: channel, uploads, categories, videos and comments.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Channel handle or search text used to find the channel.
    #[arg(default_value = "@veritasium")]
    query: String,

    /// Inspect this channel ID directly instead of searching for QUERY.
    #[arg(long)]
    channel_id: Option<String>,

    /// YouTube Data API key.
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Number of recent uploads to look up.
    #[arg(long, default_value_t = 10)]
    max_videos: usize,

    /// Number of top-level comments to fetch for the first video.
    #[arg(long, default_value_t = 5)]
    max_comments: usize,

    /// Comment sort order: `relevance` or `time`.
    #[arg(long, default_value_t = CommentOrder::Time)]
    comment_order: CommentOrder,

    /// Region code used to name video categories.
    #[arg(long, default_value = "US")]
    region: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();

    // stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let mut config = ClientConfig::new(args.api_key);
    config.base_url = args.base_url;
    config.timeout = Duration::from_secs(args.timeout_secs);
    let client = YouTubeClient::new(config)?;

    let options = RunOptions {
        channel: match args.channel_id {
            Some(id) => ChannelSelector::Id(id),
            None => ChannelSelector::Query(args.query),
        },
        max_videos: args.max_videos,
        max_comments: args.max_comments,
        comment_order: args.comment_order,
        region_code: args.region,
    };

    let stdout = std::io::stdout();
    yt_api_smoketest::run(&client, &options, &mut stdout.lock()).await
}
