//! Human-readable summaries of the fetched resources.
//!
//! Everything is written to a caller-provided [`Write`] so the binary can print
//! to stdout while tests capture into a buffer. Values the API left out print
//! as `N/A`.

use crate::youtube_api::{Channel, Comment, Video};
use std::collections::HashMap;
use std::fmt::Display;
use std::io::Write;

/// Only this many videos get a full summary.
pub const VIDEO_SUMMARY_LIMIT: usize = 5;

/// Comment text beyond this many characters is cut off.
pub const COMMENT_TEXT_LIMIT: usize = 200;

fn or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn list_or_na(values: Option<&[String]>) -> String {
    values.map_or_else(|| "N/A".to_string(), |v| format!("{v:?}"))
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

/// Prints the channel's core details and enrichments, and returns its uploads playlist ID.
///
/// The summary is printed even when the channel has no uploads playlist, in
/// which case an error is returned afterwards.
pub fn print_channel_summary(out: &mut impl Write, channel: &Channel) -> eyre::Result<String> {
    let snippet = &channel.snippet;
    let stats = &channel.statistics;
    let uploads = channel.uploads_playlist_id();

    let subscribers = if stats.hidden_subscriber_count {
        "hidden".to_string()
    } else {
        format!("{} (may be hidden)", or_na(stats.subscriber_count.as_deref()))
    };

    writeln!(out, "   title: {}", snippet.title)?;
    writeln!(out, "   publishedAt: {}", or_na(snippet.published_at))?;
    writeln!(out, "   subscribers: {subscribers}")?;
    writeln!(out, "   totalViews: {}", or_na(stats.view_count.as_deref()))?;
    writeln!(out, "   videoCount: {}", or_na(stats.video_count.as_deref()))?;
    writeln!(out, "   uploads_playlist_id: {}", or_na(uploads))?;

    writeln!(out)?;
    writeln!(out, "   == CHANNEL ENRICHMENTS ==")?;
    let branding = &channel.branding_settings.channel;
    writeln!(
        out,
        "   brandingSettings.channel.defaultLanguage: {}",
        or_na(branding.default_language.as_deref())
    )?;
    writeln!(
        out,
        "   brandingSettings.channel.country: {}",
        or_na(branding.country.as_deref())
    )?;
    writeln!(
        out,
        "   brandingSettings.channel.keywords: {}",
        or_na(branding.keywords.as_deref())
    )?;
    writeln!(
        out,
        "   featuredChannelsUrls_count: {}",
        branding.featured_channels_urls.len()
    )?;

    let status = &channel.status;
    writeln!(
        out,
        "   status.privacyStatus: {}",
        or_na(status.privacy_status.as_deref())
    )?;
    writeln!(out, "   status.isLinked: {}", or_na(status.is_linked))?;
    writeln!(
        out,
        "   status.longUploadsStatus: {}",
        or_na(status.long_uploads_status.as_deref())
    )?;
    writeln!(out, "   status.madeForKids: {}", or_na(status.made_for_kids))?;

    let topics = &channel.topic_details;
    writeln!(
        out,
        "   topicDetails.topicCategories: {}",
        list_or_na(topics.topic_categories.as_deref())
    )?;
    writeln!(
        out,
        "   topicDetails.topicIds: {}",
        list_or_na(topics.topic_ids.as_deref())
    )?;

    uploads.map(str::to_string).ok_or_else(|| {
        eyre::eyre!("Could not find uploads playlist id. Channel contentDetails missing.")
    })
}

/// Prints a summary of each of the first [`VIDEO_SUMMARY_LIMIT`] videos.
///
/// `categories` maps category IDs to titles; unknown IDs are printed bare.
pub fn print_video_summaries(
    out: &mut impl Write,
    videos: &[Video],
    categories: &HashMap<String, String>,
) -> std::io::Result<()> {
    for video in videos.iter().take(VIDEO_SUMMARY_LIMIT) {
        let snippet = &video.snippet;
        let stats = &video.statistics;
        let details = &video.content_details;
        let status = &video.status;
        let topics = &video.topic_details;

        let category = match snippet.category_id.as_deref() {
            Some(id) => match categories.get(id) {
                Some(name) => format!("{id} ({name})"),
                None => id.to_string(),
            },
            None => "N/A".to_string(),
        };

        writeln!(out)?;
        writeln!(out, "   ---")?;
        writeln!(out, "   videoId: {}", video.id)?;
        writeln!(out, "   title: {}", snippet.title)?;
        writeln!(out, "   publishedAt: {}", or_na(snippet.published_at))?;
        writeln!(
            out,
            "   channelTitle: {}",
            or_na(snippet.channel_title.as_deref())
        )?;
        writeln!(out, "   categoryId: {category}")?;
        writeln!(
            out,
            "   tags_count: {} (tags may be missing)",
            snippet.tags.len()
        )?;
        writeln!(out, "   duration: {}", or_na(details.duration.as_deref()))?;
        writeln!(out, "   caption_flag: {}", or_na(details.caption.as_deref()))?;
        writeln!(out, "   views: {}", or_na(stats.view_count.as_deref()))?;
        writeln!(
            out,
            "   likes: {} (may be missing if disabled)",
            or_na(stats.like_count.as_deref())
        )?;
        writeln!(
            out,
            "   comments: {} (may be missing)",
            or_na(stats.comment_count.as_deref())
        )?;
        writeln!(
            out,
            "   status.privacyStatus: {}",
            or_na(status.privacy_status.as_deref())
        )?;
        writeln!(out, "   status.madeForKids: {}", or_na(status.made_for_kids))?;
        writeln!(out, "   status.embeddable: {}", or_na(status.embeddable))?;
        writeln!(
            out,
            "   topicDetails.topicCategories: {}",
            list_or_na(topics.topic_categories.as_deref())
        )?;
        writeln!(
            out,
            "   topicDetails.topicIds: {}",
            list_or_na(topics.topic_ids.as_deref())
        )?;
    }
    Ok(())
}

/// Prints each comment, cutting long texts at [`COMMENT_TEXT_LIMIT`] characters.
pub fn print_comments(out: &mut impl Write, comments: &[Comment]) -> std::io::Result<()> {
    for comment in comments {
        writeln!(out)?;
        writeln!(out, "   ---")?;
        writeln!(out, "   author: {}", or_na(comment.author.as_deref()))?;
        writeln!(out, "   likeCount: {}", or_na(comment.like_count))?;
        writeln!(out, "   publishedAt: {}", or_na(comment.published_at))?;
        writeln!(
            out,
            "   text: {}",
            truncate_text(comment.text.as_deref().unwrap_or_default(), COMMENT_TEXT_LIMIT)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube_api::channels::ChannelListResponse;
    use crate::youtube_api::videos::VideoListResponse;
    use pretty_assertions::assert_eq;

    fn channel(json: &str) -> Channel {
        let parsed: ChannelListResponse =
            serde_json::from_str(&format!(r#"{{"items": [{json}]}}"#)).unwrap();
        parsed.items.into_iter().next().unwrap()
    }

    fn videos(json: &str) -> Vec<Video> {
        let parsed: VideoListResponse =
            serde_json::from_str(&format!(r#"{{"items": {json}}}"#)).unwrap();
        parsed.items.into()
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>),
    {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn channel_summary_returns_uploads_playlist() {
        let channel = channel(
            r#"{
                "id": "UC1",
                "snippet": {"title": "Some Channel", "publishedAt": "2010-07-21T07:18:02Z"},
                "contentDetails": {"relatedPlaylists": {"uploads": "UU1"}},
                "statistics": {"viewCount": "100", "subscriberCount": "7", "videoCount": "3"},
                "brandingSettings": {"channel": {"featuredChannelsUrls": ["a", "b"]}},
                "status": {"privacyStatus": "public", "madeForKids": false},
                "topicDetails": {"topicIds": ["/m/01k8wb"]}
            }"#,
        );

        let mut uploads = None;
        let output = render(|out| {
            uploads = Some(print_channel_summary(out, &channel).unwrap());
        });

        assert_eq!(uploads.as_deref(), Some("UU1"));
        assert!(output.contains("   title: Some Channel\n"));
        assert!(output.contains("   publishedAt: 2010-07-21T07:18:02Z\n"));
        assert!(output.contains("   subscribers: 7 (may be hidden)\n"));
        assert!(output.contains("   uploads_playlist_id: UU1\n"));
        assert!(output.contains("   featuredChannelsUrls_count: 2\n"));
        assert!(output.contains("   status.isLinked: N/A\n"));
        assert!(output.contains("   status.madeForKids: false\n"));
        assert!(output.contains("   topicDetails.topicCategories: N/A\n"));
        assert!(output.contains("   topicDetails.topicIds: [\"/m/01k8wb\"]\n"));
    }

    #[test]
    fn channel_summary_without_uploads_prints_then_fails() {
        let channel = channel(
            r#"{"id": "UC1", "snippet": {"title": "Bare"}, "statistics": {"hiddenSubscriberCount": true}}"#,
        );

        let mut result = None;
        let output = render(|out| {
            result = Some(print_channel_summary(out, &channel));
        });

        let err = result.unwrap().unwrap_err();
        assert!(err.to_string().contains("Could not find uploads playlist id"));
        assert!(output.contains("   title: Bare\n"));
        assert!(output.contains("   subscribers: hidden\n"));
        assert!(!output.contains("(may be hidden)"));
        assert!(output.contains("   uploads_playlist_id: N/A\n"));
    }

    #[test]
    fn video_summaries_label_categories_and_stop_at_limit() {
        let videos = videos(
            r#"[
                {"id": "v0", "snippet": {"title": "zero", "categoryId": "28", "tags": ["a", "b", "c"]},
                 "contentDetails": {"duration": "PT30M45S", "caption": "false"},
                 "statistics": {"viewCount": "10", "likeCount": "2"}},
                {"id": "v1", "snippet": {"title": "one", "categoryId": "99"}},
                {"id": "v2"}, {"id": "v3"}, {"id": "v4"}, {"id": "v5"}
            ]"#,
        );
        let categories = HashMap::from([("28".to_string(), "Science & Technology".to_string())]);

        let output = render(|out| print_video_summaries(out, &videos, &categories).unwrap());

        assert!(output.contains("   categoryId: 28 (Science & Technology)\n"));
        assert!(output.contains("   categoryId: 99\n"));
        assert!(output.contains("   categoryId: N/A\n"));
        assert!(output.contains("   tags_count: 3 (tags may be missing)\n"));
        assert!(output.contains("   duration: PT30M45S\n"));
        assert!(output.contains("   likes: 2 (may be missing if disabled)\n"));
        assert!(output.contains("   comments: N/A (may be missing)\n"));
        assert!(output.contains("   videoId: v4\n"));
        assert!(!output.contains("v5"));
        assert_eq!(output.matches("   ---\n").count(), VIDEO_SUMMARY_LIMIT);
    }

    #[test]
    fn comments_are_truncated_by_character() {
        let long = "é".repeat(250);
        let comments = vec![
            Comment {
                author: Some("@a".to_string()),
                published_at: Some("2024-05-01T10:00:00Z".parse().unwrap()),
                like_count: Some(3),
                text: Some(long),
            },
            Comment {
                author: None,
                published_at: None,
                like_count: None,
                text: None,
            },
        ];

        let output = render(|out| print_comments(out, &comments).unwrap());

        let expected_text = format!("   text: {}…\n", "é".repeat(200));
        assert!(output.contains(&expected_text));
        assert!(output.contains("   author: @a\n"));
        assert!(output.contains("   likeCount: 3\n"));
        assert!(output.contains("   author: N/A\n"));
        assert!(output.contains("   text: \n"));
    }

    #[test]
    fn truncate_text_keeps_short_text() {
        assert_eq!(truncate_text("short", 200), "short");
        assert_eq!(truncate_text("abcdef", 6), "abcdef");
        assert_eq!(truncate_text("abcdefg", 6), "abcdef…");
    }
}
