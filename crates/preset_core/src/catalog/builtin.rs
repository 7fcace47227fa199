//! The shipped template set.

use crate::models::{Category, Template};

#[allow(clippy::too_many_arguments)]
fn template(
    id: u32,
    title: &str,
    description: &str,
    category: Category,
    resolution: &str,
    bitrate: &str,
    fps: u32,
    preset: &str,
    tags: &[&str],
) -> Template {
    Template {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        resolution: resolution.to_string(),
        bitrate: bitrate.to_string(),
        fps,
        preset: preset.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Built-in templates in display order.
pub(super) fn templates() -> Vec<Template> {
    vec![
        template(
            1,
            "Streaming 1080p Twitch",
            "Tuned for Twitch streaming with a balance of quality and performance",
            Category::Streaming,
            "1920x1080",
            "6000 Kbps",
            60,
            "veryfast",
            &["twitch", "gaming", "1080p"],
        ),
        template(
            2,
            "YouTube Gaming 1440p",
            "High quality game streaming to YouTube with 1440p support",
            Category::Streaming,
            "2560x1440",
            "9000 Kbps",
            60,
            "fast",
            &["youtube", "gaming", "1440p"],
        ),
        template(
            3,
            "Gameplay Recording",
            "Maximum quality for editing gameplay footage afterwards",
            Category::Recording,
            "1920x1080",
            "50000 Kbps",
            60,
            "slow",
            &["recording", "gaming", "high quality"],
        ),
        template(
            4,
            "Podcast / Webinar",
            "Settings for recording podcasts and online presentations",
            Category::Podcast,
            "1920x1080",
            "4000 Kbps",
            30,
            "medium",
            &["podcast", "webinar", "voice"],
        ),
        template(
            5,
            "Low-End PC Stream",
            "Tuned for weak computers with minimal load",
            Category::Streaming,
            "1280x720",
            "3000 Kbps",
            30,
            "ultrafast",
            &["720p", "low-end", "performance"],
        ),
        template(
            6,
            "YouTube 4K Recording",
            "Professional 4K recording for YouTube content",
            Category::Recording,
            "3840x2160",
            "80000 Kbps",
            60,
            "medium",
            &["4k", "youtube", "recording"],
        ),
    ]
}
