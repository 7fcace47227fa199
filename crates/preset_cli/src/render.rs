//! Plain-text rendering of template cards.

use preset_core::config::DisplaySettings;
use preset_core::models::{category_labels, Template};

/// Headline of the empty-state view.
pub const EMPTY_TITLE: &str = "Nothing found";
/// Hint shown under the empty-state headline.
pub const EMPTY_HINT: &str = "Try changing the search or picking another category";

/// Render one template as a card.
pub fn render_card(template: &Template, display: &DisplaySettings) -> String {
    let mut lines = vec![
        format!("[{}]  #{}", template.category, template.id),
        template.title.clone(),
    ];
    if !display.compact {
        lines.push(format!("  {}", template.description));
    }
    lines.push(format!(
        "  Resolution: {:<12} FPS: {} FPS",
        template.resolution, template.fps
    ));
    lines.push(format!(
        "  Bitrate:    {:<12} Preset: {}",
        template.bitrate, template.preset
    ));
    if display.show_tags && !template.tags.is_empty() {
        let badges: Vec<String> = template.tags.iter().map(|t| format!("#{t}")).collect();
        lines.push(format!("  {}", badges.join(" ")));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render the filtered sequence, or the empty-state block when it is empty.
pub fn render_results(templates: &[&Template], display: &DisplaySettings) -> String {
    if templates.is_empty() {
        return render_empty_state();
    }

    templates
        .iter()
        .map(|t| render_card(t, display))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_empty_state() -> String {
    format!("{EMPTY_TITLE}\n  {EMPTY_HINT}\n")
}

/// Category buttons in a row, the selected one bracketed.
pub fn render_category_bar(selected: &str) -> String {
    category_labels()
        .into_iter()
        .map(|label| {
            if label == selected {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use preset_core::catalog::Catalog;

    fn twitch() -> &'static Template {
        Catalog::builtin().get(1).unwrap()
    }

    #[test]
    fn card_shows_all_fields() {
        let card = render_card(twitch(), &DisplaySettings::default());

        assert!(card.starts_with("[Streaming]  #1\n"));
        assert!(card.contains("Streaming 1080p Twitch"));
        assert!(card.contains("balance of quality"));
        assert!(card.contains("1920x1080"));
        assert!(card.contains("60 FPS"));
        assert!(card.contains("6000 Kbps"));
        assert!(card.contains("veryfast"));
        assert!(card.contains("#twitch #gaming #1080p"));
    }

    #[test]
    fn card_has_one_line_per_field() {
        let card = render_card(twitch(), &DisplaySettings::default());
        let lines: Vec<&str> = card.lines().collect();

        assert_eq!(
            lines,
            vec![
                "[Streaming]  #1",
                "Streaming 1080p Twitch",
                "  Tuned for Twitch streaming with a balance of quality and performance",
                "  Resolution: 1920x1080    FPS: 60 FPS",
                "  Bitrate:    6000 Kbps    Preset: veryfast",
                "  #twitch #gaming #1080p",
            ]
        );
        assert!(card.ends_with('\n'));
    }

    #[test]
    fn compact_and_tagless_cards() {
        let display = DisplaySettings {
            show_tags: false,
            compact: true,
        };
        let card = render_card(twitch(), &display);

        assert!(!card.contains("balance of quality"));
        assert!(!card.contains("#twitch"));
        assert!(card.contains("veryfast"));
    }

    #[test]
    fn empty_results_render_empty_state() {
        let out = render_results(&[], &DisplaySettings::default());
        assert!(out.contains(EMPTY_TITLE));
        assert!(out.contains(EMPTY_HINT));
    }

    #[test]
    fn results_keep_order() {
        let catalog = Catalog::builtin();
        let hits = vec![catalog.get(5).unwrap(), catalog.get(2).unwrap()];
        let out = render_results(&hits, &DisplaySettings::default());

        let low_end = out.find("Low-End PC Stream").unwrap();
        let youtube = out.find("YouTube Gaming 1440p").unwrap();
        assert!(low_end < youtube);
    }

    #[test]
    fn category_bar_marks_selection() {
        assert_eq!(
            render_category_bar("Recording"),
            " All   Streaming  [Recording]  Podcast "
        );
    }
}
