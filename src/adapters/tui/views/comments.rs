use crate::domain::Comment;
use ratatui::prelude::*;

pub const SUBMIT_TRIGGER: &str = "[c] Submit Comment";

/// Comment section for a loaded campsite. An absent collection renders
/// nothing at all; a present-but-empty one still gets its heading and
/// the dialog trigger. Each entry shows the text and an attribution
/// line; the stored rating is not part of the listing.
pub fn comment_lines(comments: Option<&[Comment]>) -> Vec<Line<'static>> {
    let Some(comments) = comments else {
        return Vec::new();
    };

    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Comments",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for comment in comments {
        for text_line in comment.text.split('\n') {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("-- {}, {}", comment.author, comment.display_date()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        SUBMIT_TRIGGER,
        Style::default().fg(Color::Cyan),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::tui::views::line_text;
    use crate::domain::{CampsiteId, CommentId};

    fn sample_comment() -> Comment {
        Comment {
            id: CommentId(1),
            campsite_id: CampsiteId(0),
            rating: 5,
            text: "Nice spot".to_string(),
            author: "Ana".to_string(),
            date: "2020-10-10".to_string(),
        }
    }

    fn flatten(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn absent_collection_renders_nothing() {
        assert!(comment_lines(None).is_empty());
    }

    #[test]
    fn empty_collection_still_gets_heading_and_trigger() {
        let lines = comment_lines(Some(&[]));
        let all: Vec<String> = lines.iter().map(line_text).collect();
        assert!(all.contains(&"Comments".to_string()));
        assert!(all.contains(&SUBMIT_TRIGGER.to_string()));
        // Heading, spacer, trigger and not a single entry
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn entry_shows_text_author_and_formatted_date() {
        let lines = comment_lines(Some(&[sample_comment()]));
        let flat = flatten(&lines);
        assert!(flat.contains("Nice spot -- Ana, Oct 10, 2020"));
    }

    #[test]
    fn entry_omits_the_stored_rating() {
        let lines = comment_lines(Some(&[sample_comment()]));
        let flat = flatten(&lines);
        assert!(!flat.contains('5'));
    }

    #[test]
    fn every_entry_renders_once() {
        let mut second = sample_comment();
        second.id = CommentId(2);
        second.text = "Bring bug spray".to_string();
        second.author = "Sam".to_string();

        let lines = comment_lines(Some(&[sample_comment(), second]));
        let flat = flatten(&lines);
        assert!(flat.contains("Nice spot"));
        assert!(flat.contains("Bring bug spray"));
        assert_eq!(flat.matches("-- ").count(), 2);
    }
}
