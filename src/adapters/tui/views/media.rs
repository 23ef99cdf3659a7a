use crate::domain::Campsite;
use ratatui::prelude::*;

/// Media block for a loaded campsite: the image reference with its alt
/// text (the campsite name), then the description exactly as supplied.
pub fn media_lines(campsite: &Campsite) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Image: ", Style::default().fg(Color::Cyan)),
        Span::raw(campsite.image.clone()),
        Span::styled(
            format!(" [{}]", campsite.name),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(""));

    for text_line in campsite.description.split('\n') {
        lines.push(Line::from(Span::styled(
            text_line.to_string(),
            Style::default().fg(Color::White),
        )));
    }

    lines
}
