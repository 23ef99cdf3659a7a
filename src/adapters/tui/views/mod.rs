pub mod comments;
pub mod detail;
pub mod media;

#[cfg(test)]
pub(crate) fn line_text(line: &ratatui::text::Line<'_>) -> String {
    line.spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect()
}
