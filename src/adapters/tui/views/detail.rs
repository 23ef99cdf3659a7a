use super::{comments::comment_lines, media::media_lines};
use crate::adapters::tui::state::LoadState;
use crate::domain::{Campsite, Comment};
use ratatui::prelude::*;

pub const DIRECTORY_CRUMB: &str = "Directory";

/// Full detail pane content for the selected campsite. Branches on the
/// load state, in order: a load in flight shows only the indicator, a
/// failed load shows only its message, a loaded campsite shows the
/// breadcrumb, heading, media block and comment section. Anything else
/// renders nothing.
pub fn detail_lines(
    state: &LoadState<Campsite>,
    comments: Option<&[Comment]>,
) -> Vec<Line<'static>> {
    match state {
        LoadState::Loading => {
            vec![Line::from(Span::styled(
                "Loading campsite...",
                Style::default().fg(Color::Gray),
            ))]
        }
        LoadState::Error(message) => {
            vec![Line::from(Span::styled(
                message.clone(),
                Style::default().fg(Color::Red),
            ))]
        }
        LoadState::Loaded(campsite) => {
            let mut lines = Vec::new();

            lines.push(Line::from(vec![
                Span::styled(DIRECTORY_CRUMB, Style::default().fg(Color::Blue)),
                Span::styled(" / ", Style::default().fg(Color::DarkGray)),
                Span::raw(campsite.name.clone()),
            ]));
            lines.push(Line::from(Span::styled(
                campsite.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));

            lines.extend(media_lines(campsite));
            lines.push(Line::from(""));
            lines.extend(comment_lines(comments));

            lines
        }
        LoadState::Idle => Vec::new(),
    }
}
