use super::{centered_rect, TextInput};
use crate::adapters::tui::event::AppEvent;
use crate::adapters::tui::validate::{max_length, min_length};
use crate::domain::CampsiteId;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

pub const RATING_CHOICES: [u8; 5] = [1, 2, 3, 4, 5];
pub const AUTHOR_MIN: usize = 2;
pub const AUTHOR_MAX: usize = 15;
pub const MIN_LENGTH_MESSAGE: &str = "Must be at least 2 characters";
pub const MAX_LENGTH_MESSAGE: &str = "Must be 15 characters or less";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Rating,
    Author,
    Comment,
}

/// Draft captured at submit time. The app hands this to the service;
/// the form itself never talks to the network.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentSubmission {
    pub campsite_id: CampsiteId,
    pub rating: u8,
    pub author: String,
    pub text: String,
}

/// Modal dialog for submitting a comment. Owns the draft between open
/// and close: every open starts from pristine defaults and every close,
/// submit or dismiss alike, throws the draft away.
///
/// Validation on the author field is advisory. Messages appear once the
/// field has been touched (received input or lost focus), but submission
/// goes through regardless unless strict mode is on.
pub struct CommentForm {
    state: DialogState,
    campsite_id: Option<CampsiteId>,
    focused: FormField,
    rating: u8,
    author: TextInput,
    body: TextInput,
    author_touched: bool,
    strict: bool,
}

impl CommentForm {
    pub fn new(strict: bool) -> Self {
        Self {
            state: DialogState::Closed,
            campsite_id: None,
            focused: FormField::Rating,
            rating: RATING_CHOICES[0],
            author: TextInput::new(),
            body: TextInput::new(),
            author_touched: false,
            strict,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Open the dialog for a campsite with a fresh draft.
    pub fn open(&mut self, campsite_id: CampsiteId) {
        self.reset_draft();
        self.campsite_id = Some(campsite_id);
        self.state = DialogState::Open;
    }

    /// Close without submitting. Idempotent: dismissing a closed dialog
    /// does nothing.
    pub fn dismiss(&mut self) {
        self.reset_draft();
        self.campsite_id = None;
        self.state = DialogState::Closed;
    }

    /// Capture the draft, close, and hand the submission to the caller.
    /// In strict mode an invalid author keeps the dialog open with its
    /// messages showing instead.
    pub fn submit(&mut self) -> Option<CommentSubmission> {
        if self.state != DialogState::Open {
            return None;
        }

        if self.strict && !self.author_valid() {
            self.author_touched = true;
            return None;
        }

        let campsite_id = self.campsite_id?;
        let submission = CommentSubmission {
            campsite_id,
            rating: self.rating,
            author: self.author.value().to_string(),
            text: self.body.value().to_string(),
        };

        self.dismiss();
        Some(submission)
    }

    fn reset_draft(&mut self) {
        self.focused = FormField::Rating;
        self.rating = RATING_CHOICES[0];
        self.author.clear();
        self.body.clear();
        self.author_touched = false;
    }

    fn author_valid(&self) -> bool {
        let value = self.author.value();
        min_length(AUTHOR_MIN)(value) && max_length(AUTHOR_MAX)(value)
    }

    /// Messages for the author field, empty until the field has been
    /// touched no matter how invalid the current value is.
    pub fn validation_messages(&self) -> Vec<&'static str> {
        if !self.author_touched {
            return Vec::new();
        }

        let value = self.author.value();
        let mut messages = Vec::new();
        if !min_length(AUTHOR_MIN)(value) {
            messages.push(MIN_LENGTH_MESSAGE);
        }
        if !max_length(AUTHOR_MAX)(value) {
            messages.push(MAX_LENGTH_MESSAGE);
        }
        messages
    }

    pub fn handle_event(&mut self, event: &AppEvent) -> Option<CommentSubmission> {
        match event {
            AppEvent::CloseModal => {
                self.dismiss();
                None
            }

            AppEvent::Submit => self.submit(),

            AppEvent::Enter => {
                if self.focused == FormField::Comment {
                    self.body.insert_newline();
                    None
                } else {
                    self.submit()
                }
            }

            AppEvent::Tab | AppEvent::Down => {
                self.focus_next();
                None
            }

            AppEvent::BackTab | AppEvent::Up => {
                self.focus_previous();
                None
            }

            AppEvent::Left => {
                match self.focused {
                    FormField::Rating => self.cycle_rating(-1),
                    FormField::Author => self.author.move_left(),
                    FormField::Comment => self.body.move_left(),
                }
                None
            }

            AppEvent::Right => {
                match self.focused {
                    FormField::Rating => self.cycle_rating(1),
                    FormField::Author => self.author.move_right(),
                    FormField::Comment => self.body.move_right(),
                }
                None
            }

            AppEvent::Character(c) => {
                match self.focused {
                    FormField::Rating => {
                        if let Some(digit) = c.to_digit(10) {
                            let digit = digit as u8;
                            if RATING_CHOICES.contains(&digit) {
                                self.rating = digit;
                            }
                        }
                    }
                    FormField::Author => {
                        self.author.insert_char(*c);
                        self.author_touched = true;
                    }
                    FormField::Comment => {
                        self.body.insert_char(*c);
                    }
                }
                None
            }

            AppEvent::Backspace => {
                match self.focused {
                    FormField::Rating => {}
                    FormField::Author => {
                        self.author.delete_char();
                        self.author_touched = true;
                    }
                    FormField::Comment => self.body.delete_char(),
                }
                None
            }

            AppEvent::Delete => {
                match self.focused {
                    FormField::Rating => {}
                    FormField::Author => {
                        self.author.delete_forward();
                        self.author_touched = true;
                    }
                    FormField::Comment => self.body.delete_forward(),
                }
                None
            }

            _ => None,
        }
    }

    fn focus_next(&mut self) {
        if self.focused == FormField::Author {
            self.author_touched = true;
        }
        self.focused = match self.focused {
            FormField::Rating => FormField::Author,
            FormField::Author => FormField::Comment,
            FormField::Comment => FormField::Rating,
        };
    }

    fn focus_previous(&mut self) {
        if self.focused == FormField::Author {
            self.author_touched = true;
        }
        self.focused = match self.focused {
            FormField::Rating => FormField::Comment,
            FormField::Author => FormField::Rating,
            FormField::Comment => FormField::Author,
        };
    }

    fn cycle_rating(&mut self, step: i8) {
        let current = RATING_CHOICES
            .iter()
            .position(|choice| *choice == self.rating)
            .unwrap_or(0) as i8;
        let len = RATING_CHOICES.len() as i8;
        let next = (current + step).rem_euclid(len);
        self.rating = RATING_CHOICES[next as usize];
    }

    pub fn render(&self, frame: &mut Frame) {
        if self.state != DialogState::Open {
            return;
        }

        let popup_area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Submit Comment")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Rating selector
                Constraint::Length(1), // Spacer
                Constraint::Length(3), // Author input
                Constraint::Length(2), // Validation messages
                Constraint::Min(4),    // Comment body
                Constraint::Length(1), // Key hints
            ])
            .margin(1)
            .split(inner);

        self.render_rating(frame, chunks[0]);

        self.author.render(
            frame,
            chunks[2],
            "Your Name",
            "2 to 15 characters",
            self.focused == FormField::Author,
        );

        let messages: Vec<Line> = self
            .validation_messages()
            .into_iter()
            .map(|message| Line::from(Span::styled(message, Style::default().fg(Color::Red))))
            .collect();
        frame.render_widget(Paragraph::new(messages), chunks[3]);

        self.render_body(frame, chunks[4]);

        let hint = match self.focused {
            FormField::Rating => "Tab: next field | 1-5 or Left/Right: set rating | Enter: submit | Esc: cancel",
            FormField::Author => "Tab: next field | Enter: submit | Esc: cancel",
            FormField::Comment => "Tab: next field | Enter: newline | Ctrl+S: submit | Esc: cancel",
        };
        let hint_paragraph = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint_paragraph, chunks[5]);
    }

    fn render_rating(&self, frame: &mut Frame, area: Rect) {
        let label_style = if self.focused == FormField::Rating {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut spans = vec![Span::styled("Rating: ", label_style)];
        for choice in RATING_CHOICES {
            if choice == self.rating {
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if self.focused == FormField::Rating {
                    style = style.bg(Color::Blue);
                }
                spans.push(Span::styled(format!("[{choice}]"), style));
            } else {
                spans.push(Span::raw(format!(" {choice} ")));
            }
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused == FormField::Comment {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title("Comment")
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(self.body.value().to_string())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
