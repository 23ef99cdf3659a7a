use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Key events translated into application terms. Printable characters
/// always arrive as `Character`; what they mean depends on whether the
/// comment dialog is capturing input, and only the app knows that.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Global
    Quit,
    CloseModal,
    Submit,

    // Navigation
    Tab,
    BackTab,
    Enter,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,

    // Input handling
    Character(char),
    Backspace,
    Delete,
}

pub struct EventHandler {
    should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Poll for the next event. Returns None when the poll window
    /// elapses without input so the main loop can run its tick work.
    pub async fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) => Ok(self.handle_key_event(key_event)),
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Option<AppEvent> {
        let event = match key_event {
            // Global quit with Ctrl+C
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => {
                self.should_quit = true;
                AppEvent::Quit
            }

            // Submit shortcut, works from any form field
            KeyEvent {
                code: KeyCode::Char('s'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => AppEvent::Submit,

            KeyEvent {
                code: KeyCode::Esc, ..
            } => AppEvent::CloseModal,

            KeyEvent {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE,
                ..
            } => AppEvent::Tab,

            KeyEvent {
                code: KeyCode::BackTab,
                ..
            } => AppEvent::BackTab,

            KeyEvent {
                code: KeyCode::Enter,
                ..
            } => AppEvent::Enter,

            KeyEvent {
                code: KeyCode::Up, ..
            } => AppEvent::Up,

            KeyEvent {
                code: KeyCode::Down,
                ..
            } => AppEvent::Down,

            KeyEvent {
                code: KeyCode::Left,
                ..
            } => AppEvent::Left,

            KeyEvent {
                code: KeyCode::Right,
                ..
            } => AppEvent::Right,

            KeyEvent {
                code: KeyCode::PageUp,
                ..
            } => AppEvent::PageUp,

            KeyEvent {
                code: KeyCode::PageDown,
                ..
            } => AppEvent::PageDown,

            KeyEvent {
                code: KeyCode::Backspace,
                ..
            } => AppEvent::Backspace,

            KeyEvent {
                code: KeyCode::Delete,
                ..
            } => AppEvent::Delete,

            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::NONE,
                ..
            } => AppEvent::Character(c),

            KeyEvent {
                code: KeyCode::Char(c),
                modifiers: KeyModifiers::SHIFT,
                ..
            } => AppEvent::Character(c),

            _ => return None,
        };

        Some(event)
    }
}
