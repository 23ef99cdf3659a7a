use color_eyre::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{
    event::{AppEvent, EventHandler},
    state::LoadState,
    views,
    widgets::{centered_rect, CommentForm, CommentSubmission},
};
use crate::application::{AppError, DirectoryService};
use crate::domain::{Campsite, Comment};
use crate::ports::RepositoryError;
use ratatui::{
    prelude::*,
    widgets::{
        Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Main, // Split layout: campsite list + detail
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusedPane {
    CampsiteList, // Left pane
    Detail,       // Right pane
}

pub struct App {
    service: Arc<DirectoryService>,

    // UI state
    mode: AppMode,
    focused_pane: FocusedPane,

    // Directory list
    directory: LoadState<Vec<Campsite>>,
    list_state: TableState,

    // Selected campsite detail. Comments are tracked separately so the
    // view can distinguish "not loaded" from "loaded and empty".
    detail: LoadState<Campsite>,
    comments: Option<Vec<Comment>>,
    detail_scroll_offset: u16,
    needs_detail_reload: bool,

    // Set by the spawned comment post on success; the main loop picks
    // it up on its next tick and refetches the comment list.
    comments_dirty: Arc<AtomicBool>,

    comment_form: CommentForm,
}

impl App {
    pub fn new(service: Arc<DirectoryService>, strict_validation: bool) -> Self {
        Self {
            service,
            mode: AppMode::Main,
            focused_pane: FocusedPane::CampsiteList,
            directory: LoadState::Idle,
            list_state: TableState::default(),
            detail: LoadState::Idle,
            comments: None,
            detail_scroll_offset: 0,
            needs_detail_reload: false,
            comments_dirty: Arc::new(AtomicBool::new(false)),
            comment_form: CommentForm::new(strict_validation),
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        self.load_directory(true).await;
        Ok(())
    }

    async fn load_directory(&mut self, use_cache: bool) {
        self.directory = LoadState::Loading;

        match self.service.list_campsites(use_cache).await {
            Ok(campsites) => {
                if campsites.is_empty() {
                    self.list_state.select(None);
                } else {
                    self.list_state.select(Some(0));
                    self.needs_detail_reload = true;
                }
                self.directory = LoadState::Loaded(campsites);
            }
            Err(e) => {
                self.directory = LoadState::Error(format!("Failed to load campsites: {e}"));
                self.list_state.select(None);
            }
        }
    }

    fn campsites(&self) -> &[Campsite] {
        self.directory.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    fn selected_campsite(&self) -> Option<&Campsite> {
        self.list_state
            .selected()
            .and_then(|i| self.campsites().get(i))
    }

    fn next_campsite(&mut self) {
        let len = self.campsites().len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        let next = if current >= len - 1 { 0 } else { current + 1 };
        self.list_state.select(Some(next));
        self.needs_detail_reload = true;
    }

    fn previous_campsite(&mut self) {
        let len = self.campsites().len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        let previous = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(previous));
        self.needs_detail_reload = true;
    }

    /// Auto-load detail for the selection when it changes.
    pub async fn auto_load_selected_campsite(&mut self) -> Result<()> {
        if !self.needs_detail_reload {
            return Ok(());
        }

        self.needs_detail_reload = false;

        if let Some(campsite) = self.selected_campsite() {
            let campsite_id = campsite.id;

            // Only reload if it's a different campsite
            let needs_loading = self
                .detail
                .loaded()
                .map(|current| current.id != campsite_id)
                .unwrap_or(true);

            if needs_loading {
                self.load_campsite_detail(campsite_id).await;
            }
        }

        Ok(())
    }

    async fn load_campsite_detail(&mut self, campsite_id: crate::domain::CampsiteId) {
        self.detail = LoadState::Loading;
        self.comments = None;
        self.detail_scroll_offset = 0;

        // Load the campsite and its comments in parallel
        let campsite_future = self.service.get_campsite(&campsite_id, true);
        let comments_future = self.service.get_comments(&campsite_id, true);

        let (campsite_result, comments_result) = tokio::join!(campsite_future, comments_future);

        match campsite_result {
            Ok(campsite) => self.detail = LoadState::Loaded(campsite),
            Err(e) => self.detail = LoadState::Error(Self::detail_error_message(&e)),
        }

        match comments_result {
            Ok(comments) => self.comments = Some(comments),
            Err(e) => {
                tracing::warn!("Failed to load comments for {campsite_id}: {e}");
                self.comments = None;
            }
        }
    }

    fn detail_error_message(error: &AppError) -> String {
        match error {
            AppError::Repository(RepositoryError::NotFound(message)) => message.clone(),
            other => format!("Failed to load campsite: {other}"),
        }
    }

    /// Pick up the refresh flag left behind by a finished comment post.
    pub async fn refresh_comments_if_dirty(&mut self) -> Result<()> {
        if !self.comments_dirty.swap(false, Ordering::SeqCst) {
            return Ok(());
        }

        if let Some(campsite) = self.detail.loaded() {
            let campsite_id = campsite.id;
            match self.service.get_comments(&campsite_id, true).await {
                Ok(comments) => self.comments = Some(comments),
                Err(e) => tracing::warn!("Failed to refresh comments for {campsite_id}: {e}"),
            }
        }

        Ok(())
    }

    /// Hand a captured submission to the service without holding up the
    /// UI. The dialog is already closed by the time this runs; success
    /// or failure only ever shows up in the log and, on success, as a
    /// refreshed comment list.
    fn dispatch_submission(&self, submission: CommentSubmission) {
        let service = self.service.clone();
        let dirty = self.comments_dirty.clone();

        tokio::spawn(async move {
            match service
                .post_comment(
                    &submission.campsite_id,
                    submission.rating,
                    &submission.author,
                    &submission.text,
                )
                .await
            {
                Ok(comment) => {
                    tracing::info!(
                        "Posted comment {} on campsite {}",
                        comment.id,
                        comment.campsite_id
                    );
                    dirty.store(true, Ordering::SeqCst);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to post comment on campsite {}: {e}",
                        submission.campsite_id
                    );
                }
            }
        });
    }

    fn open_comment_form(&mut self) {
        // The trigger only exists when a comment collection is present
        if self.comments.is_none() {
            return;
        }
        if let Some(campsite) = self.detail.loaded() {
            self.comment_form.open(campsite.id);
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent) -> Result<bool> {
        if matches!(event, AppEvent::Quit) {
            return Ok(true);
        }

        // An open dialog captures everything else
        if self.comment_form.is_open() {
            if let Some(submission) = self.comment_form.handle_event(&event) {
                self.dispatch_submission(submission);
            }
            return Ok(false);
        }

        if self.mode == AppMode::Help {
            if matches!(
                event,
                AppEvent::CloseModal
                    | AppEvent::Enter
                    | AppEvent::Character('q')
                    | AppEvent::Character('?')
            ) {
                self.mode = AppMode::Main;
            }
            return Ok(false);
        }

        match event {
            AppEvent::CloseModal => {
                if self.focused_pane == FocusedPane::Detail {
                    self.focused_pane = FocusedPane::CampsiteList;
                }
            }

            AppEvent::Tab | AppEvent::BackTab => {
                self.focused_pane = match self.focused_pane {
                    FocusedPane::CampsiteList => FocusedPane::Detail,
                    FocusedPane::Detail => FocusedPane::CampsiteList,
                };
            }

            AppEvent::Enter => {
                if self.focused_pane == FocusedPane::CampsiteList
                    && self.selected_campsite().is_some()
                {
                    self.focused_pane = FocusedPane::Detail;
                }
            }

            AppEvent::Down => self.handle_down(),
            AppEvent::Up => self.handle_up(),

            AppEvent::PageDown => {
                if self.focused_pane == FocusedPane::Detail {
                    self.detail_scroll_offset = self.detail_scroll_offset.saturating_add(10);
                }
            }

            AppEvent::PageUp => {
                if self.focused_pane == FocusedPane::Detail {
                    self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(10);
                }
            }

            AppEvent::Character(c) => match c {
                'q' => return Ok(true),
                '?' => self.mode = AppMode::Help,
                'j' => self.handle_down(),
                'k' => self.handle_up(),
                'g' => {
                    if self.focused_pane == FocusedPane::Detail {
                        self.detail_scroll_offset = 0;
                    } else if !self.campsites().is_empty() {
                        self.list_state.select(Some(0));
                        self.needs_detail_reload = true;
                    }
                }
                'G' => {
                    if self.focused_pane == FocusedPane::Detail {
                        self.detail_scroll_offset = u16::MAX;
                    } else {
                        let len = self.campsites().len();
                        if len > 0 {
                            self.list_state.select(Some(len - 1));
                            self.needs_detail_reload = true;
                        }
                    }
                }
                'r' => {
                    self.service.refresh_all_caches().await;
                    self.load_directory(false).await;
                    self.detail = LoadState::Idle;
                    self.comments = None;
                }
                'c' => self.open_comment_form(),
                _ => {}
            },

            _ => {}
        }

        Ok(false)
    }

    fn handle_down(&mut self) {
        match self.focused_pane {
            FocusedPane::CampsiteList => self.next_campsite(),
            FocusedPane::Detail => {
                self.detail_scroll_offset = self.detail_scroll_offset.saturating_add(1);
            }
        }
    }

    fn handle_up(&mut self) {
        match self.focused_pane {
            FocusedPane::CampsiteList => self.previous_campsite(),
            FocusedPane::Detail => {
                self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Main content (split left/right)
                Constraint::Length(1), // Status bar
            ])
            .split(frame.area());

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40), // Campsite list (left pane)
                Constraint::Percentage(60), // Detail (right pane)
            ])
            .split(main_chunks[0]);

        self.render_campsite_list(frame, content_chunks[0]);
        self.render_detail_pane(frame, content_chunks[1]);
        self.render_status_bar(frame, main_chunks[1]);

        if self.mode == AppMode::Help {
            self.render_help(frame);
        }

        // The dialog paints over everything else
        self.comment_form.render(frame);
    }

    fn render_campsite_list(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused_pane == FocusedPane::CampsiteList {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let title = match &self.directory {
            LoadState::Loaded(campsites) => format!("Campsites ({})", campsites.len()),
            _ => "Campsites".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.directory {
            LoadState::Idle => {}

            LoadState::Loading => {
                let paragraph =
                    Paragraph::new("Loading campsites...").style(Style::default().fg(Color::Gray));
                frame.render_widget(paragraph, inner);
            }

            LoadState::Error(message) => {
                let paragraph = Paragraph::new(message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: false });
                frame.render_widget(paragraph, inner);
            }

            LoadState::Loaded(campsites) if campsites.is_empty() => {
                let paragraph =
                    Paragraph::new("No campsites found").style(Style::default().fg(Color::Gray));
                frame.render_widget(paragraph, inner);
            }

            LoadState::Loaded(campsites) => {
                let header_cells = ["Name", "Elevation"]
                    .iter()
                    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
                let header = Row::new(header_cells).height(1);

                let rows: Vec<Row> = campsites
                    .iter()
                    .map(|campsite| {
                        let icon_color = if campsite.featured {
                            Color::Yellow
                        } else {
                            Color::Green
                        };
                        let icon_span =
                            Span::styled(campsite.type_icon(), Style::default().fg(icon_color));
                        let name_cell = vec![
                            icon_span,
                            Span::raw(" "),
                            Span::raw(campsite.name.clone()),
                        ];

                        Row::new([
                            Cell::from(Line::from(name_cell)),
                            Cell::from(campsite.elevation_display())
                                .style(Style::default().fg(Color::DarkGray)),
                        ])
                    })
                    .collect();

                let table = Table::new(
                    rows,
                    [Constraint::Percentage(70), Constraint::Percentage(30)],
                )
                .header(header)
                .highlight_style(Style::default().bg(Color::Blue))
                .highlight_symbol(">> ");

                frame.render_stateful_widget(table, inner, &mut self.list_state);
            }
        }
    }

    fn render_detail_pane(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused_pane == FocusedPane::Detail {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .title("Campsite")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = views::detail::detail_lines(&self.detail, self.comments.as_deref());
        if lines.is_empty() {
            return;
        }

        let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
        self.detail_scroll_offset = self.detail_scroll_offset.min(max_scroll);

        let paragraph = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .scroll((self.detail_scroll_offset, 0));
        frame.render_widget(paragraph, inner);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let help_text = if self.comment_form.is_open() {
            "Tab: next field | Enter: submit | Esc: cancel"
        } else {
            match self.focused_pane {
                FocusedPane::CampsiteList => {
                    "j/k: navigate | Enter: view campsite | Tab: switch panes | c: comment | r: refresh | q: quit | ?: help"
                }
                FocusedPane::Detail => {
                    "j/k: scroll | c: comment | Tab: switch panes | Esc: back | q: quit | ?: help"
                }
            }
        };

        let paragraph = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame) {
        let popup_area = centered_rect(60, 70, frame.area());

        frame.render_widget(ratatui::widgets::Clear, popup_area);

        let help_text = vec![
            "Campsite Directory Help",
            "",
            "Navigation:",
            "  j/k or Up/Down - Move in campsite list / scroll detail",
            "  g/G            - First/last campsite, or top/bottom of detail",
            "  Tab            - Switch between list and detail",
            "  Enter          - Focus the detail pane",
            "  Esc            - Back to the campsite list",
            "",
            "Comments:",
            "  c              - Open the comment dialog for this campsite",
            "  Tab            - Next form field",
            "  1-5, Left/Right - Pick a rating",
            "  Enter          - Submit (newline inside the comment body)",
            "  Ctrl+S         - Submit from anywhere in the form",
            "  Esc            - Cancel without submitting",
            "",
            "General:",
            "  r              - Refresh from the directory service",
            "  ?              - Show this help",
            "  q              - Quit",
            "  Ctrl+C         - Force quit",
            "",
            "Press Esc or q to close this help",
        ]
        .join("\n");

        let paragraph = Paragraph::new(help_text)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, popup_area);
    }
}

pub async fn run_tui(mut app: App) -> Result<()> {
    // color-eyre is already initialized in main.rs

    // Set up terminal
    crossterm::terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize app
    app.initialize().await?;

    // Event handling
    let mut event_handler = EventHandler::new();

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(event) = event_handler.next_event().await? {
            let should_quit = app.handle_event(event).await?;
            if should_quit {
                break;
            }
        }

        // Tick work: follow the selection and any finished comment post
        app.auto_load_selected_campsite().await?;
        app.refresh_comments_if_dirty().await?;

        if event_handler.should_quit() {
            break;
        }
    }

    // Cleanup
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::MokaCacheAdapter;
    use crate::domain::{CampsiteId, CommentId};
    use crate::ports::MockDirectoryRepository;
    use std::time::Duration;

    fn sample_campsite(id: i64) -> Campsite {
        Campsite {
            id: CampsiteId(id),
            name: format!("Campsite {id}"),
            image: format!("campsites/site-{id}.jpg"),
            elevation: Some(1000 + id),
            featured: false,
            description: "A quiet spot.".to_string(),
        }
    }

    fn sample_comment(id: i64, campsite_id: i64) -> Comment {
        Comment {
            id: CommentId(id),
            campsite_id: CampsiteId(campsite_id),
            rating: 3,
            text: "Nice spot".to_string(),
            author: "Ana".to_string(),
            date: "2020-10-10".to_string(),
        }
    }

    fn app_with(repository: MockDirectoryRepository, strict: bool) -> App {
        let service = Arc::new(DirectoryService::new(
            Arc::new(repository),
            Arc::new(MokaCacheAdapter::with_default_settings()),
            Arc::new(MokaCacheAdapter::with_default_settings()),
            300,
        ));
        App::new(service, strict)
    }

    #[tokio::test]
    async fn initialize_loads_the_directory_and_selects_the_first_site() {
        let mut repository = MockDirectoryRepository::new();
        repository
            .expect_list_campsites()
            .times(1)
            .returning(|| Ok(vec![sample_campsite(0), sample_campsite(1)]));

        let mut app = app_with(repository, false);
        app.initialize().await.unwrap();

        assert_eq!(app.campsites().len(), 2);
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.needs_detail_reload);
    }

    #[tokio::test]
    async fn directory_load_failure_lands_in_the_error_state() {
        let mut repository = MockDirectoryRepository::new();
        repository
            .expect_list_campsites()
            .times(1)
            .returning(|| Err(RepositoryError::Network("connection refused".to_string())));

        let mut app = app_with(repository, false);
        app.initialize().await.unwrap();

        match &app.directory {
            LoadState::Error(message) => assert!(message.contains("connection refused")),
            other => panic!("expected error state, got {other:?}"),
        }
        assert_eq!(app.list_state.selected(), None);
    }

    #[tokio::test]
    async fn selection_wraps_around_both_ends() {
        let mut repository = MockDirectoryRepository::new();
        repository
            .expect_list_campsites()
            .returning(|| Ok(vec![sample_campsite(0), sample_campsite(1), sample_campsite(2)]));

        let mut app = app_with(repository, false);
        app.initialize().await.unwrap();

        app.previous_campsite();
        assert_eq!(app.list_state.selected(), Some(2));
        app.next_campsite();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn auto_load_populates_detail_and_comments_for_the_selection() {
        let mut repository = MockDirectoryRepository::new();
        repository
            .expect_list_campsites()
            .returning(|| Ok(vec![sample_campsite(0)]));
        // The directory load seeds the campsite cache, so only the
        // comment fetch goes back out to the repository.
        repository.expect_get_campsite().never();
        repository
            .expect_get_comments()
            .times(1)
            .returning(|id| Ok(vec![sample_comment(1, id.0)]));

        let mut app = app_with(repository, false);
        app.initialize().await.unwrap();
        app.auto_load_selected_campsite().await.unwrap();

        assert!(matches!(app.detail, LoadState::Loaded(_)));
        assert_eq!(app.comments.as_ref().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn missing_campsite_shows_the_not_found_message_verbatim() {
        let mut repository = MockDirectoryRepository::new();
        repository.expect_get_campsite().returning(|_| {
            Err(RepositoryError::NotFound("Campsite not found".to_string()))
        });
        repository
            .expect_get_comments()
            .returning(|_| Err(RepositoryError::NotFound("Resource not found".to_string())));

        let mut app = app_with(repository, false);
        // Selection set up by hand so the detail fetch actually goes out
        app.directory = LoadState::Loaded(vec![sample_campsite(0)]);
        app.list_state.select(Some(0));
        app.needs_detail_reload = true;
        app.auto_load_selected_campsite().await.unwrap();

        assert_eq!(
            app.detail,
            LoadState::Error("Campsite not found".to_string())
        );
        // Comments failed too, so the collection stays absent
        assert!(app.comments.is_none());
    }

    #[tokio::test]
    async fn comment_trigger_needs_a_present_collection() {
        let repository = MockDirectoryRepository::new();
        let mut app = app_with(repository, false);

        app.detail = LoadState::Loaded(sample_campsite(0));
        app.comments = None;
        app.handle_event(AppEvent::Character('c')).await.unwrap();
        assert!(!app.comment_form.is_open());

        // An empty collection is present, so the trigger works
        app.comments = Some(Vec::new());
        app.handle_event(AppEvent::Character('c')).await.unwrap();
        assert!(app.comment_form.is_open());
    }

    #[tokio::test]
    async fn submitting_posts_exactly_once_and_refreshes_comments() {
        let mut repository = MockDirectoryRepository::new();
        repository
            .expect_post_comment()
            .withf(|id, rating, author, text| {
                id.0 == 5 && *rating == 4 && author == "Jo" && text == "Great"
            })
            .times(1)
            .returning(|id, rating, author, text| {
                Ok(Comment {
                    id: CommentId(9),
                    campsite_id: *id,
                    rating,
                    text: text.to_string(),
                    author: author.to_string(),
                    date: "2020-10-10".to_string(),
                })
            });
        repository
            .expect_get_comments()
            .times(1)
            .returning(|id| Ok(vec![sample_comment(1, id.0), sample_comment(9, id.0)]));

        let mut app = app_with(repository, false);
        app.detail = LoadState::Loaded(sample_campsite(5));
        app.comments = Some(vec![sample_comment(1, 5)]);

        app.handle_event(AppEvent::Character('c')).await.unwrap();
        app.handle_event(AppEvent::Character('4')).await.unwrap();
        app.handle_event(AppEvent::Tab).await.unwrap();
        for c in "Jo".chars() {
            app.handle_event(AppEvent::Character(c)).await.unwrap();
        }
        app.handle_event(AppEvent::Tab).await.unwrap();
        for c in "Great".chars() {
            app.handle_event(AppEvent::Character(c)).await.unwrap();
        }

        app.handle_event(AppEvent::Submit).await.unwrap();
        assert!(!app.comment_form.is_open());

        // A second submit with the dialog closed is a no-op
        app.handle_event(AppEvent::Submit).await.unwrap();

        // Let the spawned post run, then pick up the refresh flag
        tokio::time::sleep(Duration::from_millis(20)).await;
        app.refresh_comments_if_dirty().await.unwrap();
        assert_eq!(app.comments.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn cancelling_the_dialog_never_posts() {
        let mut repository = MockDirectoryRepository::new();
        repository.expect_post_comment().times(0);

        let mut app = app_with(repository, false);
        app.detail = LoadState::Loaded(sample_campsite(0));
        app.comments = Some(Vec::new());

        app.handle_event(AppEvent::Character('c')).await.unwrap();
        app.handle_event(AppEvent::Tab).await.unwrap();
        for c in "Ana".chars() {
            app.handle_event(AppEvent::Character(c)).await.unwrap();
        }
        app.handle_event(AppEvent::CloseModal).await.unwrap();
        assert!(!app.comment_form.is_open());

        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn open_dialog_captures_keys_that_are_triggers_elsewhere() {
        let repository = MockDirectoryRepository::new();
        let mut app = app_with(repository, false);
        app.detail = LoadState::Loaded(sample_campsite(0));
        app.comments = Some(Vec::new());

        app.handle_event(AppEvent::Character('c')).await.unwrap();
        assert!(app.comment_form.is_open());

        // 'q' quits the app when no dialog is up; here it must type
        let quit = app.handle_event(AppEvent::Character('q')).await.unwrap();
        assert!(!quit);
        assert!(app.comment_form.is_open());

        // '?' opens help when no dialog is up; here it must type
        app.handle_event(AppEvent::Character('?')).await.unwrap();
        assert_eq!(app.mode, AppMode::Main);
    }

    #[tokio::test]
    async fn refresh_reloads_from_the_repository() {
        let mut repository = MockDirectoryRepository::new();
        repository
            .expect_list_campsites()
            .times(2)
            .returning(|| Ok(vec![sample_campsite(0)]));

        let mut app = app_with(repository, false);
        app.initialize().await.unwrap();
        app.handle_event(AppEvent::Character('r')).await.unwrap();

        assert!(matches!(app.directory, LoadState::Loaded(_)));
        assert_eq!(app.detail, LoadState::Idle);
        assert!(app.comments.is_none());
    }
}
