//! Main application state and rendering

use crate::config::AppConfig;
use crate::data::{Character, PlayerId, Side};
use crate::game::{checks, Briefing, EliminationNotice, GameSession, Phase};
use crate::tui::widgets::{DramaticBox, ProgressBar, TallyLine};
use crate::tui::{centered_rect, create_content_layout, create_main_layout, styled_block, Theme};
use crate::tui::{HELP_TEXT, LOGO, RULES, SMALL_LOGO};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use tracing::debug;

/// Application state
pub struct App {
    pub session: GameSession,
    pub config: AppConfig,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub list_state: ListState,
    pub input_buffer: String,
    pub status: Option<StatusLine>,
    /// Private card currently on screen.
    pub open_card: Option<OpenCard>,
    /// Elimination being announced; the phase advances when it expires.
    pub pending_advance: Option<PendingAdvance>,
}

/// Current screen being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Players,
    Characters,
    Reveal,
    Playing,
    GameOver,
}

/// One line of feedback under the main panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenCard {
    pub briefing: Briefing,
    pub opened_at: Instant,
}

#[derive(Debug, Clone)]
pub struct PendingAdvance {
    pub notice: EliminationNotice,
    pub due: Instant,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let session = match config.seed {
            Some(seed) => GameSession::with_seed(seed),
            None => GameSession::new(),
        };

        Self {
            session,
            config,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Home,
            list_state: ListState::default(),
            input_buffer: String::new(),
            status: None,
            open_card: None,
            pending_advance: None,
        }
    }

    /// Poll the terminal for one key and apply it
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(self.running)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.running = false;
            return;
        }

        // The announced elimination owns the screen until the phase moves on
        if self.pending_advance.is_some() {
            return;
        }

        if self.open_card.is_some() {
            self.open_card = None;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        let typing = self.current_screen == Screen::Players;
        if key.code == KeyCode::F(1) || (!typing && key.code == KeyCode::Char('?')) {
            self.show_help = true;
            return;
        }

        match self.current_screen {
            Screen::Home => self.handle_home(key.code),
            Screen::Players => self.handle_players(key.code),
            Screen::Characters => self.handle_characters(key.code),
            Screen::Reveal => self.handle_reveal(key.code),
            Screen::Playing => self.handle_playing(key.code),
            Screen::GameOver => self.handle_game_over(key.code),
        }
    }

    /// Run timed behaviour against the wall clock
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Run timed behaviour as of `now`
    pub fn tick_at(&mut self, now: Instant) {
        if let Some(card) = &self.open_card {
            if now.duration_since(card.opened_at) >= self.config.reveal_timeout {
                self.open_card = None;
            }
        }

        let due = match &self.pending_advance {
            Some(pending) => now >= pending.due,
            None => false,
        };
        if due {
            self.pending_advance = None;
            self.session.advance_phase();
            if self.session.phase() == Phase::GameOver {
                self.go_to(Screen::GameOver);
            } else {
                self.select_first(self.alive_ids().len());
            }
        }
    }

    fn go_to(&mut self, screen: Screen) {
        debug!(from = ?self.current_screen, to = ?screen, "screen change");
        self.current_screen = screen;
        self.status = None;
        let len = match screen {
            Screen::Players | Screen::Reveal => self.session.players().len(),
            Screen::Characters => Character::ALL.len(),
            Screen::Playing => self.alive_ids().len(),
            Screen::Home | Screen::GameOver => 0,
        };
        self.select_first(len);
    }

    fn refuse(&mut self, err: crate::GameError) {
        debug!(screen = ?self.current_screen, %err, "step refused");
        self.status = Some(StatusLine::error(err.to_string()));
    }

    // ------------------------------------------------------------------
    // Selection helpers
    // ------------------------------------------------------------------

    fn select_first(&mut self, len: usize) {
        self.list_state.select(if len == 0 { None } else { Some(0) });
    }

    fn clamp_selection(&mut self, len: usize) {
        match (self.list_state.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (Some(i), _) if i >= len => self.list_state.select(Some(len - 1)),
            (None, _) => self.list_state.select(Some(0)),
            _ => {}
        }
    }

    fn navigate(&mut self, len: usize, down: bool) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if down {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.list_state.select(Some(next));
    }

    fn selected_player(&self, ids: &[PlayerId]) -> Option<PlayerId> {
        self.list_state.selected().and_then(|i| ids.get(i).copied())
    }

    fn roster_ids(&self) -> Vec<PlayerId> {
        self.session.players().iter().map(|p| p.id).collect()
    }

    fn alive_ids(&self) -> Vec<PlayerId> {
        self.session.alive_players().map(|p| p.id).collect()
    }

    fn selected_character(&self) -> Option<Character> {
        self.list_state
            .selected()
            .and_then(|i| Character::ALL.get(i).copied())
    }

    // ------------------------------------------------------------------
    // Per-screen key handling
    // ------------------------------------------------------------------

    fn handle_home(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.session.reset_full();
                self.input_buffer.clear();
                self.go_to(Screen::Players);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            _ => {}
        }
    }

    fn handle_players(&mut self, code: KeyCode) {
        let len = self.session.players().len();
        match code {
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => match checks::player_name(&self.input_buffer) {
                Ok(name) => {
                    self.session.add_player(name.clone());
                    self.input_buffer.clear();
                    self.list_state.select(Some(len));
                    self.status = Some(StatusLine::info(format!("{} joined the table", name)));
                }
                Err(err) => self.refuse(err),
            },
            KeyCode::Delete => {
                let ids = self.roster_ids();
                if let Some(id) = self.selected_player(&ids) {
                    if let Some(removed) = self.session.remove_player(id) {
                        self.status = Some(StatusLine::info(format!("{} left the table", removed.name)));
                    }
                    self.clamp_selection(ids.len() - 1);
                }
            }
            KeyCode::Up => self.navigate(len, false),
            KeyCode::Down => self.navigate(len, true),
            KeyCode::Tab => {
                match checks::roster_ready(self.session.snapshot(), self.config.min_players) {
                    Ok(()) => self.go_to(Screen::Characters),
                    Err(err) => self.refuse(err),
                }
            }
            KeyCode::Esc => self.go_to(Screen::Home),
            _ => {}
        }
    }

    fn handle_characters(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.navigate(Character::ALL.len(), false),
            KeyCode::Down => self.navigate(Character::ALL.len(), true),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.bump_selection(1),
            KeyCode::Left | KeyCode::Char('-') => self.bump_selection(-1),
            KeyCode::Enter => match checks::selection_ready(self.session.snapshot()) {
                Ok(()) => {
                    self.session.assign_roles();
                    self.open_card = None;
                    self.go_to(Screen::Reveal);
                }
                Err(err) => self.refuse(err),
            },
            KeyCode::Esc => self.go_to(Screen::Players),
            _ => {}
        }
    }

    fn bump_selection(&mut self, delta: i64) {
        if let Some(character) = self.selected_character() {
            let current = i64::from(self.session.selection().get(character));
            self.session.update_selection(character, current + delta);
            self.status = None;
        }
    }

    fn handle_reveal(&mut self, code: KeyCode) {
        let ids = self.roster_ids();
        match code {
            KeyCode::Up => self.navigate(ids.len(), false),
            KeyCode::Down => self.navigate(ids.len(), true),
            KeyCode::Enter => {
                let Some(id) = self.selected_player(&ids) else {
                    return;
                };
                let already_seen = self.session.player(id).is_some_and(|p| p.has_revealed);
                if already_seen {
                    self.status = Some(StatusLine::error("That card has already been seen"));
                    return;
                }
                self.session.reveal_character(id);
                if let Some(briefing) = self.session.briefing(id) {
                    self.open_card = Some(OpenCard {
                        briefing,
                        opened_at: Instant::now(),
                    });
                }
                self.status = None;
            }
            KeyCode::Char('g') => match checks::reveals_complete(self.session.snapshot()) {
                Ok(()) => {
                    self.session.start_game();
                    self.go_to(Screen::Playing);
                }
                Err(err) => self.refuse(err),
            },
            KeyCode::Esc => self.go_to(Screen::Characters),
            _ => {}
        }
    }

    fn handle_playing(&mut self, code: KeyCode) {
        let ids = self.alive_ids();
        match code {
            KeyCode::Up => self.navigate(ids.len(), false),
            KeyCode::Down => self.navigate(ids.len(), true),
            KeyCode::Enter => {
                let Some(id) = self.selected_player(&ids) else {
                    return;
                };
                if let Some(elimination) = self.session.eliminate(id) {
                    self.pending_advance = Some(PendingAdvance {
                        notice: EliminationNotice::for_elimination(&elimination),
                        due: Instant::now() + self.config.auto_advance,
                    });
                }
            }
            KeyCode::Char('n') => match checks::in_phase(self.session.snapshot(), Phase::Night) {
                Ok(()) => {
                    self.session.advance_phase();
                    if self.session.phase() == Phase::GameOver {
                        self.go_to(Screen::GameOver);
                    } else {
                        self.select_first(self.alive_ids().len());
                    }
                }
                Err(err) => self.refuse(err),
            },
            _ => {}
        }
    }

    fn handle_game_over(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('p') => {
                self.session.reset_keep_roster();
                self.go_to(Screen::Characters);
            }
            KeyCode::Char('n') => {
                self.session.reset_full();
                self.go_to(Screen::Home);
            }
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Draw the current screen
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);
        let chunks = create_main_layout(area);

        self.render_header(frame, chunks[0]);
        match self.current_screen {
            Screen::Home => self.render_home(frame, chunks[1]),
            Screen::Players => self.render_players(frame, chunks[1]),
            Screen::Characters => self.render_characters(frame, chunks[1]),
            Screen::Reveal => self.render_reveal(frame, chunks[1]),
            Screen::Playing => self.render_playing(frame, chunks[1]),
            Screen::GameOver => self.render_game_over(frame, chunks[1]),
        }
        self.render_status_bar(frame, chunks[2]);

        if let Some(card) = &self.open_card {
            let role = Some(card.briefing.character.role());
            let overlay = centered_rect(56, 12, area);
            frame.render_widget(
                DramaticBox::new(&format!("{}'s card", card.briefing.name))
                    .content(card.briefing.lines())
                    .border_color(self.theme.role_color(role))
                    .text_color(self.theme.fg),
                overlay,
            );
        }

        if let Some(pending) = &self.pending_advance {
            let overlay = centered_rect(48, 6, area);
            frame.render_widget(
                DramaticBox::new("Eliminated!")
                    .content(vec![
                        pending.notice.message(),
                        String::new(),
                        "Proceeding to next phase...".to_string(),
                    ])
                    .border_color(self.theme.alert)
                    .text_color(self.theme.fg),
                overlay,
            );
        }

        if self.show_help {
            let lines: Vec<Line> = HELP_TEXT.lines().map(Line::from).collect();
            let overlay = centered_rect(51, lines.len() as u16 + 1, area);
            frame.render_widget(Clear, overlay);
            frame.render_widget(
                Paragraph::new(lines).style(Style::default().fg(self.theme.accent)),
                overlay,
            );
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = match self.current_screen {
            Screen::Home => "A Game of Deception".to_string(),
            Screen::Players => "Add Players".to_string(),
            Screen::Characters => "Choose Characters".to_string(),
            Screen::Reveal => "Character Reveal".to_string(),
            Screen::Playing if self.session.is_day() => format!("☀ Day {}", self.session.round()),
            Screen::Playing => format!("🌙 Night {}", self.session.round()),
            Screen::GameOver => "Game Over".to_string(),
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                SMALL_LOGO,
                Style::default().fg(self.theme.alert).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(self.theme.border)),
            Span::styled(title, Style::default().fg(self.theme.fg)),
        ]))
        .block(styled_block("", &self.theme));
        frame.render_widget(header, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status {
            Some(status) => {
                let color = if status.is_error {
                    self.theme.warning
                } else {
                    self.theme.success
                };
                Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
            }
            None => Line::from(Span::styled(
                self.key_hints(),
                Style::default().fg(self.theme.muted),
            )),
        };
        frame.render_widget(
            Paragraph::new(line).block(styled_block("Status", &self.theme)),
            area,
        );
    }

    fn key_hints(&self) -> String {
        match self.current_screen {
            Screen::Home => "Enter new game │ ? help │ q quit".to_string(),
            Screen::Players => "type a name + Enter │ Del remove │ Tab continue │ Esc back".to_string(),
            Screen::Characters => "↑/↓ choose │ ←/→ count │ Enter deal │ Esc back".to_string(),
            Screen::Reveal => "Enter see your card │ g start the game │ Esc back".to_string(),
            Screen::Playing if self.session.is_day() => "↑/↓ choose │ Enter vote out".to_string(),
            Screen::Playing => "↑/↓ choose │ Enter eliminate target │ n end the night".to_string(),
            Screen::GameOver => "p play again, same players │ n new game │ q quit".to_string(),
        }
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = LOGO
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(self.theme.alert))))
            .collect();
        lines.push(Line::from(Span::styled(
            "Civilians must root out the hidden killers, or be eliminated themselves.",
            Style::default().fg(self.theme.fg).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "How to play",
            Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
        )));
        for rule in RULES {
            lines.push(Line::from(format!("  • {}", rule)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to start a new game",
            Style::default().fg(self.theme.success).add_modifier(Modifier::BOLD),
        )));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: false })
                .style(Style::default().fg(self.theme.fg)),
            area,
        );
    }

    fn render_players(&mut self, frame: &mut Frame, area: Rect) {
        let columns = create_content_layout(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(columns[0]);

        let input = Paragraph::new(Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent)),
            Span::styled(self.input_buffer.clone(), Style::default().fg(self.theme.fg)),
            Span::styled("█", Style::default().fg(self.theme.muted)),
        ]))
        .block(styled_block("Player name", &self.theme));
        frame.render_widget(input, left[0]);

        let items: Vec<ListItem> = self
            .session
            .players()
            .iter()
            .enumerate()
            .map(|(i, p)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(self.theme.accent)),
                    Span::styled(p.name.clone(), Style::default().fg(self.theme.fg)),
                ]))
            })
            .collect();
        let list = if items.is_empty() {
            List::new(vec![ListItem::new(Span::styled(
                "No players yet. Add players to continue.",
                Style::default().fg(self.theme.muted),
            ))])
        } else {
            List::new(items)
        };
        frame.render_stateful_widget(
            self.highlighted(list).block(styled_block("Table", &self.theme)),
            left[1],
            &mut self.list_state,
        );

        let count = self.session.players().len();
        let ready = count >= self.config.min_players;
        let side = Paragraph::new(vec![
            Line::from(format!("Players added: {}", count)),
            Line::from(""),
            Line::from(Span::styled(
                if ready {
                    "✓ Enough players".to_string()
                } else {
                    format!("Need at least {}", self.config.min_players)
                },
                Style::default().fg(if ready { self.theme.success } else { self.theme.warning }),
            )),
        ])
        .block(styled_block("Roster", &self.theme));
        frame.render_widget(side, columns[1]);
    }

    fn render_characters(&mut self, frame: &mut Frame, area: Rect) {
        let columns = create_content_layout(area);
        let selection = self.session.selection();

        let items: Vec<ListItem> = selection
            .iter()
            .map(|(character, count)| {
                let color = self.theme.role_color(Some(character.role()));
                ListItem::new(vec![
                    Line::from(vec![
                        Span::raw(format!("{} ", character.icon())),
                        Span::styled(
                            format!("{:<14}", character.name()),
                            Style::default().fg(color).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("◀ {:>2} ▶", count), Style::default().fg(self.theme.fg)),
                    ]),
                    Line::from(Span::styled(
                        format!("   {} · {}", character.local_name(), character.description()),
                        Style::default().fg(self.theme.muted),
                    )),
                ])
            })
            .collect();
        frame.render_stateful_widget(
            self.highlighted(List::new(items)).block(styled_block("Characters", &self.theme)),
            columns[0],
            &mut self.list_state,
        );

        let total = self.session.selection_total();
        let players = self.session.players().len();
        let matched = total == players;
        let side = Paragraph::new(vec![
            Line::from(format!("Selected: {} / {}", total, players)),
            Line::from(""),
            Line::from(Span::styled(
                if matched { "✓ Perfect!" } else { "Counts must match the players" },
                Style::default().fg(if matched { self.theme.success } else { self.theme.warning }),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(styled_block("Deal", &self.theme));
        frame.render_widget(side, columns[1]);
    }

    fn render_reveal(&mut self, frame: &mut Frame, area: Rect) {
        let columns = create_content_layout(area);

        let items: Vec<ListItem> = self
            .session
            .players()
            .iter()
            .map(|p| {
                let (mark, color) = if p.has_revealed {
                    ("✓ seen", self.theme.success)
                } else {
                    ("(press Enter to see your card)", self.theme.muted)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<20}", p.name), Style::default().fg(self.theme.fg)),
                    Span::styled(mark, Style::default().fg(color)),
                ]))
            })
            .collect();
        frame.render_stateful_widget(
            self.highlighted(List::new(items))
                .block(styled_block("Pass the screen around", &self.theme)),
            columns[0],
            &mut self.list_state,
        );

        let players = self.session.players();
        let seen = players.iter().filter(|p| p.has_revealed).count();
        let side = styled_block("Progress", &self.theme);
        let inner = side.inner(columns[1]);
        frame.render_widget(side, columns[1]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(1)])
            .split(inner);
        frame.render_widget(
            ProgressBar::new("Seen", seen, players.len())
                .color(self.theme.warning)
                .done_color(self.theme.success),
            rows[0],
        );
        let waiting = players.len() - seen;
        let note = if waiting == 0 {
            "Everyone has seen their card. Press g to begin.".to_string()
        } else {
            format!("Waiting for {} more player(s)...", waiting)
        };
        frame.render_widget(
            Paragraph::new(note)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(self.theme.fg)),
            rows[2],
        );
    }

    fn render_playing(&mut self, frame: &mut Frame, area: Rect) {
        let columns = create_content_layout(area);

        let items: Vec<ListItem> = self
            .session
            .alive_players()
            .map(|p| ListItem::new(Span::styled(p.name.clone(), Style::default().fg(self.theme.fg))))
            .collect();
        let title = if self.session.is_day() {
            "Everyone votes to eliminate someone"
        } else {
            "The killers secretly choose their victim"
        };
        frame.render_stateful_widget(
            self.highlighted(List::new(items)).block(styled_block(title, &self.theme)),
            columns[0],
            &mut self.list_state,
        );

        let side = styled_block("Town", &self.theme);
        let inner = side.inner(columns[1]);
        frame.render_widget(side, columns[1]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);
        frame.render_widget(
            TallyLine::new(self.session.tally()).colors(self.theme.fg, self.theme.alert, self.theme.accent),
            rows[0],
        );

        let fallen: Vec<Line> = self
            .session
            .eliminated()
            .iter()
            .map(|e| {
                let notice = EliminationNotice::for_elimination(e);
                let when = if e.during_day { "Day" } else { "Night" };
                Line::from(vec![
                    Span::styled(format!("💀 {} {} ", when, e.round), Style::default().fg(self.theme.muted)),
                    Span::styled(notice.message(), Style::default().fg(self.theme.fg)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(fallen).wrap(Wrap { trim: true }), rows[1]);
    }

    fn render_game_over(&self, frame: &mut Frame, area: Rect) {
        let columns = create_content_layout(area);

        let mut lines = Vec::new();
        let (banner, color) = match self.session.winner() {
            Some(Side::Killers) => ("🔪 The Killers win!", self.theme.alert),
            Some(Side::Town) => ("👥 The Town wins!", self.theme.success),
            None => ("No winner", self.theme.muted),
        };
        lines.push(Line::from(Span::styled(
            banner,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for p in self.session.players() {
            let character = p.character.map(|c| c.name()).unwrap_or("-");
            let mut spans = vec![
                Span::styled(format!("{:<20}", p.name), Style::default().fg(self.theme.fg)),
                Span::styled(
                    character.to_string(),
                    Style::default().fg(self.theme.role_color(p.role)),
                ),
            ];
            if !p.is_alive {
                spans.push(Span::styled("  eliminated", Style::default().fg(self.theme.muted)));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(
            Paragraph::new(lines).block(styled_block("Final results", &self.theme)),
            columns[0],
        );

        let history: Vec<Line> = self
            .session
            .history()
            .iter()
            .map(|record| Line::from(format!("Round {}: {}", record.round, record.winner)))
            .collect();
        frame.render_widget(
            Paragraph::new(history).block(styled_block("History", &self.theme)),
            columns[1],
        );
    }

    fn highlighted<'a>(&self, list: List<'a>) -> List<'a> {
        list.highlight_style(
            Style::default()
                .bg(self.theme.card)
                .fg(self.theme.warning)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ")
    }
}
