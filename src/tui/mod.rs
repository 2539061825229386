//! Terminal User Interface
//!
//! Pass-and-play screens for the game using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::Role;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub card: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x0f, 0x0f, 0x1e),
            card: Color::Rgb(0x16, 0x21, 0x3e),
            fg: Color::Rgb(0xea, 0xea, 0xea),
            muted: Color::Rgb(0xa9, 0xa9, 0xa9),
            accent: Color::Rgb(0x66, 0x7e, 0xea),
            alert: Color::Rgb(0xff, 0x6b, 0x6b),
            success: Color::Rgb(0x51, 0xcf, 0x66),
            warning: Color::Rgb(0xff, 0xd9, 0x3d),
            border: Color::Rgb(0x2d, 0x35, 0x61),
        }
    }
}

impl Theme {
    /// Accent for a role once it may be shown.
    pub fn role_color(&self, role: Option<Role>) -> Color {
        match role {
            Some(Role::Killer) => self.alert,
            Some(Role::Cop) => self.accent,
            Some(Role::Civilian) | None => self.fg,
        }
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.alert).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
 ███╗   ██╗██╗ ██████╗ ██╗  ██╗████████╗
 ████╗  ██║██║██╔════╝ ██║  ██║╚══██╔══╝
 ██╔██╗ ██║██║██║  ███╗███████║   ██║
 ██║╚██╗██║██║██║   ██║██╔══██║   ██║
 ██║ ╚████║██║╚██████╔╝██║  ██║   ██║
 ╚═╝  ╚═══╝╚═╝ ╚═════╝ ╚═╝  ╚═╝   ╚═╝
          in  P A L E R M O
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " 🌙 NIGHT IN PALERMO ";

/// How to play, shown on the home screen
pub const RULES: &[&str] = &[
    "Add players and choose which characters are in the deal.",
    "Pass the screen around: each player sees only their own card.",
    "During the day, everyone votes someone out.",
    "A day vote reveals the character of the eliminated player.",
    "At night, the killers secretly pick a victim.",
    "Killers win once they are as many as the town.",
    "The town wins once every killer is gone.",
];

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════╗
║                   CONTROLS                    ║
╠═══════════════════════════════════════════════╣
║  ↑/↓     Move the highlight                   ║
║  Enter   Confirm / add / reveal / eliminate   ║
║  Esc     Go back                              ║
║  ?       Toggle this help                     ║
║  Ctrl-C  Quit                                 ║
╠═══════════════════════════════════════════════╣
║  Players     type a name, Enter to add        ║
║              Del removes, Tab continues       ║
║  Characters  ←/→ or -/+ change the count      ║
║  Reveal      g starts once everyone has seen  ║
║  Night       n ends the night without a kill  ║
║  Game over   p same players, n new game       ║
╚═══════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (list + side panel)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // List
            Constraint::Percentage(35), // Side panel
        ])
        .split(area)
        .to_vec()
}

/// A box of the given size centered in `area`, for overlays
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
