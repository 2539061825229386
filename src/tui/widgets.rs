//! Custom widgets for the game UI

use crate::game::Tally;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Clear, Widget},
};

/// A progress bar, e.g. how many players have seen their card
pub struct ProgressBar {
    value: usize,
    max: usize,
    label: String,
    color: Color,
    done_color: Color,
}

impl ProgressBar {
    pub fn new(label: &str, value: usize, max: usize) -> Self {
        Self {
            value,
            max,
            label: label.to_string(),
            color: Color::Yellow,
            done_color: Color::Green,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn done_color(mut self, color: Color) -> Self {
        self.done_color = color;
        self
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.max > 0 && self.value >= self.max {
            self.done_color
        } else {
            self.color
        };

        let label = format!("{}: {}/{}", self.label, self.value, self.max);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let inner = usize::from(area.width - 2);
            let filled = if self.max == 0 {
                0
            } else {
                (self.value.min(self.max) * inner) / self.max
            };
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());
            for x in 0..inner {
                let (symbol, style) = if x < filled {
                    ("█", Style::default().fg(color))
                } else {
                    ("░", Style::default().fg(Color::DarkGray))
                };
                buf.set_string(area.x + 1 + x as u16, bar_y, symbol, style);
            }
        }
    }
}

/// One-line head count: alive, killers, town
pub struct TallyLine {
    tally: Tally,
    fg: Color,
    killer_color: Color,
    town_color: Color,
}

impl TallyLine {
    pub fn new(tally: Tally) -> Self {
        Self {
            tally,
            fg: Color::White,
            killer_color: Color::Red,
            town_color: Color::Blue,
        }
    }

    pub fn colors(mut self, fg: Color, killer: Color, town: Color) -> Self {
        self.fg = fg;
        self.killer_color = killer;
        self.town_color = town;
        self
    }
}

impl Widget for TallyLine {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let segments = [
            (format!("Alive {}", self.tally.alive), self.fg),
            (format!("   🔪 {}", self.tally.killers), self.killer_color),
            (format!("   👥 {}", self.tally.town), self.town_color),
        ];
        let mut x = area.x;
        for (text, color) in segments {
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                &text,
                usize::from(area.right().saturating_sub(x)),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
            x = next_x;
        }
    }
}

/// Double-lined box for dramatic moments: private cards, eliminations, endings
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
    text_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
            text_color: Color::White,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        Clear.render(area, buf);
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        // Border
        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(area.x, bottom, "╚", style);
        buf.set_string(right, bottom, "╝", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        // Title
        let title = format!(" {} ", self.title);
        let title_width = u16::try_from(Span::raw(title.as_str()).width()).unwrap_or(u16::MAX);
        if title_width + 2 <= area.width {
            let start = area.x + (area.width - title_width) / 2;
            buf.set_string(start, area.y, &title, style.add_modifier(Modifier::BOLD));
        }

        // Content
        let text_width = usize::from(area.width.saturating_sub(4));
        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x + 2,
                y,
                line,
                text_width,
                Style::default().fg(self.text_color),
            );
        }
    }
}
