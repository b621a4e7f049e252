use crate::counter::{Boundary, CounterState};
use crate::ui::theme::{Theme, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, counter: &CounterState, theme: &dyn Theme) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = Style::default().fg(theme.category_color(counter.category()));
        let status = match counter.boundary() {
            Boundary::AtMin => "at min",
            Boundary::Interior => "in range",
            Boundary::AtMax => "at max",
        };
        let line = Line::from(vec![
            Span::styled("  counter-app", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("range [{}, {}]", counter.min(), counter.max()),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border_color())),
        )
    }
}
