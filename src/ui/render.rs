use crate::ui::app::{App, Button};
use crate::ui::digits::{big_number, big_number_width, GLYPH_HEIGHT};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ButtonState, Theme};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

const BUTTON_GAP: &str = "   ";
/// Block digits, a blank row, then the buttons.
const FULL_HEIGHT: u16 = GLYPH_HEIGHT + 2;

pub fn draw(frame: &mut Frame<'_>, app: &App, theme: &dyn Theme) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.counter(), theme), header);
    frame.render_widget(Clear, body);
    draw_body(frame, app, theme, body);
    frame.render_widget(
        Footer::new().widget(footer, theme.border_color()),
        footer,
    );
}

fn draw_body(frame: &mut Frame<'_>, app: &App, theme: &dyn Theme, body: ratatui::layout::Rect) {
    if body.width == 0 || body.height == 0 {
        return;
    }

    let counter = app.counter();
    let value_style = Style::default()
        .fg(theme.category_color(counter.category()))
        .add_modifier(Modifier::BOLD);

    let digits_fit =
        body.height >= FULL_HEIGHT && body.width >= big_number_width(counter.value());
    let mut lines: Vec<Line> = if digits_fit {
        big_number(counter.value())
            .into_iter()
            .map(|row| Line::from(Span::styled(row, value_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(counter.value().to_string(), value_style))]
    };
    if body.height > lines.len() as u16 + 1 {
        lines.push(Line::from(""));
    }
    lines.push(buttons_line(app, theme));

    let height = lines.len() as u16;
    let content = centered_rect_by_size(body, body.width, height);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        content,
    );

    frame.render_widget(app.confetti().layer(theme.confetti_colors()), body);
}

fn buttons_line(app: &App, theme: &dyn Theme) -> Line<'static> {
    let button = |button: Button, label: &'static str| {
        let state = if !app.is_enabled(button) {
            ButtonState::Disabled
        } else if app.focus() == button {
            ButtonState::Focused
        } else {
            ButtonState::Enabled
        };
        Span::styled(label, theme.button_style(state))
    };
    Line::from(vec![
        button(Button::Decrement, " [ - ] "),
        Span::raw(BUTTON_GAP),
        button(Button::Increment, " [ + ] "),
    ])
}
