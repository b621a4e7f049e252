use counter_app::counter::CounterState;
use counter_app::ui::app::App;
use counter_app::ui::counter::CounterIntent;
use counter_app::ui::render::draw;
use counter_app::ui::theme::{DddTheme, Theme};
use counter_app::counter::Category;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| draw(frame, app, &DddTheme))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn draws_header_buttons_and_footer() {
    let app = App::new(CounterState::default(), 10);
    let screen = text(&render(&app, 100, 20));
    assert!(screen.contains("counter-app"));
    assert!(screen.contains("range [-5, 5]"));
    assert!(screen.contains("[ - ]"));
    assert!(screen.contains("[ + ]"));
    assert!(screen.contains("q: Quit"));
    assert!(screen.contains("███"));
}

#[test]
fn small_body_falls_back_to_plain_number() {
    let mut app = App::new(CounterState::default(), 10);
    app.dispatch(CounterIntent::Increment);
    let screen = text(&render(&app, 100, 9));
    assert!(!screen.contains("███"));
    assert!(screen.contains("[ + ]"));
}

#[test]
fn limit_value_uses_limit_color() {
    let app = App::new(CounterState::new(5, -5, 5), 10);
    let buffer = render(&app, 100, 20);
    let limit = DddTheme.category_color(Category::Limit);
    let colored = buffer
        .content
        .iter()
        .any(|cell| cell.symbol() == "█" && cell.fg == limit);
    assert!(colored);
    assert!(text(&buffer).contains("at max"));
}
