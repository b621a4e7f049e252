use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::theme::DddTheme;
use std::io;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let theme = DddTheme;
    let mut app = App::new(config.counter.to_state(), config.ui.confetti_ticks);
    let events = EventHandler::new(tick_rate);
    tracing::info!(
        value = app.counter().value(),
        min = app.counter().min(),
        max = app.counter().max(),
        "counter started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app, &theme))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => tracing::debug!(cols, rows, "terminal resized"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!(value = app.counter().value(), "counter stopped");
    drop(guard);
    Ok(())
}
