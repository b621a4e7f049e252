use counter_app::counter::{
    should_trigger_effect, Category, CelebrationEffect, CounterState, Transition,
};
use counter_app::ui::app::{App, Button};
use counter_app::ui::counter::CounterIntent;
use counter_app::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn five_increments_disable_increment() {
    let mut app = App::new(CounterState::default(), 10);
    for _ in 0..5 {
        app.dispatch(CounterIntent::Increment);
    }
    assert_eq!(app.counter().value(), 5);
    assert_eq!(app.counter().category(), Category::Limit);
    assert!(!app.is_enabled(Button::Increment));
    assert!(app.is_enabled(Button::Decrement));
}

#[test]
fn eighteen_to_twenty_one_fires_once() {
    let mut app = App::new(CounterState::new(18, 15, 25), 10);
    assert_eq!(app.counter().category(), Category::Eighteen);

    for _ in 0..3 {
        app.dispatch(CounterIntent::Increment);
    }
    assert_eq!(app.counter().value(), 21);
    assert_eq!(app.counter().category(), Category::TwentyOne);
    assert_eq!(app.confetti().bursts(), 1);
    assert!(app.confetti().is_active());

    app.on_tick();
    assert_eq!(app.confetti().bursts(), 1);
}

#[test]
fn leaving_and_returning_to_twenty_one_fires_again() {
    let mut app = App::new(CounterState::new(20, 15, 25), 10);
    app.dispatch(CounterIntent::Increment);
    app.dispatch(CounterIntent::Increment);
    app.dispatch(CounterIntent::Decrement);
    assert_eq!(app.confetti().bursts(), 2);
}

#[test]
fn holding_at_twenty_one_bound_does_not_refire() {
    let mut app = App::new(CounterState::new(20, 0, 21), 10);
    app.dispatch(CounterIntent::Increment);
    assert_eq!(app.counter().category(), Category::Limit);
    assert_eq!(app.confetti().bursts(), 1);

    let transition = app.dispatch(CounterIntent::Increment);
    assert!(!transition.changed());
    assert_eq!(app.confetti().bursts(), 1);
}

#[test]
fn burst_expires_after_configured_ticks() {
    let mut app = App::new(CounterState::new(20, 15, 25), 2);
    app.dispatch(CounterIntent::Increment);
    app.on_tick();
    app.on_tick();
    assert!(!app.confetti().is_active());
}

#[test]
fn keys_map_to_intents() {
    let mut app = App::new(CounterState::default(), 10);
    handle_key(&mut app, key(KeyCode::Char('+')));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.counter().value(), 2);
    handle_key(&mut app, key(KeyCode::Char('-')));
    assert_eq!(app.counter().value(), 1);
    assert!(!app.should_quit());
    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn ctrl_c_quits() {
    let mut app = App::new(CounterState::default(), 10);
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn enter_presses_focused_button() {
    let mut app = App::new(CounterState::default(), 10);
    assert_eq!(app.focus(), Button::Increment);
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.counter().value(), 1);

    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus(), Button::Decrement);
    handle_key(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.counter().value(), 0);
}

#[test]
fn pressing_disabled_button_does_nothing() {
    let mut app = App::new(CounterState::new(5, -5, 5), 10);
    assert_eq!(app.press_focused(), None);
    assert_eq!(app.counter().value(), 5);
}

/// Records how often it was fired.
#[derive(Default)]
struct CountingEffect {
    fired: usize,
}

impl CelebrationEffect for CountingEffect {
    fn fire(&mut self) {
        self.fired += 1;
    }
}

#[test]
fn custom_effect_driven_by_transitions() {
    let mut state = CounterState::new(18, 15, 25);
    let mut effect = CountingEffect::default();
    let mut record = |transition: Transition| {
        if transition.triggers_effect() {
            effect.fire();
        }
    };
    for _ in 0..10 {
        record(state.increment());
    }
    assert_eq!(state.value(), 25);
    assert_eq!(effect.fired, 1);
    assert!(should_trigger_effect(20, 21));
}
