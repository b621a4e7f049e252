use crate::counter::{CelebrationEffect, CounterState, Transition};
use crate::ui::confetti::Confetti;
use crate::ui::counter::{CounterIntent, CounterReducer};
use crate::ui::mvi::Reducer;

/// One of the two on-screen controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    Decrement,
    Increment,
}

impl Button {
    pub fn intent(self) -> CounterIntent {
        match self {
            Button::Decrement => CounterIntent::Decrement,
            Button::Increment => CounterIntent::Increment,
        }
    }

    fn other(self) -> Self {
        match self {
            Button::Decrement => Button::Increment,
            Button::Increment => Button::Decrement,
        }
    }
}

pub struct App {
    should_quit: bool,
    counter: CounterState,
    focus: Button,
    confetti: Confetti,
}

impl App {
    pub fn new(counter: CounterState, confetti_ticks: u32) -> Self {
        Self {
            should_quit: false,
            counter,
            focus: Button::Increment,
            confetti: Confetti::new(confetti_ticks),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn confetti(&self) -> &Confetti {
        &self.confetti
    }

    pub fn focus(&self) -> Button {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn is_enabled(&self, button: Button) -> bool {
        match button {
            Button::Decrement => self.counter.can_decrement(),
            Button::Increment => self.counter.can_increment(),
        }
    }

    /// Activate the focused button. Disabled buttons do nothing.
    pub fn press_focused(&mut self) -> Option<Transition> {
        if !self.is_enabled(self.focus) {
            return None;
        }
        Some(self.dispatch(self.focus.intent()))
    }

    /// Reduce `intent` and fire the celebration if the value just became 21.
    pub fn dispatch(&mut self, intent: CounterIntent) -> Transition {
        let old = self.counter.value();
        self.counter = CounterReducer::reduce(self.counter, intent);
        let transition = Transition::new(old, self.counter.value());

        if transition.changed() {
            tracing::debug!(
                ?intent,
                old = transition.old,
                new = transition.new,
                category = self.counter.category().class_name(),
                "counter changed"
            );
        } else {
            tracing::debug!(?intent, value = old, "counter at bound, ignored");
        }

        if transition.triggers_effect() {
            self.confetti.fire();
        }
        transition
    }

    pub fn on_tick(&mut self) {
        self.confetti.on_tick();
    }
}
