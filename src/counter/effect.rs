/// Value that triggers the celebration effect.
pub const CELEBRATION_VALUE: i64 = 21;

/// External one-shot effect fired when the counter reaches
/// [`CELEBRATION_VALUE`].
///
/// Implementations must return promptly; the counter keeps accepting
/// transitions while the effect plays.
pub trait CelebrationEffect {
    fn fire(&mut self);
}

/// Old and new value produced by one increment or decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub old: i64,
    pub new: i64,
}

impl Transition {
    pub fn new(old: i64, new: i64) -> Self {
        Self { old, new }
    }

    /// False when the operation was blocked by a bound.
    pub fn changed(&self) -> bool {
        self.old != self.new
    }

    /// Whether this transition should fire the celebration effect.
    ///
    /// Blocked transitions never fire, so holding the value at 21 does not
    /// replay the effect.
    pub fn triggers_effect(&self) -> bool {
        self.changed() && should_trigger_effect(self.old, self.new)
    }
}

/// True iff the new value is the celebration value.
pub fn should_trigger_effect(_old: i64, new: i64) -> bool {
    new == CELEBRATION_VALUE
}
