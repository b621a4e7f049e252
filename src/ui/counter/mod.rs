mod intent;
mod reducer;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
