//! Bounded counter widget.
//!
//! The value never drops below zero. Feedback text depends only on the
//! value after a successful move; a refused decrement reports the floor
//! instead and leaves the display alone.

use crate::consts::{COUNTER_FLOOR_MESSAGE, COUNTER_HIGH_MESSAGE, COUNTER_RESET_MESSAGE};

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// What the host should redraw after a counter button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterChange {
    /// The value changed; redraw the display and feedback.
    Moved { value: u32, feedback: &'static str },
    /// Decrement refused at zero; only the feedback changes.
    AtFloor { feedback: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    value: u32,
    high_water: u32,
}

impl Counter {
    /// `high_water` is the largest value that does not trigger the
    /// "getting high" feedback.
    pub fn new(high_water: u32) -> Self {
        Self { value: 0, high_water }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Feedback for the current value.
    pub fn feedback(&self) -> &'static str {
        if self.value == 0 {
            COUNTER_RESET_MESSAGE
        } else if self.value > self.high_water {
            COUNTER_HIGH_MESSAGE
        } else {
            ""
        }
    }

    pub fn increment(&mut self) -> CounterChange {
        self.value = self.value.saturating_add(1);
        self.moved()
    }

    pub fn decrement(&mut self) -> CounterChange {
        if self.value == 0 {
            return CounterChange::AtFloor { feedback: COUNTER_FLOOR_MESSAGE };
        }
        self.value -= 1;
        self.moved()
    }

    fn moved(&self) -> CounterChange {
        CounterChange::Moved { value: self.value, feedback: self.feedback() }
    }
}
