/// Integer counter that resets to the value it was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: i64,
    initial_value: i64,
}

impl CounterState {
    pub fn new(initial: i64) -> Self {
        Self {
            value: initial,
            initial_value: initial,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn initial_value(&self) -> i64 {
        self.initial_value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.wrapping_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.wrapping_sub(1);
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = self.initial_value;
        self.value
    }
}

#[cfg(test)]
#[path = "tests/counter_tests.rs"]
mod tests;
