//! Free-text query input.
//!
//! The query applies live: every keystroke updates the buffer and the
//! caller re-runs the query with [`QueryInput::buffer`].

/// Query input state.
#[derive(Debug)]
pub struct QueryInput {
    is_active: bool,
    buffer: String,
    /// Query in effect before editing started, restored on cancel.
    saved: String,
}

impl QueryInput {
    /// Create a new query input.
    pub fn new() -> Self {
        Self {
            is_active: false,
            buffer: String::new(),
            saved: String::new(),
        }
    }

    /// Check if editing is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Start editing, seeded with the query currently in effect.
    pub fn start(&mut self, current: &str) {
        self.is_active = true;
        self.buffer = current.to_string();
        self.saved = current.to_string();
    }

    /// Add a character to the buffer.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character from the buffer.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Clear the whole buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Finish editing and keep the buffer.
    pub fn submit(&mut self) {
        self.is_active = false;
        self.saved = self.buffer.clone();
    }

    /// Stop editing and return the query to restore.
    pub fn cancel(&mut self) -> String {
        self.is_active = false;
        self.buffer = self.saved.clone();
        self.buffer.clone()
    }

    /// Drop all state, e.g. after a new catalog is loaded.
    pub fn reset(&mut self) {
        self.is_active = false;
        self.buffer.clear();
        self.saved.clear();
    }

    /// Get the buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_buffer() {
        let mut input = QueryInput::new();
        input.start("");
        input.input('z');
        input.input('e');
        input.backspace();
        assert!(input.is_active());
        assert_eq!(input.buffer(), "z");
        input.submit();
        assert!(!input.is_active());
        assert_eq!(input.buffer(), "z");
    }

    #[test]
    fn cancel_restores_previous_query() {
        let mut input = QueryInput::new();
        input.start("ring");
        input.clear();
        input.input('x');
        assert_eq!(input.cancel(), "ring");
        assert_eq!(input.buffer(), "ring");
    }
}
