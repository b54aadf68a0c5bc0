//! Undo/redo over two stacks: performed actions on one, undone actions on the
//! other.

use std::fmt;

pub struct History<T> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
}

impl<T> History<T> {
    pub fn new() -> History<T> {
        History {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Records a new action. Anything waiting to be redone is forgotten.
    pub fn push(&mut self, action: T) {
        self.undo_stack.push(action);
        if !self.redo_stack.is_empty() {
            log::debug!("dropping {} redoable actions", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Moves the latest action onto the redo stack.
    pub fn undo(&mut self) -> Option<&T> {
        let action = self.undo_stack.pop()?;
        self.redo_stack.push(action);
        self.redo_stack.last()
    }

    /// Moves the most recently undone action back onto the history.
    pub fn redo(&mut self) -> Option<&T> {
        let action = self.redo_stack.pop()?;
        self.undo_stack.push(action);
        self.undo_stack.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Performed actions, oldest first.
    pub fn undo_history(&self) -> &[T] {
        &self.undo_stack
    }

    /// Undone actions; the last one is redone first.
    pub fn redo_buffer(&self) -> &[T] {
        &self.redo_stack
    }
}

impl<T> Default for History<T> {
    fn default() -> Self {
        History::new()
    }
}

impl<T: fmt::Debug> fmt::Display for History<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Undo History: {:?}", self.undo_stack)?;
        write!(f, "Redo Buffer:  {:?}", self.redo_stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(actions: &[&str]) -> History<String> {
        let mut history = History::new();
        for action in actions {
            history.push(action.to_string());
        }
        history
    }

    #[test]
    fn push_records_in_order() {
        let history = history_of(&["A", "B", "C"]);
        assert_eq!(history.undo_history(), ["A", "B", "C"]);
        assert!(history.redo_buffer().is_empty());
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_restores_action() {
        let mut history = history_of(&["A", "B", "C"]);
        assert_eq!(history.undo().map(String::as_str), Some("C"));
        assert_eq!(history.undo_history(), ["A", "B"]);
        assert_eq!(history.redo_buffer(), ["C"]);

        assert_eq!(history.redo().map(String::as_str), Some("C"));
        assert_eq!(history.undo_history(), ["A", "B", "C"]);
        assert!(history.redo_buffer().is_empty());
    }

    #[test]
    fn redo_replays_in_reverse_undo_order() {
        let mut history = history_of(&["A", "B", "C"]);
        history.undo();
        history.undo();
        assert_eq!(history.redo_buffer(), ["C", "B"]);
        assert_eq!(history.redo().map(String::as_str), Some("B"));
        assert_eq!(history.redo().map(String::as_str), Some("C"));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn push_clears_redo_buffer() {
        let mut history = history_of(&["A", "B"]);
        history.undo();
        history.push("D".to_string());
        assert_eq!(history.undo_history(), ["A", "D"]);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_do_nothing() {
        let mut history: History<String> = History::new();
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert!(history.undo_history().is_empty());
        assert!(history.redo_buffer().is_empty());
    }

    #[test]
    fn display_lists_both_stacks() {
        let mut history = history_of(&["A", "B"]);
        history.undo();
        assert_eq!(
            history.to_string(),
            "Undo History: [\"A\"]\nRedo Buffer:  [\"B\"]"
        );
    }
}
