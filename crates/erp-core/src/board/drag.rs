//! Drag Gesture State Machine
//!
//! Transient, never persisted. Only the column hovered last at release time
//! is used as the destination.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        task: u32,
        over: Option<u32>,
    },
}

impl DragState {
    /// Start a gesture; replaces any gesture in progress
    pub fn begin(&mut self, task: u32) {
        *self = DragState::Dragging { task, over: None };
    }

    /// Pointer entered a column. Ignored while idle.
    pub fn hover(&mut self, column: u32) {
        if let DragState::Dragging { over, .. } = self {
            *over = Some(column);
        }
    }

    /// Pointer left the hovered column
    pub fn leave(&mut self) {
        if let DragState::Dragging { over, .. } = self {
            *over = None;
        }
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Return to idle once the drop for `task` has been resolved.
    /// A newer gesture for another task is left alone.
    pub fn finish(&mut self, task: u32) {
        if self.source() == Some(task) {
            *self = DragState::Idle;
        }
    }

    pub fn source(&self) -> Option<u32> {
        match self {
            DragState::Dragging { task, .. } => Some(*task),
            DragState::Idle => None,
        }
    }

    pub fn target(&self) -> Option<u32> {
        match self {
            DragState::Dragging { over, .. } => *over,
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn is_over(&self, column: u32) -> bool {
        self.target() == Some(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_while_idle_is_ignored() {
        let mut drag = DragState::default();
        drag.hover(3);
        assert_eq!(drag, DragState::Idle);
    }

    #[test]
    fn test_last_hovered_column_wins() {
        let mut drag = DragState::default();
        drag.begin(10);
        drag.hover(1);
        drag.hover(2);
        drag.leave();
        drag.hover(3);
        assert_eq!(drag.source(), Some(10));
        assert_eq!(drag.target(), Some(3));
        assert!(drag.is_over(3));
    }

    #[test]
    fn test_finish_only_clears_matching_gesture() {
        let mut drag = DragState::default();
        drag.begin(1);
        drag.begin(2);
        drag.finish(1);
        assert_eq!(drag.source(), Some(2));
        drag.finish(2);
        assert!(!drag.is_dragging());
    }
}
