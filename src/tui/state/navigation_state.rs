//! Hovered/selected cursors of the navigation pane.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverDirection {
    Up,
    Down,
}

/// `hovered` is always a valid index. `selected` stays `None` until the first
/// commit and is a valid index afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    selected: Option<usize>,
    hovered: usize,
    len: usize,
}

impl NavigationState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: None,
            hovered: 0,
            len: len.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn hovered(&self) -> usize {
        self.hovered
    }

    /// Move the hover cursor one step, wrapping at both ends.
    pub fn move_hover(&mut self, direction: HoverDirection) {
        self.hovered = match direction {
            HoverDirection::Down => (self.hovered + 1) % self.len,
            HoverDirection::Up => (self.hovered + self.len - 1) % self.len,
        };
    }

    /// Commit the hovered entry as the selection.
    pub fn commit(&mut self) -> usize {
        self.selected = Some(self.hovered);
        self.hovered
    }

    /// Put the hover cursor back on the selection after leaving an editor.
    pub fn rest_on_selection(&mut self) {
        if let Some(selected) = self.selected {
            self.hovered = selected;
        }
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/navigation_state.rs"]
mod tests;
