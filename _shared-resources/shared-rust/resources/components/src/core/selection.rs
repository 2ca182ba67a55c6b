// Selection State
// Which tab is active, kept inside the bounds of the current tab set

/// Active-tab bookkeeping for one tab view instance
///
/// `active_index` is always a valid index into a set of `tab_count` tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active_index: usize,
    tab_count: usize,
}

impl SelectionState {
    /// Fresh selection on the first tab
    ///
    /// A zero count is treated as one; callers validate the tab set first.
    pub fn new(tab_count: usize) -> Self {
        Self {
            active_index: 0,
            tab_count: tab_count.max(1),
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Set the active tab by index
    /// Returns false (leaving the state untouched) if the index is out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tab_count {
            self.active_index = index;
            true
        } else {
            false
        }
    }

    /// Index of the next tab, wrapping past the end
    pub fn next_index(&self) -> usize {
        (self.active_index + 1) % self.tab_count
    }

    /// Index of the previous tab, wrapping past the start
    pub fn previous_index(&self) -> usize {
        if self.active_index > 0 {
            self.active_index - 1
        } else {
            self.tab_count - 1
        }
    }

    /// Adopt a new tab count, clamping the active index to the last valid tab
    /// Returns true if the active index had to move
    pub fn resize_to(&mut self, tab_count: usize) -> bool {
        self.tab_count = tab_count.max(1);
        if self.active_index >= self.tab_count {
            self.active_index = self.tab_count - 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_tab() {
        let state = SelectionState::new(3);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.tab_count(), 3);
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut state = SelectionState::new(3);
        assert!(state.select(2));
        assert!(!state.select(3));
        assert!(!state.select(usize::MAX));
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = SelectionState::new(3);
        assert_eq!(state.previous_index(), 2);
        state.select(2);
        assert_eq!(state.next_index(), 0);
    }

    #[test]
    fn test_shrink_clamps_to_last_tab() {
        let mut state = SelectionState::new(3);
        state.select(2);
        assert!(state.resize_to(2));
        assert_eq!(state.active_index(), 1);

        // Growing keeps the selection where it is
        assert!(!state.resize_to(5));
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn test_index_stays_in_bounds_under_any_selection_sequence() {
        let mut state = SelectionState::new(4);
        for step in 0..64usize {
            let index = (step * 7 + 3) % 6; // mixes valid and invalid indices
            state.select(index);
            assert!(state.active_index() < state.tab_count());
        }
    }
}
