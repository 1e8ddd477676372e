//! Selection logic of the column filter popup

/// Search box appears above this many options
pub const SEARCH_THRESHOLD: usize = 5;

/// Header checkbox state over the currently listed options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    None,
    Some,
    All,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelectorState {
    options: Vec<String>,
    selected: Vec<String>,
    search: String,
}

impl FilterSelectorState {
    pub fn new(options: Vec<String>, selected: Vec<String>) -> Self {
        let mut state = Self {
            options,
            selected,
            search: String::new(),
        };
        state.normalize();
        state
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|s| s == value)
    }

    pub fn shows_search(&self) -> bool {
        self.options.len() > SEARCH_THRESHOLD
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// Options matching the search text (case-insensitive)
    pub fn visible_options(&self) -> Vec<&String> {
        let needle = self.search.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selection_state(&self) -> SelectionState {
        let visible = self.visible_options();
        let selected = visible.iter().filter(|o| self.is_selected(o)).count();
        if selected == 0 {
            SelectionState::None
        } else if selected == visible.len() {
            SelectionState::All
        } else {
            SelectionState::Some
        }
    }

    pub fn toggle(&mut self, value: &str) -> Vec<String> {
        if self.is_selected(value) {
            self.selected.retain(|s| s != value);
        } else {
            self.selected.push(value.to_string());
        }
        self.normalize();
        self.selected.clone()
    }

    /// Adds every listed option
    pub fn select_all(&mut self) -> Vec<String> {
        let add: Vec<String> = self
            .visible_options()
            .into_iter()
            .filter(|o| !self.is_selected(o))
            .cloned()
            .collect();
        self.selected.extend(add);
        self.normalize();
        self.selected.clone()
    }

    /// Removes every listed option; hidden selections stay
    pub fn clear_all(&mut self) -> Vec<String> {
        let visible: Vec<String> = self.visible_options().into_iter().cloned().collect();
        self.selected.retain(|s| !visible.contains(s));
        self.selected.clone()
    }

    /// Header checkbox: clears when everything listed is selected, selects otherwise
    pub fn toggle_all(&mut self) -> Vec<String> {
        match self.selection_state() {
            SelectionState::All => self.clear_all(),
            SelectionState::None | SelectionState::Some => self.select_all(),
        }
    }

    pub fn reset(&mut self) -> Vec<String> {
        self.selected.clear();
        self.search.clear();
        Vec::new()
    }

    /// Keeps selections in option order, unknown values last
    fn normalize(&mut self) {
        let mut ordered: Vec<String> = self
            .options
            .iter()
            .filter(|o| self.selected.contains(o))
            .cloned()
            .collect();
        for s in &self.selected {
            if !self.options.contains(s) && !ordered.contains(s) {
                ordered.push(s.clone());
            }
        }
        self.selected = ordered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("value {}", i)).collect()
    }

    #[test]
    fn test_search_only_above_threshold() {
        assert!(!FilterSelectorState::new(opts(5), vec![]).shows_search());
        assert!(FilterSelectorState::new(opts(6), vec![]).shows_search());
    }

    #[test]
    fn test_toggle_keeps_option_order() {
        let mut state = FilterSelectorState::new(opts(3), vec![]);
        state.toggle("value 2");
        let selected = state.toggle("value 0");
        assert_eq!(selected, vec!["value 0", "value 2"]);
        assert_eq!(state.toggle("value 2"), vec!["value 0"]);
    }

    #[test]
    fn test_select_all_is_idempotent() {
        let mut state = FilterSelectorState::new(opts(4), vec!["value 1".into()]);
        let once = state.select_all();
        let twice = state.select_all();
        assert_eq!(once, twice);
        assert_eq!(once.len(), 4);
        assert_eq!(state.selection_state(), SelectionState::All);
        assert!(state.clear_all().is_empty());
        assert_eq!(state.selection_state(), SelectionState::None);
    }

    #[test]
    fn test_bulk_actions_follow_search() {
        let mut state = FilterSelectorState::new(
            vec!["Draft".into(), "Running".into(), "Paused".into(), "Done".into()],
            vec!["Paused".into()],
        );
        state.set_search("d");
        // Draft, Paused, Done listed
        assert_eq!(state.visible_options().len(), 3);
        assert_eq!(state.selection_state(), SelectionState::Some);
        assert_eq!(state.select_all(), vec!["Draft", "Paused", "Done"]);
        state.set_search("r");
        // Draft, Running
        assert_eq!(state.clear_all(), vec!["Paused", "Done"]);
    }

    #[test]
    fn test_toggle_all_and_reset() {
        let mut state = FilterSelectorState::new(opts(2), vec![]);
        assert_eq!(state.toggle_all().len(), 2);
        assert!(state.toggle_all().is_empty());
        state.toggle("value 0");
        state.set_search("value");
        assert!(state.reset().is_empty());
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_empty_options() {
        let state = FilterSelectorState::new(vec![], vec![]);
        assert_eq!(state.selection_state(), SelectionState::None);
        assert!(state.visible_options().is_empty());
    }
}
