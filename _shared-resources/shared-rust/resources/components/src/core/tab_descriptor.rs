// Tab Descriptor
// Immutable description of one tab: identity, label, and caller-owned content

use std::collections::HashSet;

use super::TabViewError;

/// One tab in a tab view
///
/// `content` is opaque to the tab view. It is never inspected or mutated,
/// the view only decides whether it gets rendered.
#[derive(Debug, Clone)]
pub struct TabDescriptor<C> {
    /// Stable identifier, unique within one tab set
    pub key: String,
    /// Display label shown in the header strip
    pub title: String,
    pub content: C,
}

impl<C> TabDescriptor<C> {
    pub fn new(key: impl Into<String>, title: impl Into<String>, content: C) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content,
        }
    }
}

/// Check a tab set before it is mounted or rendered
pub fn validate_tabs<C>(tabs: &[TabDescriptor<C>]) -> Result<(), TabViewError> {
    if tabs.is_empty() {
        return Err(TabViewError::EmptyTabs);
    }

    let mut seen = HashSet::with_capacity(tabs.len());
    for (index, tab) in tabs.iter().enumerate() {
        if tab.key.trim().is_empty() {
            return Err(TabViewError::EmptyKey { index });
        }
        if !seen.insert(tab.key.as_str()) {
            return Err(TabViewError::DuplicateKey { key: tab.key.clone() });
        }
        if tab.title.trim().is_empty() {
            return Err(TabViewError::EmptyTitle { key: tab.key.clone() });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(key: &str, title: &str) -> TabDescriptor<()> {
        TabDescriptor::new(key, title, ())
    }

    #[test]
    fn test_empty_tab_set_is_rejected() {
        let tabs: Vec<TabDescriptor<()>> = Vec::new();
        assert_eq!(validate_tabs(&tabs), Err(TabViewError::EmptyTabs));
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let tabs = vec![tab("a", "First"), tab("b", "Second"), tab("a", "Third")];
        assert_eq!(
            validate_tabs(&tabs),
            Err(TabViewError::DuplicateKey { key: "a".to_string() })
        );
    }

    #[test]
    fn test_blank_key_and_title_are_rejected() {
        assert_eq!(
            validate_tabs(&[tab("a", "A"), tab("  ", "B")]),
            Err(TabViewError::EmptyKey { index: 1 })
        );
        assert_eq!(
            validate_tabs(&[tab("a", "")]),
            Err(TabViewError::EmptyTitle { key: "a".to_string() })
        );
    }

    #[test]
    fn test_valid_tab_set() {
        let tabs = vec![tab("profile", "Profile"), tab("projects", "Projects"), tab("links", "Links")];
        assert!(validate_tabs(&tabs).is_ok());
    }
}
