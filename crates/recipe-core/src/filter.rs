use std::collections::BTreeSet;

use crate::recipe::{capitalize, Recipe};
use crate::store::RecipeStore;

/// Search text and active tags applied to the sidebar list.
///
/// A recipe is visible when its label contains the search text
/// (case-insensitive) and it carries every active tag.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeFilter {
    search: String,
    active_tags: BTreeSet<String>,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn active_tags(&self) -> &BTreeSet<String> {
        &self.active_tags
    }

    pub fn is_tag_active(&self, tag: &str) -> bool {
        self.active_tags.contains(tag)
    }

    /// Flip a tag on or off. Returns whether it is now active.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.active_tags.remove(tag) {
            false
        } else {
            self.active_tags.insert(tag.to_string());
            true
        }
    }

    pub fn set_tag(&mut self, tag: &str, active: bool) {
        if active {
            self.active_tags.insert(tag.to_string());
        } else {
            self.active_tags.remove(tag);
        }
    }

    pub fn clear_tags(&mut self) {
        self.active_tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.active_tags.is_empty()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        matches_search(&recipe.label, &self.search) && matches_tags(recipe, &self.active_tags)
    }

    /// Visible recipes, in store order.
    pub fn apply<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        store.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Case-insensitive substring match. An empty search matches everything.
pub fn matches_search(label: &str, search: &str) -> bool {
    search.is_empty() || label.to_lowercase().contains(&search.to_lowercase())
}

/// True when `recipe` carries every tag in `active`.
pub fn matches_tags(recipe: &Recipe, active: &BTreeSet<String>) -> bool {
    active.iter().all(|tag| recipe.has_tag(tag))
}

/// Tag as shown in the filter list: first letter upper-case, rest lower.
pub fn display_tag(tag: &str) -> String {
    capitalize(tag)
}
