use crate::filter::RecipeFilter;
use crate::recipe::Recipe;
use crate::route::Navigator;
use crate::store::RecipeStore;

/// Transient state of the recipe list panel.
///
/// `collapsed` only controls visibility on narrow viewports and never
/// affects which recipes are listed.
#[derive(Clone, Debug, Default)]
pub struct SidebarState {
    filter: RecipeFilter,
    collapsed: bool,
    seen_revision: u64,
}

impl SidebarState {
    pub fn new(start_collapsed: bool) -> Self {
        Self {
            collapsed: start_collapsed,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &RecipeFilter {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut RecipeFilter {
        &mut self.filter
    }

    pub fn search(&self) -> &str {
        self.filter.search()
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.set_search(search);
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.filter.toggle_tag(tag)
    }

    pub fn visible<'a>(&self, store: &'a RecipeStore) -> Vec<&'a Recipe> {
        self.filter.apply(store)
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn expand(&mut self) {
        self.collapsed = false;
    }

    pub fn collapse(&mut self) {
        self.collapsed = true;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Clear the search text if the route changed since the last sync.
    /// Returns whether a route change was observed.
    pub fn sync_route(&mut self, navigator: &Navigator) -> bool {
        if navigator.revision() == self.seen_revision {
            return false;
        }
        self.seen_revision = navigator.revision();
        self.filter.clear_search();
        true
    }
}
