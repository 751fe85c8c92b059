use std::sync::Arc;

use tracing::debug;

use crate::config::BrowserConfig;
use crate::detail::RecipeDetail;
use crate::recipe::Recipe;
use crate::route::{Navigator, Route};
use crate::scale::ScaleControl;
use crate::sidebar::SidebarState;
use crate::store::RecipeStore;

/// Root state of the recipe browser.
///
/// The selected recipe is derived from the current route (`/<label>`);
/// the scale is held here and applies to whichever recipe is shown.
/// Every route change is observed by the sidebar, which clears its search
/// text in response.
pub struct Browser {
    store: Arc<RecipeStore>,
    navigator: Navigator,
    scale: ScaleControl,
    sidebar: SidebarState,
}

impl Browser {
    pub fn new(store: Arc<RecipeStore>, config: &BrowserConfig) -> Self {
        Self {
            store,
            navigator: Navigator::default(),
            scale: ScaleControl::new(config.scale),
            sidebar: SidebarState::new(config.sidebar.start_collapsed),
        }
    }

    pub fn store(&self) -> &Arc<RecipeStore> {
        &self.store
    }

    /// Swap in a freshly loaded store. Selection and filters are reset;
    /// the scale is kept.
    pub fn replace_store(&mut self, store: Arc<RecipeStore>) {
        debug!(count = store.len(), "Replacing recipe store");
        self.store = store;
        self.sidebar.filter_mut().clear_tags();
        self.navigate_to(Route::Home);
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Select a recipe by label. Unknown labels still navigate; they just
    /// resolve to no recipe.
    pub fn select(&mut self, label: &str) -> bool {
        self.navigate_to(Route::recipe(label))
    }

    pub fn navigate(&mut self, path: &str) -> bool {
        self.navigate_to(Route::parse(path))
    }

    pub fn clear_selection(&mut self) -> bool {
        self.navigate_to(Route::Home)
    }

    pub fn back(&mut self) -> bool {
        let moved = self.navigator.back();
        self.sidebar.sync_route(&self.navigator);
        moved
    }

    fn navigate_to(&mut self, route: Route) -> bool {
        let changed = self.navigator.push(route);
        self.sidebar.sync_route(&self.navigator);
        changed
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.navigator.selected_label()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected_label().and_then(|label| self.store.get(label))
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected_recipe().is_some_and(|r| r.label == label)
    }

    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.sidebar.visible(&self.store)
    }

    pub fn tag_vocabulary(&self) -> &[String] {
        self.store.tag_vocabulary()
    }

    /// Detail pane content, or `None` when nothing is selected.
    pub fn detail(&self) -> Option<RecipeDetail> {
        RecipeDetail::project(self.selected_recipe(), &self.scale)
    }

    pub fn scale(&self) -> &ScaleControl {
        &self.scale
    }

    pub fn scale_mut(&mut self) -> &mut ScaleControl {
        &mut self.scale
    }

    pub fn sidebar(&self) -> &SidebarState {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut SidebarState {
        &mut self.sidebar
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.sidebar.set_search(search);
    }

    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        self.sidebar.toggle_tag(tag)
    }
}
