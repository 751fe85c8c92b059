use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::consts::MAX_HISTORY;

/// Location within the browser: the home page or a recipe at `/<label>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Recipe(String),
}

impl Route {
    /// Parse an in-process path. Leading slashes are optional.
    pub fn parse(path: &str) -> Self {
        let label = path.trim_start_matches('/');
        if label.is_empty() {
            Self::Home
        } else {
            Self::Recipe(label.to_string())
        }
    }

    pub fn recipe(label: impl Into<String>) -> Self {
        Self::Recipe(label.into())
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Recipe(label) => Some(label),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Recipe(label) => write!(f, "/{label}"),
        }
    }
}

/// Route history. Observers compare [`Navigator::revision`] against the
/// value they last saw to react to route changes.
///
/// At most [`MAX_HISTORY`] previous routes are kept; older ones are
/// forgotten and can no longer be reached with [`Navigator::back`].
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    current: Route,
    history: VecDeque<Route>,
    revision: u64,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: VecDeque::new(),
            revision: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.current.label()
    }

    /// Bumped on every effective route change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Move to `route`. Navigating to the current route is a no-op.
    /// Returns whether the route changed.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        debug!(from = %self.current, to = %route, "Navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push_back(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
        self.revision += 1;
        true
    }

    pub fn navigate(&mut self, path: &str) -> bool {
        self.push(Route::parse(path))
    }

    /// Return to the previous route. Returns whether anything changed.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                debug!(from = %self.current, to = %previous, "Navigate back");
                self.current = previous;
                self.revision += 1;
                true
            }
            None => false,
        }
    }
}
