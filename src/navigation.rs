//! Screen routing
//!
//! A static route table plus the stack of screens currently shown. The
//! search screen initiates transitions through [`Navigator::navigate_to`];
//! the stack itself never leaves this module.

use crate::backend::Listing;

/// A named screen registered in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Results,
}

/// Route table: name to screen
pub const ROUTES: [(&str, Route); 2] = [("Home", Route::Home), ("Results", Route::Results)];

impl Route {
    /// Registered name in [`ROUTES`]
    pub fn name(self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, route)| *route == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Exact, case-sensitive lookup in [`ROUTES`]
    pub fn from_name(name: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(route_name, _)| *route_name == name)
            .map(|(_, route)| *route)
    }

    /// Header/window title for the screen
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Property Finder",
            Route::Results => "Results",
        }
    }
}

/// Parameters handed to the destination screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    pub listings: Vec<Listing>,
}

/// A screen on the stack, with whatever it was opened with
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Results { listings: Vec<Listing> },
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Home => Route::Home,
            Screen::Results { .. } => Route::Results,
        }
    }
}

/// Stack navigator rooted at Home
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Screen {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Push the screen registered under `name`.
    ///
    /// Returns false, leaving the stack alone, when no route has that name.
    pub fn navigate_to(&mut self, name: &str, params: RouteParams) -> bool {
        let Some(route) = Route::from_name(name) else {
            tracing::warn!(route = name, "navigate to unknown route");
            return false;
        };

        let screen = match route {
            Route::Home => Screen::Home,
            Route::Results => Screen::Results {
                listings: params.listings,
            },
        };
        self.stack.push(screen);
        tracing::info!(route = name, depth = self.depth(), "navigate");
        true
    }

    /// Pop the current screen. Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.stack.pop();
        tracing::debug!(
            route = self.current().route().name(),
            depth = self.depth(),
            "navigate back"
        );
        true
    }
}
