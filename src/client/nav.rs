//! Routes and navigation bar state.

/// Scroll offset, in pixels, past which the bar switches to its compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Brand text of the bar; links to `Route::Home`.
pub const BRAND: &str = "Portfolio";

/// The four client routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    /// Every route, in menu order.
    pub const ALL: [Route; 4] = [Route::Home, Route::About, Route::Projects, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
        }
    }

    /// Exact path lookup.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// One menu entry as rendered for the current location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub active: bool,
}

/// Navigation bar state: the collapsible menu and the scroll style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navbar {
    is_open: bool,
    scrolled: bool,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Menu button.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Following any link, brand included, closes the menu.
    pub fn navigate(&mut self, route: Route) -> &'static str {
        self.close();
        route.path()
    }

    pub fn on_scroll(&mut self, offset_px: f64) {
        self.scrolled = offset_px > SCROLL_THRESHOLD_PX;
    }

    /// A link is highlighted only on an exact path match.
    pub fn is_active(route: Route, current_path: &str) -> bool {
        route.path() == current_path
    }

    pub fn links(current_path: &str) -> Vec<NavLink> {
        Route::ALL
            .into_iter()
            .map(|route| NavLink {
                route,
                active: Self::is_active(route, current_path),
            })
            .collect()
    }
}
