use super::constants::NAV_CONDENSE_SCROLL_Y;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Contact,
}

impl Route {
    /// Unknown paths fall back to the home view.
    pub fn from_path(path: &str) -> Route {
        let (path, _) = split_href(path);
        match path.trim_end_matches('/') {
            "/contact" | "contact" => Route::Contact,
            _ => Route::Home,
        }
    }

    #[inline]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Contact => "/contact",
        }
    }

    /// In-app URL for this route, with an optional `#fragment`.
    pub fn href(&self, fragment: Option<&str>) -> String {
        match fragment {
            Some(f) => format!("{}#{}", self.path(), f),
            None => self.path().to_string(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Contact => "contact",
        }
    }
}

/// Split an in-app href into its path (query dropped) and optional fragment.
pub fn split_href(href: &str) -> (&str, Option<&str>) {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, frag)) if !frag.is_empty() => (rest, Some(frag)),
        Some((rest, _)) => (rest, None),
        None => (href, None),
    };
    let path = rest.split_once('?').map_or(rest, |(p, _)| p);
    let path = if path.is_empty() { "/" } else { path };
    (path, fragment)
}

/// False when `current_href` already shows `route` and `fragment`, so
/// repeated clicks on the same link do not grow the history stack.
pub fn needs_history_entry(current_href: &str, route: Route, fragment: Option<&str>) -> bool {
    let (path, current_fragment) = split_href(current_href);
    Route::from_path(path) != route || current_fragment != fragment
}

#[inline]
pub fn nav_condensed(scroll_y: f64) -> bool {
    scroll_y > NAV_CONDENSE_SCROLL_Y
}
