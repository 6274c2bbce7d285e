use crate::core::{needs_history_entry, split_href, Route, SiteConfig};
use crate::cursor::PointerFollower;
use crate::dom;
use crate::nav::Navbar;
use crate::views::{ContactView, HomeView, View};
use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Handle views use to request a route change. Navigation is deferred to a
/// fresh task so the requesting view is never torn down inside its own
/// handler.
#[derive(Clone)]
pub struct Navigator {
    app: Weak<App>,
}

impl Navigator {
    pub fn go(&self, route: Route, fragment: Option<String>) {
        let app = self.app.clone();
        spawn_local(async move {
            if let Some(app) = app.upgrade() {
                app.navigate(route, fragment.as_deref(), true);
            }
        });
    }
}

/// Page root: owns the cursor and navbar for the page lifetime and exactly
/// one mounted view at a time.
pub struct App {
    document: web::Document,
    main: web::Element,
    config: SiteConfig,
    current: Cell<Option<Route>>,
    view: RefCell<Option<View>>,
    cursor: RefCell<Option<PointerFollower>>,
    nav: RefCell<Option<Navbar>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    pub fn mount(document: web::Document, config: SiteConfig) -> anyhow::Result<Rc<App>> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let main = document
            .get_element_by_id("app-main")
            .ok_or_else(|| anyhow::anyhow!("missing #app-main"))?;

        let app = Rc::new(App {
            document: document.clone(),
            main,
            config,
            current: Cell::new(None),
            view: RefCell::new(None),
            cursor: RefCell::new(None),
            nav: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });

        match PointerFollower::mount(&document, app.config.follower_ease) {
            Ok(c) => *app.cursor.borrow_mut() = Some(c),
            Err(e) => log::warn!("[app] cursor disabled: {:?}", e),
        }
        *app.nav.borrow_mut() = Some(Navbar::mount(&document, app.navigator()));

        {
            let weak = Rc::downgrade(&app);
            let listener = EventListener::new(&window, "popstate", move |_ev| {
                let Some(app) = weak.upgrade() else {
                    return;
                };
                let (route, fragment) = current_location();
                app.navigate(route, fragment.as_deref(), false);
            });
            app.listeners.borrow_mut().push(listener);
        }

        let (route, fragment) = current_location();
        app.navigate(route, fragment.as_deref(), false);
        Ok(app)
    }

    pub fn navigator(self: &Rc<Self>) -> Navigator {
        Navigator {
            app: Rc::downgrade(self),
        }
    }

    /// Unmount the current view (if the route changes), then mount the new
    /// one. `push` records a history entry.
    pub fn navigate(self: &Rc<Self>, route: Route, fragment: Option<&str>, push: bool) {
        if push && needs_history_entry(&current_href(), route, fragment) {
            if let Some(history) = web::window().and_then(|w| w.history().ok()) {
                _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route.href(fragment)));
            }
        }

        if self.current.get() == Some(route) {
            match fragment {
                Some(f) => dom::scroll_to_anchor(&self.document, f),
                None => dom::scroll_to_top(),
            }
            return;
        }

        // release the old view's observers and timers before the DOM is replaced
        if let Some(old) = self.view.borrow_mut().take() {
            log::info!("[app] leaving {}", old.route().name());
            drop(old);
        }

        let mounted = match route {
            Route::Home => HomeView::mount(&self.document, &self.main, &self.config, fragment)
                .map(View::Home),
            Route::Contact => ContactView::mount(
                &self.document,
                &self.main,
                &self.config,
                self.navigator(),
            )
            .map(View::Contact),
        };
        match mounted {
            Ok(view) => {
                log::info!("[app] entered {}", route.name());
                *self.view.borrow_mut() = Some(view);
                self.current.set(Some(route));
            }
            Err(e) => {
                log::error!("[app] failed to mount {}: {:?}", route.name(), e);
                self.current.set(None);
            }
        }
        if let Some(nav) = self.nav.borrow().as_ref() {
            nav.set_route(route);
        }
    }
}

/// Path and hash of the current location, e.g. `/contact` or `/#work`.
fn current_href() -> String {
    let Some(location) = web::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    format!("{}{}", path, hash)
}

fn current_location() -> (Route, Option<String>) {
    let href = current_href();
    let (path, fragment) = split_href(&href);
    (Route::from_path(path), fragment.map(str::to_string))
}
