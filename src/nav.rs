use crate::app::Navigator;
use crate::core::{nav_condensed, split_href, Route};
use crate::dom;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

const NAV_ID: &str = "site-nav";
const CONDENSED_CLASS: &str = "is-condensed";
const IN_APP_LINK: &str = "a[data-link]";

/// Condenses the navbar on scroll and routes in-app links without a reload.
pub struct Navbar {
    nav: Option<web::Element>,
    _listeners: Vec<EventListener>,
}

impl Navbar {
    pub fn mount(document: &web::Document, navigator: Navigator) -> Self {
        let nav = document.get_element_by_id(NAV_ID);
        let mut listeners = Vec::with_capacity(2);

        if let (Some(window), Some(nav_el)) = (web::window(), nav.clone()) {
            let win = window.clone();
            listeners.push(EventListener::new(&window, "scroll", move |_ev| {
                let y = win.scroll_y().unwrap_or(0.0);
                dom::set_class(&nav_el, CONDENSED_CLASS, nav_condensed(y));
            }));
        } else {
            log::debug!("[nav] no #{}; scroll state disabled", NAV_ID);
        }

        listeners.push(EventListener::new(document, "click", move |ev| {
            let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            // let the browser handle new-tab and modified clicks
            if mouse.button() != 0
                || mouse.ctrl_key()
                || mouse.meta_key()
                || mouse.shift_key()
                || mouse.alt_key()
            {
                return;
            }
            let Some(link) = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(IN_APP_LINK).ok().flatten())
            else {
                return;
            };
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let (path, fragment) = split_href(&href);
            ev.prevent_default();
            navigator.go(Route::from_path(path), fragment.map(str::to_string));
        }));

        Self {
            nav,
            _listeners: listeners,
        }
    }

    /// Reflect the active route on the navbar for styling.
    pub fn set_route(&self, route: Route) {
        if let Some(nav) = &self.nav {
            _ = nav.set_attribute("data-route", route.name());
        }
    }
}
