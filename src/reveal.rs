use crate::core::{
    RevealOptions, RevealTracker, RevealTransition, REVEALED_CLASS, REVEAL_ID_ATTR,
    REVEAL_SELECTOR,
};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Marks `.reveal-on-scroll` elements under a view root as revealed the
/// first time they enter the trigger region. Disconnects on drop.
pub struct RevealController {
    observer: web::IntersectionObserver,
    tracker: Rc<RefCell<RevealTracker>>,
    _callback: ObserverCallback,
}

impl RevealController {
    pub fn mount(root: &web::Element, options: RevealOptions) -> anyhow::Result<Self> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new()));

        let cb_tracker = tracker.clone();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = reveal_id(&target) else {
                        continue;
                    };
                    let transition = cb_tracker
                        .borrow_mut()
                        .on_intersect(id, entry.is_intersecting());
                    match transition {
                        RevealTransition::Revealed => {
                            dom::set_class(&target, REVEALED_CLASS, true);
                            observer.unobserve(&target);
                            log::debug!("[reveal] element {} revealed", id);
                        }
                        RevealTransition::AlreadyRevealed => observer.unobserve(&target),
                        RevealTransition::Ignored => {}
                    }
                }
            },
        );

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let elements = dom::query_all(root, REVEAL_SELECTOR);
        {
            let mut t = tracker.borrow_mut();
            for (i, el) in elements.iter().enumerate() {
                let id = i as u32;
                _ = el.set_attribute(REVEAL_ID_ATTR, &id.to_string());
                if el.class_list().contains(REVEALED_CLASS) {
                    t.register_revealed(id);
                    continue;
                }
                t.register(id);
                observer.observe(el);
            }
        }
        log::info!(
            "[reveal] observing {} elements (threshold {}, margin {})",
            tracker.borrow().pending_count(),
            options.threshold,
            options.root_margin()
        );

        Ok(Self {
            observer,
            tracker,
            _callback: callback,
        })
    }

    pub fn revealed_count(&self) -> usize {
        self.tracker.borrow().revealed_count()
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!(
            "[reveal] disconnected ({} of {} revealed)",
            self.revealed_count(),
            self.tracker.borrow().len()
        );
    }
}

fn reveal_id(el: &web::Element) -> Option<u32> {
    el.get_attribute(REVEAL_ID_ATTR)?.parse().ok()
}
