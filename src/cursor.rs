use crate::core::{is_interactive, Follower, FrameLoop, FOLLOWER_OFFSCREEN};
use crate::dom;
use crate::frame::{self, RafScheduler};
use glam::Vec2;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const DOT_ID: &str = "cursor-dot";
const RING_ID: &str = "cursor-ring";
const VISIBLE_CLASS: &str = "is-visible";
const HOVERING_CLASS: &str = "is-hovering";

/// Custom cursor: a dot pinned to the pointer and a ring easing after it.
///
/// Window listeners and the frame loop are acquired in `mount` and released
/// when the value is dropped.
pub struct PointerFollower {
    follower: Rc<RefCell<Follower>>,
    frame_loop: FrameLoop<RafScheduler>,
    listeners: Vec<EventListener>,
}

impl PointerFollower {
    pub fn mount(document: &web::Document, ease: f32) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let dot = dom::ensure_div(document, DOT_ID, "cursor-dot")?;
        let ring = dom::ensure_div(document, RING_ID, "cursor-ring")?;

        // off-screen and transparent until the first pointer move
        for el in [&dot, &ring] {
            dom::set_transform(el, FOLLOWER_OFFSCREEN);
            dom::set_class(el, VISIBLE_CLASS, false);
            dom::set_class(el, HOVERING_CLASS, false);
        }

        let follower = Rc::new(RefCell::new(Follower::new(ease)));
        let mut listeners = Vec::with_capacity(2);

        {
            let follower = follower.clone();
            let dot = dot.clone();
            let ring = ring.clone();
            listeners.push(EventListener::new(
                &window,
                "mousemove",
                move |event: &web::Event| {
                    let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
                        return;
                    };
                    let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                    let first = follower.borrow_mut().on_pointer_move(pos.x, pos.y);
                    // the dot bypasses the frame loop
                    dom::set_transform(&dot, pos);
                    if first {
                        dom::set_transform(&ring, pos);
                        dom::set_class(&dot, VISIBLE_CLASS, true);
                        dom::set_class(&ring, VISIBLE_CLASS, true);
                        log::debug!("[cursor] first move at ({:.0},{:.0})", pos.x, pos.y);
                    }
                },
            ));
        }

        {
            let follower = follower.clone();
            let ring = ring.clone();
            listeners.push(EventListener::new(
                &window,
                "mouseover",
                move |event: &web::Event| {
                    let hovering = event
                        .target()
                        .and_then(|t| t.dyn_into::<web::Element>().ok())
                        .map(|el| is_interactive(&dom::node_descriptor(&el)))
                        .unwrap_or(false);
                    if follower.borrow_mut().set_hovering(hovering) {
                        dom::set_class(&ring, HOVERING_CLASS, hovering);
                        log::trace!("[cursor] hovering={}", hovering);
                    }
                },
            ));
        }

        let frame_loop = {
            let follower = follower.clone();
            frame::start_loop(move |_ts| {
                let pos = follower.borrow_mut().tick();
                dom::set_transform(&ring, pos);
            })
        };

        log::info!("[cursor] mounted (ease {:.2})", follower.borrow().ease());
        Ok(Self {
            follower,
            frame_loop,
            listeners,
        })
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.follower.borrow().state().visible
    }
}

impl Drop for PointerFollower {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        log::info!(
            "[cursor] unmounted after {} frames (visible={})",
            self.frame_loop.frames(),
            self.is_visible()
        );
    }
}
