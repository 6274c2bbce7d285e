use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Source of per-display-frame callbacks. Dropping the returned handle must
/// cancel the request if it has not fired yet.
pub trait FrameScheduler {
    type Handle;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

struct LoopInner<S: FrameScheduler> {
    scheduler: S,
    running: Cell<bool>,
    pending: RefCell<Option<S::Handle>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
    frames: Cell<u64>,
}

/// Self-rescheduling frame loop with explicit start/stop.
///
/// Each tick requests the next frame from inside the callback, so the loop
/// follows the display's paint cycle and pauses wherever the scheduler does.
/// After `stop()` returns no further tick runs until `start()` is called
/// again. Dropping the loop stops it.
pub struct FrameLoop<S: FrameScheduler + 'static> {
    inner: Rc<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn new(scheduler: S, tick: impl FnMut(f64) + 'static) -> Self {
        Self {
            inner: Rc::new(LoopInner {
                scheduler,
                running: Cell::new(false),
                pending: RefCell::new(None),
                tick: RefCell::new(Box::new(tick)),
                frames: Cell::new(0),
            }),
        }
    }

    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        schedule(&self.inner);
    }

    pub fn stop(&self) {
        self.inner.running.set(false);
        // dropping the handle cancels the outstanding request
        let pending = self.inner.pending.borrow_mut().take();
        drop(pending);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Ticks executed since construction.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.inner.frames.get()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule<S: FrameScheduler + 'static>(inner: &Rc<LoopInner<S>>) {
    let weak: Weak<LoopInner<S>> = Rc::downgrade(inner);
    let handle = inner.scheduler.request(Box::new(move |timestamp| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let fired = inner.pending.borrow_mut().take();
        drop(fired);
        if !inner.running.get() {
            return;
        }
        {
            let mut tick = inner.tick.borrow_mut();
            (*tick)(timestamp);
        }
        inner.frames.set(inner.frames.get() + 1);
        // the tick may have stopped the loop
        if inner.running.get() {
            schedule(&inner);
        }
    }));
    *inner.pending.borrow_mut() = Some(handle);
}
