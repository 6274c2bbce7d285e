use crate::core::{FrameLoop, FrameScheduler};
use gloo::render::{request_animation_frame, AnimationFrame};

/// `requestAnimationFrame`-backed scheduler; dropping the handle cancels the
/// pending frame.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

/// Start a display-synchronized loop running `tick` once per frame.
pub fn start_loop(tick: impl FnMut(f64) + 'static) -> FrameLoop<RafScheduler> {
    let frame_loop = FrameLoop::new(RafScheduler, tick);
    frame_loop.start();
    frame_loop
}
