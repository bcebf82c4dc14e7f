//! Frame scheduling
//!
//! A `FrameTask` is ticked once per display refresh until it asks to stop.
//! The browser driver lives in `dom::frame`; this module stays DOM-free so
//! tasks can be stepped from tests.

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Stop,
}

pub trait FrameTask {
    /// Called with the frame timestamp (ms, same clock as `performance.now()`)
    fn tick(&mut self, now_ms: f64) -> Tick;
}

impl<F> FrameTask for F
where
    F: FnMut(f64) -> Tick,
{
    fn tick(&mut self, now_ms: f64) -> Tick {
        self(now_ms)
    }
}

/// Resources held for as long as a widget stays in the document.
///
/// A widget's frame task calls `check` every frame; the first frame that
/// finds the widget detached drops the resources (listeners, timers) and
/// every later check keeps returning `Tick::Stop`.
#[derive(Debug)]
pub struct Attachment<R> {
    resources: Option<R>,
}

impl<R> Attachment<R> {
    pub fn new(resources: R) -> Self {
        Self { resources: Some(resources) }
    }

    pub fn check(&mut self, connected: bool) -> Tick {
        if connected && self.resources.is_some() {
            Tick::Continue
        } else {
            self.resources.take();
            Tick::Stop
        }
    }

    /// Resources, while still attached
    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.resources.as_mut()
    }

    pub fn is_released(&self) -> bool {
        self.resources.is_none()
    }
}

/// Step a task at a fixed frame interval until it stops or `max_frames` pass.
///
/// Returns the number of ticks delivered.
#[cfg(test)]
pub(crate) fn run_until_stopped<T: FrameTask>(task: &mut T, start_ms: f64, frame_ms: f64, max_frames: usize) -> usize {
    let mut now = start_ms;
    for frame in 0..max_frames {
        if task.tick(now) == Tick::Stop {
            return frame + 1;
        }
        now += frame_ms;
    }
    max_frames
}
