//! Scroll-driven visual state for the splash section.
//!
//! The tracked state is a single scalar, the page offset. Everything the
//! splash renders from it (near-top flag, parallax shift, background fade)
//! is a pure function of that offset and the viewport height, recomputed on
//! every sample.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Fraction of the scroll distance applied to the splash text.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Offset (px) over which the background fades from 1 to 0.
pub const FADE_DISTANCE: f64 = 100.0;

/// The page counts as "near top" above `viewport_height / NEAR_TOP_DIVISOR`.
pub const NEAR_TOP_DIVISOR: f64 = 3.0;

pub fn near_top(offset: f64, viewport_height: f64) -> bool {
    offset <= 0.0 || offset < viewport_height / NEAR_TOP_DIVISOR
}

pub fn parallax_offset(offset: f64) -> f64 {
    offset * PARALLAX_FACTOR
}

/// Raw fade value; negative once the offset passes [`FADE_DISTANCE`].
pub fn fade_opacity(offset: f64) -> f64 {
    1.0 - offset / FADE_DISTANCE
}

/// One reading of the browser's scroll position, in device pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub viewport_height: f64,
    pub near_top: bool,
    pub parallax_offset: f64,
    pub fade_opacity: f64,
}

impl ScrollState {
    pub fn initial() -> Self {
        Self::from_sample(ScrollSample::default())
    }

    /// Derive the state for `sample`. Overscroll (negative) and non-finite
    /// readings count as offset 0.
    pub fn from_sample(sample: ScrollSample) -> Self {
        let offset = if sample.offset.is_finite() {
            sample.offset.max(0.0)
        } else {
            0.0
        };
        let viewport_height = if sample.viewport_height.is_finite() {
            sample.viewport_height.max(0.0)
        } else {
            0.0
        };
        Self {
            offset,
            viewport_height,
            near_top: near_top(offset, viewport_height),
            parallax_offset: parallax_offset(offset),
            fade_opacity: fade_opacity(offset),
        }
    }

    /// Fade value clamped to what CSS can display.
    pub fn visible_opacity(&self) -> f64 {
        self.fade_opacity.clamp(0.0, 1.0)
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Per-view scroll state machine.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    state: ScrollState,
    attached: bool,
    updates: u64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            state: ScrollState::initial(),
            attached: true,
            updates: 0,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Samples applied so far.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Apply a sample. Returns `None` once detached; late samples are dropped.
    pub fn handle(&mut self, sample: ScrollSample) -> Option<ScrollState> {
        if !self.attached {
            return None;
        }
        self.state = ScrollState::from_sample(sample);
        self.updates += 1;
        Some(self.state)
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// A stream of scroll samples that can be listened to and released.
pub trait ScrollSource {
    type Handle;

    fn listen(&self, on_scroll: Box<dyn FnMut(ScrollSample)>) -> Self::Handle;
    fn unlisten(&self, handle: Self::Handle);
}

/// Feeds a [`ScrollTracker`] from a [`ScrollSource`] for as long as it lives.
///
/// Dropping the subscription detaches the tracker and releases the listener,
/// whichever way the owning view goes away.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
    tracker: Rc<RefCell<ScrollTracker>>,
    live: Rc<Cell<bool>>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn attach(
        source: S,
        tracker: Rc<RefCell<ScrollTracker>>,
        mut on_change: impl FnMut(ScrollState) + 'static,
    ) -> Self {
        let feed = Rc::clone(&tracker);
        let live = Rc::new(Cell::new(true));
        let gate = Rc::clone(&live);
        let handle = source.listen(Box::new(move |sample| {
            if !gate.get() {
                return;
            }
            let next = feed.borrow_mut().handle(sample);
            if let Some(state) = next {
                on_change(state);
            }
        }));
        Self {
            source,
            handle: Some(handle),
            tracker,
            live,
        }
    }

    pub fn tracker(&self) -> &Rc<RefCell<ScrollTracker>> {
        &self.tracker
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        // The feed checks `live` before touching the tracker, so late samples
        // are dropped even if the tracker is borrowed right now.
        self.live.set(false);
        if let Ok(mut tracker) = self.tracker.try_borrow_mut() {
            tracker.detach();
        }
        if let Some(handle) = self.handle.take() {
            self.source.unlisten(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Listener = Rc<RefCell<Option<Box<dyn FnMut(ScrollSample)>>>>;

    /// Source that keeps a listener alive even after `unlisten`, to model
    /// events already queued by the host.
    #[derive(Clone, Default)]
    struct ManualSource {
        listener: Listener,
        released: Rc<Cell<u32>>,
    }

    impl ManualSource {
        fn emit(&self, offset: f64, viewport_height: f64) {
            if let Some(listener) = self.listener.borrow_mut().as_mut() {
                listener(ScrollSample::new(offset, viewport_height));
            }
        }
    }

    impl ScrollSource for ManualSource {
        type Handle = ();

        fn listen(&self, on_scroll: Box<dyn FnMut(ScrollSample)>) {
            *self.listener.borrow_mut() = Some(on_scroll);
        }

        fn unlisten(&self, _: ()) {
            self.released.set(self.released.get() + 1);
        }
    }

    #[test]
    fn initial_state_is_at_top() {
        let state = ScrollState::initial();
        assert_eq!(state.offset, 0.0);
        assert!(state.near_top);
        assert_eq!(state.parallax_offset, 0.0);
        assert_eq!(state.fade_opacity, 1.0);
    }

    #[test]
    fn derives_values_from_offset() {
        let state = ScrollState::from_sample(ScrollSample::new(150.0, 300.0));
        assert!(!state.near_top);
        assert_eq!(state.parallax_offset, 75.0);
        assert_eq!(state.fade_opacity, -0.5);
        assert_eq!(state.visible_opacity(), 0.0);
    }

    #[test]
    fn near_top_boundary_is_exclusive() {
        assert!(near_top(99.9, 300.0));
        assert!(!near_top(100.0, 300.0));
    }

    #[test]
    fn overscroll_counts_as_top() {
        let state = ScrollState::from_sample(ScrollSample::new(-40.0, 800.0));
        assert_eq!(state, ScrollState::from_sample(ScrollSample::new(0.0, 800.0)));
        assert!(ScrollState::from_sample(ScrollSample::new(f64::NAN, 800.0)).near_top);
    }

    #[test]
    fn tracker_applies_samples_in_order() {
        let mut tracker = ScrollTracker::new();
        tracker.handle(ScrollSample::new(10.0, 600.0));
        let last = tracker.handle(ScrollSample::new(400.0, 600.0)).unwrap();
        assert_eq!(tracker.state(), last);
        assert_eq!(last.offset, 400.0);
        assert_eq!(tracker.updates(), 2);
    }

    #[test]
    fn subscription_feeds_tracker_until_dropped() {
        let source = ManualSource::default();
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
        let notified = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&notified);

        let subscription =
            ScrollSubscription::attach(source.clone(), Rc::clone(&tracker), move |_| {
                seen.set(seen.get() + 1)
            });
        source.emit(50.0, 900.0);
        source.emit(120.0, 900.0);
        assert_eq!(notified.get(), 2);
        assert_eq!(subscription.tracker().borrow().state().offset, 120.0);

        drop(subscription);
        assert_eq!(source.released.get(), 1);

        source.emit(600.0, 900.0);
        assert_eq!(notified.get(), 2);
        assert_eq!(tracker.borrow().updates(), 2);
        assert_eq!(tracker.borrow().state().offset, 120.0);
        assert!(!tracker.borrow().is_attached());
    }

    #[test]
    fn late_sample_ignored_when_tracker_borrowed_during_drop() {
        let source = ManualSource::default();
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
        let notified = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&notified);

        let subscription =
            ScrollSubscription::attach(source.clone(), Rc::clone(&tracker), move |_| {
                seen.set(seen.get() + 1)
            });
        let reading = tracker.borrow();
        drop(subscription);
        drop(reading);
        assert_eq!(source.released.get(), 1);

        source.emit(500.0, 900.0);
        assert_eq!(notified.get(), 0);
        assert_eq!(tracker.borrow().updates(), 0);
        assert_eq!(tracker.borrow().state(), ScrollState::initial());
    }

    #[test]
    fn subscription_released_on_unwind() {
        let source = ManualSource::default();
        let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
        let guarded = source.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _subscription = ScrollSubscription::attach(guarded, tracker, |_| {});
            panic!("view failed to mount");
        }));
        assert!(result.is_err());
        assert_eq!(source.released.get(), 1);
    }
}
