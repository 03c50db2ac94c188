use glint_config::schema::ScrollConfig;

use crate::smoother::SmoothScroller;
use crate::state::ScrollState;
use crate::subscribers::{ScrollSubscribers, SubscriptionId};

/// One scrollable document: its extent, smoothing engine and subscribers.
#[derive(Debug)]
pub struct ScrollSession {
    scroll_height: f64,
    viewport_height: f64,
    scroller: SmoothScroller,
    state: ScrollState,
    subscribers: ScrollSubscribers,
}

impl ScrollSession {
    pub fn new(smooth: f64) -> Self {
        Self {
            scroll_height: 0.0,
            viewport_height: 0.0,
            scroller: SmoothScroller::new(smooth),
            state: ScrollState::default(),
            subscribers: ScrollSubscribers::new(),
        }
    }

    /// Session for `config.content_height` of content in `viewport_height`.
    pub fn from_config(config: &ScrollConfig, viewport_height: f64) -> Self {
        let mut session = Self::new(config.smooth);
        session.set_extent(config.content_height, viewport_height);
        session
    }

    /// Update the document and viewport heights.
    ///
    /// The target is clamped into the new range.
    pub fn set_extent(&mut self, scroll_height: f64, viewport_height: f64) {
        self.scroll_height = scroll_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        let target = self.clamp(self.scroller.target());
        self.scroller.set_target(target);
        tracing::debug!(
            scroll_height = self.scroll_height,
            viewport_height = self.viewport_height,
            "scroll extent updated"
        );
    }

    /// Scrollable range in pixels (`scroll_height - viewport_height`).
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.viewport_height).max(0.0)
    }

    /// Set the target offset; the smoothed position follows on later ticks.
    pub fn scroll_to(&mut self, offset: f64) {
        let target = self.clamp(offset);
        self.scroller.set_target(target);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroller.target() + delta);
    }

    /// Advance smoothing by `dt` seconds and publish the new top offset.
    pub fn tick(&mut self, dt: f64) -> ScrollState {
        let position = self.scroller.step(dt);
        self.state = ScrollState::from_position(position, self.max_scroll());
        self.subscribers.notify(self.state.top);
        self.state
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(f64) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn target(&self) -> f64 {
        self.scroller.target()
    }

    pub fn is_settled(&self) -> bool {
        self.scroller.is_settled()
    }

    pub fn subscribers(&self) -> &ScrollSubscribers {
        &self.subscribers
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll())
    }
}

impl Default for ScrollSession {
    fn default() -> Self {
        Self::from_config(&ScrollConfig::default(), 0.0)
    }
}
