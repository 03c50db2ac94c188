//! Smooth scrolling for glint.
//!
//! A [`ScrollSession`] follows a target offset through a [`SmoothScroller`]
//! and, on every tick, publishes the smoothed top offset to the callbacks
//! registered in its own [`ScrollSubscribers`]. Sessions are independent:
//! nothing is shared between them.

mod session;
mod smoother;
mod state;
mod subscribers;
pub mod wheel;

pub use session::ScrollSession;
pub use smoother::SmoothScroller;
pub use state::ScrollState;
pub use subscribers::{ScrollSubscribers, SubscriptionId};
