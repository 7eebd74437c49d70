pub mod router;
pub mod swipe;

pub use router::{ControlButton, InputRouter, RouterAction};
pub use swipe::SwipeTracker;
