//! Animation primitives for panel transitions
//!
//! Everything in here is pure bookkeeping: no panel state is touched.
//!
//! - `interpolate`: linear interpolation of opacity and anchored positions
//! - `offscreen`: where a panel sits when it has flown off one canvas edge
//! - `gate`: the single "a transition is running" latch shared by all panels

mod gate;
mod interpolate;
mod offscreen;

pub use gate::TransitionGate;
pub use interpolate::{interpolate, interpolate_vec2, lerp, Vec2};
pub use offscreen::{offscreen_position, Canvas, Layout, Side};

/// Length of every animated transition, in real seconds
pub const TRANSITION_SECONDS: f32 = 1.0;
