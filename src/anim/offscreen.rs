//! Anchor-relative offscreen positions for fly-in / fly-away transitions
//!
//! Anchors follow the usual UI convention: a horizontal anchor of 0 pins the
//! panel to the left edge, 0.5 to the center, 1 to the right edge. Vertical
//! anchors run 0 = bottom, 0.5 = center, 1 = top.
//!
//! Only the left and top positions are computed directly; right and bottom are
//! the negation of those. That mirror is exact for centered layouts and an
//! approximation for everything else.

use serde::{Deserialize, Serialize};

use super::interpolate::Vec2;

/// Canvas edge a panel flies from or away to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }
}

/// The container every managed panel lives in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    /// Scaler reference resolution the layout was authored against
    pub reference_resolution: Vec2,
}

/// Layout data captured from a panel at initialization
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Anchored position the panel rests at while visible
    pub position: Vec2,
    /// Panel width and height
    pub size: Vec2,
    /// Upper anchor fractions (0, 0.5 or 1 on each axis)
    #[serde(default)]
    pub anchor_max: Vec2,
}

/// Anchored position that puts the panel just past the given canvas edge.
///
/// The axis that is not travelled keeps the panel's resting coordinate.
pub fn offscreen_position(layout: &Layout, canvas: &Canvas, side: Side) -> Vec2 {
    if side.is_horizontal() {
        let x = offscreen_left(layout.anchor_max.x, layout.size.x, canvas.width);
        match side {
            Side::Right => Vec2::new(-x, layout.position.y),
            _ => Vec2::new(x, layout.position.y),
        }
    } else {
        let y = offscreen_top(layout.anchor_max.y, layout.size.y, canvas.height);
        match side {
            Side::Bottom => Vec2::new(layout.position.x, -y),
            _ => Vec2::new(layout.position.x, y),
        }
    }
}

fn offscreen_left(anchor: f32, width: f32, canvas_width: f32) -> f32 {
    if anchor == 0.0 {
        -width
    } else if anchor == 0.5 {
        (-width - canvas_width) / 2.0
    } else {
        -width - canvas_width / 2.0 - width / 2.0
    }
}

fn offscreen_top(anchor: f32, height: f32, canvas_height: f32) -> f32 {
    if anchor == 0.0 {
        canvas_height + height / 2.0
    } else if anchor == 0.5 {
        canvas_height / 2.0 + height / 2.0
    } else {
        height
    }
}
