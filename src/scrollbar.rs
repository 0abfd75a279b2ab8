//! Proportional position indicators.
//!
//! Both bars fill `(i + 1) / n` of their track for selection index `i` out of
//! `n` items, so the last item always shows a full bar and a single-item menu
//! is full from the start. Only the fill length animates; the anchor is fixed.
//!
//! ```text
//! X (icon menus, under the header)     Y (list menus, right edge)
//! ███████████░░░░░░░░░░░░░░░░░░░             ██│
//!                                            ██│
//!                                              │
//!                                            ──┴──
//! ```

use crate::animations::Easing;
use crate::config::{
    OUT_GAP, TOP_GAP, XSCROLLBAR_H, XSCROLLBAR_MASK_H, XSCROLLBAR_MASK_Y, XSCROLLBAR_W, YSCROLLBAR_BOTTOM_LINE_Y,
    YSCROLLBAR_H, YSCROLLBAR_LINE_X, YSCROLLBAR_LINE_XW, YSCROLLBAR_LINE_YH, YSCROLLBAR_MASK_W, YSCROLLBAR_MASK_X,
    YSCROLLBAR_W, YSCROLLBAR_X,
};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollBar {
    pub axis: Axis,
    pub geometry: Geometry,
}

/// Fill length for selection `index` of `count` on a track of `track` pixels,
/// rounded to the nearest pixel. Exact halves round up, never to even, so a
/// `.5` fill is one pixel longer than a round-half-even bar would draw.
pub const fn fill_length(
    index: usize,
    count: usize,
    track: i32,
) -> i32 {
    if count <= 1 {
        return track;
    }
    let num = (index as i64 + 1) * track as i64;
    let den = count as i64;
    ((num * 2 + den) / (den * 2)) as i32
}

impl ScrollBar {
    /// Bar parked at its anchor with an empty fill.
    pub const fn new(axis: Axis) -> Self {
        let anchor = match axis {
            Axis::X => Rect::new(OUT_GAP, TOP_GAP, 0, XSCROLLBAR_H),
            Axis::Y => Rect::new(YSCROLLBAR_X, TOP_GAP, YSCROLLBAR_W, 0),
        };
        Self { axis, geometry: Geometry::at(anchor) }
    }

    /// Animate the fill toward the fraction for `index` of `count`.
    pub fn set_value(
        &mut self,
        index: usize,
        count: usize,
        frames: u16,
        ease: Easing,
    ) {
        let target = match self.axis {
            Axis::X => Rect::new(OUT_GAP, TOP_GAP, fill_length(index, count, XSCROLLBAR_W), XSCROLLBAR_H),
            Axis::Y => Rect::new(YSCROLLBAR_X, TOP_GAP, YSCROLLBAR_W, fill_length(index, count, YSCROLLBAR_H)),
        };
        self.geometry.animate(target, frames, false, ease);
    }

    pub fn draw(
        &self,
        frame: &mut FrameBuffer,
    ) {
        let pos = self.geometry.current;
        match self.axis {
            Axis::X => {
                frame.fill_rect(Rect::new(OUT_GAP, XSCROLLBAR_MASK_Y, XSCROLLBAR_W, XSCROLLBAR_MASK_H), false);
                frame.fill_rect(Rect::new(OUT_GAP, TOP_GAP, pos.w, pos.h), true);
            }
            Axis::Y => {
                frame.fill_rect(Rect::new(YSCROLLBAR_MASK_X, TOP_GAP, YSCROLLBAR_MASK_W, YSCROLLBAR_H), false);
                frame.line(YSCROLLBAR_LINE_X, TOP_GAP, YSCROLLBAR_LINE_X, YSCROLLBAR_LINE_YH, true);
                frame.line(
                    YSCROLLBAR_X,
                    YSCROLLBAR_BOTTOM_LINE_Y,
                    YSCROLLBAR_LINE_XW,
                    YSCROLLBAR_BOTTOM_LINE_Y,
                    true,
                );
                frame.fill_rect(Rect::new(YSCROLLBAR_X, TOP_GAP, pos.w, pos.h), true);
            }
        }
    }
}
