//! Rectangles and the current/destination pair every animated entity owns.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::animations::{Easing, Tween, TweenStep};

/// Signed pixel rectangle.
///
/// Unlike [`Rectangle`] the size is signed, so a tween may pass through
/// negative or zero extents (the scrollbar starts at zero length, overshooting
/// easings dip below the start size) without wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn right(&self) -> i32 { self.x + self.w }

    #[inline]
    pub const fn bottom(&self) -> i32 { self.y + self.h }

    /// Same rectangle moved by `(dx, dy)`.
    #[inline]
    pub const fn offset(
        self,
        dx: i32,
        dy: i32,
    ) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// `embedded-graphics` view; negative extents collapse to zero.
    pub fn to_rectangle(self) -> Rectangle {
        Rectangle::new(Point::new(self.x, self.y), Size::new(self.w.max(0) as u32, self.h.max(0) as u32))
    }
}

/// Current and destination rectangle plus the tween moving one toward the
/// other.
///
/// `current` is what gets drawn this frame. `destination` is where the last
/// [`Geometry::animate`] call asked the entity to go, and is what layout
/// decisions (selector padding, camera reveal) read. With no tween running
/// the two normally agree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Geometry {
    pub current: Rect,
    pub destination: Rect,
    tween: Option<Tween>,
}

impl Geometry {
    /// Entity resting at `rect`.
    pub const fn at(rect: Rect) -> Self {
        Self {
            current: rect,
            destination: rect,
            tween: None,
        }
    }

    /// Start moving toward `target` over `frames` frames.
    ///
    /// Any in-flight tween is replaced and the new one starts from the
    /// current interpolated rectangle. With `only_xy` the destination keeps
    /// its size and only position animates.
    pub fn animate(
        &mut self,
        target: Rect,
        frames: u16,
        only_xy: bool,
        ease: Easing,
    ) {
        if only_xy {
            self.destination.x = target.x;
            self.destination.y = target.y;
        } else {
            self.destination = target;
        }
        self.tween = Some(Tween::new(self.current, target, frames, !only_xy, ease));
    }

    /// Put the entity at `rect` immediately, dropping any tween.
    pub fn jump_to(
        &mut self,
        rect: Rect,
    ) {
        self.current = rect;
        self.destination = rect;
        self.tween = None;
    }

    /// Sample the tween, if any. Returns `true` when `current` changed.
    pub fn advance(
        &mut self,
        now_ms: u64,
    ) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        match tween.sample(now_ms) {
            TweenStep::Held => false,
            TweenStep::Frame(rect) => {
                self.current = rect;
                true
            }
            TweenStep::Finished(rect) => {
                self.current = rect;
                self.tween = None;
                true
            }
        }
    }

    #[inline]
    pub const fn is_animating(&self) -> bool { self.tween.is_some() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_FRAME_INTERVAL_MS;

    fn run_to_end(geometry: &mut Geometry) -> u64 {
        let mut now = 0;
        while geometry.is_animating() {
            geometry.advance(now);
            now += MIN_FRAME_INTERVAL_MS;
        }
        now
    }

    #[test]
    fn test_animate_converges_and_clears_tween() {
        let mut geometry = Geometry::at(Rect::new(0, 0, 10, 10));
        geometry.animate(Rect::new(20, 30, 40, 50), 6, false, Easing::InOutBack);
        assert_eq!(geometry.destination, Rect::new(20, 30, 40, 50));
        run_to_end(&mut geometry);
        assert_eq!(geometry.current, geometry.destination, "steady state after the tween ends");
    }

    #[test]
    fn test_only_xy_keeps_size() {
        let mut geometry = Geometry::at(Rect::new(0, 0, 10, 12));
        geometry.animate(Rect::new(5, 6, 0, 0), 3, true, Easing::Linear);
        assert_eq!(geometry.destination, Rect::new(5, 6, 10, 12));
        run_to_end(&mut geometry);
        assert_eq!(geometry.current, Rect::new(5, 6, 10, 12));
    }

    #[test]
    fn test_newest_animation_starts_from_current() {
        let mut geometry = Geometry::at(Rect::new(0, 0, 0, 0));
        geometry.animate(Rect::new(100, 0, 0, 0), 5, true, Easing::Linear);
        geometry.advance(0);
        geometry.advance(16);
        let mid = geometry.current;
        assert_eq!(mid.x, 25, "two of five linear frames");

        geometry.animate(Rect::new(0, 0, 0, 0), 2, true, Easing::Linear);
        geometry.advance(32);
        assert_eq!(geometry.current, mid, "first frame of the new tween is the interrupted position");
        geometry.advance(48);
        assert_eq!(geometry.current.x, 0);
        assert!(!geometry.is_animating());
    }

    #[test]
    fn test_jump_to_drops_tween() {
        let mut geometry = Geometry::default();
        geometry.animate(Rect::new(9, 9, 9, 9), 10, false, Easing::Linear);
        geometry.jump_to(Rect::new(1, 2, 3, 4));
        assert!(!geometry.is_animating());
        assert!(!geometry.advance(1000), "nothing to advance");
        assert_eq!(geometry.current, Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_to_rectangle_clamps_negative_size() {
        let rect = Rect::new(3, 4, -2, 5).to_rectangle();
        assert_eq!(rect.size, Size::new(0, 5));
        assert_eq!(rect.top_left, Point::new(3, 4));
    }
}
