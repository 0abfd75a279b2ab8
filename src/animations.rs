//! Easing curves and the time-gated tween.
//!
//! A [`Tween`] is a finite, restartable interpolation between two rectangles.
//! It does not own a timer: the entity that owns it calls [`Tween::sample`]
//! once per tick with the current time, and the tween decides whether enough
//! wall-clock time has passed to produce the next frame.
//!
//! # Frame Sequence
//!
//! For `total_frames = n` the tween emits frames `0..n`. Frame `i` uses
//!
//! ```text
//! t      = i / (n - 1)
//! eased  = ease(t)
//! value  = trunc(start + (target - start) * eased)
//! ```
//!
//! Frame 0 is therefore the start rectangle and frame `n - 1` is the target.
//! The final frame is written as the exact target so truncation and easing
//! approximations can never leave an entity one pixel short.
//!
//! # Time Gating
//!
//! A sample is accepted at most once per [`MIN_FRAME_INTERVAL_MS`]. Polling
//! faster returns [`TweenStep::Held`] and leaves the rectangle untouched, so
//! motion speed depends on wall-clock time only.

use micromath::F32Ext;

use crate::config::MIN_FRAME_INTERVAL_MS;
use crate::geometry::Rect;

// =============================================================================
// Easing Constants
// =============================================================================

const BACK_C1: f32 = 1.70158;
const BACK_C2: f32 = BACK_C1 * 1.525;

// =============================================================================
// Easing Functions
// =============================================================================

/// Progress-to-blend mapping (see <https://easings.net>).
///
/// Inputs are in `[0, 1]`. Outputs are not clamped: [`Easing::InOutBack`]
/// dips below 0 and overshoots 1 to give the bounce.
#[derive(Clone, Copy, Debug)]
pub enum Easing {
    Linear,
    OutCirc,
    InOutBack,
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Evaluate the curve at `x`.
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::OutCirc => ease_out_circ(x),
            Self::InOutBack => ease_in_out_back(x),
            Self::Custom(f) => f(x),
        }
    }
}

impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Linear, Self::Linear)
            | (Self::OutCirc, Self::OutCirc)
            | (Self::InOutBack, Self::InOutBack) => true,
            (Self::Custom(a), Self::Custom(b)) => core::ptr::fn_addr_eq(*a, *b),
            _ => false,
        }
    }
}

fn ease_out_circ(x: f32) -> f32 {
    let d = x - 1.0;
    F32Ext::sqrt((1.0 - d * d).max(0.0))
}

fn ease_in_out_back(x: f32) -> f32 {
    if x < 0.5 {
        let a = 2.0 * x;
        (a * a * ((BACK_C2 + 1.0) * a - BACK_C2)) / 2.0
    } else {
        let a = 2.0 * x - 2.0;
        (a * a * ((BACK_C2 + 1.0) * a + BACK_C2) + 2.0) / 2.0
    }
}

// =============================================================================
// Tween
// =============================================================================

/// Outcome of one [`Tween::sample`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenStep {
    /// Called again inside the frame interval; nothing changed.
    Held,
    /// Advanced to a new intermediate frame.
    Frame(Rect),
    /// Emitted the last frame; the owner must drop the tween.
    Finished(Rect),
}

/// Restartable, time-gated interpolation between two rectangles.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: Rect,
    target: Rect,
    total_frames: u16,
    animate_size: bool,
    ease: Easing,
    frame_index: u16,
    last_tick: Option<u64>,
}

impl Tween {
    /// Begin a sequence from `start` to `target`.
    ///
    /// `frames` below 1 is treated as 1 (an immediate jump). With
    /// `animate_size == false` every frame keeps the start width and height.
    pub fn new(
        start: Rect,
        target: Rect,
        frames: u16,
        animate_size: bool,
        ease: Easing,
    ) -> Self {
        Self {
            start,
            target,
            total_frames: frames.max(1),
            animate_size,
            ease,
            frame_index: 0,
            last_tick: None,
        }
    }

    /// Rectangle the sequence converges to (size is the start size when
    /// only position animates).
    pub const fn target(&self) -> Rect {
        if self.animate_size {
            self.target
        } else {
            Rect::new(self.target.x, self.target.y, self.start.w, self.start.h)
        }
    }

    #[inline]
    pub const fn frame_index(&self) -> u16 { self.frame_index }

    #[inline]
    pub const fn total_frames(&self) -> u16 { self.total_frames }

    #[inline]
    pub const fn is_exhausted(&self) -> bool { self.frame_index >= self.total_frames }

    /// Advance one frame if the frame interval has elapsed since the last
    /// accepted sample.
    pub fn sample(
        &mut self,
        now_ms: u64,
    ) -> TweenStep {
        if self.is_exhausted() {
            return TweenStep::Finished(self.target());
        }
        if let Some(last) = self.last_tick
            && now_ms.saturating_sub(last) < MIN_FRAME_INTERVAL_MS
        {
            return TweenStep::Held;
        }
        self.last_tick = Some(now_ms);

        let rect = self.frame_at(self.frame_index);
        self.frame_index += 1;
        if self.is_exhausted() {
            TweenStep::Finished(rect)
        } else {
            TweenStep::Frame(rect)
        }
    }

    /// Rectangle for frame `index` without advancing.
    pub fn frame_at(
        &self,
        index: u16,
    ) -> Rect {
        let last = self.total_frames - 1;
        if index >= last {
            return self.target();
        }

        let eased = self.ease.apply(f32::from(index) / f32::from(last));
        let lerp = |from: i32, to: i32| -> i32 { (from as f32 + (to - from) as f32 * eased) as i32 };

        let x = lerp(self.start.x, self.target.x);
        let y = lerp(self.start.y, self.target.y);
        if self.animate_size {
            Rect::new(x, y, lerp(self.start.w, self.target.w), lerp(self.start.h, self.target.h))
        } else {
            Rect::new(x, y, self.start.w, self.start.h)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
