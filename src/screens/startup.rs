//! Startup splash shown while the loader queue drains.
//!
//! # Visual Layout
//!
//! ```text
//! ┌────────────────────────────────────┐
//! │              ▲ enters from y = -10 │
//! │                                    │
//! │             Welcome!               │  logo, centered
//! │                                    │
//! │              ▲ leaves to y = -20   │
//! └────────────────────────────────────┘
//! ```
//!
//! The splash only owns the logo. Pacing (one frame, one flush, one 16 ms
//! sleep) and the loads done between frames belong to
//! [`Ui::startup`](crate::ui::Ui::startup).

use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::config::{HALF_DISPLAY_H, HALF_DISPLAY_W, UiConfig};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};
use crate::styles::{LOGO_STYLE, text_height, text_width};

// =============================================================================
// Splash Layout Constants
// =============================================================================

/// Logo top edge before the entrance slide.
const LOGO_START_Y: i32 = -10;

/// Logo top edge at the end of the exit slide (fully above the panel).
const LOGO_EXIT_Y: i32 = -20;

pub struct Splash {
    logo: Geometry,
    text: &'static str,
}

impl Splash {
    pub fn new(text: &'static str) -> Self {
        let w = text_width(&LOGO_STYLE, text);
        let h = text_height(&LOGO_STYLE);
        Self {
            logo: Geometry::at(Rect::new(HALF_DISPLAY_W - w / 2, LOGO_START_Y, w, h)),
            text,
        }
    }

    /// Slide the logo down to the middle of the panel.
    pub fn enter(
        &mut self,
        config: &UiConfig,
    ) {
        let pos = self.logo.current;
        let target = Rect::new(pos.x, HALF_DISPLAY_H - pos.h / 2, pos.w, pos.h);
        self.logo
            .animate(target, config.default_speed, true, config.default_ease);
    }

    /// Slide the logo out over the top edge.
    pub fn leave(
        &mut self,
        config: &UiConfig,
    ) {
        let pos = self.logo.current;
        self.logo.animate(
            Rect::new(pos.x, LOGO_EXIT_Y, pos.w, pos.h),
            config.default_speed,
            true,
            config.default_ease,
        );
    }

    #[inline]
    pub const fn is_moving(&self) -> bool { self.logo.is_animating() }

    #[inline]
    pub const fn position(&self) -> Rect { self.logo.current }

    /// Advance the logo and draw it onto a cleared frame.
    pub fn update(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
    ) {
        self.logo.advance(now_ms);
        frame.fill(false);
        let pos = self.logo.current;
        Text::with_baseline(self.text, Point::new(pos.x, pos.y), LOGO_STYLE, Baseline::Top)
            .draw(frame)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_FRAME_INTERVAL_MS;

    fn settle(
        splash: &mut Splash,
        frame: &mut FrameBuffer,
        mut now: u64,
    ) -> u64 {
        while splash.is_moving() {
            splash.update(frame, now);
            now += MIN_FRAME_INTERVAL_MS;
        }
        now
    }

    #[test]
    fn test_logo_centered() {
        let mut frame = FrameBuffer::new();
        let mut splash = Splash::new("Welcome!");
        assert_eq!(splash.position().y, LOGO_START_Y);

        splash.enter(&UiConfig::default());
        settle(&mut splash, &mut frame, 0);
        let pos = splash.position();
        assert_eq!(pos.y, HALF_DISPLAY_H - pos.h / 2, "vertically centered");
        assert_eq!(pos.x, HALF_DISPLAY_W - pos.w / 2, "horizontally centered");
        assert!(frame.count_lit(pos) > 0, "logo drawn");
    }

    #[test]
    fn test_leave_clears_panel() {
        let mut frame = FrameBuffer::new();
        let mut splash = Splash::new("Hi");
        let config = UiConfig::default();
        splash.enter(&config);
        let now = settle(&mut splash, &mut frame, 0);
        splash.leave(&config);
        let now = settle(&mut splash, &mut frame, now);
        splash.update(&mut frame, now);
        assert_eq!(splash.position().y, LOGO_EXIT_Y);
        assert_eq!(frame.count_lit(Rect::new(0, 8, 128, 56)), 0, "nothing left below the top edge");
    }
}
