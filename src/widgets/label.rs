//! Text label with an optional horizontal marquee.
//!
//! # Marquee
//!
//! A label wider than its row scrolls left by `text_scroll_speed` pixels per
//! frame interval while it is selected (or always, with [`Marquee::always`]).
//! Once the text has fully left the row it re-enters from the right edge.
//! When the selection moves away mid-lap the label keeps scrolling until the
//! offset wraps back to zero, so it never freezes half-scrolled.

use embedded_graphics::{
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;

use crate::config::{DISPLAY_W_GAP_BAR, FONT_SIZE, LABEL_TEXT_CAPACITY, LIST_MAX_W, MIN_FRAME_INTERVAL_MS, OUT_GAP};
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};
use crate::styles::{TEXT_STYLE, text_width};

pub type LabelText = String<LABEL_TEXT_CAPACITY>;

/// Copy `text` into fixed-capacity label storage.
pub fn label_text(text: &str) -> Result<LabelText, UiError> {
    let mut out = LabelText::new();
    out.push_str(text).map_err(|_| UiError::TextTooLong(LABEL_TEXT_CAPACITY))?;
    Ok(out)
}

/// Marquee behaviour of a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marquee {
    /// Marquee is allowed at all.
    pub enabled: bool,
    /// Scroll even when not selected.
    pub always: bool,
    /// Row width beyond which the marquee kicks in.
    pub width: i32,
}

impl Marquee {
    /// Scroll while selected, across the list row width.
    pub const ROW: Self = Self {
        enabled: true,
        always: false,
        width: DISPLAY_W_GAP_BAR,
    };

    pub const OFF: Self = Self { enabled: false, ..Self::ROW };
}

impl Default for Marquee {
    fn default() -> Self { Self::ROW }
}

#[derive(Clone, Debug)]
pub struct Label {
    pub geometry: Geometry,
    text: LabelText,
    loaded: bool,
    pub marquee: Marquee,
    xscroll: i32,
    last_scroll: Option<u64>,
}

impl Label {
    /// Label with no text yet.
    pub const fn empty() -> Self {
        Self {
            geometry: Geometry::at(Rect::new(0, 0, 0, FONT_SIZE)),
            text: LabelText::new(),
            loaded: false,
            marquee: Marquee::ROW,
            xscroll: 0,
            last_scroll: None,
        }
    }

    pub fn new(text: &str) -> Result<Self, UiError> {
        Ok(Self { text: label_text(text)?, ..Self::empty() })
    }

    pub fn text(&self) -> &str { &self.text }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }

    #[inline]
    pub const fn xscroll(&self) -> i32 { self.xscroll }

    /// Measure the text and mark the label drawable.
    pub fn init(&mut self) {
        let w = text_width(&TEXT_STYLE, &self.text);
        self.geometry.current.w = w;
        self.geometry.destination.w = w;
        self.loaded = true;
    }

    /// Replace the text and re-measure.
    pub fn set_text(
        &mut self,
        text: &str,
    ) -> Result<(), UiError> {
        self.text = label_text(text)?;
        self.init();
        Ok(())
    }

    /// Advance the marquee one step.
    ///
    /// `nested_w` is the width taken on the right by a nested widget plus its
    /// gap (0 when there is none).
    pub fn scroll_text(
        &mut self,
        now_ms: u64,
        selected: bool,
        nested_w: i32,
        speed: i32,
    ) {
        if let Some(last) = self.last_scroll
            && now_ms.saturating_sub(last) < MIN_FRAME_INTERVAL_MS
        {
            return;
        }
        self.last_scroll = Some(now_ms);

        if !(selected || self.marquee.always || self.xscroll != 0) {
            return;
        }
        let row_w = self.marquee.width - nested_w;
        if self.geometry.current.w + OUT_GAP <= row_w {
            return;
        }

        self.xscroll += speed;
        if !selected && !self.marquee.always && self.xscroll.abs() < speed {
            self.xscroll = 0;
        } else if self.xscroll > self.geometry.current.w {
            self.xscroll = -LIST_MAX_W + nested_w;
        }
    }

    /// Draw at the current position shifted by `(ox, oy)`.
    pub fn draw(
        &self,
        frame: &mut FrameBuffer,
        ox: i32,
        oy: i32,
    ) {
        if !self.loaded {
            return;
        }
        let pos = self.geometry.current;
        Text::with_baseline(&self.text, Point::new(pos.x + ox - self.xscroll, pos.y + oy), TEXT_STYLE, Baseline::Top)
            .draw(frame)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_label() -> Label {
        let mut label = Label::new("A label far too long to fit on one row").unwrap();
        label.init();
        label
    }

    #[test]
    fn test_init_measures_width() {
        let mut label = Label::new("Hello").unwrap();
        assert!(!label.is_loaded());
        assert_eq!(label.geometry.current.w, 0, "width unknown until init");
        label.init();
        assert!(label.is_loaded());
        assert_eq!(label.geometry.current.w, 30);
        assert_eq!(label.geometry.current.h, FONT_SIZE);
    }

    #[test]
    fn test_text_too_long() {
        let text = "x".repeat(LABEL_TEXT_CAPACITY + 1);
        assert_eq!(Label::new(&text).unwrap_err(), UiError::TextTooLong(LABEL_TEXT_CAPACITY));
    }

    #[test]
    fn test_short_label_does_not_scroll() {
        let mut label = Label::new("Short").unwrap();
        label.init();
        label.scroll_text(0, true, 0, 2);
        assert_eq!(label.xscroll(), 0);
    }

    #[test]
    fn test_selected_long_label_scrolls_once_per_interval() {
        let mut label = long_label();
        label.scroll_text(0, true, 0, 2);
        assert_eq!(label.xscroll(), 2);
        label.scroll_text(5, true, 0, 2);
        assert_eq!(label.xscroll(), 2, "held inside the frame interval");
        label.scroll_text(16, true, 0, 2);
        assert_eq!(label.xscroll(), 4);
    }

    #[test]
    fn test_marquee_wraps_to_right_edge() {
        let mut label = long_label();
        let w = label.geometry.current.w;
        let mut now = 0;
        while label.xscroll() <= w - 2 {
            label.scroll_text(now, true, 0, 2);
            now += MIN_FRAME_INTERVAL_MS;
        }
        label.scroll_text(now, true, 0, 2);
        assert_eq!(label.xscroll(), -LIST_MAX_W, "re-enters from the right");
    }

    #[test]
    fn test_deselected_label_finishes_lap() {
        let mut label = long_label();
        label.scroll_text(0, true, 0, 2);
        assert_eq!(label.xscroll(), 2);

        let mut now = MIN_FRAME_INTERVAL_MS;
        for _ in 0..1000 {
            label.scroll_text(now, false, 0, 2);
            now += MIN_FRAME_INTERVAL_MS;
            if label.xscroll() == 0 {
                break;
            }
        }
        assert_eq!(label.xscroll(), 0, "rests at zero after the lap");

        label.scroll_text(now, false, 0, 2);
        assert_eq!(label.xscroll(), 0, "stays at rest while deselected");
    }
}
