//! Transient text dialog that slides in from the right and closes itself.
//!
//! # Lifecycle
//!
//! ```text
//!            open()                tween done            duration elapsed
//! Closed ─────────────► Opening ─────────────► Open ─────────────────► Closing
//!   ▲                      ▲                     │                        │
//!   │                      └──── open() ─────────┘                        │
//!   └───────────────────── back at the right edge (detach) ───────────────┘
//! ```
//!
//! The box and its text are two separately tweened entities moving in
//! lockstep, so the text can sit inside the border while both slide.

use log::{debug, warn};

use crate::animations::Easing;
use crate::config::{
    DIALOG_BASE_X, DIALOG_IN_GAP, DIALOG_IN_GAP_M2, DIALOG_MAX_W, DIALOG_MAX_X, DIALOG_OUT_GAP, DISPLAY_W,
};
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};
use crate::widgets::label::{Label, Marquee};
use crate::widgets::primitives::round_rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Opening,
    Open { since_ms: u64 },
    Closing,
}

/// Result of one dialog tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogTick {
    Visible,
    /// Exit slide finished; remove from the overlay set.
    Detached,
}

/// Motion parameters shared by every dialog.
#[derive(Clone, Copy, Debug)]
pub struct DialogMotion {
    pub frames: u16,
    pub ease: Easing,
}

#[derive(Clone, Debug)]
pub struct Dialog {
    pub geometry: Geometry,
    label: Label,
    pub duration_ms: u64,
    state: DialogState,
}

impl Dialog {
    pub fn new(
        text: &str,
        duration_ms: u64,
    ) -> Result<Self, UiError> {
        let mut label = Label::new(text)?;
        label.marquee = Marquee::OFF;
        Ok(Self {
            geometry: Geometry::default(),
            label,
            duration_ms,
            state: DialogState::Closed,
        })
    }

    #[inline]
    pub const fn state(&self) -> DialogState { self.state }

    pub fn text(&self) -> &str { self.label.text() }

    /// Measure the text and lay out the box. With `reset` both entities are
    /// parked off-screen at the right edge.
    pub fn init(
        &mut self,
        reset: bool,
    ) {
        self.label.init();
        let text = self.label.geometry.current;
        if text.w > DIALOG_MAX_W {
            warn!("ui-dialog: text '{}' is {}px wide, max {}", self.label.text(), text.w, DIALOG_MAX_W);
        }

        let w = DIALOG_MAX_W.min(text.w + DIALOG_IN_GAP_M2);
        let h = text.h + DIALOG_IN_GAP_M2;
        let dx = DIALOG_MAX_X.max(DIALOG_BASE_X - text.w);

        let current = if reset {
            Rect::new(DISPLAY_W, DIALOG_OUT_GAP, w, h)
        } else {
            Rect::new(self.geometry.current.x, self.geometry.current.y, w, h)
        };
        self.geometry.current = current;
        self.geometry.destination = Rect::new(dx, DIALOG_OUT_GAP, w, h);

        if reset {
            self.label.geometry.current.x = DISPLAY_W;
            self.label.geometry.current.y = DIALOG_OUT_GAP + DIALOG_IN_GAP;
        }
        self.label.geometry.destination.x = dx + DIALOG_IN_GAP;
        self.label.geometry.destination.y = self.label.geometry.current.y;
    }

    /// Replace the text and start (or restart) the entrance slide from the
    /// current position.
    pub fn open(
        &mut self,
        text: &str,
        motion: DialogMotion,
    ) -> Result<(), UiError> {
        self.label.set_text(text)?;
        let reset = self.state == DialogState::Closed;
        self.init(reset);
        self.slide(self.geometry.destination, self.label.geometry.destination, motion);
        self.state = DialogState::Opening;
        debug!("ui-dialog: opening '{}'", self.label.text());
        Ok(())
    }

    /// Start the exit slide.
    pub fn close(
        &mut self,
        motion: DialogMotion,
    ) {
        let boxed = Rect::new(DISPLAY_W, DIALOG_OUT_GAP, 0, 0);
        let text = Rect::new(DISPLAY_W, DIALOG_OUT_GAP + DIALOG_IN_GAP, 0, 0);
        self.slide(boxed, text, motion);
        self.state = DialogState::Closing;
        debug!("ui-dialog: closing '{}'", self.label.text());
    }

    fn slide(
        &mut self,
        boxed: Rect,
        text: Rect,
        motion: DialogMotion,
    ) {
        self.geometry.animate(boxed, motion.frames, true, motion.ease);
        self.label.geometry.animate(text, motion.frames, true, motion.ease);
    }

    /// Advance the lifecycle and draw.
    pub fn update(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        motion: DialogMotion,
    ) -> DialogTick {
        if let DialogState::Open { since_ms } = self.state
            && now_ms.saturating_sub(since_ms) >= self.duration_ms
        {
            self.close(motion);
        }

        if self.geometry.is_animating() {
            self.geometry.advance(now_ms);
        } else if self.state == DialogState::Closing && self.geometry.current.x == DISPLAY_W {
            self.state = DialogState::Closed;
            return DialogTick::Detached;
        } else if self.state == DialogState::Opening {
            self.state = DialogState::Open { since_ms: now_ms };
        }

        let pos = self.geometry.current;
        round_rect(frame, Rect::new(pos.x - 2, pos.y - 2, pos.w + 5, pos.h + 5), false, true);
        self.label.geometry.advance(now_ms);
        self.label.draw(frame, 0, 0);
        let right = pos.right();
        frame.fill_rect(Rect::new(right - 2, pos.y - 2, DISPLAY_W - right + 2, pos.h + 4), false);
        round_rect(frame, pos, true, false);
        DialogTick::Visible
    }
}
