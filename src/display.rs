//! Seams to the outside world: the panel and the clock.
//!
//! The toolkit renders into a [`FrameBuffer`] and hands it to a [`Display`]
//! once per frame. Time comes from a [`Clock`]; tweens, dialog timeouts,
//! marquee and FPS counting all read the same clock so a host (or a test)
//! controls animation speed in one place.

use crate::framebuffer::FrameBuffer;

/// Panel flush.
pub trait Display {
    type Error: core::fmt::Debug;

    /// Push a finished frame to the panel.
    fn show(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Self::Error>;
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds. Only the startup splash sleeps; the
    /// interactive loop never blocks inside the toolkit.
    fn sleep_ms(
        &mut self,
        ms: u64,
    );
}

// =============================================================================
// Headless implementations
// =============================================================================

/// Display that discards frames, counting flushes.
#[derive(Debug, Default)]
pub struct NullDisplay {
    pub flushes: u32,
}

impl Display for NullDisplay {
    type Error = core::convert::Infallible;

    fn show(
        &mut self,
        _frame: &FrameBuffer,
    ) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub const fn new(start_ms: u64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(
        &mut self,
        ms: u64,
    ) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 { self.now }

    fn sleep_ms(
        &mut self,
        ms: u64,
    ) {
        self.advance(ms);
    }
}
