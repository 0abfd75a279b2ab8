//! Frame rate counter.
//!
//! Counts frames over a fixed window and publishes the count when the window
//! closes, so the figure shown is "frames rendered in the last second".
//!
//! # Usage
//!
//! ```ignore
//! let mut fps = FpsCounter::new();
//!
//! // In the frame loop:
//! fps.tick(clock.now_ms());
//! let text = fps.text(); // "58"
//! ```

use heapless::String;

use crate::config::FPS_WINDOW_MS;

#[derive(Clone, Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    fps: u32,
    window_start: Option<u64>,
}

impl FpsCounter {
    pub const fn new() -> Self {
        Self {
            frames: 0,
            fps: 0,
            window_start: None,
        }
    }

    /// Count one frame.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) {
        let start = *self.window_start.get_or_insert(now_ms);
        if now_ms.saturating_sub(start) >= FPS_WINDOW_MS {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = Some(now_ms);
        }
        self.frames += 1;
    }

    /// Frames counted in the last completed window.
    #[inline]
    pub const fn fps(&self) -> u32 { self.fps }

    pub fn text(&self) -> String<10> {
        let mut s = String::new();
        push_u32(&mut s, self.fps);
        s
    }
}

/// Push u32 as decimal digits to a heapless String (no allocation).
fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }
    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_published_per_window() {
        let mut fps = FpsCounter::new();
        for frame in 0..30 {
            fps.tick(frame * 33);
        }
        assert_eq!(fps.fps(), 0, "first window still open");
        fps.tick(1000);
        assert_eq!(fps.fps(), 30, "the 30 frames at 0..=957; the tick at 1000 opens the next window");
    }

    #[test]
    fn test_fps_second_window() {
        let mut fps = FpsCounter::new();
        fps.tick(0);
        fps.tick(1000);
        assert_eq!(fps.fps(), 1);

        // 1000 counted already, then 1020..=1980
        for k in 1..50 {
            fps.tick(1000 + k * 20);
        }
        assert_eq!(fps.fps(), 1, "second window still open at 1980");
        fps.tick(2000);
        assert_eq!(fps.fps(), 50);
        assert_eq!(fps.text().as_str(), "50");
    }

    #[test]
    fn test_text() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.text().as_str(), "0");
        fps.fps = 60;
        assert_eq!(fps.text().as_str(), "60");
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<10> = String::new();
        push_u32(&mut s, 4_294_967_295);
        assert_eq!(s.as_str(), "4294967295");
    }
}
