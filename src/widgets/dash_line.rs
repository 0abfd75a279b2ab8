//! Dashed separator drawn across icon menus, between the icons and the
//! caption.

use crate::config::{DASHLINE_Y, DISPLAY_W, ICON_DASHLINE_SPLIT_LENGTH};
use crate::framebuffer::FrameBuffer;
use crate::widgets::primitives::dashed_hline;

#[derive(Clone, Copy, Debug, Default)]
pub struct DashLine {
    loaded: bool,
}

impl DashLine {
    pub const fn new() -> Self {
        Self { loaded: false }
    }

    pub fn init(&mut self) {
        self.loaded = true;
    }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }

    pub fn draw(
        &self,
        frame: &mut FrameBuffer,
    ) {
        if self.loaded {
            dashed_hline(frame, DASHLINE_Y, DISPLAY_W, ICON_DASHLINE_SPLIT_LENGTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_dash_line_after_init() {
        let mut line = DashLine::new();
        let mut frame = FrameBuffer::new();
        line.draw(&mut frame);
        assert_eq!(frame.count_lit(Rect::new(0, DASHLINE_Y, DISPLAY_W, 1)), 0, "nothing before init");

        line.init();
        line.draw(&mut frame);
        let lit = frame.count_lit(Rect::new(0, DASHLINE_Y, DISPLAY_W, 1));
        assert!(lit > 50 && lit < 80, "roughly half the row is lit, got {lit}");
    }
}
