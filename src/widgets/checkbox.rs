//! Checkbox nested at the right edge of a list row.

use crate::config::{CHECKBOX_SIZE, DISPLAY_W_WIDGET_GAP, HALF_LIST_ITEM_SPACE, LIST_ITEM_SPACE, WIDGET_BASE_X, WIDGET_GAP};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};

#[derive(Clone, Debug)]
pub struct CheckBox {
    pub geometry: Geometry,
    pub checked: bool,
}

impl CheckBox {
    /// Checkbox for the row whose label rests at `row_y`.
    pub const fn new(
        checked: bool,
        row_y: i32,
    ) -> Self {
        let x = WIDGET_BASE_X - WIDGET_GAP - CHECKBOX_SIZE;
        let y = row_y + HALF_LIST_ITEM_SPACE - CHECKBOX_SIZE / 2;
        Self {
            geometry: Geometry::at(Rect::new(x, y, CHECKBOX_SIZE, CHECKBOX_SIZE)),
            checked,
        }
    }

    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }

    pub fn draw(
        &self,
        frame: &mut FrameBuffer,
        ox: i32,
        oy: i32,
    ) {
        let pos = self.geometry.current;
        let (x, y) = (pos.x + ox, pos.y + oy);
        // mask scrolled label text behind the box
        frame.fill_rect(Rect::new(x - WIDGET_GAP, y - 5, DISPLAY_W_WIDGET_GAP - x, LIST_ITEM_SPACE), false);
        frame.rect(Rect::new(x, y, pos.w, pos.h), true);
        if self.checked {
            frame.fill_rect(Rect::new(x + 2, y + 2, pos.w - 4, pos.h - 4), true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_layout() {
        let checkbox = CheckBox::new(false, 15);
        assert_eq!(checkbox.geometry.current, Rect::new(110, 18, 8, 8));
    }

    #[test]
    fn test_toggle() {
        let mut checkbox = CheckBox::new(false, 0);
        assert!(checkbox.toggle());
        assert!(!checkbox.toggle());
    }

    #[test]
    fn test_draw_masks_and_fills() {
        let checkbox = CheckBox::new(true, 0);
        let mut frame = FrameBuffer::new();
        frame.fill(true);
        checkbox.draw(&mut frame, 0, 10);
        let pos = checkbox.geometry.current;
        assert!(!frame.pixel(pos.x - 1, pos.y + 10), "gap to the left is masked");
        assert!(frame.pixel(pos.x, pos.y + 10), "outline");
        assert!(!frame.pixel(pos.x + 1, pos.y + 11), "ring between outline and fill");
        assert!(frame.pixel(pos.x + 3, pos.y + 13), "checked fill");
    }
}
