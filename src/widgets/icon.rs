//! Fixed-size 1bpp icon for icon menus.

use embedded_graphics::image::ImageRaw;
use embedded_graphics::pixelcolor::BinaryColor;

use crate::config::ICON_SIZE;
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};

/// Packed 1bpp bitmap, rows MSB-first and byte aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub data: &'static [u8],
    pub width: u32,
}

impl Bitmap {
    pub const fn new(
        data: &'static [u8],
        width: u32,
    ) -> Self {
        Self { data, width }
    }

    pub fn raw(&self) -> ImageRaw<'static, BinaryColor> {
        ImageRaw::new(self.data, self.width)
    }
}

#[derive(Clone, Debug)]
pub struct Icon {
    pub geometry: Geometry,
    image: Bitmap,
    /// Caption shown under the icon row while selected.
    pub title: &'static str,
    loaded: bool,
}

impl Icon {
    pub const fn new(
        image: Bitmap,
        title: &'static str,
    ) -> Self {
        Self {
            geometry: Geometry::at(Rect::new(0, 0, ICON_SIZE, ICON_SIZE)),
            image,
            title,
            loaded: false,
        }
    }

    pub fn init(&mut self) {
        self.loaded = true;
    }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.loaded }

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
        frame.blit(&self.image.raw(), pos.x + ox, pos.y + oy, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLID: [u8; 2] = [0xFF, 0xFF];

    #[test]
    fn test_icon_draws_only_when_loaded() {
        let mut icon = Icon::new(Bitmap::new(&SOLID, 8), "Solid");
        let mut frame = FrameBuffer::new();
        icon.draw(&mut frame, 4, 4);
        assert!(!frame.pixel(4, 4), "not drawn before init");

        icon.init();
        icon.draw(&mut frame, 4, 4);
        assert!(frame.pixel(4, 4));
        assert!(frame.pixel(11, 5), "8x2 bitmap");
        assert!(!frame.pixel(12, 4));
    }

    #[test]
    fn test_icon_slot_size() {
        let icon = Icon::new(Bitmap::new(&SOLID, 8), "");
        assert_eq!(icon.geometry.current.w, ICON_SIZE);
        assert_eq!(icon.geometry.current.h, ICON_SIZE);
    }
}
