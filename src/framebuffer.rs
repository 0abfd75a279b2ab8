//! 1bpp back-buffer in the SSD1306 page layout.
//!
//! # Memory Layout
//!
//! The panel is addressed in 8-pixel-tall pages. Byte `page * W + x` holds the
//! column `x` of page `page`, bit `n` being row `page * 8 + n` (vertical LSB).
//! A 128x64 frame is 1024 bytes and can be pushed to the panel verbatim.
//!
//! ```text
//!          x=0   x=1   ...  x=127
//! page 0  [b0 ] [b1 ]  ... [b127]   rows 0..8
//! page 1  [b128][b129] ... [b255]   rows 8..16
//! ...
//! ```
//!
//! All drawing clips silently: pixels outside the panel are dropped, which is
//! what lets tweened entities slide in from off-screen.

use core::convert::Infallible;

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

use crate::config::{DISPLAY_H, DISPLAY_W, FRAME_BYTES};
use crate::geometry::Rect;

/// The display back-buffer.
#[derive(Clone)]
pub struct FrameBuffer {
    bytes: [u8; FRAME_BYTES],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self { bytes: [0; FRAME_BYTES] }
    }

    /// Raw page-layout bytes, ready for a panel transfer.
    pub const fn as_bytes(&self) -> &[u8; FRAME_BYTES] { &self.bytes }

    pub fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        on: bool,
    ) {
        if !(0..DISPLAY_W).contains(&x) || !(0..DISPLAY_H).contains(&y) {
            return;
        }
        let index = (y / 8 * DISPLAY_W + x) as usize;
        let mask = 1u8 << (y % 8);
        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
    }

    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> bool {
        if !(0..DISPLAY_W).contains(&x) || !(0..DISPLAY_H).contains(&y) {
            return false;
        }
        self.bytes[(y / 8 * DISPLAY_W + x) as usize] & (1 << (y % 8)) != 0
    }

    pub fn fill(
        &mut self,
        on: bool,
    ) {
        self.bytes.fill(if on { 0xFF } else { 0x00 });
    }

    pub fn fill_rect(
        &mut self,
        rect: Rect,
        on: bool,
    ) {
        rect.to_rectangle()
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::from(on)))
            .draw(self)
            .ok();
    }

    /// One-pixel outline.
    pub fn rect(
        &mut self,
        rect: Rect,
        on: bool,
    ) {
        rect.to_rectangle()
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::from(on), 1))
            .draw(self)
            .ok();
    }

    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        on: bool,
    ) {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::from(on), 1))
            .draw(self)
            .ok();
    }

    /// Draw a 1bpp image at `(x, y)`. Pixels equal to `transparent` are
    /// skipped so the image can be layered over existing content.
    pub fn blit(
        &mut self,
        image: &ImageRaw<'_, BinaryColor>,
        x: i32,
        y: i32,
        transparent: Option<BinaryColor>,
    ) {
        let image = Image::new(image, Point::new(x, y));
        match transparent {
            Some(key) => image.draw(&mut KeyedTarget { frame: self, key }).ok(),
            None => image.draw(self).ok(),
        };
    }

    /// XOR `other` into this buffer.
    pub fn xor_with(
        &mut self,
        other: &Self,
    ) {
        for (dst, src) in self.bytes.iter_mut().zip(other.bytes.iter()) {
            *dst ^= *src;
        }
    }

    /// Number of lit pixels inside `rect` (clipped).
    pub fn count_lit(
        &self,
        rect: Rect,
    ) -> usize {
        let mut count = 0;
        for y in rect.y.max(0)..rect.bottom().min(DISPLAY_H) {
            for x in rect.x.max(0)..rect.right().min(DISPLAY_W) {
                count += usize::from(self.pixel(x, y));
            }
        }
        count
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_W as u32, DISPLAY_H as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let on = color.is_on();
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                self.set_pixel(x, y, on);
            }
        }
        Ok(())
    }
}

/// Draw target that drops one color, used for transparent blits.
struct KeyedTarget<'a> {
    frame: &'a mut FrameBuffer,
    key: BinaryColor,
}

impl OriginDimensions for KeyedTarget<'_> {
    fn size(&self) -> Size {
        self.frame.size()
    }
}

impl DrawTarget for KeyedTarget<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let key = self.key;
        self.frame
            .draw_iter(pixels.into_iter().filter(|Pixel(_, color)| *color != key))
    }
}
