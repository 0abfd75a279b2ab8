//! Low-level drawing primitives shared across widgets.
//!
//! These are simple and focused on a single responsibility: each draws one
//! shape into the back-buffer in the given color and never reads layout state.
//!
//! # Rounded Frame
//!
//! [`round_rect`] is a rectangle with its four corner pixels knocked out. It
//! frames the list selector and dialog boxes. The outline variant spans
//! `h + 1` rows (its bottom edge sits at `y + h`), the filled variant spans `h`
//! rows; the list selector height already accounts for this.
//!
//! ```text
//! outline        filled
//!  ·████·         ·████·
//!  █····█         ██████
//!  █····█         ██████
//!  ·████·         ·████·
//! ```
//!
//! # Icon Brackets
//!
//! [`icon_brackets`] draws only the four L-shaped corners, `ICON_SELECTOR_LENGTH`
//! pixels per leg, offset outward by `ICON_SELECTOR_GAP`.

use crate::config::{ICON_SELECTOR_GAP, ICON_SELECTOR_LENGTH};
use crate::framebuffer::FrameBuffer;
use crate::geometry::Rect;

/// Draw a rounded rectangle, outlined or filled.
///
/// # Parameters
/// - `rect`: Frame bounds (outline occupies one extra row at the bottom)
/// - `on`: Pixel color
/// - `fill`: `true` for a solid body
pub fn round_rect(
    frame: &mut FrameBuffer,
    rect: Rect,
    on: bool,
    fill: bool,
) {
    let Rect { x, y, w, h } = rect;
    frame.line(x + 1, y, x + w - 2, y, on);
    if fill {
        frame.fill_rect(Rect::new(x, y + 1, w, h - 2), on);
        frame.line(x + 1, y + h - 1, x + w - 2, y + h - 1, on);
    } else {
        frame.line(x, y + 1, x, y + h - 1, on);
        frame.line(x + w - 1, y + 1, x + w - 1, y + h - 1, on);
        frame.line(x + 1, y + h, x + w - 2, y + h, on);
    }
}

/// Draw the icon selector: four corner brackets around `rect`.
pub fn icon_brackets(
    frame: &mut FrameBuffer,
    rect: Rect,
    on: bool,
) {
    let Rect { x, y, w, h } = rect;
    let len = ICON_SELECTOR_LENGTH;
    let left = x - ICON_SELECTOR_GAP;
    let top = y - ICON_SELECTOR_GAP;
    let right = x + w;
    let bottom = y + h;

    // top left
    frame.line(left, top, left + len, top, on);
    frame.line(left, top + 1, left, top + len, on);
    // top right
    frame.line(right - len, top, right, top, on);
    frame.line(right, top + 1, right, top + len, on);
    // bottom left
    frame.line(left, bottom, left + len, bottom, on);
    frame.line(left, bottom - len, left, bottom, on);
    // bottom right
    frame.line(right - len, bottom, right, bottom, on);
    frame.line(right, bottom - len, right, bottom, on);
}

/// Draw a horizontal dashed line of alternating `segment`-pixel runs, starting
/// with an "off" run.
pub fn dashed_hline(
    frame: &mut FrameBuffer,
    y: i32,
    width: i32,
    segment: i32,
) {
    let mut x = 0;
    let mut on = false;
    for _ in 0..width / segment {
        let to_x = x + segment;
        frame.line(x, y, to_x, y, on);
        x = to_x;
        on = !on;
    }
}
