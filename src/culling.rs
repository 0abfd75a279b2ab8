//! Off-screen tests for menu children.
//!
//! A child is skipped only when it lies entirely outside the panel on the
//! menu's scroll axis. Partially visible children always draw. Callers still
//! advance a skipped child's tween, so off-screen rows catch up silently.

use crate::config::{DISPLAY_H, DISPLAY_W, OUT_GAP, TOP_GAP};
use crate::geometry::Rect;

/// List row at `pos` (menu space) under a camera at `camera_y`.
pub const fn list_row_hidden(
    pos: Rect,
    camera_y: i32,
) -> bool {
    let y = pos.y - camera_y + TOP_GAP;
    y > DISPLAY_H || y + pos.h < 0
}

/// Icon at `pos` (menu space) under a camera at `camera_x`.
pub const fn icon_hidden(
    pos: Rect,
    camera_x: i32,
) -> bool {
    let x = pos.x - camera_x + OUT_GAP;
    x > DISPLAY_W || x + pos.w < 0
}
