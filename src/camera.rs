//! Camera placement rules.
//!
//! A menu's camera is a [`Geometry`](crate::geometry::Geometry) whose `x`/`y`
//! is the scroll offset subtracted from every child. The two scrolling menus
//! follow the selection differently:
//!
//! - **List** reveals at the edges: the camera only moves when the selected
//!   row's destination leaves the viewport, and then just far enough to show
//!   it. At most one of the two edge rules fires per call.
//! - **Icon** centers continuously: every selection re-centers the camera on
//!   the icon.
//!
//! These functions compute the target only; the caller animates the camera
//! with `only_xy` so its size never interpolates.

use crate::config::{DISPLAY_H_GAP, HALF_DISPLAY_W, LIST_SPACE};
use crate::geometry::Rect;

/// Camera target keeping `item` (a destination rect in menu space) inside a
/// vertical viewport of `viewport_h`. `None` when it is already visible.
pub const fn list_target(
    camera: Rect,
    item: Rect,
    viewport_h: i32,
) -> Option<(i32, i32)> {
    let top = item.y;
    let bottom = item.y + item.h + LIST_SPACE;
    if top < camera.y {
        Some((camera.x, top))
    } else if bottom > camera.y + viewport_h {
        Some((camera.x, bottom - DISPLAY_H_GAP + 1))
    } else {
        None
    }
}

/// Camera target centering `item` horizontally.
pub const fn icon_target(
    camera: Rect,
    item: Rect,
) -> (i32, i32) {
    (item.x - HALF_DISPLAY_W + item.w / 2, camera.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DISPLAY_H, LIST_ITEM_SPACE, LIST_MAX_H};

    fn camera_at(y: i32) -> Rect {
        Rect::new(0, y, 128, LIST_MAX_H)
    }

    fn row(index: i32) -> Rect {
        Rect::new(0, index * LIST_ITEM_SPACE, 40, 12)
    }

    #[test]
    fn test_visible_row_keeps_camera() {
        assert_eq!(list_target(camera_at(0), row(0), LIST_MAX_H), None);
        assert_eq!(list_target(camera_at(0), row(2), LIST_MAX_H), None, "row 2 ends at 30 + 12 + 3");
    }

    #[test]
    fn test_row_below_scrolls_down_just_enough() {
        // row 3: top 45, bottom 45 + 12 + 3 = 60 > 54
        let (x, y) = list_target(camera_at(0), row(3), LIST_MAX_H).unwrap();
        assert_eq!(x, 0);
        assert_eq!(y, 60 - (DISPLAY_H - 10) + 1);
    }

    #[test]
    fn test_row_above_aligns_top() {
        assert_eq!(list_target(camera_at(40), row(1), LIST_MAX_H), Some((0, 15)));
    }

    #[test]
    fn test_icon_centers() {
        let camera = Rect::new(0, 0, 128, 64);
        let icon = Rect::new(68, 0, 30, 30);
        assert_eq!(icon_target(camera, icon), (68 - 64 + 15, 0));
    }
}
