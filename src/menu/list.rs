//! Vertical list menu.
//!
//! # Layout
//!
//! Row `i` rests at `y = Σ (LIST_SPACE + h_j)` for the rows before it, so rows
//! of different heights stack without overlap. Rows are drawn inset by
//! `LIST_SELECTOR_LEFT_SPACE + 1` horizontally and `LIST_SELECTOR_TOP_SPACE`
//! vertically so the selector frame fits around them.
//!
//! # Selector
//!
//! The frame shrink-wraps the label: `w + 3` (one gap each side plus the
//! frame line), capped so it never runs under a nested widget or past the
//! scrollbar.

use crate::camera;
use crate::config::{
    LIST_MAX_H, LIST_MAX_W, LIST_SELECTOR_LEFT_GAP, LIST_SELECTOR_LEFT_SPACE, LIST_SELECTOR_TOP_GAP,
    LIST_SELECTOR_TOP_SPACE, LIST_SPACE, UiConfig, WIDGET_GAP_M2,
};
use crate::culling::list_row_hidden;
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Rect;
use crate::menu::{Item, MenuCore};
use crate::scrollbar::{Axis, ScrollBar};

const INSET: (i32, i32) = (LIST_SELECTOR_LEFT_SPACE + 1, LIST_SELECTOR_TOP_SPACE);

#[derive(Clone, Debug)]
pub struct ListMenu<A> {
    pub core: MenuCore<A>,
    pub scrollbar: ScrollBar,
}

impl<A: Copy> ListMenu<A> {
    pub const fn new() -> Self {
        Self {
            core: MenuCore::with_viewport(crate::config::DISPLAY_W, LIST_MAX_H),
            scrollbar: ScrollBar::new(Axis::Y),
        }
    }

    /// Append a row below the existing ones. With `expand` the row waits at
    /// the origin for the page-enter reveal; otherwise it starts in its slot.
    pub fn add(
        &mut self,
        mut item: Item<A>,
        expand: bool,
    ) -> Result<usize, UiError> {
        let dy: i32 = self
            .core
            .items
            .iter()
            .map(|prev| LIST_SPACE + prev.geometry().destination.h)
            .sum();
        let geometry = item.geometry_mut();
        geometry.destination.x = geometry.current.x;
        geometry.destination.y = dy;
        if !expand {
            geometry.current.y = dy;
        }
        self.core.push(item)
    }

    pub fn selector_target(item: &Item<A>) -> Rect {
        let pos = item.geometry().destination;
        let nested_w = item
            .nested
            .as_ref()
            .map_or(0, |nested| nested.geometry().current.w + WIDGET_GAP_M2);
        let w = (LIST_MAX_W - nested_w).min(pos.w + LIST_SELECTOR_LEFT_GAP * 2 + 1);
        Rect::new(pos.x, pos.y, w, pos.h + LIST_SELECTOR_TOP_GAP * 2 + 1)
    }

    pub fn update_camera(
        &mut self,
        config: &UiConfig,
    ) {
        let Some(item) = self.core.items.get(self.core.selected_id) else {
            return;
        };
        let camera = self.core.camera.current;
        if let Some((x, y)) = camera::list_target(camera, item.geometry().destination, camera.h) {
            self.core
                .camera
                .animate(Rect::new(x, y, 0, 0), config.camera_speed, true, config.camera_ease);
        }
    }

    pub fn update_scrollbar(
        &mut self,
        config: &UiConfig,
    ) {
        self.scrollbar.set_value(
            self.core.selected_id,
            self.core.items.len(),
            config.default_speed,
            config.scrollbar_ease,
        );
    }

    pub fn update(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        config: &UiConfig,
    ) {
        self.core.camera.advance(now_ms);
        let camera_y = self.core.camera.current.y;
        let offset = self.core.offset(INSET);
        let selected = self.core.selected_id;

        for (id, item) in self.core.items.iter_mut().enumerate() {
            let before = item.geometry().current;
            item.geometry_mut().advance(now_ms);
            if list_row_hidden(before, camera_y) {
                continue;
            }
            item.draw(frame, now_ms, id == selected, offset, config);
        }

        self.scrollbar.geometry.advance(now_ms);
        self.scrollbar.draw(frame);
    }
}

impl<A: Copy> Default for ListMenu<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LIST_ITEM_SPACE, MIN_FRAME_INTERVAL_MS};
    use crate::widgets::{CheckBox, Label, Nested};

    fn labelled(text: &str) -> Item<()> {
        let mut label = Label::new(text).unwrap();
        label.init();
        Item::label(label, None)
    }

    fn menu_with(count: usize) -> ListMenu<()> {
        let mut menu = ListMenu::new();
        for _ in 0..count {
            menu.add(labelled("Row"), false).unwrap();
        }
        menu
    }

    #[test]
    fn test_rows_stack() {
        let menu = menu_with(3);
        let ys: Vec<i32> = menu.core.items.iter().map(|item| item.geometry().destination.y).collect();
        assert_eq!(ys, vec![0, LIST_ITEM_SPACE, LIST_ITEM_SPACE * 2]);
    }

    #[test]
    fn test_expand_leaves_rows_at_origin() {
        let mut menu = ListMenu::<()>::new();
        menu.add(labelled("a"), true).unwrap();
        menu.add(labelled("b"), true).unwrap();
        let second = menu.core.items[1].geometry();
        assert_eq!(second.current.y, 0, "waits for the reveal");
        assert_eq!(second.destination.y, LIST_ITEM_SPACE);
    }

    #[test]
    fn test_capacity() {
        let mut menu = menu_with(crate::config::MAX_MENU_ITEMS);
        assert_eq!(menu.add(labelled("x"), false), Err(UiError::CapacityExceeded("menu items")));
    }

    #[test]
    fn test_selector_shrink_wraps() {
        let item = labelled("Hello");
        assert_eq!(ListMenu::selector_target(&item), Rect::new(0, 0, 33, 15));
    }

    #[test]
    fn test_selector_avoids_nested_widget() {
        let mut item = labelled("A label long enough to reach the right edge");
        item.nested = Some(Nested::CheckBox(CheckBox::new(false, 0)));
        let target = ListMenu::selector_target(&item);
        assert_eq!(target.w, LIST_MAX_W - 8 - WIDGET_GAP_M2);
    }

    #[test]
    fn test_camera_follows_selection_down() {
        let config = UiConfig::default();
        let mut menu = menu_with(6);
        menu.core.selected_id = 5;
        menu.update_camera(&config);
        let mut now = 0;
        while menu.core.camera.is_animating() {
            menu.core.camera.advance(now);
            now += MIN_FRAME_INTERVAL_MS;
        }
        // row 5: top 75, bottom 75 + 12 + 3 = 90
        assert_eq!(menu.core.camera.current.y, 90 - LIST_MAX_H + 1);
        assert_eq!(menu.core.camera.current.h, LIST_MAX_H, "camera size never animates");
    }
}
