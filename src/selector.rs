//! The highlight cursor.
//!
//! # Selection Order
//!
//! [`Selector::select`] performs its steps in a fixed order so the selector,
//! the menu's remembered selection, the scrollbar and the camera always agree
//! when it returns:
//!
//! 1. tween the highlight toward the item's padded destination
//! 2. menu hook (icon menus re-caption)
//! 3. record the selection on both the selector and the menu
//! 4. scrollbar value
//! 5. camera, when asked
//!
//! # Filled Mode
//!
//! With `selector_fill` the highlight is drawn solid into a private scratch
//! buffer, which the frame loop XORs over the finished content. Text under
//! the highlight comes out inverted without any widget knowing it is selected.

use log::debug;

use crate::config::{OUT_GAP, TOP_GAP, UiConfig};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};
use crate::menu::{Menu, MenuKind};
use crate::widgets::primitives::{icon_brackets, round_rect};

/// Index before `index` in a menu of `count`, wrapping when `looped`.
/// `None` when the cursor cannot move.
pub const fn prev_index(
    index: usize,
    count: usize,
    looped: bool,
) -> Option<usize> {
    if count == 0 {
        None
    } else if index == 0 {
        if looped { Some(count - 1) } else { None }
    } else {
        Some(index - 1)
    }
}

/// Index after `index` in a menu of `count`, wrapping when `looped`.
pub const fn next_index(
    index: usize,
    count: usize,
    looped: bool,
) -> Option<usize> {
    if count == 0 {
        None
    } else if index + 1 >= count {
        if looped { Some(0) } else { None }
    } else {
        Some(index + 1)
    }
}

#[derive(Clone)]
pub struct Selector {
    pub geometry: Geometry,
    selected: Option<usize>,
    scratch: FrameBuffer,
}

impl Selector {
    pub const fn new() -> Self {
        Self {
            geometry: Geometry::at(Rect::new(0, 0, 0, 0)),
            selected: None,
            scratch: FrameBuffer::new(),
        }
    }

    /// Item id of the current highlight.
    #[inline]
    pub const fn selected(&self) -> Option<usize> { self.selected }

    /// Scratch layer holding the filled highlight.
    pub const fn scratch(&self) -> &FrameBuffer { &self.scratch }

    /// Highlight item `id` of `menu`. No-op on custom pages or unknown ids.
    pub fn select<A: Copy>(
        &mut self,
        menu: &mut Menu<A>,
        id: usize,
        update_camera: bool,
        config: &UiConfig,
    ) {
        let Some(target) = menu.selector_target(id) else {
            return;
        };
        self.geometry
            .animate(target, config.selector_speed, false, config.selector_ease);
        menu.change_selection(id, config);
        self.selected = Some(id);
        menu.core_mut().selected_id = id;
        menu.update_scrollbar(config);
        if update_camera {
            menu.update_camera(config);
        }
        debug!("ui-nav: selected item {id}");
    }

    pub fn up<A: Copy>(
        &mut self,
        menu: &mut Menu<A>,
        config: &UiConfig,
    ) {
        let current = self.selected.unwrap_or(menu.selected_id());
        if let Some(id) = prev_index(current, menu.len(), config.menu_loop) {
            self.select(menu, id, true, config);
        }
    }

    pub fn down<A: Copy>(
        &mut self,
        menu: &mut Menu<A>,
        config: &UiConfig,
    ) {
        let current = self.selected.unwrap_or(menu.selected_id());
        if let Some(id) = next_index(current, menu.len(), config.menu_loop) {
            self.select(menu, id, true, config);
        }
    }

    /// Advance and draw. With `fill` the highlight goes to the scratch layer
    /// instead of `frame`.
    pub fn update(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        kind: MenuKind,
        camera: Rect,
        fill: bool,
    ) {
        self.geometry.advance(now_ms);
        let pos = self.geometry.current.offset(OUT_GAP - camera.x, TOP_GAP - camera.y);
        let target = if fill {
            self.scratch.fill(false);
            &mut self.scratch
        } else {
            frame
        };
        match kind {
            MenuKind::List => round_rect(target, pos, true, fill),
            MenuKind::Icon => icon_brackets(target, pos, true),
            MenuKind::Custom => {}
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_FRAME_INTERVAL_MS;
    use crate::menu::{Item, ListMenu};
    use crate::widgets::Label;

    fn list(count: usize) -> Menu<()> {
        let mut menu = ListMenu::new();
        for _ in 0..count {
            let mut label = Label::new("Item").unwrap();
            label.init();
            menu.add(Item::label(label, None), false).unwrap();
        }
        Menu::List(menu)
    }

    // -------------------------------------------------------------------------
    // Index Stepping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_index_stepping() {
        assert_eq!(next_index(0, 3, false), Some(1));
        assert_eq!(next_index(2, 3, false), None, "clamped at the end");
        assert_eq!(next_index(2, 3, true), Some(0), "wraps to the start");
        assert_eq!(prev_index(0, 3, false), None);
        assert_eq!(prev_index(0, 3, true), Some(2));
        assert_eq!(prev_index(0, 0, true), None, "empty menu never moves");
    }

    // -------------------------------------------------------------------------
    // Selection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_select_keeps_menu_in_sync() {
        let config = UiConfig::default();
        let mut menu = list(4);
        let mut selector = Selector::new();
        selector.select(&mut menu, 2, true, &config);
        assert_eq!(selector.selected(), Some(2));
        assert_eq!(menu.selected_id(), 2);
        assert_eq!(selector.geometry.destination, menu.selector_target(2).unwrap());
    }

    #[test]
    fn test_down_wraps_with_loop() {
        let config = UiConfig::default();
        let mut menu = list(3);
        let mut selector = Selector::new();
        selector.select(&mut menu, 0, true, &config);
        for _ in 0..3 {
            selector.down(&mut menu, &config);
        }
        assert_eq!(menu.selected_id(), 0, "N downs return to the start");
    }

    #[test]
    fn test_down_clamps_without_loop() {
        let config = UiConfig { menu_loop: false, ..UiConfig::default() };
        let mut menu = list(3);
        let mut selector = Selector::new();
        selector.select(&mut menu, 2, true, &config);
        selector.down(&mut menu, &config);
        assert_eq!(menu.selected_id(), 2);
        assert_eq!(selector.selected(), Some(2));
    }

    // -------------------------------------------------------------------------
    // Drawing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fill_draws_to_scratch() {
        let config = UiConfig::default();
        let mut menu = list(1);
        let mut selector = Selector::new();
        selector.select(&mut menu, 0, true, &config);
        let mut now = 0;
        while selector.geometry.is_animating() {
            selector.geometry.advance(now);
            now += MIN_FRAME_INTERVAL_MS;
        }

        let mut frame = FrameBuffer::new();
        let camera = menu.core().camera.current;
        selector.update(&mut frame, now, MenuKind::List, camera, true);
        assert_eq!(frame.count_lit(Rect::new(0, 0, 128, 64)), 0, "content buffer untouched");
        assert!(selector.scratch().pixel(2, TOP_GAP + 2), "solid highlight in the scratch layer");

        selector.update(&mut frame, now, MenuKind::List, camera, false);
        assert!(frame.pixel(0, TOP_GAP + 2), "outline drawn straight into the frame");
        assert!(!frame.pixel(2, TOP_GAP + 2));
    }
}
