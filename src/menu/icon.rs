//! Horizontal icon menu with a caption under the row.
//!
//! Icons sit in fixed `ICON_ITEM_SPACE` slots. The camera keeps the selected
//! icon centered, and each selection re-captions the page: the caption label
//! jumps below the panel and slides up into place.

use log::warn;

use crate::camera;
use crate::config::{
    DISPLAY_H, HALF_DISPLAY_W, ICON_ITEM_SPACE, ICON_MAX_W, ICON_SELECTOR_GAP, ICON_SELECTOR_LEFT_SPACE,
    ICON_SELECTOR_TOP_SPACE, ICON_TITLE_BOTTOM, UiConfig, XSCROLLBAR_SPACE,
};
use crate::culling::icon_hidden;
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Rect;
use crate::menu::{Item, MenuCore};
use crate::scrollbar::{Axis, ScrollBar};
use crate::widgets::{DashLine, Label, Marquee};

const INSET: (i32, i32) = (ICON_SELECTOR_LEFT_SPACE, ICON_SELECTOR_TOP_SPACE);

#[derive(Clone, Debug)]
pub struct IconMenu<A> {
    pub core: MenuCore<A>,
    pub scrollbar: ScrollBar,
    pub title: Label,
}

impl<A: Copy> IconMenu<A> {
    pub fn new() -> Self {
        let mut title = Label::empty();
        title.marquee = Marquee::OFF;
        title.geometry.current.y = DISPLAY_H;
        Self {
            core: MenuCore::with_viewport(ICON_MAX_W, DISPLAY_H),
            scrollbar: ScrollBar::new(Axis::X),
            title,
        }
    }

    /// Append an icon in the next slot to the right.
    pub fn add(
        &mut self,
        mut item: Item<A>,
        expand: bool,
    ) -> Result<usize, UiError> {
        let dx = ICON_ITEM_SPACE * self.core.items.len() as i32;
        let geometry = item.geometry_mut();
        geometry.destination.x = dx;
        geometry.destination.y = geometry.current.y;
        if !expand {
            geometry.current.x = dx;
        }
        self.core.push(item)
    }

    pub fn selector_target(item: &Item<A>) -> Rect {
        let pos = item.geometry().destination;
        Rect::new(
            pos.x,
            pos.y + XSCROLLBAR_SPACE + 1,
            pos.w + ICON_SELECTOR_GAP * 2,
            pos.h + ICON_SELECTOR_GAP * 2,
        )
    }

    /// Re-caption and slide the caption up from the bottom edge.
    pub fn change_selection(
        &mut self,
        id: usize,
        config: &UiConfig,
    ) {
        let Some(item) = self.core.items.get(id) else {
            return;
        };
        if let Err(err) = self.title.set_text(item.caption()) {
            warn!("ui-nav: icon caption not updated: {err}");
        }
        let w = self.title.geometry.current.w;
        let h = self.title.geometry.current.h;
        let x = HALF_DISPLAY_W - w / 2;
        self.title.geometry.jump_to(Rect::new(x, DISPLAY_H, w, h));
        self.title.geometry.animate(
            Rect::new(x, DISPLAY_H - h - ICON_TITLE_BOTTOM, w, h),
            config.default_speed,
            true,
            config.icon_title_ease,
        );
    }

    pub fn update_camera(
        &mut self,
        config: &UiConfig,
    ) {
        let Some(item) = self.core.items.get(self.core.selected_id) else {
            return;
        };
        let (x, y) = camera::icon_target(self.core.camera.current, item.geometry().destination);
        self.core
            .camera
            .animate(Rect::new(x, y, 0, 0), config.camera_speed, true, config.camera_ease);
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
        dash_line: &DashLine,
    ) {
        self.core.camera.advance(now_ms);
        let camera_x = self.core.camera.current.x;
        let offset = self.core.offset(INSET);
        let selected = self.core.selected_id;

        for (id, item) in self.core.items.iter_mut().enumerate() {
            let before = item.geometry().current;
            item.geometry_mut().advance(now_ms);
            if icon_hidden(before, camera_x) {
                continue;
            }
            item.draw(frame, now_ms, id == selected, offset, config);
        }

        self.title.geometry.advance(now_ms);
        self.title.draw(frame, 0, 0);
        self.scrollbar.geometry.advance(now_ms);
        self.scrollbar.draw(frame);
        dash_line.draw(frame);
    }
}

impl<A: Copy> Default for IconMenu<A> {
    fn default() -> Self {
        Self::new()
    }
}
