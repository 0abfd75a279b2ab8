//! Host-driven page without a selector.
//!
//! A custom page shows labels at positions the host chooses and forwards
//! up/down/confirm verbatim to the host as page actions. Back still pops the
//! navigation history like on any other page.

use crate::config::{OUT_GAP, TOP_GAP, UiConfig};
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Rect;
use crate::menu::{Item, MenuCore};

/// Host actions raised for each input on a custom page. `None` ignores the
/// input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageHandlers<A> {
    pub up: Option<A>,
    pub down: Option<A>,
    pub yes: Option<A>,
}

impl<A> Default for PageHandlers<A> {
    fn default() -> Self {
        Self { up: None, down: None, yes: None }
    }
}

#[derive(Clone, Debug)]
pub struct CustomPage<A> {
    pub core: MenuCore<A>,
    pub handlers: PageHandlers<A>,
}

impl<A: Copy> CustomPage<A> {
    pub fn new(handlers: PageHandlers<A>) -> Self {
        Self { core: MenuCore::default(), handlers }
    }

    /// Place an item at `(x, y)` in page space (below the header band).
    pub fn add_at(
        &mut self,
        mut item: Item<A>,
        x: i32,
        y: i32,
    ) -> Result<usize, UiError> {
        let size = item.geometry().current;
        item.geometry_mut().jump_to(Rect::new(x, y, size.w, size.h));
        self.core.push(item)
    }

    pub fn update(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        config: &UiConfig,
    ) {
        self.core.camera.advance(now_ms);
        let offset = self.core.offset((OUT_GAP, TOP_GAP));
        for item in &mut self.core.items {
            item.geometry_mut().advance(now_ms);
            item.draw(frame, now_ms, false, offset, config);
        }
    }
}
