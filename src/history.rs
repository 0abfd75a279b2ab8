//! Back-stack of visited pages.
//!
//! The root page is never popped. When the stack is full the oldest entry
//! above the root is dropped so deep navigation keeps working.

use heapless::Vec;
use log::warn;

use crate::config::MAX_HISTORY;
use crate::menu::MenuId;

#[derive(Clone, Debug, Default)]
pub struct History {
    stack: Vec<MenuId, MAX_HISTORY>,
}

impl History {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(
        &mut self,
        menu: MenuId,
    ) {
        if self.stack.is_full() {
            warn!("ui-nav: history full, forgetting the oldest page");
            self.stack.remove(1.min(self.stack.len() - 1));
        }
        // cannot fail: room was made above
        let _ = self.stack.push(menu);
    }

    /// Drop the top entry and return the new top. `None` (and no change) when
    /// only the root is left.
    pub fn pop(&mut self) -> Option<MenuId> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        self.stack.last().copied()
    }

    #[inline]
    pub fn len(&self) -> usize { self.stack.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }
}
