//! Startup load queue.
//!
//! Widgets registered before the first page is shown defer their `init()`
//! here so construction stays cheap; the startup sequence drains the queue
//! once, in insertion order. After boot nothing is queued: new widgets are
//! initialised on creation.

use heapless::Deque;

use crate::config::LOAD_QUEUE_CAPACITY;
use crate::error::UiError;
use crate::menu::{DialogId, MenuId};

/// Something with a pending `init()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadTarget {
    Item { menu: MenuId, item: usize },
    Dialog(DialogId),
    DashLine,
}

#[derive(Debug, Default)]
pub struct LoadQueue {
    queue: Deque<LoadTarget, LOAD_QUEUE_CAPACITY>,
}

impl LoadQueue {
    pub const fn new() -> Self {
        Self { queue: Deque::new() }
    }

    pub fn push(
        &mut self,
        target: LoadTarget,
    ) -> Result<(), UiError> {
        self.queue
            .push_back(target)
            .map_err(|_| UiError::CapacityExceeded("load queue"))
    }

    pub fn pop(&mut self) -> Option<LoadTarget> { self.queue.pop_front() }

    #[inline]
    pub fn len(&self) -> usize { self.queue.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.queue.is_empty() }

    #[inline]
    pub fn is_full(&self) -> bool { self.queue.is_full() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = LoadQueue::new();
        queue.push(LoadTarget::DashLine).unwrap();
        queue.push(LoadTarget::Dialog(DialogId(0))).unwrap();
        assert_eq!(queue.pop(), Some(LoadTarget::DashLine));
        assert_eq!(queue.pop(), Some(LoadTarget::Dialog(DialogId(0))));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_capacity() {
        let mut queue = LoadQueue::new();
        for _ in 0..LOAD_QUEUE_CAPACITY {
            queue.push(LoadTarget::DashLine).unwrap();
        }
        assert_eq!(queue.push(LoadTarget::DashLine), Err(UiError::CapacityExceeded("load queue")));
    }
}
