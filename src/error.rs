//! Construction-time errors.
//!
//! Per-frame work never returns these: `Ui::update` absorbs anomalies and
//! logs them. Everything here surfaces while menus, items and dialogs are
//! being built, before the first interactive frame.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UiError {
    /// A list or icon menu was activated without any items.
    #[error("menu {0} has no items to select")]
    EmptyMenu(usize),

    #[error("value selector needs at least one value")]
    EmptyValueList,

    /// Numeric range bounds whose span or values do not fit in an `i32`.
    #[error("value range overflows")]
    ValueRangeOverflow,

    #[error("default value is outside the selectable range")]
    DefaultOutOfRange,

    /// A fixed-capacity store (menus, items, dialogs, load queue) is full.
    #[error("capacity of {0} exceeded")]
    CapacityExceeded(&'static str),

    #[error("no menu with id {0}")]
    UnknownMenu(usize),

    #[error("menu {menu} has no item {item}")]
    UnknownItem { menu: usize, item: usize },

    #[error("no dialog with id {0}")]
    UnknownDialog(usize),

    #[error("text does not fit in {0} bytes")]
    TextTooLong(usize),

    #[error("item already owns a nested widget")]
    NestedWidgetTaken,

    /// Nested widgets only attach to labels in a list menu.
    #[error("item is not a list label")]
    NotAListItem,

    /// Typed construction (`add_label`, `add_icon`, `add_page_label`) aimed at
    /// the wrong kind of menu.
    #[error("menu {0} does not take this kind of item")]
    WrongMenuKind(usize),
}
