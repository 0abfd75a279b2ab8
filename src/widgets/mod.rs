//! Visual components placed in menus and overlays.
//!
//! - [`label`]: Text rows with marquee scrolling
//! - [`icon`]: Fixed-size bitmaps for icon menus
//! - [`checkbox`]: Toggle nested at the right of a list row
//! - [`value_selector`]: In-place value picker nested at the right of a list row
//! - [`dialog`]: Self-closing text overlay
//! - [`dash_line`]: Icon menu separator
//! - [`primitives`]: Shared low-level drawing utilities
//!
//! # Architecture
//!
//! Widgets own their [`Geometry`](crate::geometry::Geometry) and draw
//! themselves at an offset handed in by the owning menu (camera scroll plus
//! the menu's content inset). They never look up global state: selection,
//! time and configuration arrive as arguments.
//!
//! Every widget has a two-phase lifecycle. Construction is cheap and records
//! what to show; `init()` does the measuring and marks the widget drawable.
//! Widgets built before the first page is shown are initialised by the
//! startup loader; later ones are initialised on creation.

pub mod checkbox;
pub mod dash_line;
pub mod dialog;
pub mod icon;
pub mod label;
pub mod primitives;
pub mod value_selector;

pub use checkbox::CheckBox;
pub use dash_line::DashLine;
pub use dialog::{Dialog, DialogMotion, DialogState, DialogTick};
pub use icon::{Bitmap, Icon};
pub use label::{Label, Marquee};
pub use value_selector::{Steppable, Value, ValueList, ValueSelector};

use crate::config::WIDGET_GAP;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Geometry;

/// Widget nested inside a list label, right-aligned on the row.
#[derive(Clone, Debug)]
pub enum Nested {
    CheckBox(CheckBox),
    Value(ValueSelector),
}

impl Nested {
    pub const fn geometry(&self) -> &Geometry {
        match self {
            Self::CheckBox(checkbox) => &checkbox.geometry,
            Self::Value(selector) => &selector.geometry,
        }
    }

    /// Row width the widget takes away from its label, gap included.
    pub const fn reserved_width(&self) -> i32 {
        self.geometry().current.w + WIDGET_GAP
    }

    /// The up/down interceptor, if this widget has one.
    pub fn steppable_mut(&mut self) -> Option<&mut dyn Steppable> {
        match self {
            Self::CheckBox(_) => None,
            Self::Value(selector) => Some(selector),
        }
    }

    pub fn init(&mut self) {
        if let Self::Value(selector) = self {
            selector.init();
        }
    }

    pub fn draw(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        flash_interval_ms: u64,
        ox: i32,
        oy: i32,
    ) {
        match self {
            Self::CheckBox(checkbox) => checkbox.draw(frame, ox, oy),
            Self::Value(selector) => {
                selector.tick(now_ms, flash_interval_ms);
                selector.draw(frame, ox, oy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_value_selector_steps() {
        let mut checkbox = Nested::CheckBox(CheckBox::new(false, 0));
        assert!(checkbox.steppable_mut().is_none());

        let mut value = Nested::Value(ValueSelector::numbers(0, 5, 1, 2, false, 0).unwrap());
        let stepper = value.steppable_mut().expect("value selector steps");
        assert!(!stepper.engaged());
        stepper.step_up();
        match value {
            Nested::Value(selector) => assert_eq!(selector.value(), Some(Value::Number(3))),
            Nested::CheckBox(_) => unreachable!(),
        }
    }

    #[test]
    fn test_reserved_width() {
        let checkbox = Nested::CheckBox(CheckBox::new(false, 0));
        assert_eq!(checkbox.reserved_width(), 8 + WIDGET_GAP);
    }
}
