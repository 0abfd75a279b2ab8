//! In-place value picker nested at the right edge of a list row.
//!
//! Confirming the row engages the selector: while engaged it intercepts
//! up/down to step through its values and blinks to show it has focus.
//! Confirming again disengages it and commits the value.

use core::fmt::Write;

use crate::config::{LIST_ITEM_SPACE, WIDGET_BASE_X, WIDGET_GAP, WIDGET_GAP_M2};
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Geometry;
use crate::widgets::label::{Label, LabelText, Marquee};

/// Widget that can take over up/down while it has focus.
pub trait Steppable {
    fn engaged(&self) -> bool;
    fn step_up(&mut self);
    fn step_down(&mut self);
}

/// One selectable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    Label(&'static str),
    Number(i32),
}

impl Value {
    fn render(self) -> LabelText {
        let mut text = LabelText::new();
        match self {
            Self::Label(s) => {
                let _ = text.push_str(s);
            }
            Self::Number(n) => {
                let _ = write!(text, "{n}");
            }
        }
        text
    }
}

/// The set a selector steps through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueList {
    Labels(&'static [&'static str]),
    /// `min, min + step, ...` for `count` values.
    Numbers { min: i32, step: i32, count: usize },
}

impl ValueList {
    /// Inclusive numeric range `[min, max]` in `step` increments.
    pub fn range(
        min: i32,
        max: i32,
        step: i32,
    ) -> Result<Self, UiError> {
        if step <= 0 || max < min {
            return Err(UiError::EmptyValueList);
        }
        let span = max.checked_sub(min).ok_or(UiError::ValueRangeOverflow)?;
        let count = (span / step) as usize + 1;
        Ok(Self::Numbers { min, step, count })
    }

    pub const fn len(&self) -> usize {
        match self {
            Self::Labels(labels) => labels.len(),
            Self::Numbers { count, .. } => *count,
        }
    }

    pub const fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<Value> {
        match self {
            Self::Labels(labels) => labels.get(index).copied().map(Value::Label),
            Self::Numbers { min, step, count } => {
                if index >= *count {
                    return None;
                }
                let offset = step.checked_mul(i32::try_from(index).ok()?)?;
                min.checked_add(offset).map(Value::Number)
            }
        }
    }

    pub fn position(
        &self,
        value: Value,
    ) -> Option<usize> {
        match (self, value) {
            (Self::Labels(labels), Value::Label(wanted)) => labels.iter().position(|label| *label == wanted),
            (Self::Numbers { min, step, count }, Value::Number(n)) => {
                let offset = n.checked_sub(*min)?;
                if offset < 0 || offset % step != 0 {
                    return None;
                }
                let index = (offset / step) as usize;
                (index < *count).then_some(index)
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ValueSelector {
    pub geometry: Geometry,
    label: Label,
    values: ValueList,
    index: usize,
    engaged: bool,
    looped: bool,
    flash_on: bool,
    last_flash: u64,
    row_y: i32,
}

impl ValueSelector {
    /// Selector over `values` starting at `index`.
    pub fn new(
        values: ValueList,
        index: usize,
        looped: bool,
        row_y: i32,
    ) -> Result<Self, UiError> {
        if values.is_empty() {
            return Err(UiError::EmptyValueList);
        }
        let value = values.get(index).ok_or(UiError::DefaultOutOfRange)?;
        let mut label = Label::new(&value.render())?;
        label.marquee = Marquee::OFF;
        Ok(Self {
            geometry: Geometry::default(),
            label,
            values,
            index,
            engaged: false,
            looped,
            flash_on: true,
            last_flash: 0,
            row_y,
        })
    }

    /// Numeric selector over `[min, max]`, starting at `default`.
    pub fn numbers(
        min: i32,
        max: i32,
        step: i32,
        default: i32,
        looped: bool,
        row_y: i32,
    ) -> Result<Self, UiError> {
        let values = ValueList::range(min, max, step)?;
        let index = values.position(Value::Number(default)).ok_or(UiError::DefaultOutOfRange)?;
        Self::new(values, index, looped, row_y)
    }

    /// Measure the value and right-align against the widget edge.
    pub fn init(&mut self) {
        self.label.init();
        let mut pos = self.label.geometry.current;
        pos.x = WIDGET_BASE_X - WIDGET_GAP - pos.w;
        pos.y = self.row_y;
        self.geometry.jump_to(pos);
        self.label.geometry.jump_to(pos);
    }

    #[inline]
    pub const fn index(&self) -> usize { self.index }

    pub fn value(&self) -> Option<Value> { self.values.get(self.index) }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.label.is_loaded() }

    /// Flip engagement. Returns the new state.
    pub fn toggle(
        &mut self,
        now_ms: u64,
    ) -> bool {
        self.engaged = !self.engaged;
        if self.engaged {
            self.last_flash = now_ms;
        }
        self.engaged
    }

    fn step_to(
        &mut self,
        index: usize,
    ) {
        self.index = index;
        if let Some(value) = self.values.get(index) {
            // rendered values always fit the label
            let _ = self.label.set_text(&value.render());
        }
        self.init();
    }

    /// Blink bookkeeping; call once per frame.
    pub fn tick(
        &mut self,
        now_ms: u64,
        interval_ms: u64,
    ) {
        if !self.engaged {
            self.flash_on = true;
        } else if now_ms.saturating_sub(self.last_flash) > interval_ms {
            self.flash_on = !self.flash_on;
            self.last_flash = now_ms;
        }
    }

    #[inline]
    pub const fn is_visible(&self) -> bool { self.flash_on }

    pub fn draw(
        &self,
        frame: &mut FrameBuffer,
        ox: i32,
        oy: i32,
    ) {
        let pos = self.geometry.current;
        let mut mask = pos.offset(ox - WIDGET_GAP, oy);
        mask.w += WIDGET_GAP_M2;
        mask.h = LIST_ITEM_SPACE;
        frame.fill_rect(mask, false);
        if self.is_visible() {
            self.label.draw(frame, ox, oy);
        }
    }
}

impl Steppable for ValueSelector {
    fn engaged(&self) -> bool { self.engaged }

    fn step_up(&mut self) {
        let last = self.values.len() - 1;
        let next = if self.index < last {
            self.index + 1
        } else if self.looped {
            0
        } else {
            last
        };
        self.step_to(next);
    }

    fn step_down(&mut self) {
        let next = if self.index > 0 {
            self.index - 1
        } else if self.looped {
            self.values.len() - 1
        } else {
            0
        };
        self.step_to(next);
    }
}
