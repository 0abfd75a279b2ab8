//! Layout constants and runtime behaviour switches.
//!
//! # Pre-computed Layout Constants
//!
//! Every gap and derived spacing used by the menus is a `const`, so layout math
//! in the frame loop reduces to additions against values the compiler already
//! folded. The derived block at the bottom must stay in sync with the base gaps;
//! edit the base values, never the derived ones.
//!
//! ```text
//! ┌──────────────────────────────────────┐  ─┐
//! │ FPS           (header band)          │   │ TOP_GAP
//! ├──────────────────────────────────┬───┤  ─┘
//! │ ╭──────────────╮                 │ ┃ │
//! │ │ selected row │        [value]  │ ┃ │  list rows, LIST_ITEM_SPACE apart
//! │ ╰──────────────╯                 │ ┃ │
//! │   next row                       │ │ │  Y scrollbar
//! └──────────────────────────────────┴───┘
//! ```
//!
//! Runtime switches (looping, expand animation, selector fill, splash, speeds and
//! easing) live in [`UiConfig`] so a host can tune them without rebuilding.

use crate::animations::Easing;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306-class panel).
pub const DISPLAY_W: i32 = 128;

/// Display height in pixels.
pub const DISPLAY_H: i32 = 64;

// =============================================================================
// Gap Configuration
// =============================================================================

/// Left/right gutter cleared after the content is drawn.
pub const OUT_GAP: i32 = 0;
/// Header band height above the content area.
pub const TOP_GAP: i32 = 10;

pub const LIST_ITEM_GAP: i32 = 1;
pub const LIST_SELECTOR_LEFT_GAP: i32 = 1;
pub const LIST_SELECTOR_TOP_GAP: i32 = 1;
pub const LIST_SCROLLBAR_GAP: i32 = 2;

pub const ICON_ITEM_GAP: i32 = 4;
pub const ICON_SELECTOR_GAP: i32 = 1;
pub const ICON_DASHLINE_BOTTOM: i32 = 24;
pub const ICON_TITLE_BOTTOM: i32 = 0;
pub const ICON_SCROLLBAR_GAP: i32 = 1;

pub const DIALOG_OUT_GAP: i32 = 2;
pub const DIALOG_IN_GAP: i32 = 3;

/// Horizontal gap around a nested widget (checkbox, value selector).
pub const WIDGET_GAP: i32 = 2;

// =============================================================================
// Font / Widget Sizes
// =============================================================================

/// Line height of the content font (`FONT_6X12`).
pub const FONT_SIZE: i32 = 12;

/// Edge length of an icon slot.
pub const ICON_SIZE: i32 = 30;

/// Length of each leg of the icon selector corner brackets.
pub const ICON_SELECTOR_LENGTH: i32 = 3;

/// Length of one dash segment in the icon menu separator.
pub const ICON_DASHLINE_SPLIT_LENGTH: i32 = 3;

/// Edge length of a checkbox.
pub const CHECKBOX_SIZE: i32 = 8;

pub const XSCROLLBAR_W: i32 = DISPLAY_W - OUT_GAP * 2;
pub const XSCROLLBAR_H: i32 = 3;
pub const YSCROLLBAR_W: i32 = 5;
pub const YSCROLLBAR_H: i32 = DISPLAY_H - TOP_GAP;

pub const DIALOG_MAX_W: i32 = DISPLAY_W - DIALOG_OUT_GAP * 2 - DIALOG_IN_GAP;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Animation frame rate ceiling.
pub const BASE_ANI_FPS: u64 = 60;

/// Minimum wall-clock interval between two accepted tween samples.
pub const MIN_FRAME_INTERVAL_MS: u64 = 1000 / BASE_ANI_FPS;

/// Window over which the FPS counter accumulates frames.
pub const FPS_WINDOW_MS: u64 = 1000;

// =============================================================================
// Capacities (heapless storage)
// =============================================================================

pub const MAX_MENUS: usize = 8;
pub const MAX_MENU_ITEMS: usize = 24;
pub const MAX_DIALOGS: usize = 4;
pub const MAX_HISTORY: usize = 16;
/// Every item, every dialog and the dash line can be queued at boot.
pub const LOAD_QUEUE_CAPACITY: usize = MAX_MENUS * MAX_MENU_ITEMS + MAX_DIALOGS + 1;
pub const EVENT_QUEUE_CAPACITY: usize = 16;
pub const LABEL_TEXT_CAPACITY: usize = 64;

// =============================================================================
// Derived Layout Constants (do not edit)
// =============================================================================

pub const HALF_DISPLAY_W: i32 = DISPLAY_W / 2;
pub const HALF_DISPLAY_H: i32 = DISPLAY_H / 2;
pub const HALF_FONT_SIZE: i32 = FONT_SIZE / 2;

/// Bytes in a 1bpp vertical-LSB frame.
pub const FRAME_BYTES: usize = ((DISPLAY_H as usize + 7) / 8) * DISPLAY_W as usize;

pub const DISPLAY_W_GAP_BAR: i32 = DISPLAY_W - OUT_GAP - YSCROLLBAR_W - LIST_SCROLLBAR_GAP;
pub const DISPLAY_H_GAP: i32 = DISPLAY_H - TOP_GAP;
pub const RIGHT_MASK_X: i32 = DISPLAY_W - OUT_GAP;

/// Vertical space between two list rows (gap + selector padding + selector line).
pub const LIST_SPACE: i32 = LIST_ITEM_GAP + LIST_SELECTOR_TOP_GAP + 1;
pub const LIST_ITEM_SPACE: i32 = FONT_SIZE + LIST_SPACE;
pub const HALF_LIST_ITEM_SPACE: i32 = LIST_ITEM_SPACE / 2;
pub const LIST_SELECTOR_LEFT_SPACE: i32 = LIST_SELECTOR_LEFT_GAP + OUT_GAP;
pub const LIST_SELECTOR_TOP_SPACE: i32 = TOP_GAP + LIST_SELECTOR_TOP_GAP + 1;

pub const XSCROLLBAR_SPACE: i32 = XSCROLLBAR_H + ICON_SCROLLBAR_GAP;
pub const ICON_ITEM_SPACE: i32 = ICON_SIZE + ICON_ITEM_GAP;
pub const ICON_SELECTOR_LEFT_SPACE: i32 = ICON_SELECTOR_GAP + OUT_GAP;
pub const ICON_SELECTOR_TOP_SPACE: i32 = ICON_SELECTOR_GAP + TOP_GAP + 1 + XSCROLLBAR_SPACE;
pub const DASHLINE_Y: i32 = DISPLAY_H - ICON_DASHLINE_BOTTOM + TOP_GAP;

pub const LIST_MAX_W: i32 = DISPLAY_W_GAP_BAR - OUT_GAP;
pub const LIST_MAX_H: i32 = DISPLAY_H - TOP_GAP;
pub const ICON_MAX_W: i32 = DISPLAY_W - OUT_GAP * 2;

pub const YSCROLLBAR_X: i32 = RIGHT_MASK_X - YSCROLLBAR_W;
pub const YSCROLLBAR_LINE_YH: i32 = TOP_GAP + YSCROLLBAR_H;
pub const YSCROLLBAR_LINE_X: i32 = YSCROLLBAR_X + YSCROLLBAR_W / 2;
pub const YSCROLLBAR_LINE_XW: i32 = YSCROLLBAR_X + YSCROLLBAR_W;
pub const YSCROLLBAR_MASK_X: i32 = YSCROLLBAR_X - LIST_SCROLLBAR_GAP;
pub const YSCROLLBAR_MASK_W: i32 = YSCROLLBAR_W + LIST_SCROLLBAR_GAP;
pub const YSCROLLBAR_BOTTOM_LINE_Y: i32 = YSCROLLBAR_LINE_YH - 1;

pub const XSCROLLBAR_MASK_Y: i32 = TOP_GAP - ICON_SCROLLBAR_GAP;
pub const XSCROLLBAR_MASK_H: i32 = XSCROLLBAR_H;

/// Resting x of a dialog box before its width is subtracted (two 1px borders).
pub const DIALOG_BASE_X: i32 = DISPLAY_W - DIALOG_IN_GAP * 2 - DIALOG_OUT_GAP - 2;
pub const DIALOG_IN_GAP_M2: i32 = DIALOG_IN_GAP * 2;
pub const DIALOG_MAX_X: i32 = DIALOG_BASE_X - DIALOG_MAX_W + DIALOG_IN_GAP_M2;
pub const WIDGET_GAP_M2: i32 = WIDGET_GAP * 2;
pub const DISPLAY_W_WIDGET_GAP: i32 = DISPLAY_W + WIDGET_GAP;

/// Right edge nested widgets are aligned against.
pub const WIDGET_BASE_X: i32 = LIST_MAX_W - LIST_SELECTOR_LEFT_GAP;

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Behaviour switches and animation tuning.
///
/// Frame counts are "reach the destination within N frames"; with the 16 ms
/// frame gate a 20-frame tween lasts roughly a third of a second.
#[derive(Clone, Copy, Debug)]
pub struct UiConfig {
    /// Wrap the selection cursor past the first/last item.
    pub menu_loop: bool,
    /// Play the staggered reveal when a page is entered.
    pub expand_animation: bool,
    /// Fill the selector and XOR it over the content instead of outlining.
    pub selector_fill: bool,
    /// Run the logo splash while the loader queue drains.
    pub show_startup_page: bool,
    /// Draw the FPS counter in the header band.
    pub show_fps: bool,
    pub logo_text: &'static str,

    pub default_speed: u16,
    pub camera_speed: u16,
    pub selector_speed: u16,
    pub expand_speed: u16,
    pub dialog_speed: u16,
    pub dialog_duration_ms: u64,

    /// Marquee step in pixels per frame interval.
    pub text_scroll_speed: i32,
    /// Blink period of an engaged value selector.
    pub flash_interval_ms: u64,

    pub default_ease: Easing,
    pub camera_ease: Easing,
    pub selector_ease: Easing,
    pub list_expand_ease: Easing,
    pub icon_expand_ease: Easing,
    pub scrollbar_ease: Easing,
    pub icon_title_ease: Easing,
    pub dialog_ease: Easing,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_loop: true,
            expand_animation: true,
            selector_fill: true,
            show_startup_page: true,
            show_fps: true,
            logo_text: "Welcome!",
            default_speed: 20,
            camera_speed: 20,
            selector_speed: 16,
            expand_speed: 20,
            dialog_speed: 14,
            dialog_duration_ms: 2000,
            text_scroll_speed: 2,
            flash_interval_ms: 250,
            default_ease: Easing::InOutBack,
            camera_ease: Easing::InOutBack,
            selector_ease: Easing::InOutBack,
            list_expand_ease: Easing::OutCirc,
            icon_expand_ease: Easing::OutCirc,
            scrollbar_ease: Easing::InOutBack,
            icon_title_ease: Easing::InOutBack,
            dialog_ease: Easing::InOutBack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_list_spacing() {
        assert_eq!(LIST_SPACE, 3, "gap + selector padding + selector line");
        assert_eq!(LIST_ITEM_SPACE, 15, "font height plus list spacing");
        assert_eq!(LIST_MAX_W, 121, "content width leaves room for the Y scrollbar");
    }

    #[test]
    fn test_derived_icon_spacing() {
        assert_eq!(ICON_ITEM_SPACE, 34, "icon slot plus gap");
        assert_eq!(ICON_SELECTOR_TOP_SPACE, 16);
        assert_eq!(DASHLINE_Y, 50);
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(MIN_FRAME_INTERVAL_MS, 16, "60 FPS ceiling");
    }

    #[test]
    fn test_frame_bytes() {
        assert_eq!(FRAME_BYTES, 1024, "128x64 at 1bpp");
    }

    #[test]
    fn test_dialog_bounds() {
        assert_eq!(DIALOG_MAX_W, 121);
        assert_eq!(DIALOG_BASE_X, 118);
        assert_eq!(DIALOG_MAX_X, 3);
    }

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert!(config.menu_loop, "menus loop by default");
        assert_eq!(config.selector_speed, 16);
        assert_eq!(config.dialog_duration_ms, 2000);
    }
}
