//! Pre-computed static text styles.
//!
//! Every widget draws with one of a handful of fonts, all in the "on" color.
//! Defining them as `const` keeps style construction out of the frame loop;
//! inverted text is never needed because the filled selector inverts through
//! an XOR pass instead.
//!
//! Measurement goes through [`text_width`], which asks the same renderer that
//! draws the string, so a label's measured width always matches its pixels.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_5X8, FONT_6X12},
    },
    pixelcolor::BinaryColor,
    prelude::Point,
    text::{Baseline, renderer::TextRenderer},
};
use profont::PROFONT_14_POINT;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Content font for list rows, captions and dialogs (line height 12).
pub const TEXT_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X12, BinaryColor::On);

/// Small font for the FPS counter in the header band.
pub const SMALL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

/// Splash logo font.
pub const LOGO_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&PROFONT_14_POINT, BinaryColor::On);

// =============================================================================
// Measurement
// =============================================================================

/// Rendered width of `text` in `style`, in pixels.
pub fn text_width(
    style: &MonoTextStyle<'_, BinaryColor>,
    text: &str,
) -> i32 {
    style
        .measure_string(text, Point::zero(), Baseline::Top)
        .bounding_box
        .size
        .width as i32
}

/// Line height of `style`, in pixels.
pub fn text_height(style: &MonoTextStyle<'_, BinaryColor>) -> i32 {
    style.line_height() as i32
}
