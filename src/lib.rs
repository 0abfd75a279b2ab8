//! Frame-based menu toolkit for 128x64 monochrome displays.
//!
//! Menus (vertical lists, horizontal icon rows, host-drawn custom pages),
//! nested widgets and self-closing dialogs, all moved by one time-gated tween
//! engine so animation speed never depends on how often the host polls.
//!
//! # Host Integration
//!
//! A host supplies a [`Display`] that flushes the finished [`FrameBuffer`] and
//! a [`Clock`], builds its menus on a [`Ui`], then loops: feed [`Action`]s,
//! drain [`UiEvent`]s, call [`Ui::update`]. Nothing here allocates; every
//! store is a fixed-capacity `heapless` container sized in [`config`].
//!
//! The `simulator` feature builds `src/main.rs`, which runs the same loop in
//! an SDL2 window.
//!
//! Unit tests sit next to the code; end-to-end navigation runs live in
//! `tests/scenarios.rs` against [`NullDisplay`] and [`ManualClock`].

#![cfg_attr(not(test), no_std)]
// pixel math mixes i32 coordinates, u32 sizes and f32 easing
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Motion ===
pub mod animations;
pub mod geometry;

// === Configuration and errors ===
pub mod config;
pub mod error;

// === Rendering ===
pub mod display;
pub mod framebuffer;
pub mod styles;

// === Widgets and menus ===
pub mod camera;
pub mod culling;
pub mod menu;
pub mod scrollbar;
pub mod selector;
pub mod widgets;

// === Navigation and runtime ===
pub mod history;
pub mod input;
pub mod loader;
pub mod profiling;
pub mod screens;
pub mod ui;

pub use animations::Easing;
pub use config::UiConfig;
pub use display::{Clock, Display, ManualClock, NullDisplay};
pub use error::UiError;
pub use framebuffer::FrameBuffer;
pub use geometry::Rect;
pub use input::{Action, Buttons, TriggerEdge};
pub use menu::{DialogId, Link, MenuId, MenuKind, PageHandlers};
pub use ui::{NavState, Ui, UiEvent};
pub use widgets::{Bitmap, DialogState, Marquee, Value, ValueList};
