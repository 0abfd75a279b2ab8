// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // u128 -> u64 millisecond clock
#![allow(clippy::cast_possible_wrap)] // u32 -> i32 for pixel math
#![allow(clippy::too_many_lines)] // main() builds the whole demo menu tree

//! Desktop simulator for the menu toolkit.
//!
//! Renders the library's 128x64 frame buffer into an SDL2 window through
//! `embedded-graphics-simulator` and maps the keyboard onto the four
//! navigation buttons.
//!
//! # Controls
//!
//! | Button | Key                 | Action                            |
//! |--------|---------------------|-----------------------------------|
//! | Up     | `Up` / `K`          | Previous item, or step value up   |
//! | Down   | `Down` / `J`        | Next item, or step value down     |
//! | Yes    | `Return` / `Space`  | Confirm / engage / toggle         |
//! | Back   | `Escape` / `Backspace` | Previous page                  |
//! | -      | `P`                 | Toggle display power              |
//!
//! Keys feed the same debounced [`Buttons`] a board would, firing on release.
//!
//! # Demo Menu Tree
//!
//! ```text
//! Main (list)
//! ├── Apps ──────────► Apps (icons) ──► dialogs
//! ├── Sound      [x]
//! ├── Brightness   7
//! ├── Speed      Mid
//! ├── Now playing ───► custom page (up/down = volume, scrolling track title)
//! ├── About this tiny menu toolkit for small panels (marquee, dialog)
//! └── Quit
//! ```

use std::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};

use crabui::config::{DISPLAY_W, ICON_SIZE, MIN_FRAME_INTERVAL_MS};
use crabui::{
    Bitmap, Buttons, Clock, Display, FrameBuffer, Link, Marquee, MenuId, PageHandlers, TriggerEdge, Ui, UiConfig,
    UiError, UiEvent, Value, ValueList,
};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{error, info};

// =============================================================================
// Host Seams
// =============================================================================

/// SDL window standing in for the OLED panel.
struct SdlPanel {
    display: SimulatorDisplay<BinaryColor>,
    window: Window,
}

impl SdlPanel {
    fn new() -> Self {
        let output_settings = OutputSettingsBuilder::new()
            .theme(BinaryColorTheme::OledBlue)
            .scale(4)
            .build();
        Self {
            display: SimulatorDisplay::new(Size::new(128, 64)),
            window: Window::new("crabui simulator", &output_settings),
        }
    }
}

impl Display for SdlPanel {
    type Error = Infallible;

    fn show(
        &mut self,
        frame: &FrameBuffer,
    ) -> Result<(), Self::Error> {
        let size = frame.size();
        let pixels = (0..size.height as i32).flat_map(|y| {
            (0..size.width as i32).map(move |x| Pixel(Point::new(x, y), BinaryColor::from(frame.pixel(x, y))))
        });
        self.display.draw_iter(pixels)?;
        self.window.update(&self.display);
        Ok(())
    }
}

struct InstantClock {
    start: Instant,
}

impl Clock for InstantClock {
    fn now_ms(&self) -> u64 { self.start.elapsed().as_millis() as u64 }

    fn sleep_ms(
        &mut self,
        ms: u64,
    ) {
        thread::sleep(Duration::from_millis(ms));
    }
}

// =============================================================================
// Demo Content
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DemoAction {
    Quit,
    VolumeUp,
    VolumeDown,
    Mute,
}

const ICON_BYTES: usize = 4 * ICON_SIZE as usize;

/// Square outline inset by `inset` pixels, optionally with a filled center.
const fn square_icon(
    inset: usize,
    filled_center: bool,
) -> [u8; ICON_BYTES] {
    let mut data = [0u8; ICON_BYTES];
    let size = ICON_SIZE as usize;
    let mut y = 0;
    while y < size {
        let mut x = 0;
        while x < size {
            let edge = (x == inset || x == size - 1 - inset || y == inset || y == size - 1 - inset)
                && x >= inset
                && x <= size - 1 - inset
                && y >= inset
                && y <= size - 1 - inset;
            let center = filled_center && x >= 11 && x < 19 && y >= 11 && y < 19;
            if edge || center {
                data[y * 4 + x / 8] |= 0x80 >> (x % 8);
            }
            x += 1;
        }
        y += 1;
    }
    data
}

/// Diagonal cross.
const fn cross_icon() -> [u8; ICON_BYTES] {
    let mut data = [0u8; ICON_BYTES];
    let size = ICON_SIZE as usize;
    let mut i = 2;
    while i < size - 2 {
        data[i * 4 + i / 8] |= 0x80 >> (i % 8);
        let x = size - 1 - i;
        data[i * 4 + x / 8] |= 0x80 >> (x % 8);
        i += 1;
    }
    data
}

static FRAME_ICON: [u8; ICON_BYTES] = square_icon(2, false);
static TARGET_ICON: [u8; ICON_BYTES] = square_icon(6, true);
static CROSS_ICON: [u8; ICON_BYTES] = cross_icon();

struct Demo {
    main: MenuId,
    player: MenuId,
    volume_label: usize,
}

fn build(ui: &mut Ui<SdlPanel, InstantClock, DemoAction>) -> Result<Demo, UiError> {
    let saved = ui.add_dialog(ui.config().dialog_duration_ms)?;
    let notice = ui.add_dialog(1000)?;

    let main = ui.add_list_menu()?;
    let apps = ui.add_icon_menu()?;
    let player = ui.add_custom_page(PageHandlers {
        up: Some(DemoAction::VolumeUp),
        down: Some(DemoAction::VolumeDown),
        yes: Some(DemoAction::Mute),
    })?;

    ui.add_label(main, "Apps", Some(Link::Page(apps)))?;
    let sound = ui.add_label(main, "Sound", None)?;
    ui.attach_checkbox(main, sound, true)?;
    let brightness = ui.add_label(main, "Brightness", None)?;
    ui.attach_value_selector(main, brightness, ValueList::range(0, 10, 1)?, Value::Number(7), false)?;
    let speed = ui.add_label(main, "Speed", None)?;
    ui.attach_value_selector(main, speed, ValueList::Labels(&["Low", "Mid", "High"]), Value::Label("Mid"), true)?;
    ui.add_label(main, "Now playing", Some(Link::Page(player)))?;
    ui.add_label(
        main,
        "About this tiny menu toolkit for small panels",
        Some(Link::Dialog { dialog: notice, text: "crabui 0.1" }),
    )?;
    ui.add_label(main, "Quit", Some(Link::App(DemoAction::Quit)))?;

    let icons = [(&FRAME_ICON, "Frames"), (&TARGET_ICON, "Target"), (&CROSS_ICON, "Cancel")];
    for (data, title) in icons {
        ui.item(
            apps,
            title,
            Some(Bitmap::new(data, ICON_SIZE as u32)),
            Some(Link::Dialog { dialog: saved, text: title }),
        )?;
    }

    ui.add_page_label(player, "Now playing", 4, 4)?;
    let volume_label = ui.add_page_label(player, "Volume 5", 4, 24)?;
    let track = ui.add_page_label(player, "Track 03 - a title much wider than the panel", 4, 40)?;
    ui.set_label_marquee(player, track, Marquee { enabled: true, always: true, width: DISPLAY_W - 8 })?;

    Ok(Demo { main, player, volume_label })
}

/// Keyboard key to button slot in `Action::ALL` order.
fn button_slot(keycode: Keycode) -> Option<usize> {
    match keycode {
        Keycode::Up | Keycode::K => Some(0),
        Keycode::Down | Keycode::J => Some(1),
        Keycode::Return | Keycode::Space => Some(2),
        Keycode::Escape | Keycode::Backspace => Some(3),
        _ => None,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = InstantClock { start: Instant::now() };
    let mut ui = Ui::new(SdlPanel::new(), clock, UiConfig::default());
    let demo = match build(&mut ui) {
        Ok(demo) => demo,
        Err(err) => {
            error!("demo menu could not be built: {err}");
            return;
        }
    };
    if let Err(err) = ui.page(demo.main) {
        error!("cannot enter the main menu: {err}");
        return;
    }

    let mut buttons = Buttons::new(TriggerEdge::Release);
    let mut levels = [false; 4];
    let mut volume = 5u8;
    let mut muted = false;

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        let mut power_toggled = false;
        for ev in ui.display_mut().window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if keycode == Keycode::P && !repeat {
                        power_toggled = true;
                    } else if let Some(slot) = button_slot(keycode) {
                        levels[slot] = true;
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(slot) = button_slot(keycode) {
                        levels[slot] = false;
                    }
                }
                _ => {}
            }
        }
        if power_toggled {
            let on = !ui.is_display_on();
            ui.set_display_on(on);
        }

        let now = ui.clock().now_ms();
        for action in buttons.poll(levels, now) {
            ui.dispatch(action);
        }
        if !ui.is_display_on() && levels.iter().any(|pressed| *pressed) {
            ui.set_display_on(true);
        }

        while let Some(event) = ui.poll_event() {
            match event {
                UiEvent::Link(DemoAction::Quit) => {
                    info!("quit selected");
                    return;
                }
                UiEvent::PageAction(action) => {
                    match action {
                        DemoAction::VolumeUp => volume = (volume + 1).min(10),
                        DemoAction::VolumeDown => volume = volume.saturating_sub(1),
                        DemoAction::Mute => muted = !muted,
                        DemoAction::Quit => {}
                    }
                    let text = if muted { "Muted".to_owned() } else { format!("Volume {volume}") };
                    if let Err(err) = ui.set_label_text(demo.player, demo.volume_label, &text) {
                        error!("volume label: {err}");
                    }
                }
                other => info!("event: {other:?}"),
            }
        }

        ui.update();

        // ~60 FPS
        let elapsed = frame_start.elapsed().as_millis() as u64;
        if elapsed < MIN_FRAME_INTERVAL_MS {
            ui.clock_mut().sleep_ms(MIN_FRAME_INTERVAL_MS - elapsed);
        }
    }
}
