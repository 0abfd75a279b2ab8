//! The UI context: menus, navigation, overlays and the frame loop.
//!
//! A [`Ui`] owns everything the toolkit draws plus the two seams to the
//! outside world (a [`Display`] and a [`Clock`]). Hosts build their menus
//! through it, feed it [`Action`]s, call [`Ui::update`] once per frame and
//! drain [`UiEvent`]s for the things only the application can act on.
//!
//! # Navigation States
//!
//! ```text
//! Booting ──startup()──► Idle ──page()──► List | Icon | Custom
//!                                            ▲        │
//!                                            └─back()─┘   (history pop)
//! ```
//!
//! Input is ignored until a page is active. Dialogs are an orthogonal overlay:
//! while one is showing, navigation keeps working underneath.
//!
//! # Frame Order
//!
//! Each [`Ui::update`] writes the back-buffer in a fixed order:
//!
//! 1. active menu (camera, culled children, scrollbar/caption)
//! 2. selector (straight onto the frame, or into its scratch layer)
//! 3. XOR of the scratch layer when the filled selector is on
//! 4. masks over the header band and side gutters
//! 5. open dialogs, detaching those whose exit slide finished
//! 6. FPS counter
//! 7. flush

use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use heapless::{Deque, Vec};
use log::{debug, info, warn};

use crate::config::{
    DISPLAY_H, DISPLAY_W, EVENT_QUEUE_CAPACITY, MAX_DIALOGS, MAX_MENUS, MIN_FRAME_INTERVAL_MS, OUT_GAP,
    RIGHT_MASK_X, TOP_GAP, UiConfig,
};
use crate::display::{Clock, Display};
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::Rect;
use crate::history::History;
use crate::input::Action;
use crate::loader::{LoadQueue, LoadTarget};
use crate::menu::{CustomPage, DialogId, IconMenu, Item, ItemContent, Link, ListMenu, Menu, MenuId, MenuKind, PageHandlers};
use crate::profiling::FpsCounter;
use crate::screens::Splash;
use crate::selector::Selector;
use crate::styles::SMALL_STYLE;
use crate::widgets::{
    Bitmap, CheckBox, DashLine, Dialog, DialogMotion, DialogState, DialogTick, Icon, Label, Marquee, Nested, Value,
    ValueList, ValueSelector,
};

/// FPS counter backdrop in the header band.
const FPS_BOX: Rect = Rect::new(0, 0, 30, 8);

// =============================================================================
// Events and State
// =============================================================================

/// Something the host should react to. Polled with [`Ui::poll_event`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent<A> {
    CheckBoxToggled { menu: MenuId, item: usize, checked: bool },
    /// An engaged value selector stepped.
    ValueChanged { menu: MenuId, item: usize, value: Value },
    /// A value selector was released with this value.
    ValueCommitted { menu: MenuId, item: usize, value: Value },
    /// An item with an [`Link::App`] was confirmed.
    Link(A),
    /// Up/down/confirm on a custom page, mapped through its handlers.
    PageAction(A),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Booting,
    /// Started up, no page entered yet.
    Idle,
    List(MenuId),
    Icon(MenuId),
    Custom(MenuId),
}

impl NavState {
    const fn menu(self) -> Option<MenuId> {
        match self {
            Self::List(menu) | Self::Icon(menu) | Self::Custom(menu) => Some(menu),
            Self::Booting | Self::Idle => None,
        }
    }
}

fn push_event<A>(
    events: &mut Deque<UiEvent<A>, EVENT_QUEUE_CAPACITY>,
    event: UiEvent<A>,
) {
    if events.is_full() {
        warn!("ui-nav: event queue full, dropping the oldest event");
        events.pop_front();
    }
    let _ = events.push_back(event);
}

// =============================================================================
// Ui
// =============================================================================

pub struct Ui<D: Display, C: Clock, A: Copy> {
    display: D,
    clock: C,
    config: UiConfig,
    frame: FrameBuffer,
    selector: Selector,
    menus: Vec<Menu<A>, MAX_MENUS>,
    dialogs: Vec<Dialog, MAX_DIALOGS>,
    /// Dialogs currently drawn, in open order.
    overlays: Vec<DialogId, MAX_DIALOGS>,
    history: History,
    state: NavState,
    loads: LoadQueue,
    events: Deque<UiEvent<A>, EVENT_QUEUE_CAPACITY>,
    fps: FpsCounter,
    dash_line: DashLine,
    display_on: bool,
}

impl<D: Display, C: Clock, A: Copy> Ui<D, C, A> {
    pub fn new(
        display: D,
        clock: C,
        config: UiConfig,
    ) -> Self {
        let mut loads = LoadQueue::new();
        // empty queue, cannot fail
        let _ = loads.push(LoadTarget::DashLine);
        Self {
            display,
            clock,
            config,
            frame: FrameBuffer::new(),
            selector: Selector::new(),
            menus: Vec::new(),
            dialogs: Vec::new(),
            overlays: Vec::new(),
            history: History::new(),
            state: NavState::Booting,
            loads,
            events: Deque::new(),
            fps: FpsCounter::new(),
            dash_line: DashLine::new(),
            display_on: true,
        }
    }

    // -------------------------------------------------------------------------
    // Construction
    // -------------------------------------------------------------------------

    fn add_menu(
        &mut self,
        menu: Menu<A>,
    ) -> Result<MenuId, UiError> {
        let id = MenuId(self.menus.len());
        self.menus
            .push(menu)
            .map_err(|_| UiError::CapacityExceeded("menus"))?;
        Ok(id)
    }

    pub fn add_list_menu(&mut self) -> Result<MenuId, UiError> { self.add_menu(Menu::List(ListMenu::new())) }

    pub fn add_icon_menu(&mut self) -> Result<MenuId, UiError> { self.add_menu(Menu::Icon(IconMenu::new())) }

    pub fn add_custom_page(
        &mut self,
        handlers: PageHandlers<A>,
    ) -> Result<MenuId, UiError> {
        self.add_menu(Menu::Custom(CustomPage::new(handlers)))
    }

    fn menu_mut(
        &mut self,
        menu: MenuId,
    ) -> Result<&mut Menu<A>, UiError> {
        self.menus.get_mut(menu.0).ok_or(UiError::UnknownMenu(menu.0))
    }

    /// Fails while booting if the load queue has no slot left, before anything
    /// is added that would then never be initialised.
    fn reserve_load(&self) -> Result<(), UiError> {
        if self.state == NavState::Booting && self.loads.is_full() {
            return Err(UiError::CapacityExceeded("load queue"));
        }
        Ok(())
    }

    /// Defer `init()` to the startup loader while booting, run it now after.
    fn load(
        &mut self,
        target: LoadTarget,
    ) -> Result<(), UiError> {
        if self.state == NavState::Booting {
            self.loads.push(target)
        } else {
            self.init_target(target);
            Ok(())
        }
    }

    fn init_target(
        &mut self,
        target: LoadTarget,
    ) {
        match target {
            LoadTarget::Item { menu, item } => {
                if let Some(item) = self.menus.get_mut(menu.0).and_then(|m| m.item_mut(item)) {
                    item.init();
                }
            }
            LoadTarget::Dialog(id) => {
                if let Some(dialog) = self.dialogs.get_mut(id.0) {
                    dialog.init(true);
                }
            }
            LoadTarget::DashLine => self.dash_line.init(),
        }
    }

    fn load_item(
        &mut self,
        menu: MenuId,
        item: usize,
    ) -> Result<usize, UiError> {
        self.load(LoadTarget::Item { menu, item })?;
        Ok(item)
    }

    /// Append a text row to a list menu.
    pub fn add_label(
        &mut self,
        menu: MenuId,
        text: &str,
        link: Option<Link<A>>,
    ) -> Result<usize, UiError> {
        let expand = self.config.expand_animation;
        let label = Label::new(text)?;
        self.reserve_load()?;
        let id = match self.menu_mut(menu)? {
            Menu::List(list) => list.add(Item::label(label, link), expand)?,
            Menu::Icon(_) | Menu::Custom(_) => return Err(UiError::WrongMenuKind(menu.0)),
        };
        self.load_item(menu, id)
    }

    /// Append an icon slot to an icon menu.
    pub fn add_icon(
        &mut self,
        menu: MenuId,
        image: Bitmap,
        title: &'static str,
        link: Option<Link<A>>,
    ) -> Result<usize, UiError> {
        let expand = self.config.expand_animation;
        self.reserve_load()?;
        let id = match self.menu_mut(menu)? {
            Menu::Icon(icons) => icons.add(Item::icon(Icon::new(image, title), link), expand)?,
            Menu::List(_) | Menu::Custom(_) => return Err(UiError::WrongMenuKind(menu.0)),
        };
        self.load_item(menu, id)
    }

    /// Add whatever item suits `menu`: a label on a list, an icon captioned
    /// `text` on an icon menu. Custom pages have no generic item, so this
    /// logs a warning and returns `Ok(None)`.
    pub fn item(
        &mut self,
        menu: MenuId,
        text: &'static str,
        image: Option<Bitmap>,
        link: Option<Link<A>>,
    ) -> Result<Option<usize>, UiError> {
        match self.menus.get(menu.0).map(Menu::kind) {
            None => Err(UiError::UnknownMenu(menu.0)),
            Some(MenuKind::List) => self.add_label(menu, text, link).map(Some),
            Some(MenuKind::Icon) => {
                let image = image.unwrap_or_else(|| {
                    warn!("ui-nav: icon '{text}' has no image, drawing it blank");
                    Bitmap::new(&[], 8)
                });
                self.add_icon(menu, image, text, link).map(Some)
            }
            Some(MenuKind::Custom) => {
                warn!("ui-nav: menu {} is a custom page, item '{text}' not added", menu.0);
                Ok(None)
            }
        }
    }

    /// Place a label on a custom page at `(x, y)` below the header band.
    pub fn add_page_label(
        &mut self,
        page: MenuId,
        text: &str,
        x: i32,
        y: i32,
    ) -> Result<usize, UiError> {
        let mut label = Label::new(text)?;
        label.marquee = Marquee::OFF;
        self.reserve_load()?;
        let id = match self.menu_mut(page)? {
            Menu::Custom(custom) => custom.add_at(Item::label(label, None), x, y)?,
            Menu::List(_) | Menu::Icon(_) => return Err(UiError::WrongMenuKind(page.0)),
        };
        self.load_item(page, id)
    }

    fn attach(
        &mut self,
        menu: MenuId,
        item: usize,
        build: impl FnOnce(i32) -> Result<Nested, UiError>,
    ) -> Result<(), UiError> {
        let booting = self.state == NavState::Booting;
        let target = self.menu_mut(menu)?;
        if target.kind() != MenuKind::List {
            return Err(UiError::NotAListItem);
        }
        let row = target
            .item_mut(item)
            .ok_or(UiError::UnknownItem { menu: menu.0, item })?;
        if !matches!(row.content, ItemContent::Label(_)) {
            return Err(UiError::NotAListItem);
        }
        if row.nested.is_some() {
            return Err(UiError::NestedWidgetTaken);
        }
        let mut nested = build(row.geometry().destination.y)?;
        if !booting {
            nested.init();
        }
        row.nested = Some(nested);
        Ok(())
    }

    /// Nest a checkbox at the right of a list row.
    pub fn attach_checkbox(
        &mut self,
        menu: MenuId,
        item: usize,
        checked: bool,
    ) -> Result<(), UiError> {
        self.attach(menu, item, |row_y| Ok(Nested::CheckBox(CheckBox::new(checked, row_y))))
    }

    /// Nest a value selector over `values` at the right of a list row,
    /// starting at `default`.
    pub fn attach_value_selector(
        &mut self,
        menu: MenuId,
        item: usize,
        values: ValueList,
        default: Value,
        looped: bool,
    ) -> Result<(), UiError> {
        self.attach(menu, item, |row_y| {
            let index = values.position(default).ok_or(UiError::DefaultOutOfRange)?;
            Ok(Nested::Value(ValueSelector::new(values, index, looped, row_y)?))
        })
    }

    /// Register a dialog that closes itself `duration_ms` after opening.
    pub fn add_dialog(
        &mut self,
        duration_ms: u64,
    ) -> Result<DialogId, UiError> {
        let id = DialogId(self.dialogs.len());
        self.reserve_load()?;
        self.dialogs
            .push(Dialog::new("", duration_ms)?)
            .map_err(|_| UiError::CapacityExceeded("dialogs"))?;
        self.load(LoadTarget::Dialog(id))?;
        Ok(id)
    }

    const fn dialog_motion(&self) -> DialogMotion {
        DialogMotion {
            frames: self.config.dialog_speed,
            ease: self.config.dialog_ease,
        }
    }

    /// Show `text` in dialog `id`. Re-opening a visible dialog replaces its
    /// text and restarts the entrance from where the box is now.
    pub fn open_dialog(
        &mut self,
        id: DialogId,
        text: &str,
    ) -> Result<(), UiError> {
        let motion = self.dialog_motion();
        let dialog = self.dialogs.get_mut(id.0).ok_or(UiError::UnknownDialog(id.0))?;
        dialog.open(text, motion)?;
        if !self.overlays.contains(&id) {
            self.overlays
                .push(id)
                .map_err(|_| UiError::CapacityExceeded("overlays"))?;
        }
        Ok(())
    }

    /// Start the exit slide early. No-op when the dialog is not showing.
    pub fn close_dialog(
        &mut self,
        id: DialogId,
    ) -> Result<(), UiError> {
        let motion = self.dialog_motion();
        let dialog = self.dialogs.get_mut(id.0).ok_or(UiError::UnknownDialog(id.0))?;
        if matches!(dialog.state(), DialogState::Opening | DialogState::Open { .. }) {
            dialog.close(motion);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Startup
    // -------------------------------------------------------------------------

    fn splash_frame(
        &mut self,
        splash: &mut Splash,
    ) {
        splash.update(&mut self.frame, self.clock.now_ms());
        if let Err(err) = self.display.show(&self.frame) {
            warn!("ui-load: display flush failed: {err:?}");
        }
        self.clock.sleep_ms(MIN_FRAME_INTERVAL_MS);
    }

    /// Drain the loader queue, behind the logo splash when enabled. Runs
    /// once; later calls return immediately.
    pub fn startup(&mut self) {
        if self.state != NavState::Booting {
            return;
        }
        let pending = self.loads.len();
        info!("ui-load: starting up, {pending} widgets to load");

        if self.config.show_startup_page {
            let config = self.config;
            let mut splash = Splash::new(config.logo_text);
            splash.enter(&config);
            loop {
                let loaded = match self.loads.pop() {
                    Some(target) => {
                        self.init_target(target);
                        true
                    }
                    None => false,
                };
                if !loaded && !splash.is_moving() {
                    break;
                }
                self.splash_frame(&mut splash);
            }
            splash.leave(&config);
            while splash.is_moving() {
                self.splash_frame(&mut splash);
            }
        } else {
            while let Some(target) = self.loads.pop() {
                self.init_target(target);
            }
        }

        self.state = NavState::Idle;
        info!("ui-load: startup complete");
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Enter `menu`, recording it in the history.
    pub fn page(
        &mut self,
        menu: MenuId,
    ) -> Result<(), UiError> {
        self.activate(menu, true)
    }

    fn activate(
        &mut self,
        menu: MenuId,
        record: bool,
    ) -> Result<(), UiError> {
        let target = self.menus.get(menu.0).ok_or(UiError::UnknownMenu(menu.0))?;
        let kind = target.kind();
        if kind != MenuKind::Custom && target.is_empty() {
            return Err(UiError::EmptyMenu(menu.0));
        }
        if self.state == NavState::Booting {
            self.startup();
        }
        if record {
            self.history.push(menu);
        }

        let config = self.config;
        if config.expand_animation
            && let Some(outgoing) = self.state.menu()
            && let Some(outgoing) = self.menus.get_mut(outgoing.0)
        {
            outgoing.collapse();
        }

        self.state = match kind {
            MenuKind::List => NavState::List(menu),
            MenuKind::Icon => NavState::Icon(menu),
            MenuKind::Custom => NavState::Custom(menu),
        };
        let target = self.menus.get_mut(menu.0).ok_or(UiError::UnknownMenu(menu.0))?;
        if config.expand_animation {
            target.expand(&config);
        }
        if kind != MenuKind::Custom {
            let id = target.selected_id();
            self.selector.select(target, id, true, &config);
        }
        debug!("ui-nav: entered menu {} ({kind:?})", menu.0);
        Ok(())
    }

    /// Return to the previous page. Does nothing at the root.
    pub fn back(&mut self) {
        if self.state.menu().is_none() {
            return;
        }
        match self.history.pop() {
            Some(menu) => {
                if let Err(err) = self.activate(menu, false) {
                    warn!("ui-nav: cannot return to menu {}: {err}", menu.0);
                }
            }
            None => debug!("ui-nav: already at the root page"),
        }
    }

    pub fn dispatch(
        &mut self,
        action: Action,
    ) {
        match action {
            Action::Up => self.up(),
            Action::Down => self.down(),
            Action::Yes => self.yes(),
            Action::Back => self.back(),
        }
    }

    pub fn up(&mut self) { self.step(true) }

    pub fn down(&mut self) { self.step(false) }

    fn step(
        &mut self,
        up: bool,
    ) {
        let Some(menu_id) = self.state.menu() else {
            return;
        };
        let config = self.config;
        let Some(menu) = self.menus.get_mut(menu_id.0) else {
            return;
        };

        if let Menu::Custom(page) = menu {
            let handler = if up { page.handlers.up } else { page.handlers.down };
            if let Some(action) = handler {
                push_event(&mut self.events, UiEvent::PageAction(action));
            }
            return;
        }

        let id = menu.selected_id();
        if let Some(stepper) = menu.item_mut(id).and_then(Item::engaged_stepper) {
            if up {
                stepper.step_up();
            } else {
                stepper.step_down();
            }
            let value = match menu.item(id).and_then(|item| item.nested.as_ref()) {
                Some(Nested::Value(selector)) => selector.value(),
                _ => None,
            };
            // value width changed, so the highlight has to follow
            self.selector.select(menu, id, false, &config);
            if let Some(value) = value {
                push_event(&mut self.events, UiEvent::ValueChanged { menu: menu_id, item: id, value });
            }
            return;
        }

        if up {
            self.selector.up(menu, &config);
        } else {
            self.selector.down(menu, &config);
        }
    }

    /// Confirm the highlighted item.
    ///
    /// A nested widget reacts first: a checkbox toggles, a value selector
    /// engages or releases and commits. The row's link runs afterwards either
    /// way.
    pub fn yes(&mut self) {
        let Some(menu_id) = self.state.menu() else {
            return;
        };
        let now = self.clock.now_ms();
        let Some(menu) = self.menus.get_mut(menu_id.0) else {
            return;
        };

        if let Menu::Custom(page) = menu {
            if let Some(action) = page.handlers.yes {
                push_event(&mut self.events, UiEvent::PageAction(action));
            }
            return;
        }

        let id = menu.selected_id();
        let Some(item) = menu.item_mut(id) else {
            return;
        };
        match item.nested.as_mut() {
            Some(Nested::CheckBox(checkbox)) => {
                let checked = checkbox.toggle();
                push_event(&mut self.events, UiEvent::CheckBoxToggled { menu: menu_id, item: id, checked });
            }
            Some(Nested::Value(selector)) => {
                let engaged = selector.toggle(now);
                debug!("ui-nav: value selector on item {id} {}", if engaged { "engaged" } else { "released" });
                if !engaged && let Some(value) = selector.value() {
                    push_event(&mut self.events, UiEvent::ValueCommitted { menu: menu_id, item: id, value });
                }
            }
            None => {}
        }

        let link = item.link;
        if let Some(link) = link {
            self.follow(link);
        }
    }

    fn follow(
        &mut self,
        link: Link<A>,
    ) {
        match link {
            Link::Page(menu) => {
                if let Err(err) = self.page(menu) {
                    warn!("ui-nav: link to menu {} failed: {err}", menu.0);
                }
            }
            Link::Dialog { dialog, text } => {
                if let Err(err) = self.open_dialog(dialog, text) {
                    warn!("ui-dialog: cannot open dialog {}: {err}", dialog.0);
                }
            }
            Link::App(action) => push_event(&mut self.events, UiEvent::Link(action)),
        }
    }

    // -------------------------------------------------------------------------
    // Runtime
    // -------------------------------------------------------------------------

    /// Render one frame and flush it.
    pub fn update(&mut self) {
        if !self.display_on {
            return;
        }
        let now = self.clock.now_ms();
        let config = self.config;
        self.fps.tick(now);
        self.frame.fill(false);

        let mut invert = false;
        if let Some(menu_id) = self.state.menu()
            && let Some(menu) = self.menus.get_mut(menu_id.0)
        {
            menu.update(&mut self.frame, now, &config, &self.dash_line);
            let kind = menu.kind();
            let camera = menu.core().camera.current;
            self.selector
                .update(&mut self.frame, now, kind, camera, config.selector_fill);
            invert = config.selector_fill && kind != MenuKind::Custom;
        }
        if invert {
            self.frame.xor_with(self.selector.scratch());
        }

        // Masks
        self.frame.fill_rect(Rect::new(0, 0, DISPLAY_W, TOP_GAP), false);
        self.frame.fill_rect(Rect::new(0, 0, OUT_GAP, DISPLAY_H), false);
        self.frame.fill_rect(Rect::new(RIGHT_MASK_X, 0, OUT_GAP, DISPLAY_H), false);

        let motion = self.dialog_motion();
        let mut i = 0;
        while i < self.overlays.len() {
            let id = self.overlays[i];
            let tick = match self.dialogs.get_mut(id.0) {
                Some(dialog) => dialog.update(&mut self.frame, now, motion),
                None => DialogTick::Detached,
            };
            if tick == DialogTick::Detached {
                self.overlays.remove(i);
                debug!("ui-dialog: dialog {} detached", id.0);
            } else {
                i += 1;
            }
        }

        if config.show_fps {
            self.frame.fill_rect(FPS_BOX, false);
            Text::with_baseline(&self.fps.text(), Point::zero(), SMALL_STYLE, Baseline::Top)
                .draw(&mut self.frame)
                .ok();
        }

        if let Err(err) = self.display.show(&self.frame) {
            warn!("ui: display flush failed: {err:?}");
        }
    }

    pub fn poll_event(&mut self) -> Option<UiEvent<A>> { self.events.pop_front() }

    /// Replace a row's text. A highlighted row is re-selected so the
    /// selector follows the new width.
    pub fn set_label_text(
        &mut self,
        menu: MenuId,
        item: usize,
        text: &str,
    ) -> Result<(), UiError> {
        let active = self.state.menu() == Some(menu);
        let config = self.config;
        let target = self.menus.get_mut(menu.0).ok_or(UiError::UnknownMenu(menu.0))?;
        let row = target
            .item_mut(item)
            .ok_or(UiError::UnknownItem { menu: menu.0, item })?;
        match &mut row.content {
            ItemContent::Label(label) => label.set_text(text)?,
            ItemContent::Icon(_) => return Err(UiError::NotAListItem),
        }
        if active && target.kind() != MenuKind::Custom && target.selected_id() == item {
            self.selector.select(target, item, false, &config);
        }
        Ok(())
    }

    /// Change how a list row or page label scrolls text that does not fit.
    pub fn set_label_marquee(
        &mut self,
        menu: MenuId,
        item: usize,
        marquee: Marquee,
    ) -> Result<(), UiError> {
        let row = self
            .menu_mut(menu)?
            .item_mut(item)
            .ok_or(UiError::UnknownItem { menu: menu.0, item })?;
        match &mut row.content {
            ItemContent::Label(label) => {
                label.marquee = marquee;
                Ok(())
            }
            ItemContent::Icon(_) => Err(UiError::NotAListItem),
        }
    }

    /// Suspend or resume rendering. Switching off flushes one blank frame.
    pub fn set_display_on(
        &mut self,
        on: bool,
    ) {
        if self.display_on == on {
            return;
        }
        self.display_on = on;
        info!("ui: display {}", if on { "on" } else { "off" });
        if !on {
            self.frame.fill(false);
            if let Err(err) = self.display.show(&self.frame) {
                warn!("ui: display flush failed: {err:?}");
            }
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[inline]
    pub const fn nav_state(&self) -> NavState { self.state }

    #[inline]
    pub const fn current_menu(&self) -> Option<MenuId> { self.state.menu() }

    /// Highlighted item of the active list or icon menu.
    pub fn selected_id(&self) -> Option<usize> {
        match self.state {
            NavState::List(menu) | NavState::Icon(menu) => self.menus.get(menu.0).map(Menu::selected_id),
            _ => None,
        }
    }

    pub fn menu(
        &self,
        menu: MenuId,
    ) -> Option<&Menu<A>> {
        self.menus.get(menu.0)
    }

    pub fn history_len(&self) -> usize { self.history.len() }

    pub fn dialog_state(
        &self,
        id: DialogId,
    ) -> Option<DialogState> {
        self.dialogs.get(id.0).map(Dialog::state)
    }

    pub fn is_overlay_open(
        &self,
        id: DialogId,
    ) -> bool {
        self.overlays.contains(&id)
    }

    #[inline]
    pub const fn config(&self) -> &UiConfig { &self.config }

    #[inline]
    pub const fn is_display_on(&self) -> bool { self.display_on }

    pub const fn fps(&self) -> u32 { self.fps.fps() }

    pub const fn frame(&self) -> &FrameBuffer { &self.frame }

    pub const fn display(&self) -> &D { &self.display }

    pub fn display_mut(&mut self) -> &mut D { &mut self.display }

    pub const fn clock(&self) -> &C { &self.clock }

    pub fn clock_mut(&mut self) -> &mut C { &mut self.clock }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_MENU_ITEMS;
    use crate::display::{ManualClock, NullDisplay};

    type TestUi = Ui<NullDisplay, ManualClock, u8>;

    fn quiet() -> UiConfig {
        UiConfig {
            show_startup_page: false,
            expand_animation: false,
            ..UiConfig::default()
        }
    }

    fn ui_with_list(count: usize) -> (TestUi, MenuId) {
        let mut ui = Ui::new(NullDisplay::default(), ManualClock::new(0), quiet());
        let menu = ui.add_list_menu().unwrap();
        for _ in 0..count {
            ui.add_label(menu, "Row", None).unwrap();
        }
        (ui, menu)
    }

    fn run_frames(
        ui: &mut TestUi,
        frames: usize,
    ) {
        for _ in 0..frames {
            ui.update();
            ui.clock_mut().advance(MIN_FRAME_INTERVAL_MS);
        }
    }

    // -------------------------------------------------------------------------
    // Boot Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_input_ignored_while_booting() {
        let (mut ui, _) = ui_with_list(3);
        ui.down();
        ui.yes();
        ui.back();
        assert_eq!(ui.nav_state(), NavState::Booting);
        assert_eq!(ui.selected_id(), None);
        assert!(ui.poll_event().is_none());
    }

    #[test]
    fn test_page_runs_startup_first() {
        let (mut ui, menu) = ui_with_list(2);
        ui.page(menu).unwrap();
        assert_eq!(ui.nav_state(), NavState::List(menu));
        let list = ui.menu(menu).unwrap();
        assert!(list.item(0).unwrap().is_loaded(), "loader drained before the first page");
    }

    #[test]
    fn test_splash_paces_with_clock() {
        let config = UiConfig { expand_animation: false, ..UiConfig::default() };
        let mut ui: TestUi = Ui::new(NullDisplay::default(), ManualClock::new(0), config);
        let menu = ui.add_list_menu().unwrap();
        ui.add_label(menu, "Row", None).unwrap();
        ui.startup();
        assert_eq!(ui.nav_state(), NavState::Idle);
        assert!(ui.display().flushes >= u32::from(config.default_speed) * 2, "one flush per splash frame");
        assert!(ui.clock().now_ms() > 0, "splash slept between frames");
    }

    #[test]
    fn test_empty_menu_rejected() {
        let (mut ui, _) = ui_with_list(0);
        let empty = MenuId(0);
        assert_eq!(ui.page(empty), Err(UiError::EmptyMenu(0)));
        assert_eq!(ui.nav_state(), NavState::Booting, "nothing changed");
        assert_eq!(ui.history_len(), 0);
    }

    #[test]
    fn test_items_after_boot_load_immediately() {
        let (mut ui, menu) = ui_with_list(1);
        ui.page(menu).unwrap();
        let id = ui.add_label(menu, "Late", None).unwrap();
        assert!(ui.menu(menu).unwrap().item(id).unwrap().is_loaded());
    }

    // -------------------------------------------------------------------------
    // Construction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_typed_construction_checks_kind() {
        let mut ui: TestUi = Ui::new(NullDisplay::default(), ManualClock::new(0), quiet());
        let icons = ui.add_icon_menu().unwrap();
        let page = ui.add_custom_page(PageHandlers::default()).unwrap();
        assert_eq!(ui.add_label(icons, "Row", None), Err(UiError::WrongMenuKind(icons.index())));
        assert_eq!(
            ui.add_page_label(icons, "Row", 0, 0),
            Err(UiError::WrongMenuKind(icons.index()))
        );
        assert_eq!(ui.item(page, "Row", None, None), Ok(None), "custom pages skip generic items");
        assert_eq!(ui.item(icons, "Clock", None, None), Ok(Some(0)));
    }

    #[test]
    fn test_boot_queue_holds_every_item() {
        let mut ui: TestUi = Ui::new(NullDisplay::default(), ManualClock::new(0), quiet());
        let mut menus = std::vec::Vec::new();
        for _ in 0..MAX_MENUS {
            let menu = ui.add_list_menu().unwrap();
            for _ in 0..MAX_MENU_ITEMS {
                ui.add_label(menu, "Row", None).unwrap();
            }
            menus.push(menu);
        }
        for _ in 0..MAX_DIALOGS {
            ui.add_dialog(1000).unwrap();
        }
        assert!(ui.loads.is_full(), "dash line, rows and dialogs fill the queue exactly");

        ui.startup();
        for menu in menus {
            let menu = ui.menu(menu).unwrap();
            for item in 0..menu.len() {
                assert!(menu.item(item).unwrap().is_loaded(), "item {item} initialised at boot");
            }
        }
    }

    #[test]
    fn test_full_load_queue_adds_nothing() {
        let (mut ui, menu) = ui_with_list(1);
        let page = ui.add_custom_page(PageHandlers::default()).unwrap();
        while !ui.loads.is_full() {
            ui.loads.push(LoadTarget::DashLine).unwrap();
        }

        let full = Err(UiError::CapacityExceeded("load queue"));
        assert_eq!(ui.add_label(menu, "Late", None), full);
        assert_eq!(ui.menu(menu).unwrap().len(), 1, "no half-built row left behind");
        assert_eq!(ui.add_page_label(page, "Late", 0, 0), full);
        assert!(ui.menu(page).unwrap().is_empty());
        assert_eq!(ui.add_dialog(1000).map(DialogId::index), full);
        assert!(ui.dialogs.is_empty(), "dialog not registered");
    }

    #[test]
    fn test_nested_widget_rules() {
        let (mut ui, menu) = ui_with_list(2);
        ui.attach_checkbox(menu, 0, false).unwrap();
        assert_eq!(ui.attach_checkbox(menu, 0, true), Err(UiError::NestedWidgetTaken));
        assert_eq!(
            ui.attach_checkbox(menu, 5, true),
            Err(UiError::UnknownItem { menu: menu.index(), item: 5 })
        );
        let values = ValueList::range(0, 3, 1).unwrap();
        assert_eq!(
            ui.attach_value_selector(menu, 1, values, Value::Number(9), false),
            Err(UiError::DefaultOutOfRange)
        );

        let icons = ui.add_icon_menu().unwrap();
        ui.add_icon(icons, Bitmap::new(&[], 8), "Clock", None).unwrap();
        assert_eq!(ui.attach_checkbox(icons, 0, false), Err(UiError::NotAListItem));
    }

    // -------------------------------------------------------------------------
    // Input Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_checkbox_toggles_and_link_runs() {
        let (mut ui, menu) = ui_with_list(1);
        ui.set_label_text(menu, 0, "Wi-Fi").unwrap();
        ui.attach_checkbox(menu, 0, false).unwrap();
        ui.menus[menu.0].item_mut(0).unwrap().link = Some(Link::App(7));
        ui.page(menu).unwrap();

        ui.yes();
        assert_eq!(
            ui.poll_event(),
            Some(UiEvent::CheckBoxToggled { menu, item: 0, checked: true })
        );
        assert_eq!(ui.poll_event(), Some(UiEvent::Link(7)));
        assert_eq!(ui.poll_event(), None);
    }

    #[test]
    fn test_value_selector_intercepts_up_down() {
        let (mut ui, menu) = ui_with_list(2);
        let values = ValueList::Labels(&["Low", "Mid", "High"]);
        ui.attach_value_selector(menu, 0, values, Value::Label("Mid"), false).unwrap();
        ui.page(menu).unwrap();

        ui.yes();
        ui.up();
        assert_eq!(ui.selected_id(), Some(0), "selection stays while engaged");
        assert_eq!(
            ui.poll_event(),
            Some(UiEvent::ValueChanged { menu, item: 0, value: Value::Label("High") })
        );

        ui.yes();
        assert_eq!(
            ui.poll_event(),
            Some(UiEvent::ValueCommitted { menu, item: 0, value: Value::Label("High") })
        );
        ui.down();
        assert_eq!(ui.selected_id(), Some(1), "released selector gives up/down back");
    }

    #[test]
    fn test_value_row_link_runs_on_confirm() {
        let (mut ui, menu) = ui_with_list(1);
        ui.menus[menu.0].item_mut(0).unwrap().link = Some(Link::App(7));
        ui.attach_value_selector(menu, 0, ValueList::range(0, 10, 1).unwrap(), Value::Number(5), false)
            .unwrap();
        ui.page(menu).unwrap();

        ui.yes();
        assert_eq!(ui.poll_event(), Some(UiEvent::Link(7)), "engaging still follows the link");
        ui.yes();
        assert_eq!(
            ui.poll_event(),
            Some(UiEvent::ValueCommitted { menu, item: 0, value: Value::Number(5) })
        );
        assert_eq!(ui.poll_event(), Some(UiEvent::Link(7)), "link runs after the commit");
        assert_eq!(ui.poll_event(), None);
    }

    #[test]
    fn test_custom_page_forwards_handlers() {
        let mut ui: TestUi = Ui::new(NullDisplay::default(), ManualClock::new(0), quiet());
        let page = ui
            .add_custom_page(PageHandlers { up: Some(1), down: None, yes: Some(3) })
            .unwrap();
        ui.add_page_label(page, "Now playing", 4, 20).unwrap();
        ui.page(page).unwrap();

        ui.up();
        ui.down();
        ui.yes();
        assert_eq!(ui.poll_event(), Some(UiEvent::PageAction(1)));
        assert_eq!(ui.poll_event(), Some(UiEvent::PageAction(3)), "undefined handler is silent");
        assert_eq!(ui.selected_id(), None, "custom pages have no selection");
    }

    #[test]
    fn test_link_to_page_and_back() {
        let (mut ui, root) = ui_with_list(1);
        let child = ui.add_list_menu().unwrap();
        ui.add_label(child, "Child", None).unwrap();
        ui.menus[root.0].item_mut(0).unwrap().link = Some(Link::Page(child));
        ui.page(root).unwrap();

        ui.yes();
        assert_eq!(ui.current_menu(), Some(child));
        assert_eq!(ui.history_len(), 2);
        ui.dispatch(Action::Back);
        assert_eq!(ui.current_menu(), Some(root));
        assert_eq!(ui.history_len(), 1, "back does not record");
        ui.back();
        assert_eq!(ui.current_menu(), Some(root), "root stays");
    }

    #[test]
    fn test_event_queue_drops_oldest() {
        let mut ui: TestUi = Ui::new(NullDisplay::default(), ManualClock::new(0), quiet());
        let page = ui
            .add_custom_page(PageHandlers { up: Some(0), down: None, yes: Some(1) })
            .unwrap();
        ui.page(page).unwrap();
        ui.yes();
        for _ in 0..EVENT_QUEUE_CAPACITY {
            ui.up();
        }
        assert_eq!(ui.poll_event(), Some(UiEvent::PageAction(0)), "oldest event dropped");
    }

    // -------------------------------------------------------------------------
    // Rendering Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_update_flushes_and_masks_header() {
        let (mut ui, menu) = ui_with_list(3);
        ui.page(menu).unwrap();
        run_frames(&mut ui, 30);
        assert_eq!(ui.display().flushes, 30);
        assert_eq!(
            ui.frame().count_lit(Rect::new(FPS_BOX.w, 0, DISPLAY_W - FPS_BOX.w, TOP_GAP)),
            0,
            "header band masked"
        );
        assert!(ui.frame().count_lit(Rect::new(0, TOP_GAP, DISPLAY_W, DISPLAY_H - TOP_GAP)) > 0);
    }

    #[test]
    fn test_display_off_suspends_rendering() {
        let (mut ui, menu) = ui_with_list(1);
        ui.page(menu).unwrap();
        ui.set_display_on(false);
        let flushes = ui.display().flushes;
        run_frames(&mut ui, 5);
        assert_eq!(ui.display().flushes, flushes);
        assert_eq!(ui.frame().count_lit(Rect::new(0, 0, DISPLAY_W, DISPLAY_H)), 0, "panel left blank");
        ui.set_display_on(true);
        run_frames(&mut ui, 1);
        assert_eq!(ui.display().flushes, flushes + 1);
    }

    #[test]
    fn test_marquee_always_scrolls_unselected_row() {
        let (mut ui, menu) = ui_with_list(2);
        ui.set_label_text(menu, 1, "A row far too long to fit on this little panel").unwrap();
        ui.set_label_marquee(menu, 1, Marquee { always: true, ..Marquee::ROW }).unwrap();
        ui.page(menu).unwrap();
        run_frames(&mut ui, 5);

        let ItemContent::Label(label) = &ui.menu(menu).unwrap().item(1).unwrap().content else {
            panic!("row 1 is a label");
        };
        assert!(label.xscroll() > 0, "unselected row scrolls with always set");

        let icons = ui.add_icon_menu().unwrap();
        ui.add_icon(icons, Bitmap::new(&[], 8), "Clock", None).unwrap();
        assert_eq!(ui.set_label_marquee(icons, 0, Marquee::OFF), Err(UiError::NotAListItem));
    }

    #[test]
    fn test_set_label_text_reselects() {
        let (mut ui, menu) = ui_with_list(2);
        ui.page(menu).unwrap();
        ui.set_label_text(menu, 0, "A much longer row").unwrap();
        let target = ui.menu(menu).unwrap().selector_target(0).unwrap();
        assert_eq!(ui.selector.geometry.destination, target, "selector follows the new width");
        assert_eq!(ui.set_label_text(menu, 9, "x"), Err(UiError::UnknownItem { menu: 0, item: 9 }));
    }
}
