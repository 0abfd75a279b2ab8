//! Menus: ordered items, a remembered selection and a scrolling camera.
//!
//! Three variants share one [`MenuCore`]:
//!
//! | Variant        | Layout                 | Camera           | Selector        | Overlay              |
//! |----------------|------------------------|------------------|-----------------|----------------------|
//! | [`ListMenu`]   | rows stacked downward  | reveal at edges  | rounded frame   | Y scrollbar          |
//! | [`IconMenu`]   | 34px slots rightward   | center selection | corner brackets | X scrollbar, caption |
//! | [`CustomPage`] | host-placed labels     | static           | none            | none                 |
//!
//! Item ids are positions: insertion order is navigation order, and ids stay
//! stable because items are never removed.

mod custom;
mod icon;
mod list;

pub use custom::{CustomPage, PageHandlers};
pub use icon::IconMenu;
pub use list::ListMenu;

use heapless::Vec;

use crate::config::{DISPLAY_H, DISPLAY_W, MAX_MENU_ITEMS, UiConfig};
use crate::error::UiError;
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Geometry, Rect};
use crate::widgets::{DashLine, Icon, Label, Nested, Steppable};

// =============================================================================
// Handles
// =============================================================================

/// Handle to a menu registered with a [`Ui`](crate::ui::Ui).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuId(pub(crate) usize);

impl MenuId {
    pub const fn index(self) -> usize { self.0 }
}

/// Handle to a dialog registered with a [`Ui`](crate::ui::Ui).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialogId(pub(crate) usize);

impl DialogId {
    pub const fn index(self) -> usize { self.0 }
}

/// What confirming an item does.
///
/// `Page` and `Dialog` run inside the toolkit; `App` is handed back to the
/// host as a [`UiEvent::Link`](crate::ui::UiEvent::Link).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link<A> {
    Page(MenuId),
    Dialog { dialog: DialogId, text: &'static str },
    App(A),
}

// =============================================================================
// Items
// =============================================================================

#[derive(Clone, Debug)]
pub enum ItemContent {
    Label(Label),
    Icon(Icon),
}

#[derive(Clone, Debug)]
pub struct Item<A> {
    pub content: ItemContent,
    pub nested: Option<Nested>,
    pub link: Option<Link<A>>,
}

impl<A> Item<A> {
    pub const fn label(
        label: Label,
        link: Option<Link<A>>,
    ) -> Self {
        Self { content: ItemContent::Label(label), nested: None, link }
    }

    pub const fn icon(
        icon: Icon,
        link: Option<Link<A>>,
    ) -> Self {
        Self { content: ItemContent::Icon(icon), nested: None, link }
    }

    pub const fn geometry(&self) -> &Geometry {
        match &self.content {
            ItemContent::Label(label) => &label.geometry,
            ItemContent::Icon(icon) => &icon.geometry,
        }
    }

    pub fn geometry_mut(&mut self) -> &mut Geometry {
        match &mut self.content {
            ItemContent::Label(label) => &mut label.geometry,
            ItemContent::Icon(icon) => &mut icon.geometry,
        }
    }

    /// Text shown for this item: the label text or the icon caption.
    pub fn caption(&self) -> &str {
        match &self.content {
            ItemContent::Label(label) => label.text(),
            ItemContent::Icon(icon) => icon.title,
        }
    }

    pub fn is_loaded(&self) -> bool {
        match &self.content {
            ItemContent::Label(label) => label.is_loaded(),
            ItemContent::Icon(icon) => icon.is_loaded(),
        }
    }

    pub fn init(&mut self) {
        match &mut self.content {
            ItemContent::Label(label) => label.init(),
            ItemContent::Icon(icon) => icon.init(),
        }
        if let Some(nested) = self.nested.as_mut() {
            nested.init();
        }
    }

    /// Nested widget currently intercepting up/down.
    pub fn engaged_stepper(&mut self) -> Option<&mut dyn Steppable> {
        self.nested
            .as_mut()
            .and_then(Nested::steppable_mut)
            .filter(|stepper| stepper.engaged())
    }

    fn draw(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        selected: bool,
        (ox, oy): (i32, i32),
        config: &UiConfig,
    ) {
        match &mut self.content {
            ItemContent::Label(label) => {
                if label.marquee.enabled {
                    let reserved = self.nested.as_ref().map_or(0, Nested::reserved_width);
                    label.scroll_text(now_ms, selected, reserved, config.text_scroll_speed);
                }
                label.draw(frame, ox, oy);
                if let Some(nested) = self.nested.as_mut() {
                    nested.draw(frame, now_ms, config.flash_interval_ms, ox, oy);
                }
            }
            ItemContent::Icon(icon) => icon.draw(frame, ox, oy),
        }
    }
}

// =============================================================================
// Shared Menu State
// =============================================================================

#[derive(Clone, Debug)]
pub struct MenuCore<A> {
    pub items: Vec<Item<A>, MAX_MENU_ITEMS>,
    pub selected_id: usize,
    pub camera: Geometry,
}

impl<A> MenuCore<A> {
    const fn with_viewport(
        w: i32,
        h: i32,
    ) -> Self {
        Self {
            items: Vec::new(),
            selected_id: 0,
            camera: Geometry::at(Rect::new(0, 0, w, h)),
        }
    }

    fn push(
        &mut self,
        item: Item<A>,
    ) -> Result<usize, UiError> {
        let id = self.items.len();
        self.items
            .push(item)
            .map_err(|_| UiError::CapacityExceeded("menu items"))?;
        Ok(id)
    }

    /// Content inset minus camera scroll.
    fn offset(
        &self,
        inset: (i32, i32),
    ) -> (i32, i32) {
        let cam = self.camera.current;
        (inset.0 - cam.x, inset.1 - cam.y)
    }
}

impl<A> Default for MenuCore<A> {
    fn default() -> Self {
        Self::with_viewport(DISPLAY_W, DISPLAY_H)
    }
}

// =============================================================================
// Menu
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    List,
    Icon,
    Custom,
}

#[derive(Clone, Debug)]
pub enum Menu<A> {
    List(ListMenu<A>),
    Icon(IconMenu<A>),
    Custom(CustomPage<A>),
}

impl<A: Copy> Menu<A> {
    pub const fn kind(&self) -> MenuKind {
        match self {
            Self::List(_) => MenuKind::List,
            Self::Icon(_) => MenuKind::Icon,
            Self::Custom(_) => MenuKind::Custom,
        }
    }

    pub const fn core(&self) -> &MenuCore<A> {
        match self {
            Self::List(menu) => &menu.core,
            Self::Icon(menu) => &menu.core,
            Self::Custom(page) => &page.core,
        }
    }

    pub fn core_mut(&mut self) -> &mut MenuCore<A> {
        match self {
            Self::List(menu) => &mut menu.core,
            Self::Icon(menu) => &mut menu.core,
            Self::Custom(page) => &mut page.core,
        }
    }

    #[inline]
    pub fn len(&self) -> usize { self.core().items.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.core().items.is_empty() }

    #[inline]
    pub const fn selected_id(&self) -> usize { self.core().selected_id }

    pub fn item(
        &self,
        id: usize,
    ) -> Option<&Item<A>> {
        self.core().items.get(id)
    }

    pub fn item_mut(
        &mut self,
        id: usize,
    ) -> Option<&mut Item<A>> {
        self.core_mut().items.get_mut(id)
    }

    /// Selector destination for item `id`, `None` on a custom page.
    pub fn selector_target(
        &self,
        id: usize,
    ) -> Option<Rect> {
        let item = self.item(id)?;
        match self {
            Self::List(_) => Some(ListMenu::selector_target(item)),
            Self::Icon(_) => Some(IconMenu::<A>::selector_target(item)),
            Self::Custom(_) => None,
        }
    }

    /// Menu-specific reaction to a new selection.
    pub fn change_selection(
        &mut self,
        id: usize,
        config: &UiConfig,
    ) {
        if let Self::Icon(menu) = self {
            menu.change_selection(id, config);
        }
    }

    pub fn update_scrollbar(
        &mut self,
        config: &UiConfig,
    ) {
        match self {
            Self::List(menu) => menu.update_scrollbar(config),
            Self::Icon(menu) => menu.update_scrollbar(config),
            Self::Custom(_) => {}
        }
    }

    pub fn update_camera(
        &mut self,
        config: &UiConfig,
    ) {
        match self {
            Self::List(menu) => menu.update_camera(config),
            Self::Icon(menu) => menu.update_camera(config),
            Self::Custom(_) => {}
        }
    }

    /// Collapse every item to the expand origin.
    pub fn collapse(&mut self) {
        for item in &mut self.core_mut().items {
            let geometry = item.geometry_mut();
            geometry.current.x = 0;
            geometry.current.y = 0;
        }
    }

    /// Send every item from where it is now toward its slot.
    pub fn expand(
        &mut self,
        config: &UiConfig,
    ) {
        let ease = match self {
            Self::Icon(_) => config.icon_expand_ease,
            _ => config.list_expand_ease,
        };
        for item in &mut self.core_mut().items {
            let geometry = item.geometry_mut();
            let target = geometry.destination;
            geometry.animate(target, config.expand_speed, true, ease);
        }
    }

    /// One frame: camera, children (culled), then the menu's own overlays.
    pub fn update(
        &mut self,
        frame: &mut FrameBuffer,
        now_ms: u64,
        config: &UiConfig,
        dash_line: &DashLine,
    ) {
        match self {
            Self::List(menu) => menu.update(frame, now_ms, config),
            Self::Icon(menu) => menu.update(frame, now_ms, config, dash_line),
            Self::Custom(page) => page.update(frame, now_ms, config),
        }
    }
}
