//! Full-screen sequences that run outside the menu system.
//!
//! # Boot Sequence
//!
//! 1. **Startup splash** ([`startup`]): logo slides in, the loader queue
//!    drains behind it, logo slides out
//! 2. First page (entered by the host through `Ui::page`)
//!
//! With `show_startup_page` off the queue drains in one go and no frame is
//! shown until the first page.

mod startup;

pub use startup::Splash;
