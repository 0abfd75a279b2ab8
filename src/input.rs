//! Menu buttons: from raw pin levels to [`Action`]s.
//!
//! The host reads its four pins once per frame and hands the levels to
//! [`Buttons::poll`]. A level change only counts once it has held for
//! [`DEBOUNCE_MS`]; the returned actions go straight to `Ui::dispatch`.

use heapless::Vec;

/// Minimum time between two accepted level changes of one button.
pub const DEBOUNCE_MS: u64 = 50;

/// Logical navigation input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Yes,
    Back,
}

impl Action {
    /// Poll order; also the order of levels passed to [`Buttons::poll`].
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Yes, Self::Back];
}

/// Which transition fires an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerEdge {
    Press,
    /// Fire when the button is let go (a held button never repeats).
    #[default]
    Release,
}

/// Last accepted level of one button.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<u64>,
}

impl ButtonState {
    /// Released, with no change seen yet.
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Feed the current level; returns the debounced edge, if any:
    /// `Some(true)` on press, `Some(false)` on release.
    pub fn edge(
        &mut self,
        pressed: bool,
        now_ms: u64,
    ) -> Option<bool> {
        if pressed == self.was_pressed {
            return None;
        }
        // bounce
        if let Some(last) = self.last_change
            && now_ms.saturating_sub(last) < DEBOUNCE_MS
        {
            return None;
        }
        self.was_pressed = pressed;
        self.last_change = Some(now_ms);
        Some(pressed)
    }
}

/// The four navigation buttons.
#[derive(Clone, Copy, Debug, Default)]
pub struct Buttons {
    states: [ButtonState; 4],
    pub trigger: TriggerEdge,
}

impl Buttons {
    pub const fn new(trigger: TriggerEdge) -> Self {
        Self {
            states: [ButtonState::new(); 4],
            trigger,
        }
    }

    /// Sample levels in [`Action::ALL`] order (`true` = pressed) and return the
    /// actions whose trigger edge occurred.
    pub fn poll(
        &mut self,
        levels: [bool; 4],
        now_ms: u64,
    ) -> Vec<Action, 4> {
        let want = self.trigger == TriggerEdge::Press;
        let mut actions = Vec::new();
        for ((state, pressed), action) in self.states.iter_mut().zip(levels).zip(Action::ALL) {
            if state.edge(pressed, now_ms) == Some(want) {
                // at most one per button
                let _ = actions.push(action);
            }
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // ButtonState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_press_edge_once() {
        let mut button = ButtonState::new();
        assert_eq!(button.edge(true, 0), Some(true));
        assert_eq!(button.edge(true, 100), None, "held button does not repeat");
    }

    #[test]
    fn test_bounce_rejected() {
        let mut button = ButtonState::new();
        assert_eq!(button.edge(true, 0), Some(true));
        assert_eq!(button.edge(false, 10), None, "release inside the debounce window");
        assert_eq!(button.edge(true, 20), None, "still pressed as far as we know");
        assert_eq!(button.edge(false, 60), Some(false));
    }

    // -------------------------------------------------------------------------
    // Buttons Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_release_trigger() {
        let mut buttons = Buttons::new(TriggerEdge::Release);
        assert!(buttons.poll([false, true, false, false], 0).is_empty(), "press alone does nothing");
        let actions = buttons.poll([false, false, false, false], 100);
        assert_eq!(actions.as_slice(), &[Action::Down]);
    }

    #[test]
    fn test_press_trigger_multiple() {
        let mut buttons = Buttons::new(TriggerEdge::Press);
        let actions = buttons.poll([true, false, true, false], 0);
        assert_eq!(actions.as_slice(), &[Action::Up, Action::Yes]);
        assert!(buttons.poll([false, false, false, false], 100).is_empty());
    }
}
