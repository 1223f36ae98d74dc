use serde::{Deserialize, Serialize};

use super::ViewportClass;

/// Sidebar state: open/closed crossed with mobile/desktop.
///
/// Only two transitions are forced by the viewport: entering mobile closes
/// the sidebar, leaving mobile opens it. Everything else is user driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub is_open: bool,
    pub is_mobile: bool,
}

/// Input accepted by [`NavigationState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Toggle,
    Open,
    Close,
    Viewport(ViewportClass),
}

/// Named view of the four reachable states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPhase {
    Expanded,
    Collapsed,
    MobileOverlayOpen,
    MobileOverlayClosed,
}

impl NavigationState {
    /// Initial state for a viewport: open on desktop, closed on mobile.
    pub fn new(class: ViewportClass) -> Self {
        let is_mobile = class.is_mobile();
        Self {
            is_open: !is_mobile,
            is_mobile,
        }
    }

    pub fn from_width(width_px: f64) -> Self {
        Self::new(ViewportClass::from_width(width_px))
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Applies a (possibly redundant) viewport classification.
    pub fn set_viewport_class(&mut self, class: ViewportClass) {
        if class.is_mobile() {
            self.is_mobile = true;
            self.is_open = false;
        } else if self.is_mobile {
            // Coming back from mobile always restores the expanded rail,
            // even if the user had collapsed it before shrinking the window.
            self.is_mobile = false;
            self.is_open = true;
        } else {
            self.is_mobile = false;
        }
    }

    pub fn apply(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::Toggle => self.toggle(),
            NavigationEvent::Open => self.open(),
            NavigationEvent::Close => self.close(),
            NavigationEvent::Viewport(class) => self.set_viewport_class(class),
        }
    }

    /// Folds `events` over `self` and returns the final state.
    pub fn replay<I>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = NavigationEvent>,
    {
        for event in events {
            self.apply(event);
        }
        self
    }

    pub fn phase(&self) -> NavigationPhase {
        match (self.is_mobile, self.is_open) {
            (false, true) => NavigationPhase::Expanded,
            (false, false) => NavigationPhase::Collapsed,
            (true, true) => NavigationPhase::MobileOverlayOpen,
            (true, false) => NavigationPhase::MobileOverlayClosed,
        }
    }
}

impl Default for NavigationState {
    /// Desktop, expanded. Used when no window is available to measure.
    fn default() -> Self {
        Self::new(ViewportClass::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::NavigationEvent::*;

    fn all_states() -> [NavigationState; 4] {
        [
            NavigationState { is_open: true, is_mobile: false },
            NavigationState { is_open: false, is_mobile: false },
            NavigationState { is_open: true, is_mobile: true },
            NavigationState { is_open: false, is_mobile: true },
        ]
    }

    #[test]
    fn initial_state_follows_viewport() {
        assert_eq!(
            NavigationState::new(ViewportClass::Desktop),
            NavigationState { is_open: true, is_mobile: false }
        );
        assert_eq!(
            NavigationState::new(ViewportClass::Mobile),
            NavigationState { is_open: false, is_mobile: true }
        );
        assert_eq!(NavigationState::from_width(1024.0).phase(), NavigationPhase::Expanded);
        assert_eq!(
            NavigationState::from_width(500.0).phase(),
            NavigationPhase::MobileOverlayClosed
        );
        assert_eq!(NavigationState::default(), NavigationState::from_width(1024.0));
    }

    #[test]
    fn user_events_fold_like_a_boolean() {
        let script = [Toggle, Toggle, Close, Toggle, Open, Open, Close, Close, Toggle];
        for start in all_states() {
            let mut expected = start.is_open;
            for event in script {
                expected = match event {
                    Toggle => !expected,
                    Open => true,
                    Close => false,
                    Viewport(_) => unreachable!(),
                };
            }
            let end = start.replay(script);
            assert_eq!(end.is_open, expected, "start: {start:?}");
            assert_eq!(end.is_mobile, start.is_mobile);
        }
    }

    #[test]
    fn entering_mobile_always_collapses() {
        for start in all_states() {
            let end = start.replay([Viewport(ViewportClass::Mobile)]);
            assert_eq!(end, NavigationState { is_open: false, is_mobile: true });
        }
    }

    #[test]
    fn leaving_mobile_always_expands() {
        for is_open in [true, false] {
            let start = NavigationState { is_open, is_mobile: true };
            let end = start.replay([Viewport(ViewportClass::Desktop)]);
            assert_eq!(end, NavigationState { is_open: true, is_mobile: false });
        }
    }

    #[test]
    fn desktop_to_desktop_keeps_user_choice() {
        let collapsed = NavigationState { is_open: false, is_mobile: false };
        assert_eq!(collapsed.replay([Viewport(ViewportClass::Desktop)]), collapsed);
    }

    #[test]
    fn repeated_classification_is_idempotent() {
        for start in all_states() {
            for class in [ViewportClass::Mobile, ViewportClass::Desktop] {
                let once = start.replay([Viewport(class)]);
                let twice = start.replay([Viewport(class), Viewport(class)]);
                assert_eq!(once, twice, "start: {start:?}, class: {class:?}");
            }
        }
    }

    #[test]
    fn collapsed_desktop_reopens_after_a_mobile_round_trip() {
        let start = NavigationState { is_open: false, is_mobile: false };
        let end = start.replay([
            Viewport(ViewportClass::Mobile),
            Viewport(ViewportClass::Desktop),
        ]);
        assert_eq!(end.phase(), NavigationPhase::Expanded);
    }

    #[test]
    fn phase_covers_every_state() {
        let phases: Vec<_> = all_states().iter().map(NavigationState::phase).collect();
        assert_eq!(
            phases,
            vec![
                NavigationPhase::Expanded,
                NavigationPhase::Collapsed,
                NavigationPhase::MobileOverlayOpen,
                NavigationPhase::MobileOverlayClosed,
            ]
        );
    }
}
