use contracts::shared::navigation::{
    NavigationEvent, NavigationState, ShellLayout, ViewportClass,
};
use leptos::prelude::*;

use crate::shared::viewport::{current_viewport_class, use_viewport_class};

/// Shell-wide navigation state: the sidebar state machine and the layout
/// derived from it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub navigation: RwSignal<NavigationState>,
    pub layout: Memo<ShellLayout>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self::with_state(NavigationState::new(current_viewport_class()))
    }

    pub fn with_state(state: NavigationState) -> Self {
        let navigation = RwSignal::new(state);
        let layout = Memo::new(move |_| ShellLayout::compose(navigation.get()));
        Self { navigation, layout }
    }

    pub fn dispatch(&self, event: NavigationEvent) {
        self.navigation.update(|state| state.apply(event));
    }

    pub fn toggle(&self) {
        self.dispatch(NavigationEvent::Toggle);
    }

    pub fn open(&self) {
        self.dispatch(NavigationEvent::Open);
    }

    pub fn close(&self) {
        self.dispatch(NavigationEvent::Close);
    }

    pub fn set_viewport_class(&self, class: ViewportClass) {
        self.dispatch(NavigationEvent::Viewport(class));
    }

    pub fn is_open(&self) -> bool {
        self.navigation.with(|state| state.is_open)
    }

    pub fn is_mobile(&self) -> bool {
        self.navigation.with(|state| state.is_mobile)
    }

    /// Closes the overlay after a navigation on mobile; no-op on desktop.
    pub fn close_if_mobile(&self) {
        if self.navigation.with_untracked(|state| state.is_mobile) {
            self.close();
        }
    }

    /// Feeds viewport changes into the state machine for the lifetime of
    /// the calling component.
    pub fn track_viewport(&self) {
        let this = *self;
        use_viewport_class(move |class| this.set_viewport_class(class));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::navigation::LayoutMode;

    fn context(is_open: bool, is_mobile: bool) -> (Owner, AppGlobalContext) {
        let owner = Owner::new();
        owner.set();
        let ctx = AppGlobalContext::with_state(NavigationState { is_open, is_mobile });
        (owner, ctx)
    }

    #[test]
    fn mobile_navigation_closes_the_overlay() {
        let (_owner, ctx) = context(true, true);
        ctx.close_if_mobile();
        assert!(!ctx.navigation.get_untracked().is_open);
        assert!(ctx.navigation.get_untracked().is_mobile);
    }

    #[test]
    fn desktop_navigation_keeps_the_sidebar() {
        let (_owner, ctx) = context(true, false);
        ctx.close_if_mobile();
        assert!(ctx.navigation.get_untracked().is_open);

        ctx.close();
        ctx.close_if_mobile();
        assert!(!ctx.navigation.get_untracked().is_open);
    }

    #[test]
    fn layout_follows_dispatched_events() {
        let (_owner, ctx) = context(true, false);
        let expanded = ctx.layout.get_untracked();
        assert_eq!(expanded.mode, LayoutMode::DesktopExpanded);
        assert_eq!(expanded.sidebar_width, "16rem");

        ctx.dispatch(NavigationEvent::Toggle);
        let collapsed = ctx.layout.get_untracked();
        assert_eq!(collapsed.mode, LayoutMode::DesktopCollapsed);
        assert_eq!(collapsed.sidebar_width, "5rem");

        ctx.set_viewport_class(ViewportClass::Mobile);
        assert_eq!(ctx.layout.get_untracked().mode, LayoutMode::MobileFull);
        assert!(!ctx.navigation.get_untracked().is_open);
    }
}
