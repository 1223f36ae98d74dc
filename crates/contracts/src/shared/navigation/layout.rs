//! Pure derivation of shell geometry from [`NavigationState`].

use super::NavigationState;

/// Width of the expanded desktop rail, in rem.
pub const EXPANDED_RAIL_REM: f64 = 16.0;
/// Width of the collapsed (icon-only) desktop rail, in rem.
pub const COLLAPSED_RAIL_REM: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Content takes the full width; the sidebar is a full-screen overlay.
    MobileFull,
    /// Wide rail with labels, content offset by the rail.
    DesktopExpanded,
    /// Narrow icon-only rail, content offset by the narrow rail.
    DesktopCollapsed,
}

impl LayoutMode {
    pub fn from_state(state: NavigationState) -> Self {
        match (state.is_mobile, state.is_open) {
            (true, _) => LayoutMode::MobileFull,
            (false, true) => LayoutMode::DesktopExpanded,
            (false, false) => LayoutMode::DesktopCollapsed,
        }
    }

    /// Rail width in rem; `None` on mobile where the overlay spans the screen.
    pub fn rail_rem(&self) -> Option<f64> {
        match self {
            LayoutMode::MobileFull => None,
            LayoutMode::DesktopExpanded => Some(EXPANDED_RAIL_REM),
            LayoutMode::DesktopCollapsed => Some(COLLAPSED_RAIL_REM),
        }
    }
}

/// Everything the shell components need to position themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellLayout {
    pub mode: LayoutMode,
    /// CSS width of the `<aside>`.
    pub sidebar_width: String,
    /// Whether the sidebar is on screen at all.
    pub sidebar_visible: bool,
    /// Dimmed backdrop behind the mobile overlay.
    pub show_backdrop: bool,
    /// Text labels next to nav icons.
    pub show_labels: bool,
    /// Hover tooltips replacing labels on the collapsed rail.
    pub show_tooltips: bool,
    /// Hamburger button in the header.
    pub show_menu_button: bool,
    /// CSS `margin-left` of the content column.
    pub content_offset: String,
    /// CSS `width` of the content column.
    pub content_width: String,
}

impl ShellLayout {
    pub fn compose(state: NavigationState) -> Self {
        let mode = LayoutMode::from_state(state);
        let (sidebar_width, content_offset, content_width) = match mode.rail_rem() {
            None => ("100%".to_string(), "0".to_string(), "100%".to_string()),
            Some(rail) => (
                format!("{rail}rem"),
                format!("{rail}rem"),
                format!("calc(100% - {rail}rem)"),
            ),
        };

        Self {
            mode,
            sidebar_width,
            sidebar_visible: !state.is_mobile || state.is_open,
            show_backdrop: state.is_mobile && state.is_open,
            show_labels: state.is_open || state.is_mobile,
            show_tooltips: mode == LayoutMode::DesktopCollapsed,
            show_menu_button: state.is_mobile && !state.is_open,
            content_offset,
            content_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(is_mobile: bool, is_open: bool) -> NavigationState {
        NavigationState { is_open, is_mobile }
    }

    #[test]
    fn mode_is_total_over_all_states() {
        assert_eq!(LayoutMode::from_state(state(true, true)), LayoutMode::MobileFull);
        assert_eq!(LayoutMode::from_state(state(true, false)), LayoutMode::MobileFull);
        assert_eq!(LayoutMode::from_state(state(false, true)), LayoutMode::DesktopExpanded);
        assert_eq!(LayoutMode::from_state(state(false, false)), LayoutMode::DesktopCollapsed);
    }

    #[test]
    fn expanded_rail_offsets_content() {
        let layout = ShellLayout::compose(state(false, true));
        assert_eq!(layout.sidebar_width, "16rem");
        assert_eq!(layout.content_offset, "16rem");
        assert_eq!(layout.content_width, "calc(100% - 16rem)");
        assert!(layout.sidebar_visible);
        assert!(layout.show_labels);
        assert!(!layout.show_tooltips);
        assert!(!layout.show_backdrop);
        assert!(!layout.show_menu_button);
    }

    #[test]
    fn collapsed_rail_is_icon_only() {
        let layout = ShellLayout::compose(state(false, false));
        assert_eq!(layout.sidebar_width, "5rem");
        assert_eq!(layout.content_offset, "5rem");
        assert_eq!(layout.content_width, "calc(100% - 5rem)");
        assert!(layout.sidebar_visible);
        assert!(!layout.show_labels);
        assert!(layout.show_tooltips);
    }

    #[test]
    fn mobile_content_is_full_width() {
        for is_open in [true, false] {
            let layout = ShellLayout::compose(state(true, is_open));
            assert_eq!(layout.mode, LayoutMode::MobileFull);
            assert_eq!(layout.content_offset, "0");
            assert_eq!(layout.content_width, "100%");
            assert_eq!(layout.sidebar_width, "100%");
            assert!(layout.show_labels);
            assert!(!layout.show_tooltips);
            assert_eq!(layout.sidebar_visible, is_open);
            assert_eq!(layout.show_backdrop, is_open);
            assert_eq!(layout.show_menu_button, !is_open);
        }
    }
}
