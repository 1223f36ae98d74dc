use serde::{Deserialize, Serialize};

/// Widths strictly below this many CSS pixels are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Mobile/desktop classification of the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl ViewportClass {
    pub fn from_width(width_px: f64) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, ViewportClass::Mobile)
    }
}

impl From<bool> for ViewportClass {
    fn from(is_mobile: bool) -> Self {
        if is_mobile {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}
