//! Responsive navigation shell: viewport classification, the sidebar state
//! machine and the layout derived from it.

pub mod layout;
mod state;
mod viewport;

pub use layout::{LayoutMode, ShellLayout};
pub use state::{NavigationEvent, NavigationPhase, NavigationState};
pub use viewport::{ViewportClass, MOBILE_BREAKPOINT_PX};
