//! Routed page views rendered inside the shell.

pub mod dashboard;
pub mod not_found;
pub mod placeholder;
pub mod plans;
pub mod zones;

pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
pub use placeholder::PlaceholderPage;
pub use plans::PlansPage;
pub use zones::ZonesPage;
