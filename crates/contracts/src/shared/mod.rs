pub mod api;
pub mod forms;
pub mod i18n;
pub mod navigation;
pub mod preferences;
pub mod routes;
