pub mod language;
pub mod theme;

pub use language::Language;
pub use theme::Theme;
