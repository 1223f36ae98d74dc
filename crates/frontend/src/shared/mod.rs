pub mod api_utils;
pub mod components;
pub mod icons;
pub mod storage;
pub mod theme;
pub mod viewport;
