//! Framework-free core of the coverage admin shell.
//!
//! Everything here is plain Rust with no browser dependency, so the state
//! machine, the preference stores and the lookup tables are unit-tested
//! natively. The `frontend` crate wraps these types in Leptos signals.

pub mod enums;
pub mod shared;
