//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single scrolling page; `home` owns the per-language render
//! pass and delegates rendering details to `components`.

pub mod home;
