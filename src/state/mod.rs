//! Client-side preference state.
//!
//! DESIGN
//! ======
//! Value types (`preferences`) and the pure locale resolver (`locale`) carry
//! no browser dependencies. `controller` sequences reads, write-through and
//! document effects over injected seams; `context` exposes it to components.

pub mod context;
pub mod controller;
pub mod locale;
pub mod preferences;
