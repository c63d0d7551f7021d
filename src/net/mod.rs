//! Network-facing helpers.
//!
//! Client-side (`csr`): real fetches via `gloo-net`. Native builds get
//! failing stubs so the surrounding sequencing stays testable.

pub mod asset;
