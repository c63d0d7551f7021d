//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portfolio sections from one translation table per
//! render pass and read preferences from the `Preferences` context.

pub mod crash_screen;
pub mod header;
pub mod hero;
pub mod project_card;
pub mod resume_button;
pub mod section_title;
pub mod sections;
pub mod ui;
