//! View-state modules shared through Leptos context.
//!
//! DESIGN
//! ======
//! Each lifecycle is a tagged enum rather than a bundle of booleans, so
//! states like "errored while still loading" are unrepresentable.

pub mod proposal;
pub mod session;
pub mod submission;
