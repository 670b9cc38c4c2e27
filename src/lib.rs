//! Small, self-contained demonstrations of classic design patterns.
//!
//! Four independent demos live side by side: a home-automation remote
//! control (Command), a library lending system (Command plus a factory
//! and an observer-style logger), a construction-crew repair workflow
//! and a pasta recipe builder (both Builder). Every demo is a handful of
//! small types with narrated side effects, intentionally easy to read
//! and suitable for coursework on object-oriented design.
//!
//! The reusable types live in the public modules below; the runnable
//! scenarios are kept apart in the `design_patterns` binary. Narration
//! goes through an injected [`std::io::Write`] sink rather than straight
//! to stdout, so tests can capture and assert on it.

pub mod command;
pub mod devices;
pub mod library;
pub mod pasta;
pub mod renovation;
pub mod sink;

/// Convenient re-exports of the two halves of the Command demo.
pub use command::{Command, RemoteControl};
