//! # CLI Behavior
//!
//! A demonstration client for the library. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! - `clafamatt synopsis`: replays the Shared / Parent / Child walkthrough, one
//!   `Expression  # => result` line per step. Errors appear inline.
//! - `clafamatt family [ATTR]`: builds a four-level family (trait, class,
//!   subclass, singleton) and prints the introspection queries for `ATTR`.
//!
//! Both accept `--json`, `--linearization`, `--config` and `-v`.

mod commands;
mod render;
mod scenario;
mod setup;

pub use commands::run;
