//! Interactive TUI game client
//!
//! Screen state and rendering for the playable quiz. The event loop
//! processes key input and the one-second countdown tick as discrete,
//! non-overlapping events, so guess handling and the timer can never
//! interleave mid-mutation.

mod app;
mod rendering;

pub use app::{App, run_tui};
