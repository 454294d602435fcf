//! Input sources for the validation engine.
//!
//! The engine in `lib.rs` works on any `BufRead`; the `fs` module opens files
//! on disk and splits a reader into decoded lines.

pub mod fs;
