//! opsz-glyphs CLI library.

pub mod cli;

pub use cli::{Cli, generate, usage};
