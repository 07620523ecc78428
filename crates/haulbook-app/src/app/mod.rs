//! Use-case services consumed by the CLI

mod settlement;

pub use settlement::*;
