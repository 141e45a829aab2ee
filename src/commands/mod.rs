//! Backend Command Wrappers
//!
//! Frontend bindings to the stats source and the entry sink.

mod entry;
mod stats;

pub use entry::*;
pub use stats::*;
