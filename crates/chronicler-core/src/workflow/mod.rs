//! File and environment plumbing around the changelog engine

mod changelog;
mod inputs;

pub use changelog::*;
pub use inputs::*;
