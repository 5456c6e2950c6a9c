//! Panel descriptor store: the canonical record of where every panel lives.

mod operations;
mod snapshot;
mod subscribers;
mod types;

pub use types::*;
