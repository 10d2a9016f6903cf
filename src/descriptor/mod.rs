//! Read-only structural descriptors supplied by the host's parsed model

mod hierarchy;
mod metadata;

pub use hierarchy::*;
pub use metadata::*;
