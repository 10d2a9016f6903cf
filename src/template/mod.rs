//! Template repository and rendering

mod renderer;
mod repository;

pub use renderer::*;
pub use repository::*;
